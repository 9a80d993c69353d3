//! Fake riak installation for end-to-end tests
//!
//! Writes `riak` and `riak-admin` shell scripts into a temp directory and
//! wires a real SubprocessExecutor + PathResolver against it.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use riakctl_core::application::RiakService;
use riakctl_core::port::time_provider::SystemTimeProvider;
use riakctl_infra_system::{PathResolver, SubprocessExecutor};
use tempfile::TempDir;

pub const MEMBER_STATUS_OUTPUT: &str = "\
================================= Membership ==================================
Status     Ring    Pending    Node
-------------------------------------------------------------------------------
valid      25.0%      0     riak@node1
valid      75.0%      0     riak@node2
-------------------------------------------------------------------------------
Valid:2 / Leaving:0 / Exiting:0 / Joining:0 / Down:0
";

pub const RIAK_SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  start) echo "riak started"; exit 0 ;;
  stop) echo "stop attempted"; echo "Node is not running!" >&2; exit 1 ;;
  *) echo "Usage: riak start|stop" >&2; exit 2 ;;
esac
"#;

pub const RIAK_ADMIN_SCRIPT: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/last-args"
case "$1" in
  cluster)
    case "$2" in
      join) echo "Success: staged join request for '$3'"; exit 0 ;;
      leave) echo "Failed: $3 is not a member of the cluster."; echo "leave error" >&2; exit 1 ;;
      plan) echo "=============================== Staged Changes ================================"; exit 0 ;;
      commit) echo "You must verify the plan with 'riak-admin cluster plan' before committing"; echo "commit error" >&2; exit 1 ;;
    esac
    ;;
  member-status)
    cat "$(dirname "$0")/member-status.txt"
    exit 0
    ;;
  status)
    echo "1-minute stats for 'riak@node1'"
    echo "-------------------------------------------"
    echo "ring_creation_size : 64"
    echo "nodename : 'riak@node1'"
    echo "sys_system_version : Erlang R16B02 [smp:8:8]"
    exit 0
    ;;
esac
echo "unknown command" >&2
exit 2
"#;

/// Temp directory holding fake riak binaries
pub struct FakeRiak {
    dir: TempDir,
}

impl FakeRiak {
    /// Both binaries installed with default behavior
    pub fn new() -> Self {
        let fake = Self::empty();
        fake.install("riak", RIAK_SCRIPT);
        fake.install("riak-admin", RIAK_ADMIN_SCRIPT);
        fs::write(fake.path().join("member-status.txt"), MEMBER_STATUS_OUTPUT).unwrap();
        fake
    }

    /// No binaries at all
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable script (replacing any existing one)
    pub fn install(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Arguments the last riak-admin invocation received, one per entry
    pub fn last_admin_args(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("last-args"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn service(&self) -> RiakService {
        self.service_with_timeout(None)
    }

    pub fn service_with_timeout(&self, timeout: Option<Duration>) -> RiakService {
        RiakService::new(
            Arc::new(SubprocessExecutor::new(Arc::new(SystemTimeProvider), timeout)),
            Arc::new(PathResolver::with_search_path(
                &self.path().display().to_string(),
            )),
        )
    }
}
