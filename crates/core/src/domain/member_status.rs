// Member Status Report
// Best-effort parser for `riak-admin member-status` output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary states always present in a report, seeded with "0"
pub const SUMMARY_STATES: [&str; 5] = ["Valid", "Leaving", "Exiting", "Joining", "Down"];

/// One node row of the membership table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Ring")]
    pub ring: String,
    #[serde(rename = "Pending")]
    pub pending: String,
}

/// Parsed `member-status` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStatusReport {
    /// node identifier -> row
    pub membership: BTreeMap<String, MemberInfo>,
    /// state name -> count (open mapping)
    pub summary: BTreeMap<String, String>,
}

impl Default for MemberStatusReport {
    fn default() -> Self {
        Self {
            membership: BTreeMap::new(),
            summary: SUMMARY_STATES
                .iter()
                .map(|state| (state.to_string(), "0".to_string()))
                .collect(),
        }
    }
}

impl MemberStatusReport {
    /// Parse stdout text into a report
    ///
    /// Rules, applied per line:
    /// - lines starting with `=`, `-` or `Status` are headers and skipped
    /// - a line containing `/` is the summary line (`State:count / State:count ...`)
    /// - a line with exactly four whitespace-separated tokens is a node row
    ///   `(status, ring, pending, node)`
    ///
    /// Anything else is ignored. Never fails; unexpected output yields a partial report.
    pub fn parse(stdout: &str) -> Self {
        let mut report = Self::default();

        for line in stdout.lines() {
            if line.starts_with('=') || line.starts_with('-') || line.starts_with("Status") {
                continue;
            }

            if line.contains('/') {
                report.apply_summary_line(line);
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if let [status, ring, pending, node] = tokens.as_slice() {
                report.membership.insert(
                    node.to_string(),
                    MemberInfo {
                        status: status.to_string(),
                        ring: ring.to_string(),
                        pending: pending.to_string(),
                    },
                );
            }
        }

        report
    }

    fn apply_summary_line(&mut self, line: &str) {
        for segment in line.split('/') {
            let mut parts = segment.split(':');
            // Exactly one colon per segment, otherwise skip it
            if let (Some(state), Some(count), None) = (parts.next(), parts.next(), parts.next()) {
                self.summary
                    .insert(state.trim().to_string(), count.trim().to_string());
            }
        }
    }
}
