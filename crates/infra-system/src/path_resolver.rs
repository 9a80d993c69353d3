// Executable resolver implementation
// reason: which for PATH lookup with executable-bit checks, shellexpand for `~` in search dirs
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use riakctl_core::config::RiakctlConfig;
use riakctl_core::port::ExecutableResolver;

/// Resolves executables against `PATH` or an explicit directory list
///
/// Lookups happen on every call; nothing is cached between operations.
pub struct PathResolver {
    /// None = use the process `PATH`
    search_path: Option<OsString>,
}

impl PathResolver {
    /// Resolver backed by the process `PATH`
    pub fn system() -> Self {
        Self { search_path: None }
    }

    /// Resolver restricted to a colon-separated list of directories
    ///
    /// Each entry is tilde-expanded. Empty entries are dropped; a list with
    /// no entries left resolves nothing.
    pub fn with_search_path(search_path: &str) -> Self {
        let dirs: Vec<PathBuf> = search_path
            .split(':')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| PathBuf::from(shellexpand::tilde(entry).into_owned()))
            .collect();

        Self {
            search_path: Some(std::env::join_paths(dirs).unwrap_or_default()),
        }
    }

    /// Build from config: explicit search path if set, `PATH` otherwise
    pub fn from_config(config: &RiakctlConfig) -> Self {
        match config.search_path.as_deref() {
            Some(path) => Self::with_search_path(path),
            None => Self::system(),
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let resolved = match &self.search_path {
            // An empty search path would make `which` probe the working directory
            Some(paths) if paths.is_empty() => {
                debug!(name = %name, "Search path has no directories");
                return None;
            }
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
                which::which_in(name, Some(paths), cwd)
            }
            None => which::which(name),
        };

        match resolved {
            Ok(path) if !path.is_absolute() => {
                debug!(name = %name, path = %path.display(), "Ignoring relative executable path");
                None
            }
            Ok(path) => {
                debug!(name = %name, path = %path.display(), "Executable resolved");
                Some(path)
            }
            Err(e) => {
                debug!(name = %name, error = %e, "Executable not resolved");
                None
            }
        }
    }
}
