// Executable Resolver Port
// Looks up binaries on the host search path at call time (never cached)

use std::path::PathBuf;

/// Executable lookup interface (allows mocking in tests)
pub trait ExecutableResolver: Send + Sync {
    /// Absolute path of `name`, or None when it is not on the search path
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Mock resolver backed by a name -> path table
    pub struct MockExecutableResolver {
        known: Arc<Mutex<HashMap<String, PathBuf>>>,
    }

    impl MockExecutableResolver {
        /// Resolves nothing
        pub fn empty() -> Self {
            Self {
                known: Arc::new(Mutex::new(HashMap::new())),
            }
        }
        /// Resolves `riak` and `riak-admin` under `/usr/sbin`
        pub fn with_riak() -> Self {
            let resolver = Self::empty();
            resolver.insert("riak", "/usr/sbin/riak");
            resolver.insert("riak-admin", "/usr/sbin/riak-admin");
            resolver
        }
        pub fn insert(&self, name: impl Into<String>, path: impl Into<PathBuf>) {
            self.known.lock().unwrap().insert(name.into(), path.into());
        }
        pub fn remove(&self, name: &str) {
            self.known.lock().unwrap().remove(name);
        }
    }

    impl ExecutableResolver for MockExecutableResolver {
        fn resolve(&self, name: &str) -> Option<PathBuf> {
            self.known.lock().unwrap().get(name).cloned()
        }
    }
}
