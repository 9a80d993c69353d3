// Port Layer - Interfaces for external dependencies

pub mod command_executor;
pub mod executable_resolver;
pub mod time_provider;

// Re-exports
pub use command_executor::{CommandExecutor, ExecutionError};
pub use executable_resolver::ExecutableResolver;
pub use time_provider::TimeProvider;
