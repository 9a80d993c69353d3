// riakctl Infrastructure - System Adapters
// Implements: CommandExecutor, ExecutableResolver

pub mod path_resolver;
pub mod subprocess_executor;

pub use path_resolver::PathResolver;
pub use subprocess_executor::SubprocessExecutor;
