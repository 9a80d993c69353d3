// riakctl Core - Domain Logic & Ports
// NO infrastructure dependencies (ports are implemented in infra crates)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
