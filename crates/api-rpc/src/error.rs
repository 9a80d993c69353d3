//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use riakctl_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const TOOL_NOT_FOUND: i32 = 4004;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SYSTEM_ERROR: i32 = 5002;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::ToolNotFound(binary) => ErrorObjectOwned::owned(
            code::TOOL_NOT_FOUND,
            format!("Executable not found on search path: {}", binary),
            Some(binary),
        ),
        AppError::Execution(e) => {
            ErrorObjectOwned::owned(code::SYSTEM_ERROR, e.to_string(), None::<()>)
        }
        AppError::Config(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riakctl_core::port::ExecutionError;

    #[test]
    fn test_tool_not_found_code() {
        let err = to_rpc_error(AppError::ToolNotFound("riak-admin".to_string()));

        assert_eq!(err.code(), code::TOOL_NOT_FOUND);
        assert!(err.message().contains("riak-admin"));
    }

    #[test]
    fn test_execution_error_is_system_error() {
        let err = to_rpc_error(AppError::Execution(ExecutionError::Timeout(5000)));

        assert_eq!(err.code(), code::SYSTEM_ERROR);
        assert!(err.message().contains("5000ms"));
    }
}
