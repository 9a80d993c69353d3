// Application Layer - Use Cases

pub mod riak_service;

// Re-exports
pub use riak_service::RiakService;
