pub mod file_gateway;
pub mod http_gateway;

pub use file_gateway::*;
pub use http_gateway::*;
