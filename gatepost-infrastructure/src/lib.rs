pub mod config;
pub mod gateways;

pub use config::*;
pub use gateways::*;
