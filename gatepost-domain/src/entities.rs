// Domain entities

pub mod runtime_config;
pub mod station;
pub mod user;
pub mod view;
pub mod visitor_log;

pub use runtime_config::*;
pub use station::*;
pub use user::*;
pub use view::*;
pub use visitor_log::*;
