pub mod dashboard_handlers;
pub mod guard_handlers;
pub mod ops_handlers;
pub mod station_handlers;

pub use dashboard_handlers::*;
pub use guard_handlers::*;
pub use ops_handlers::*;
pub use station_handlers::*;
