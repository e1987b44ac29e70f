// Domain value objects
pub mod filters;
pub mod identifiers;
pub mod station_category;

pub use filters::*;
pub use identifiers::*;
pub use station_category::*;
