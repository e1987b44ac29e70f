// Domain services: pure derivations over already-fetched records

pub mod classifier;
pub mod location_options;
pub mod log_filter;
pub mod log_stats;
pub mod natural_sort;
pub mod pagination;
pub mod station_registry;

pub use classifier::*;
pub use location_options::*;
pub use log_filter::*;
pub use log_stats::*;
pub use natural_sort::*;
pub use pagination::*;
pub use station_registry::*;
