pub mod criteria_commands;
pub mod guard_commands;
pub mod load_commands;
pub mod station_commands;
