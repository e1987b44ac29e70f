// Gateway Port Traits (Interfaces)
// Define what the domain needs from the records backend

pub mod gateway;

pub use gateway::*;
