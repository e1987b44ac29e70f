// Identifier value objects

pub type LogId = i64;

pub type StationId = i64;

pub type UserId = i64;
