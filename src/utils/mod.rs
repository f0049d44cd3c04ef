// Utility modules
// Pure helpers shared across services

pub mod clock;
pub mod date;
pub mod id;
