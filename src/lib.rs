// Calgrid Library
// Calendar grid generation and event scheduling core

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
