// Module exports for services

pub mod drag;
pub mod grid;
pub mod navigation;
pub mod store;
