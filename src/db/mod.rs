pub mod memory_service;
pub mod user;
