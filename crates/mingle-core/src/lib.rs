//! Core Mingle library (domain types, forms, simulated backend, config).

pub mod backend;
pub mod config;
pub mod fixtures;
pub mod forms;
pub mod interrupt;
pub mod logging;
pub mod session;
pub mod types;
