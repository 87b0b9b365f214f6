pub mod engine;
pub mod errors;
pub mod models;
pub mod services;
