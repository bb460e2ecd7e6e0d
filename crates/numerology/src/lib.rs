pub mod config;
pub mod error;
pub mod readings;
pub mod telemetry;
