pub mod app_config;
pub mod telemetry;

pub use app_config::{CartConfig, Config};
