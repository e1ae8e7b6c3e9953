#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;

use serde::Deserialize;

pub use cors::{AnyOrArray, CorsConfig};
pub use health::HealthConfig;
pub use server::ServerConfig;

/// Top-level Aether configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}
