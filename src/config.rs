//! Configuration loader and defaults for the gastbuch server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). The only setting today is the HTTP
//! listen port.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default HTTP listen port
const DEFAULT_PORT: u16 = 80;

/// Application configuration
pub struct Config {
    /// HTTP listen port
    pub port: u16,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("GASTBUCH_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
});
