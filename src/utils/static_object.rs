//! # Runtime Configuration
//!
//! Settings read once from the environment. A missing or unparsable value
//! is logged and replaced with its default from [`super::constant`].

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use tracing::{error, warn};

use super::constant::*;

pub static PORT: LazyLock<u16> = LazyLock::new(|| match env::var("PORT") {
    Ok(val) => val.parse().unwrap_or_else(|_| {
        error!(%val, "Invalid PORT env var, using fallback {DEFAULT_PORT}");
        DEFAULT_PORT
    }),
    Err(_) => DEFAULT_PORT,
});

pub static BIND_ADDRESS: LazyLock<String> = LazyLock::new(|| {
    env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
});

pub static CHARACTERS_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var("CHARACTERS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            warn!("Missing CHARACTERS_DIR env var, using fallback '{DEFAULT_CHARACTERS_DIR}'");
            PathBuf::from(DEFAULT_CHARACTERS_DIR)
        })
});

pub static DB_MAX_CONNECTIONS: LazyLock<u32> = LazyLock::new(|| {
    env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|val| val.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            warn!(
                "Invalid or missing DB_MAX_CONNECTIONS env var, using fallback {DEFAULT_DB_MAX_CONNECTIONS}"
            );
            DEFAULT_DB_MAX_CONNECTIONS
        })
});

/// Whether logs are emitted as bunyan-style JSON (`LOG_FORMAT=json`).
pub static JSON_LOGS: LazyLock<bool> = LazyLock::new(|| {
    env::var("LOG_FORMAT").is_ok_and(|val| val.eq_ignore_ascii_case("json"))
});
