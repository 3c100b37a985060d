//! # Application Constants
//!
//! Fixed defaults and environment variable names used across the service.

use std::time::Duration;

/// Port the HTTP server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Interface the HTTP server binds to when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Directory scanned for character definitions when `CHARACTERS_DIR` is unset
pub const DEFAULT_CHARACTERS_DIR: &str = "./characters";

/// Pool size when `DB_MAX_CONNECTIONS` is unset
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a pooled connection before failing
///
/// Kept short so an unreachable database surfaces as a 500 instead of a
/// hanging request.
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const DATABASE_URL_FILE_ENV: &str = "DATABASE_URL_FILE";

/// Body of every 404 response
pub const CHARACTER_NOT_FOUND: &str = "Character not found";
