//! # Utility Modules
//!
//! - **Constants** (`constant`) - Defaults and fixed values
//! - **Static objects** (`static_object`) - Environment-driven settings
//! - **Secrets** (`secret`) - Secret lookup with `*_FILE` indirection

pub mod constant;
pub mod secret;
pub mod static_object;
