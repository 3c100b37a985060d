//! # HTTP Request Handlers
//!
//! - **Damage** (`damage`) - Typed damage with resistances and temporary HP
//! - **Heal** (`heal`) - Uncapped healing
//! - **Temporary HP** (`temp_hp`) - Higher-value-wins temporary hit points
//! - **Character** (`character`) - Character document lookup
//! - **Health Check** (`health_check`) - Liveness probe

mod character;
mod damage;
mod heal;
mod health_check;
mod temp_hp;

pub use character::*;
pub use damage::*;
pub use heal::*;
pub use health_check::*;
pub use temp_hp::*;
