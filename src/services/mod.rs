//! # Business Logic Services
//!
//! - **Hit points** (`hit_points`) - Damage, healing and temporary HP rules
//! - **Seeder** (`seeder`) - Startup loading of character definitions
//! - **Store** (`store`, `pg_store`, `memory_store`) - Character persistence

pub mod hit_points;
pub mod memory_store;
pub mod pg_store;
pub mod seeder;
pub mod store;
