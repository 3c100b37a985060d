//! # Character Records
//!
//! The character document as it is seeded from disk, stored, and returned by
//! `GET /character/{name}`. Field names on the wire follow the seed file
//! format (camelCase, with `tempHP` spelled out).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A tracked character and its hit point state.
///
/// Nested sequences are persisted as JSONB columns, so the same struct is
/// used for seed parsing, row decoding and response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub level: i32,
    /// Current hit points, never negative.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub hit_points: i32,
    /// Temporary hit point buffer, consumed before `hit_points`.
    #[serde(default, rename = "tempHP")]
    #[validate(range(min = 0))]
    pub temp_hp: i32,
    #[serde(default)]
    #[sqlx(json)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    #[sqlx(json)]
    pub stats: Stats,
    #[serde(default)]
    #[sqlx(json)]
    pub items: Vec<Item>,
    #[serde(default)]
    #[sqlx(json)]
    pub defenses: Vec<Defense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub name: String,
    #[serde(default)]
    pub hit_dice_value: i32,
    #[serde(default)]
    pub class_level: i32,
}

/// The six ability scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ItemModifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    #[serde(default)]
    pub affected_object: String,
    #[serde(default)]
    pub affected_value: String,
    #[serde(default)]
    pub value: i32,
}

/// A defense against one damage type, e.g. `{"type": "fire", "defense": "resistance"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub defense: DefenseKind,
}

/// Kind of a [`Defense`].
///
/// Only the exact lowercase strings `"resistance"` and `"immunity"` carry
/// rules; anything else is kept verbatim and has no effect on damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefenseKind {
    Resistance,
    Immunity,
    Other(String),
}

impl From<String> for DefenseKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "resistance" => DefenseKind::Resistance,
            "immunity" => DefenseKind::Immunity,
            _ => DefenseKind::Other(value),
        }
    }
}

impl From<DefenseKind> for String {
    fn from(kind: DefenseKind) -> Self {
        match kind {
            DefenseKind::Resistance => "resistance".to_string(),
            DefenseKind::Immunity => "immunity".to_string(),
            DefenseKind::Other(other) => other,
        }
    }
}

impl Character {
    /// Returns the first defense listed for `damage_type`, compared exactly.
    pub fn defense_against(&self, damage_type: &str) -> Option<&DefenseKind> {
        self.defenses
            .iter()
            .find(|d| d.damage_type == damage_type)
            .map(|d| &d.defense)
    }

    /// Whether `query` selects this character under the lookup rule
    /// (case-insensitive containment).
    #[inline]
    pub fn matches_name(&self, query: &str) -> bool {
        name_matches(&self.name, query)
    }
}

/// Case-insensitive containment of `query` in `stored`.
///
/// This is the single name-matching rule shared by lookups and seeding.
/// The PostgreSQL store evaluates the same rule as
/// `strpos(lower(name), lower($1)) > 0`.
pub fn name_matches(stored: &str, query: &str) -> bool {
    stored.to_lowercase().contains(&query.to_lowercase())
}
