//! # Hit Point Resolution
//!
//! Pure computations for damage, healing and temporary hit points. Each
//! operation updates the character in place and returns an outcome whose
//! `Display` impl is the narrative sent back to the client. Persisting the
//! result is the caller's job; [`Resolution::mutated`] tells it whether
//! there is anything to write.

use std::fmt;

use tracing::{debug, instrument};

use crate::models::{Character, DefenseKind};

/// Common interface of the resolver outcomes.
pub trait Resolution: fmt::Display {
    /// Whether the character's stored state changed.
    fn mutated(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The character is immune to the damage type; nothing changed.
    Immune { name: String, damage_type: String },
    Applied {
        name: String,
        damage_type: String,
        /// Damage after resistance, before temporary hit points.
        damage: i32,
        /// Portion taken by temporary hit points.
        absorbed: i32,
        hit_points: i32,
        temp_hp: i32,
    },
}

impl Resolution for DamageOutcome {
    fn mutated(&self) -> bool {
        matches!(self, DamageOutcome::Applied { .. })
    }
}

impl fmt::Display for DamageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageOutcome::Immune { name, damage_type } => {
                write!(f, "{name} is immune to {damage_type} damage.")
            }
            DamageOutcome::Applied {
                name,
                damage_type,
                damage,
                hit_points,
                ..
            } => write!(
                f,
                "{name} took {damage} {damage_type} damage. Current HP: {hit_points}"
            ),
        }
    }
}

/// Applies `amount` damage of `damage_type` to `character`.
///
/// Order: defense lookup, immunity short-circuit, resistance halving (floor),
/// temporary hit point absorption, then hit points clamped at zero.
#[instrument(skip(character), fields(character = %character.name))]
pub fn apply_damage(character: &mut Character, damage_type: &str, amount: i32) -> DamageOutcome {
    let damage = match character.defense_against(damage_type) {
        Some(DefenseKind::Immunity) => {
            debug!("Damage nullified by immunity");
            return DamageOutcome::Immune {
                name: character.name.clone(),
                damage_type: damage_type.to_string(),
            };
        }
        Some(DefenseKind::Resistance) => amount.div_euclid(2),
        _ => amount,
    };

    let (temp_hp, pass_through) = if character.temp_hp >= damage {
        (character.temp_hp - damage, 0)
    } else {
        (0, damage - character.temp_hp)
    };
    let absorbed = damage - pass_through;

    character.temp_hp = temp_hp;
    character.hit_points = if character.hit_points > pass_through {
        character.hit_points - pass_through
    } else {
        0
    };

    debug!(
        damage,
        absorbed,
        hit_points = character.hit_points,
        temp_hp = character.temp_hp,
        "Damage resolved"
    );

    DamageOutcome::Applied {
        name: character.name.clone(),
        damage_type: damage_type.to_string(),
        damage,
        absorbed,
        hit_points: character.hit_points,
        temp_hp: character.temp_hp,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealOutcome {
    pub name: String,
    pub amount: i32,
    pub hit_points: i32,
}

impl Resolution for HealOutcome {
    fn mutated(&self) -> bool {
        true
    }
}

impl fmt::Display for HealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} healed for {} HP. Current HP: {}",
            self.name, self.amount, self.hit_points
        )
    }
}

/// Adds `amount` to the character's hit points. There is no maximum.
pub fn apply_heal(character: &mut Character, amount: i32) -> HealOutcome {
    character.hit_points = character.hit_points.saturating_add(amount);

    HealOutcome {
        name: character.name.clone(),
        amount,
        hit_points: character.hit_points,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TempHpOutcome {
    Replaced { name: String, temp_hp: i32 },
    Kept { name: String, temp_hp: i32 },
}

impl Resolution for TempHpOutcome {
    fn mutated(&self) -> bool {
        matches!(self, TempHpOutcome::Replaced { .. })
    }
}

impl fmt::Display for TempHpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempHpOutcome::Replaced { name, temp_hp } => {
                write!(f, "{name} now has {temp_hp} temporary hit points.")
            }
            TempHpOutcome::Kept { name, temp_hp } => write!(
                f,
                "{name} already has {temp_hp} temporary hit points. No changes made."
            ),
        }
    }
}

/// Grants temporary hit points. They don't stack: the new value only
/// replaces the current one when the character has none or it is higher.
pub fn set_temp_hp(character: &mut Character, amount: i32) -> TempHpOutcome {
    if character.temp_hp == 0 || amount > character.temp_hp {
        character.temp_hp = amount;
        TempHpOutcome::Replaced {
            name: character.name.clone(),
            temp_hp: amount,
        }
    } else {
        TempHpOutcome::Kept {
            name: character.name.clone(),
            temp_hp: character.temp_hp,
        }
    }
}
