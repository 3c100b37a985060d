mod character;
mod state;

pub use character::{
    Character, CharacterClass, Defense, DefenseKind, Item, ItemModifier, Stats, name_matches,
};
pub use state::AppState;
