//! Core identity types: combatant and card IDs, card categories.
//!
//! These are the vocabulary every other module shares. Nothing here has
//! behavior beyond identity and display.

pub mod categories;
pub mod entity;

pub use categories::{CardColor, CardKind, CardRarity, CardTarget};
pub use entity::{CardId, CreatureId};
