//! # cardsmith
//!
//! Declarative card construction and catalog extension for deckbuilder
//! card battlers.
//!
//! ## Design Principles
//!
//! 1. **Descriptors, not subclasses**: a card is a `CardDescriptor` built
//!    from optional attributes and pluggable effect specs, not a bespoke
//!    type per card.
//!
//! 2. **Presence is the `Option`**: an attribute configured is `Some`,
//!    one omitted is `None`. There is no separate flag to drift from the
//!    value.
//!
//! 3. **Emit, never execute**: playing a card pushes `GameAction`s onto a
//!    pending queue. The host's turn engine executes them; this crate
//!    mutates no combat state.
//!
//! 4. **Explicit services**: the catalog and the pending queue are values
//!    passed to whoever needs them, and the catalog's counters can never
//!    disagree with its contents.
//!
//! ## Modules
//!
//! - `core`: combatant/card IDs and the card category enumerations
//! - `actions`: materialized `GameAction`s and the pending queue
//! - `effects`: status-effect powers and pluggable effect specs
//! - `cards`: the card descriptor builder and description text
//! - `library`: the card catalog and its startup extension hook
//! - `content`: sample starter cards built with the toolkit

pub mod actions;
pub mod cards;
pub mod content;
pub mod core;
pub mod effects;
pub mod library;

// Re-export commonly used types
pub use crate::core::{CardColor, CardId, CardKind, CardRarity, CardTarget, CreatureId};

pub use crate::actions::{
    ActionQueue, DamageInfo, DamageKind, GameAction, QueuePosition, StrikeEffect,
};

pub use crate::effects::{ActionSpec, ApplyEffectSpec, Magnitude, Power, StatusEffect};

pub use crate::cards::CardDescriptor;

pub use crate::library::{populate_color, CardCatalog, CatalogError, LibraryHook};
