//! Combatant and card identification.
//!
//! Cards are keyed by a string `CardId` - the unique handle a card is
//! registered under in the catalog. Combatants (the acting player and the
//! monsters it fights) are identified by an opaque `CreatureId` handed out
//! by the host; this crate only ever compares them.
//!
//! ## Usage
//!
//! ```
//! use cardsmith::core::{CardId, CreatureId};
//!
//! let id = CardId::new("ironclad:strike");
//! assert_eq!(id.as_str(), "ironclad:strike");
//!
//! let player = CreatureId::new(0);
//! let monster = CreatureId::new(7);
//! assert_ne!(player, monster);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a combatant (player or monster).
///
/// The host allocates these; this crate treats them as opaque. Whether an
/// effect is self-inflicted is decided by comparing source and target IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Create a new creature ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CreatureId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Creature({})", self.0)
    }
}

/// Unique key a card definition is registered under.
///
/// Card IDs are strings so content packs can namespace them
/// ("mymod:FrostNova") without coordinating numeric ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id() {
        let id = CreatureId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Creature(42)");
    }

    #[test]
    fn test_creature_id_equality() {
        assert_eq!(CreatureId::new(1), CreatureId::from(1));
        assert_ne!(CreatureId::new(1), CreatureId::new(2));
    }

    #[test]
    fn test_card_id() {
        let id1 = CardId::new("base:Strike");
        let id2: CardId = "base:Strike".into();
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "base:Strike");
        assert_eq!(format!("{}", id1), "base:Strike");
    }

    #[test]
    fn test_serialization() {
        let id = CardId::new("base:Defend");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let creature = CreatureId::new(3);
        let json = serde_json::to_string(&creature).unwrap();
        let deserialized: CreatureId = serde_json::from_str(&json).unwrap();
        assert_eq!(creature, deserialized);
    }
}
