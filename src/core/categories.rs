//! Fixed card category enumerations.
//!
//! Every card carries one value from each of these four closed sets. The
//! catalog buckets its counters by `CardColor`, and `CardTarget` decides how
//! a card's damage is dispatched when played.

use serde::{Deserialize, Serialize};

/// Card color - the character pool a card belongs to.
///
/// Colors double as the catalog's bucketing key: the host populates one
/// color at a time at startup, and extension hooks are keyed by color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Purple,
    /// Usable by every character.
    Colorless,
    /// Negative cards forced into a deck.
    Curse,
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Red => "Red",
            CardColor::Green => "Green",
            CardColor::Blue => "Blue",
            CardColor::Purple => "Purple",
            CardColor::Colorless => "Colorless",
            CardColor::Curse => "Curse",
        };
        write!(f, "{}", name)
    }
}

/// What kind of card this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Deals damage; shows an attack animation when played.
    Attack,
    /// One-shot utility.
    Skill,
    /// Permanent combat effect.
    Power,
    /// Inert filler added by enemies.
    Status,
    /// Negative card; usually unplayable.
    Curse,
}

/// How rare a card is in rewards and shops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRarity {
    /// Starter cards every deck begins with.
    Basic,
    Common,
    Uncommon,
    Rare,
    /// Granted by events, never found in rewards.
    Special,
    Curse,
}

/// What a card is aimed at when played.
///
/// `play` dispatches damage on this: `Enemy` emits a single-target damage
/// action, `AllEnemies` a sweep. The remaining variants never emit damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTarget {
    /// One chosen enemy.
    Enemy,
    /// Every enemy at once.
    AllEnemies,
    /// The card's own player.
    Player,
    /// Affects both the player and a chosen enemy.
    SelfAndEnemy,
    /// Untargeted.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", CardColor::Blue), "Blue");
        assert_eq!(format!("{}", CardColor::Colorless), "Colorless");
    }

    #[test]
    fn test_category_equality() {
        assert_eq!(CardTarget::Enemy, CardTarget::Enemy);
        assert_ne!(CardTarget::Enemy, CardTarget::AllEnemies);
        assert_ne!(CardKind::Attack, CardKind::Skill);
    }

    #[test]
    fn test_serialization() {
        let color = CardColor::Green;
        let json = serde_json::to_string(&color).unwrap();
        let deserialized: CardColor = serde_json::from_str(&json).unwrap();
        assert_eq!(color, deserialized);

        let target = CardTarget::AllEnemies;
        let json = serde_json::to_string(&target).unwrap();
        let deserialized: CardTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(target, deserialized);
    }
}
