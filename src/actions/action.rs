//! Materialized game actions.
//!
//! A `GameAction` is one fully-resolved unit of work handed to the host's
//! turn engine via the pending-action queue. Cards never mutate combat
//! state themselves - playing a card only *emits* actions.
//!
//! The set is closed: every action this crate can produce is a variant
//! here, so consumers get exhaustiveness-checked dispatch.

use serde::{Deserialize, Serialize};

use crate::core::CreatureId;
use crate::effects::Power;

/// How damage was sourced, for the host's modifier pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageKind {
    /// Ordinary attack damage; strength and vulnerability apply.
    #[default]
    Normal,
    /// Retaliation damage; bypasses attack modifiers.
    Thorns,
    /// Direct HP loss; bypasses block.
    HpLoss,
}

/// One packet of damage: who dealt it, how much, and through which pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInfo {
    /// The combatant dealing the damage.
    pub source: CreatureId,
    /// Base amount before the host's modifiers.
    pub amount: i32,
    /// Which modifier pipeline applies.
    pub kind: DamageKind,
}

impl DamageInfo {
    /// Create a normal-damage packet.
    #[must_use]
    pub const fn new(source: CreatureId, amount: i32) -> Self {
        Self {
            source,
            amount,
            kind: DamageKind::Normal,
        }
    }

    /// Create a packet with an explicit damage kind.
    #[must_use]
    pub const fn with_kind(source: CreatureId, amount: i32, kind: DamageKind) -> Self {
        Self { source, amount, kind }
    }
}

/// Visual played alongside a damage action.
///
/// Purely cosmetic; the host picks the animation and sound from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrikeEffect {
    SlashDiagonal,
    SlashHorizontal,
    SlashHeavy,
    BluntLight,
    BluntHeavy,
    Fire,
    Poison,
    Lightning,
    Shield,
    #[default]
    None,
}

/// A fully-materialized action awaiting execution by the host.
///
/// ## Variants
///
/// - `DealDamage` / `DamageAllEnemies`: attack damage, single or sweeping
/// - `GainBlock`: add block to a combatant
/// - `ApplyPower`: attach a status effect
/// - `ExhaustAllEthereal`: end-of-turn sweep removing held ethereal cards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Deal damage to a single target.
    DealDamage {
        target: CreatureId,
        info: DamageInfo,
        strike: StrikeEffect,
    },

    /// Deal the same damage to every enemy. The host expands this across
    /// whatever enemies are present when it executes.
    DamageAllEnemies {
        info: DamageInfo,
        strike: StrikeEffect,
    },

    /// Grant block to a combatant.
    GainBlock {
        target: CreatureId,
        source: CreatureId,
        amount: i32,
    },

    /// Attach a power to a combatant.
    ApplyPower {
        source: CreatureId,
        target: CreatureId,
        power: Power,
    },

    /// Exhaust every ethereal card still in hand.
    ExhaustAllEthereal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_info_defaults_normal() {
        let info = DamageInfo::new(CreatureId::new(0), 6);
        assert_eq!(info.amount, 6);
        assert_eq!(info.kind, DamageKind::Normal);
    }

    #[test]
    fn test_damage_info_with_kind() {
        let info = DamageInfo::with_kind(CreatureId::new(0), 3, DamageKind::Thorns);
        assert_eq!(info.kind, DamageKind::Thorns);
    }

    #[test]
    fn test_action_equality() {
        let a = GameAction::GainBlock {
            target: CreatureId::new(0),
            source: CreatureId::new(0),
            amount: 5,
        };
        let b = GameAction::GainBlock {
            target: CreatureId::new(0),
            source: CreatureId::new(0),
            amount: 5,
        };
        assert_eq!(a, b);
        assert_ne!(a, GameAction::ExhaustAllEthereal);
    }

    #[test]
    fn test_action_serialization() {
        let action = GameAction::DealDamage {
            target: CreatureId::new(7),
            info: DamageInfo::new(CreatureId::new(0), 9),
            strike: StrikeEffect::SlashHeavy,
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
