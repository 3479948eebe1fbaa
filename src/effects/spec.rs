//! Pluggable effect-action specs.
//!
//! A card's extra behavior beyond damage and block is described by a list
//! of `ActionSpec`s attached at construction time. Each spec knows how to
//! materialize one `GameAction` given the card being played, the acting
//! player, and the play target - the materialization runs fresh on every
//! play, so specs can read live card state like the magic number.
//!
//! The trait is open on purpose: content packs define their own specs for
//! behavior this crate doesn't ship. `ApplyEffectSpec` is the stock
//! implementation covering the five status effects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actions::{GameAction, QueuePosition};
use crate::cards::CardDescriptor;
use crate::core::CreatureId;

use super::power::StatusEffect;

/// Capability to materialize one concrete action at play time.
pub trait ActionSpec: fmt::Debug {
    /// Where the materialized action is inserted into the pending queue.
    fn placement(&self) -> QueuePosition {
        QueuePosition::Bottom
    }

    /// Build the action for this play of `card` by `player` against
    /// `target`.
    fn build(&self, card: &CardDescriptor, player: CreatureId, target: CreatureId) -> GameAction;
}

/// Where an effect spec gets its stack count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Magnitude {
    /// Read the card's magic number at build time. An unset magic number
    /// reads as 0, uncritically.
    MagicNumber,
    /// A fixed amount independent of the card.
    Fixed(i32),
}

/// Applies one of the five status effects to the acting player.
///
/// The power itself is materialized against the play target, which is what
/// fixes the self-inflicted flag on debuffs; the emitted `ApplyPower`
/// action then names the player as both source and target, leaving the
/// final stacking decision to the host.
///
/// ## Example
///
/// ```
/// use cardsmith::effects::{ApplyEffectSpec, StatusEffect};
///
/// // Two stacks of Vulnerable, amount taken from the card's magic number.
/// let spec = ApplyEffectSpec::from_magic_number(StatusEffect::Vulnerable);
///
/// // Three stacks of Strength, regardless of the card.
/// let fixed = ApplyEffectSpec::fixed(StatusEffect::Strength, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyEffectSpec {
    /// Which status effect to apply.
    pub effect: StatusEffect,
    /// Where the stack count comes from.
    pub magnitude: Magnitude,
    /// Queue placement for the materialized action.
    pub placement: QueuePosition,
}

impl ApplyEffectSpec {
    /// Spec whose stack count tracks the card's magic number.
    #[must_use]
    pub const fn from_magic_number(effect: StatusEffect) -> Self {
        Self {
            effect,
            magnitude: Magnitude::MagicNumber,
            placement: QueuePosition::Bottom,
        }
    }

    /// Spec with a fixed stack count.
    #[must_use]
    pub const fn fixed(effect: StatusEffect, amount: i32) -> Self {
        Self {
            effect,
            magnitude: Magnitude::Fixed(amount),
            placement: QueuePosition::Bottom,
        }
    }

    /// Insert the materialized action at the front of the queue instead of
    /// the back.
    #[must_use]
    pub const fn to_top(mut self) -> Self {
        self.placement = QueuePosition::Top;
        self
    }
}

impl ActionSpec for ApplyEffectSpec {
    fn placement(&self) -> QueuePosition {
        self.placement
    }

    fn build(&self, card: &CardDescriptor, player: CreatureId, target: CreatureId) -> GameAction {
        let amount = match self.magnitude {
            Magnitude::MagicNumber => card.magic_number.unwrap_or(0),
            Magnitude::Fixed(amount) => amount,
        };
        let power = self.effect.materialize(target, player, amount);

        GameAction::ApplyPower {
            source: player,
            target: player,
            power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardColor, CardKind, CardRarity, CardTarget};
    use crate::effects::Power;

    fn test_card() -> CardDescriptor {
        CardDescriptor::new(
            "test:Probe",
            "Probe",
            "probe.png",
            CardColor::Blue,
            CardKind::Skill,
            CardRarity::Common,
            CardTarget::Enemy,
        )
    }

    #[test]
    fn test_fixed_magnitude_ignores_magic_number() {
        let card = test_card().with_magic_number(9);
        let spec = ApplyEffectSpec::fixed(StatusEffect::Strength, 3);

        let action = spec.build(&card, CreatureId::new(0), CreatureId::new(7));
        match action {
            GameAction::ApplyPower { power, .. } => {
                assert_eq!(power, Power::Strength { amount: 3 });
            }
            other => panic!("expected ApplyPower, got {:?}", other),
        }
    }

    #[test]
    fn test_magic_number_magnitude() {
        let card = test_card().with_magic_number(2);
        let spec = ApplyEffectSpec::from_magic_number(StatusEffect::Weak);

        let action = spec.build(&card, CreatureId::new(0), CreatureId::new(7));
        match action {
            GameAction::ApplyPower { power, .. } => {
                assert_eq!(power.amount(), 2);
            }
            other => panic!("expected ApplyPower, got {:?}", other),
        }
    }

    #[test]
    fn test_unset_magic_number_reads_zero() {
        let card = test_card();
        let spec = ApplyEffectSpec::from_magic_number(StatusEffect::Dexterity);

        let action = spec.build(&card, CreatureId::new(0), CreatureId::new(7));
        match action {
            GameAction::ApplyPower { power, .. } => assert_eq!(power.amount(), 0),
            other => panic!("expected ApplyPower, got {:?}", other),
        }
    }

    #[test]
    fn test_debuff_on_monster_not_self_inflicted() {
        let card = test_card().with_magic_number(2);
        let spec = ApplyEffectSpec::from_magic_number(StatusEffect::Vulnerable);

        let player = CreatureId::new(0);
        let monster = CreatureId::new(7);
        let action = spec.build(&card, player, monster);

        match action {
            GameAction::ApplyPower { source, target, power } => {
                assert_eq!(source, player);
                assert_eq!(target, player);
                assert_eq!(power.self_inflicted(), Some(false));
            }
            other => panic!("expected ApplyPower, got {:?}", other),
        }
    }

    #[test]
    fn test_debuff_on_self_is_self_inflicted() {
        let card = test_card();
        let spec = ApplyEffectSpec::fixed(StatusEffect::Frail, 1);

        let me = CreatureId::new(0);
        let action = spec.build(&card, me, me);
        match action {
            GameAction::ApplyPower { power, .. } => {
                assert_eq!(power.self_inflicted(), Some(true));
            }
            other => panic!("expected ApplyPower, got {:?}", other),
        }
    }

    #[test]
    fn test_default_placement_is_bottom() {
        let spec = ApplyEffectSpec::fixed(StatusEffect::Strength, 1);
        assert_eq!(ActionSpec::placement(&spec), QueuePosition::Bottom);
        assert_eq!(ActionSpec::placement(&spec.to_top()), QueuePosition::Top);
    }
}
