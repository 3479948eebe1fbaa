//! Starter cards for the Red pool.
//!
//! Built entirely through `CardDescriptor`, these double as the worked
//! example for the builder: every optional attribute, both delta styles,
//! and the effect-spec path appear at least once.

use crate::actions::StrikeEffect;
use crate::cards::CardDescriptor;
use crate::core::{CardColor, CardKind, CardRarity, CardTarget};
use crate::effects::{ApplyEffectSpec, StatusEffect};

/// Deal 6 damage. Upgrade: +3 damage.
#[must_use]
pub fn strike() -> CardDescriptor {
    CardDescriptor::new(
        "red:Strike",
        "Strike",
        "red/strike.png",
        CardColor::Red,
        CardKind::Attack,
        CardRarity::Basic,
        CardTarget::Enemy,
    )
    .with_cost(1)
    .with_damage(6)
    .with_upgrade_damage(3)
    .with_strike(StrikeEffect::SlashDiagonal)
    .finish()
}

/// Gain 5 block. Upgrade: +3 block.
#[must_use]
pub fn defend() -> CardDescriptor {
    CardDescriptor::new(
        "red:Defend",
        "Defend",
        "red/defend.png",
        CardColor::Red,
        CardKind::Skill,
        CardRarity::Basic,
        CardTarget::Player,
    )
    .with_cost(1)
    .with_block(5)
    .with_upgrade_block(3)
    .finish()
}

/// Deal 8 damage and apply 2 Vulnerable. Upgrade: +2 damage, +1 Vulnerable.
#[must_use]
pub fn bash() -> CardDescriptor {
    CardDescriptor::new(
        "red:Bash",
        "Bash",
        "red/bash.png",
        CardColor::Red,
        CardKind::Attack,
        CardRarity::Basic,
        CardTarget::Enemy,
    )
    .with_cost(2)
    .with_damage(8)
    .with_upgrade_damage(2)
    .with_magic_number(2)
    .with_upgrade_magic_number(1)
    .with_action(ApplyEffectSpec::from_magic_number(StatusEffect::Vulnerable))
    .with_strike(StrikeEffect::BluntHeavy)
    .finish()
}

/// Deal 8 damage to all enemies. Upgrade: +3 damage.
#[must_use]
pub fn cleave() -> CardDescriptor {
    CardDescriptor::new(
        "red:Cleave",
        "Cleave",
        "red/cleave.png",
        CardColor::Red,
        CardKind::Attack,
        CardRarity::Common,
        CardTarget::AllEnemies,
    )
    .with_cost(1)
    .with_damage(8)
    .with_upgrade_damage(3)
    .with_strike(StrikeEffect::SlashHorizontal)
    .finish()
}

/// Ethereal. Deal 20 damage. Upgrade: +8 damage.
#[must_use]
pub fn carnage() -> CardDescriptor {
    CardDescriptor::new(
        "red:Carnage",
        "Carnage",
        "red/carnage.png",
        CardColor::Red,
        CardKind::Attack,
        CardRarity::Uncommon,
        CardTarget::Enemy,
    )
    .with_cost(2)
    .with_ethereal(true)
    .with_damage(20)
    .with_upgrade_damage(8)
    .with_strike(StrikeEffect::SlashHeavy)
    .finish()
}

/// Gain 2 Strength. Exhaust. Upgrade: costs 0.
#[must_use]
pub fn seeing_red() -> CardDescriptor {
    CardDescriptor::new(
        "red:SeeingRed",
        "Seeing Red",
        "red/seeing_red.png",
        CardColor::Red,
        CardKind::Skill,
        CardRarity::Uncommon,
        CardTarget::None,
    )
    .with_cost(1)
    .with_upgraded_cost(0)
    .with_exhaust(true)
    .with_magic_number(2)
    .with_action(ApplyEffectSpec::from_magic_number(StatusEffect::Strength))
    .finish()
}

/// Every starter card, in catalog order.
#[must_use]
pub fn all() -> Vec<CardDescriptor> {
    vec![strike(), defend(), bash(), cleave(), carnage(), seeing_red()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_all_cards_are_red() {
        assert!(all().iter().all(|c| c.color == CardColor::Red));
    }

    #[test]
    fn test_bash_description() {
        // magic-number effects have no generated clause; only damage shows
        assert_eq!(bash().description, "Deal !D! damage. ");
        assert_eq!(bash().actions().len(), 1);
    }

    #[test]
    fn test_carnage_is_ethereal() {
        let card = carnage();
        assert_eq!(card.ethereal, Some(true));
        assert!(card.description.starts_with("Ethereal. NL "));
    }

    #[test]
    fn test_seeing_red_upgrade_drops_cost() {
        let mut card = seeing_red();
        assert_eq!(card.cost(), 1);
        card.upgrade();
        assert_eq!(card.cost(), 0);
        assert_eq!(card.magic_number, Some(2));
    }
}
