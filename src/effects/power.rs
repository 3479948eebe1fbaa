//! Status-effect powers.
//!
//! A `Power` is the materialized form of a status effect: which effect,
//! how many stacks, and - for debuffs - whether the victim inflicted it on
//! itself. The host's stacking rules treat self-inflicted debuffs
//! differently (they tick down on the victim's own turn), so that flag is
//! fixed at materialization time and never recomputed.

use serde::{Deserialize, Serialize};

use crate::core::CreatureId;

/// The five status-effect categories a card can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEffect {
    /// Buff: extra attack damage per stack.
    Strength,
    /// Buff: extra block per stack.
    Dexterity,
    /// Debuff: takes 50% more attack damage.
    Vulnerable,
    /// Debuff: deals 25% less attack damage.
    Weak,
    /// Debuff: gains 25% less block.
    Frail,
}

impl StatusEffect {
    /// Is this one of the three debuff categories?
    #[must_use]
    pub const fn is_debuff(self) -> bool {
        matches!(
            self,
            StatusEffect::Vulnerable | StatusEffect::Weak | StatusEffect::Frail
        )
    }

    /// Materialize this effect into a `Power` on `target`, applied by
    /// `source`.
    ///
    /// Debuffs are flagged self-inflicted exactly when the applier and the
    /// victim are the same combatant.
    #[must_use]
    pub fn materialize(self, target: CreatureId, source: CreatureId, amount: i32) -> Power {
        let self_inflicted = target == source;
        match self {
            StatusEffect::Strength => Power::Strength { amount },
            StatusEffect::Dexterity => Power::Dexterity { amount },
            StatusEffect::Vulnerable => Power::Vulnerable {
                amount,
                self_inflicted,
            },
            StatusEffect::Weak => Power::Weak {
                amount,
                self_inflicted,
            },
            StatusEffect::Frail => Power::Frail {
                amount,
                self_inflicted,
            },
        }
    }
}

/// A materialized status effect with its stack count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Power {
    Strength {
        amount: i32,
    },
    Dexterity {
        amount: i32,
    },
    Vulnerable {
        amount: i32,
        self_inflicted: bool,
    },
    Weak {
        amount: i32,
        self_inflicted: bool,
    },
    Frail {
        amount: i32,
        self_inflicted: bool,
    },
}

impl Power {
    /// Stack count carried by this power.
    #[must_use]
    pub const fn amount(self) -> i32 {
        match self {
            Power::Strength { amount }
            | Power::Dexterity { amount }
            | Power::Vulnerable { amount, .. }
            | Power::Weak { amount, .. }
            | Power::Frail { amount, .. } => amount,
        }
    }

    /// Self-inflicted flag; `None` for the buff variants, which never
    /// carry one.
    #[must_use]
    pub const fn self_inflicted(self) -> Option<bool> {
        match self {
            Power::Strength { .. } | Power::Dexterity { .. } => None,
            Power::Vulnerable { self_inflicted, .. }
            | Power::Weak { self_inflicted, .. }
            | Power::Frail { self_inflicted, .. } => Some(self_inflicted),
        }
    }
}
