//! The card descriptor: a declarative card built from reusable pieces.
//!
//! `CardDescriptor` replaces one-bespoke-struct-per-card with a fluent
//! chain of optional attributes: damage, block, a magic number, cost, the
//! ethereal and exhaust flags, an upgrade delta for each, and a list of
//! pluggable effect specs. Presence of an attribute is its `Option` - there
//! is no separate flag to fall out of sync with the value.
//!
//! A descriptor is built once per card *definition*; every copy of the
//! card entering a game session comes from `make_copy`.
//!
//! ## Example
//!
//! ```
//! use cardsmith::cards::CardDescriptor;
//! use cardsmith::core::{CardColor, CardKind, CardRarity, CardTarget};
//!
//! let strike = CardDescriptor::new(
//!     "demo:Strike", "Strike", "strike.png",
//!     CardColor::Red, CardKind::Attack, CardRarity::Basic, CardTarget::Enemy,
//! )
//! .with_cost(1)
//! .with_damage(6)
//! .with_upgrade_damage(3)
//! .finish();
//!
//! assert_eq!(strike.cost(), 1);
//! assert_eq!(strike.description, "Deal !D! damage. ");
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::actions::{ActionQueue, DamageInfo, GameAction, StrikeEffect};
use crate::core::{CardColor, CardId, CardKind, CardRarity, CardTarget, CreatureId};
use crate::effects::ActionSpec;

use super::text;

/// A declaratively-built playable card.
///
/// Optional attributes are tagged optionals: `None` means "not configured",
/// and every mutator sets value and presence in one step. Setters validate
/// nothing - a negative damage amount is stored uncritically and left to
/// the caller.
///
/// `finish` must be the last call of a construction chain; it renders the
/// description template from whatever is present at that moment. Setters
/// called afterwards leave the text stale - nothing enforces the ordering.
#[derive(Debug)]
pub struct CardDescriptor {
    /// Unique catalog key.
    pub id: CardId,
    /// Display name; `upgrade` appends `+`.
    pub name: String,
    /// Portrait image reference.
    pub image: String,
    pub color: CardColor,
    pub kind: CardKind,
    pub rarity: CardRarity,
    pub target: CardTarget,

    /// Generated description template. Empty until `finish`.
    pub description: String,

    /// Attack damage dealt when played.
    pub damage: Option<i32>,
    /// Block gained when played.
    pub block: Option<i32>,
    /// Effect-specific magnitude shared by attached effect specs.
    pub magic_number: Option<i32>,
    /// Energy cost. Unset reads as [`Self::BASE_COST`].
    pub cost: Option<i32>,
    /// Evaporates at end of turn if still in hand.
    pub ethereal: Option<bool>,
    /// Removed from the deck for the rest of combat after one play.
    pub exhaust: Option<bool>,

    /// Added to damage on upgrade.
    pub upgrade_damage: Option<i32>,
    /// Added to block on upgrade.
    pub upgrade_block: Option<i32>,
    /// Added to the magic number on upgrade.
    pub upgrade_magic_number: Option<i32>,
    /// Replaces cost on upgrade.
    pub upgrade_cost: Option<i32>,
    /// Replaces the ethereal flag on upgrade.
    pub upgrade_ethereal: Option<bool>,
    /// Replaces the exhaust flag on upgrade.
    pub upgrade_exhaust: Option<bool>,

    /// Visual for emitted damage actions.
    pub strike: Option<StrikeEffect>,

    upgrade_count: u32,
    max_upgrades: u32,

    actions: SmallVec<[Box<dyn ActionSpec>; 2]>,
}

impl CardDescriptor {
    /// Cost reported while none is configured: the host's "unplayable/X"
    /// sentinel.
    pub const BASE_COST: i32 = -1;
    /// Default upgrade bound.
    pub const BASE_MAX_UPGRADES: u32 = 1;

    /// Create a descriptor with identity fields only.
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        image: impl Into<String>,
        color: CardColor,
        kind: CardKind,
        rarity: CardRarity,
        target: CardTarget,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            color,
            kind,
            rarity,
            target,
            description: String::new(),
            damage: None,
            block: None,
            magic_number: None,
            cost: None,
            ethereal: None,
            exhaust: None,
            upgrade_damage: None,
            upgrade_block: None,
            upgrade_magic_number: None,
            upgrade_cost: None,
            upgrade_ethereal: None,
            upgrade_exhaust: None,
            strike: None,
            upgrade_count: 0,
            max_upgrades: Self::BASE_MAX_UPGRADES,
            actions: SmallVec::new(),
        }
    }

    // --- fluent attribute setters ---

    /// Set the damage dealt when played.
    #[must_use]
    pub fn with_damage(mut self, amount: i32) -> Self {
        self.damage = Some(amount);
        self
    }

    /// Set the amount added to damage on upgrade.
    #[must_use]
    pub fn with_upgrade_damage(mut self, amount: i32) -> Self {
        self.upgrade_damage = Some(amount);
        self
    }

    /// Set the block gained when played.
    #[must_use]
    pub fn with_block(mut self, amount: i32) -> Self {
        self.block = Some(amount);
        self
    }

    /// Set the amount added to block on upgrade.
    #[must_use]
    pub fn with_upgrade_block(mut self, amount: i32) -> Self {
        self.upgrade_block = Some(amount);
        self
    }

    /// Set the shared magic number.
    #[must_use]
    pub fn with_magic_number(mut self, number: i32) -> Self {
        self.magic_number = Some(number);
        self
    }

    /// Set the amount added to the magic number on upgrade.
    #[must_use]
    pub fn with_upgrade_magic_number(mut self, number: i32) -> Self {
        self.upgrade_magic_number = Some(number);
        self
    }

    /// Set the energy cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the cost the card switches to on upgrade.
    #[must_use]
    pub fn with_upgraded_cost(mut self, cost: i32) -> Self {
        self.upgrade_cost = Some(cost);
        self
    }

    /// Set the ethereal flag.
    #[must_use]
    pub fn with_ethereal(mut self, ethereal: bool) -> Self {
        self.ethereal = Some(ethereal);
        self
    }

    /// Set the ethereal flag the card switches to on upgrade.
    #[must_use]
    pub fn with_upgraded_ethereal(mut self, ethereal: bool) -> Self {
        self.upgrade_ethereal = Some(ethereal);
        self
    }

    /// Set the exhaust flag.
    #[must_use]
    pub fn with_exhaust(mut self, exhaust: bool) -> Self {
        self.exhaust = Some(exhaust);
        self
    }

    /// Set the exhaust flag the card switches to on upgrade.
    #[must_use]
    pub fn with_upgraded_exhaust(mut self, exhaust: bool) -> Self {
        self.upgrade_exhaust = Some(exhaust);
        self
    }

    /// Set how many times the card can be upgraded.
    #[must_use]
    pub fn with_max_upgrades(mut self, max: u32) -> Self {
        self.max_upgrades = max;
        self
    }

    /// Attach an effect spec, materialized on every play in attachment
    /// order.
    #[must_use]
    pub fn with_action(mut self, spec: impl ActionSpec + 'static) -> Self {
        self.actions.push(Box::new(spec));
        self
    }

    /// Set the visual used by emitted damage actions.
    #[must_use]
    pub fn with_strike(mut self, strike: StrikeEffect) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Render the description template from the attributes present now.
    ///
    /// Must be the last call of a construction chain.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.description = text::render_template(&self);
        self
    }

    // --- accessors ---

    /// Current energy cost, or [`Self::BASE_COST`] if none was configured.
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.cost.unwrap_or(Self::BASE_COST)
    }

    /// How many upgrades have been applied.
    #[must_use]
    pub fn upgrade_count(&self) -> u32 {
        self.upgrade_count
    }

    /// The upgrade bound.
    #[must_use]
    pub fn max_upgrades(&self) -> u32 {
        self.max_upgrades
    }

    /// Attached effect specs in attachment order.
    #[must_use]
    pub fn actions(&self) -> &[Box<dyn ActionSpec>] {
        &self.actions
    }

    // --- upgrading ---

    /// Whether another upgrade may be applied.
    #[must_use]
    pub fn can_upgrade(&self) -> bool {
        self.upgrade_count < self.max_upgrades
    }

    /// Apply one upgrade: rename, apply each configured delta, bump the
    /// counter. A no-op once the bound is reached.
    ///
    /// Damage, block, and magic-number deltas add to the current value;
    /// cost and the two flags are replaced outright.
    pub fn upgrade(&mut self) {
        if !self.can_upgrade() {
            return;
        }

        self.upgrade_name();
        if let Some(delta) = self.upgrade_damage {
            self.damage = Some(self.damage.unwrap_or(0) + delta);
        }
        if let Some(delta) = self.upgrade_block {
            self.block = Some(self.block.unwrap_or(0) + delta);
        }
        if let Some(delta) = self.upgrade_magic_number {
            self.magic_number = Some(self.magic_number.unwrap_or(0) + delta);
        }
        if let Some(cost) = self.upgrade_cost {
            self.cost = Some(cost);
        }
        if let Some(ethereal) = self.upgrade_ethereal {
            self.ethereal = Some(ethereal);
        }
        if let Some(exhaust) = self.upgrade_exhaust {
            self.exhaust = Some(exhaust);
        }
        self.upgrade_count += 1;
    }

    fn upgrade_name(&mut self) {
        self.name.push('+');
    }

    // --- copying ---

    /// Produce a fresh descriptor carrying the current value of every
    /// present attribute and delta, upgrades included.
    ///
    /// Attached effect specs, the strike visual, and the upgrade counter
    /// are not carried over; neither is the rendered description (call
    /// `finish` on the copy). Content packs with attached specs override
    /// copying themselves.
    #[must_use]
    pub fn make_copy(&self) -> Self {
        Self {
            damage: self.damage,
            block: self.block,
            magic_number: self.magic_number,
            cost: self.cost,
            ethereal: self.ethereal,
            exhaust: self.exhaust,
            upgrade_damage: self.upgrade_damage,
            upgrade_block: self.upgrade_block,
            upgrade_magic_number: self.upgrade_magic_number,
            upgrade_cost: self.upgrade_cost,
            upgrade_ethereal: self.upgrade_ethereal,
            upgrade_exhaust: self.upgrade_exhaust,
            max_upgrades: self.max_upgrades,
            ..Self::new(
                self.id.clone(),
                self.name.clone(),
                self.image.clone(),
                self.color,
                self.kind,
                self.rarity,
                self.target,
            )
        }
    }

    // --- playing ---

    /// Play the card: emit damage and block actions, then materialize each
    /// attached effect spec at its own queue placement.
    ///
    /// Damage dispatches on the target category - `Enemy` emits one
    /// single-target action, `AllEnemies` one sweep; other categories emit
    /// no damage even if an amount is present.
    pub fn play(&self, player: CreatureId, target: CreatureId, queue: &mut ActionQueue) {
        let damage = self.damage.unwrap_or(0);
        if damage > 0 {
            let info = DamageInfo::new(player, damage);
            let strike = self.strike.unwrap_or_default();
            match self.target {
                CardTarget::Enemy => queue.add_to_bottom(GameAction::DealDamage {
                    target,
                    info,
                    strike,
                }),
                CardTarget::AllEnemies => {
                    queue.add_to_bottom(GameAction::DamageAllEnemies { info, strike });
                }
                _ => {}
            }
        }

        let block = self.block.unwrap_or(0);
        if block > 0 {
            queue.add_to_bottom(GameAction::GainBlock {
                target: player,
                source: player,
                amount: block,
            });
        }

        for spec in &self.actions {
            let action = spec.build(self, player, target);
            queue.insert(spec.placement(), action);
        }
    }

    /// Turn-boundary hook: queue the ethereal sweep ahead of everything
    /// pending. Fires for every card regardless of its own ethereal flag.
    pub fn on_turn_end(&self, queue: &mut ActionQueue) {
        queue.add_to_top(GameAction::ExhaustAllEthereal);
    }
}

impl fmt::Display for CardDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = text::substitute(&self.description, self);
        if rendered.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, rendered.replace('\n', " "))
        }
    }
}
