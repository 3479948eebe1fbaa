//! The catalog extension point.
//!
//! The host fills its catalog one color bucket at a time during startup
//! and, after each bucket, invokes any registered hook for that color.
//! `LibraryHook` is that extension point: content packs queue descriptors
//! to splice in and ids to splice out before startup, and the hook applies
//! both when the host reaches the matching color.
//!
//! Each pending collection is consumed exactly once. The whole sequence
//! runs once, synchronously, on the host's main thread - there is no
//! transactionality beyond what the catalog's own operations guarantee.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::cards::CardDescriptor;
use crate::core::{CardColor, CardId};

use super::catalog::{CardCatalog, CatalogError};

/// Pending catalog mutations, bucketed by color.
///
/// ## Example
///
/// ```
/// use cardsmith::library::{populate_color, CardCatalog, LibraryHook};
/// use cardsmith::cards::CardDescriptor;
/// use cardsmith::core::{CardColor, CardKind, CardRarity, CardTarget};
///
/// let mut hook = LibraryHook::new();
/// hook.add_card(
///     CardDescriptor::new(
///         "mymod:Nova", "Nova", "nova.png",
///         CardColor::Blue, CardKind::Attack, CardRarity::Rare, CardTarget::AllEnemies,
///     )
///     .with_damage(12)
///     .finish(),
/// );
///
/// let mut catalog = CardCatalog::new();
/// populate_color(&mut catalog, CardColor::Blue, [], &mut hook).unwrap();
/// assert_eq!(catalog.color_count(CardColor::Blue), 1);
/// ```
#[derive(Debug, Default)]
pub struct LibraryHook {
    additions: FxHashMap<CardColor, Vec<CardDescriptor>>,
    removals: FxHashMap<CardColor, Vec<CardId>>,
}

impl LibraryHook {
    /// Create a hook with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a card for addition; it lands in its own color's bucket.
    pub fn add_card(&mut self, card: CardDescriptor) {
        self.additions.entry(card.color).or_default().push(card);
    }

    /// Queue a card id for removal from the given color bucket.
    pub fn remove_card(&mut self, color: CardColor, id: impl Into<CardId>) {
        self.removals.entry(color).or_default().push(id.into());
    }

    /// Number of additions pending for a color.
    #[must_use]
    pub fn pending_additions(&self, color: CardColor) -> usize {
        self.additions.get(&color).map_or(0, Vec::len)
    }

    /// Number of removals pending for a color.
    #[must_use]
    pub fn pending_removals(&self, color: CardColor) -> usize {
        self.removals.get(&color).map_or(0, Vec::len)
    }

    /// The postfix callback: runs after the host has populated `color`,
    /// splicing pending additions into the catalog and pending removals
    /// out of it. Consumes both collections for that color.
    ///
    /// Additions run before removals, so a pack may replace a host card by
    /// queueing both an addition and a removal - but not under the same id,
    /// which would collide during the addition pass.
    pub fn after_populate(
        &mut self,
        color: CardColor,
        catalog: &mut CardCatalog,
    ) -> Result<(), CatalogError> {
        for card in self.additions.remove(&color).unwrap_or_default() {
            debug!("adding {} to the {} catalog", card.id, color);
            catalog.add(card)?;
        }

        for id in self.removals.remove(&color).unwrap_or_default() {
            debug!("removing {} from the {} catalog", id, color);
            catalog.remove(&id)?;
        }

        Ok(())
    }
}

/// The host's "populate one color bucket" startup routine: register the
/// host's own cards for `color`, then fire the hook's postfix callback.
pub fn populate_color(
    catalog: &mut CardCatalog,
    color: CardColor,
    base_cards: impl IntoIterator<Item = CardDescriptor>,
    hook: &mut LibraryHook,
) -> Result<(), CatalogError> {
    for card in base_cards {
        catalog.add(card)?;
    }

    hook.after_populate(color, catalog)?;
    info!(
        "populated {} bucket: {} cards ({} total)",
        color,
        catalog.color_count(color),
        catalog.total_count()
    );
    Ok(())
}
