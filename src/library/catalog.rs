//! The card catalog.
//!
//! One process-wide mapping from card id to descriptor, bucketed for
//! counting by color. The host builds it once at startup; after that it is
//! read-only by convention. Unlike a bare map-plus-counters pair, every
//! mutation here updates the map and both counters together, so they can
//! never disagree.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cards::CardDescriptor;
use crate::core::{CardColor, CardId};

/// Catalog mutation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card {0} is already registered")]
    Duplicate(CardId),
    #[error("card {0} is not in the catalog")]
    Unknown(CardId),
}

/// Registry of every card available to the running game.
///
/// ## Example
///
/// ```
/// use cardsmith::library::CardCatalog;
/// use cardsmith::cards::CardDescriptor;
/// use cardsmith::core::{CardColor, CardKind, CardRarity, CardTarget};
///
/// let mut catalog = CardCatalog::new();
///
/// let card = CardDescriptor::new(
///     "demo:Zap", "Zap", "zap.png",
///     CardColor::Blue, CardKind::Attack, CardRarity::Common, CardTarget::Enemy,
/// )
/// .with_damage(3)
/// .finish();
///
/// catalog.add(card).unwrap();
/// assert_eq!(catalog.color_count(CardColor::Blue), 1);
/// assert_eq!(catalog.total_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDescriptor>,
    color_counts: FxHashMap<CardColor, usize>,
    total_count: usize,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, bumping its color's counter and the total.
    ///
    /// Fails without touching anything if the id is already taken.
    pub fn add(&mut self, card: CardDescriptor) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::Duplicate(card.id.clone()));
        }

        *self.color_counts.entry(card.color).or_insert(0) += 1;
        self.total_count += 1;
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Remove a card, decrementing its color's counter and the total.
    ///
    /// Fails without touching anything if the id is absent.
    pub fn remove(&mut self, id: &CardId) -> Result<CardDescriptor, CatalogError> {
        let card = self
            .cards
            .remove(id)
            .ok_or_else(|| CatalogError::Unknown(id.clone()))?;

        if let Some(count) = self.color_counts.get_mut(&card.color) {
            *count = count.saturating_sub(1);
        }
        self.total_count -= 1;
        Ok(card)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDescriptor> {
        self.cards.get(id)
    }

    /// Check whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of registered cards of one color.
    #[must_use]
    pub fn color_count(&self, color: CardColor) -> usize {
        self.color_counts.get(&color).copied().unwrap_or(0)
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered cards.
    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
        self.cards.values()
    }

    /// Iterate over the cards of one color.
    pub fn cards_of_color(&self, color: CardColor) -> impl Iterator<Item = &CardDescriptor> {
        self.cards.values().filter(move |c| c.color == color)
    }
}
