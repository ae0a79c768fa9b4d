//! The 52-card catalog.
//!
//! `CardRegistry` holds every card exactly once and supports lookup by
//! `CardId`. A fresh match deck is a shuffled copy of the catalog.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Faction, Rank};

/// Registry of all cards in the game.
///
/// ## Example
///
/// ```
/// use rust_cuttle::cards::{CardId, CardRegistry, Faction, Rank};
///
/// let registry = CardRegistry::standard();
/// assert_eq!(registry.len(), 52);
///
/// let king = registry.get(CardId::of(Rank::King, Faction::Demon)).unwrap();
/// assert_eq!(king.value(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardRegistry {
    /// The standard catalog: one card per (rank, faction) pair.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = FxHashMap::default();
        let mut order = Vec::with_capacity(CardId::COUNT);

        for faction in Faction::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, faction);
                cards.insert(card.id, card);
                order.push(card.id);
            }
        }

        Self { cards, order }
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order (by faction, then rank).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Find cards of a rank across all factions.
    pub fn by_rank(&self, rank: Rank) -> impl Iterator<Item = &Card> {
        self.iter().filter(move |card| card.rank == rank)
    }

    /// All cards as an unshuffled deck.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        self.iter().copied().collect()
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
