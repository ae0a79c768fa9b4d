//! Seeded randomness for dealing and random play.
//!
//! Rules never draw random numbers: every operation is a pure function of
//! the snapshot. Only the deal and random-play opponents take a `GameRng`,
//! so one seed reproduces a whole match.
//!
//! ```
//! use rust_cuttle::cards::CardRegistry;
//! use rust_cuttle::core::GameRng;
//!
//! let registry = CardRegistry::standard();
//! let a = GameRng::new(42).shuffled_deck(&registry);
//! let b = GameRng::new(42).shuffled_deck(&registry);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, CardRegistry};

/// ChaCha8 stream keyed by a `u64` seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The full catalog in a random order; the front is the top of the deck.
    #[must_use]
    pub fn shuffled_deck(&mut self, registry: &CardRegistry) -> Vec<Card> {
        let mut deck = registry.deck();
        deck.shuffle(&mut self.inner);
        deck
    }

    /// Pick one element uniformly; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
