//! Match setup.

use tracing::debug;

use super::game::CuttleGame;
use crate::cards::CardRegistry;
use crate::core::{GameConfig, GameRng, GameState, Seat};
use crate::effects::draw_cards;

/// Builder for a new match: shuffles the catalog and deals opening hands.
///
/// ```
/// use rust_cuttle::core::Seat;
/// use rust_cuttle::games::cuttle::CuttleGameBuilder;
///
/// let (_game, state) = CuttleGameBuilder::new().names("Ada", "Bo").build(42);
///
/// assert_eq!(state.player(Seat::First).hand.len(), 5);
/// assert_eq!(state.player(Seat::Second).hand.len(), 6);
/// assert_eq!(state.deck.len(), 41);
/// ```
#[derive(Clone, Debug)]
pub struct CuttleGameBuilder {
    names: [String; 2],
    config: GameConfig,
}

impl Default for CuttleGameBuilder {
    fn default() -> Self {
        Self {
            names: Seat::ALL.map(|seat| seat.to_string()),
            config: GameConfig::default(),
        }
    }
}

impl CuttleGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn hand_sizes(mut self, first: usize, second: usize) -> Self {
        self.config = self.config.with_hand_sizes(first, second);
        self
    }

    #[must_use]
    pub fn five_draw_count(mut self, count: usize) -> Self {
        self.config = self.config.with_five_draw_count(count);
        self
    }

    #[must_use]
    pub fn pass_limit(mut self, limit: u8) -> Self {
        self.config = self.config.with_pass_limit(limit);
        self
    }

    /// Build the engine and the opening snapshot.
    pub fn build(self, seed: u64) -> (CuttleGame, GameState) {
        let deck = GameRng::new(seed).shuffled_deck(&CardRegistry::standard());

        let names = [self.names[0].as_str(), self.names[1].as_str()];
        let mut state = GameState::with_deck(deck, names);

        draw_cards(&mut state, Seat::First, self.config.first_hand_size);
        draw_cards(&mut state, Seat::Second, self.config.second_hand_size);

        debug!(seed, deck = state.deck.len(), "match dealt");
        (CuttleGame::new(self.config), state)
    }
}
