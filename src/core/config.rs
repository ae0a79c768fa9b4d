//! Game configuration.
//!
//! Every tunable rule constant lives in `GameConfig`. The defaults describe
//! the standard game; tests and variants override single fields with the
//! builder methods.

use serde::{Deserialize, Serialize};

/// Cards drawn by the rank-5 one-off.
pub const FIVE_DRAW_COUNT: usize = 2;

/// Win target indexed by the number of Kings a seat controls (4+ uses the last).
pub const WIN_TARGETS: [u32; 5] = [21, 14, 10, 7, 5];

/// Rule constants for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opening hand of the seat that acts first.
    pub first_hand_size: usize,

    /// Opening hand of the seat that acts second.
    pub second_hand_size: usize,

    /// Cards drawn by the rank-5 one-off.
    pub five_draw_count: usize,

    /// Cards the victim of the rank-4 one-off must discard.
    pub discard_count: usize,

    /// Cards revealed from the top of the deck by the rank-7 one-off.
    pub seven_reveal_count: usize,

    /// Consecutive passes that end the match in a draw.
    pub pass_limit: u8,

    /// Win target by King count.
    pub win_targets: [u32; 5],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_hand_size: 5,
            second_hand_size: 6,
            five_draw_count: FIVE_DRAW_COUNT,
            discard_count: 2,
            seven_reveal_count: 2,
            pass_limit: 3,
            win_targets: WIN_TARGETS,
        }
    }
}

impl GameConfig {
    /// Points a seat needs to win while controlling `kings` Kings.
    ///
    /// ```
    /// use rust_cuttle::core::GameConfig;
    ///
    /// let config = GameConfig::default();
    /// assert_eq!(config.win_target(0), 21);
    /// assert_eq!(config.win_target(2), 10);
    /// assert_eq!(config.win_target(9), 5);
    /// ```
    #[must_use]
    pub fn win_target(&self, kings: usize) -> u32 {
        let last = self.win_targets.len() - 1;
        self.win_targets[kings.min(last)]
    }

    /// Set both opening hand sizes.
    #[must_use]
    pub fn with_hand_sizes(mut self, first: usize, second: usize) -> Self {
        self.first_hand_size = first;
        self.second_hand_size = second;
        self
    }

    /// Set the rank-5 draw count.
    #[must_use]
    pub fn with_five_draw_count(mut self, count: usize) -> Self {
        self.five_draw_count = count;
        self
    }

    /// Set the win target table, indexed by King count.
    #[must_use]
    pub fn with_win_targets(mut self, targets: [u32; 5]) -> Self {
        self.win_targets = targets;
        self
    }

    /// Set the number of consecutive passes that ends the match.
    #[must_use]
    pub fn with_pass_limit(mut self, limit: u8) -> Self {
        self.pass_limit = limit;
        self
    }

    /// Cards dealt before the first turn.
    #[must_use]
    pub fn opening_cards(&self) -> usize {
        self.first_hand_size + self.second_hand_size
    }
}
