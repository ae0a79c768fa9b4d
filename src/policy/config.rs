//! Heuristic opponent configuration.

use serde::{Deserialize, Serialize};

/// Thresholds used by `HeuristicOpponent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// The other seat counts as a threat once its points plus this margin
    /// reach its win target.
    pub threat_margin: u32,

    /// Stop playing Kings once this many are on the field.
    pub king_cap: usize,

    /// Point cards at or above this value are played as development.
    pub high_point: u32,

    /// Point cards at or above this value are played before the rank-4
    /// discard falls through to weaker plays.
    pub mid_point: u32,

    /// Minimum deck size before spending a rank-5 or rank-7 one-off.
    pub min_deck_for_draw: usize,

    /// Minimum opposing hand size before casting the rank-4 discard.
    pub min_hand_for_discard: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            threat_margin: 5,
            king_cap: 2,
            high_point: 7,
            mid_point: 4,
            min_deck_for_draw: 2,
            min_hand_for_discard: 3,
        }
    }
}

impl HeuristicConfig {
    /// Set the threat margin.
    #[must_use]
    pub fn with_threat_margin(mut self, margin: u32) -> Self {
        self.threat_margin = margin;
        self
    }

    /// Set the King cap.
    #[must_use]
    pub fn with_king_cap(mut self, cap: usize) -> Self {
        self.king_cap = cap;
        self
    }

    /// Set the high and mid point thresholds.
    #[must_use]
    pub fn with_point_thresholds(mut self, high: u32, mid: u32) -> Self {
        self.high_point = high;
        self.mid_point = mid;
        self
    }
}
