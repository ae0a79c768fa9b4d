//! What one seat may see of a snapshot.
//!
//! The other seat's hand is hidden (only its size is visible) unless a spy
//! on this seat's side reveals it. The deck is visible by size only; the
//! seven-choice cards only to the seat answering it.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{PlayerMap, Seat};
use super::state::{FieldCard, GameState, Phase};
use crate::cards::Card;

/// One seat's side of the table as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub name: String,
    /// `None` when hidden from the viewer.
    pub hand: Option<Vec<Card>>,
    pub hand_size: usize,
    pub field: Vec<FieldCard>,
    pub points: u32,
    pub win_target: u32,
    pub kings: u8,
}

/// A seat's view of the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub viewer: Seat,
    pub current: Seat,
    pub phase: Phase,
    pub winner: Option<Seat>,
    pub turn: u32,
    pub deck_size: usize,
    pub scrap: Vec<Card>,
    pub sides: PlayerMap<SideView>,
    pub seven_choices: Option<Vec<Card>>,
    pub message: String,
}

impl SeatView {
    /// The viewer's own side.
    #[must_use]
    pub fn own(&self) -> &SideView {
        &self.sides[self.viewer]
    }

    /// The other side.
    #[must_use]
    pub fn other(&self) -> &SideView {
        &self.sides[self.viewer.opponent()]
    }
}

impl GameState {
    /// Project the snapshot onto what `viewer` is allowed to see. Win
    /// targets come from `config`, the same table the engine enforces.
    ///
    /// ```
    /// use rust_cuttle::cards::{CardId, Faction, Rank};
    /// use rust_cuttle::core::{GameConfig, GameState, Seat};
    ///
    /// let mut state = GameState::unshuffled(["Ada", "Bo"]);
    /// state.deal_to_hand(Seat::Second, CardId::of(Rank::Two, Faction::Elf));
    ///
    /// let view = state.view_for(&GameConfig::default(), Seat::First);
    /// assert_eq!(view.other().hand, None);
    /// assert_eq!(view.other().hand_size, 1);
    /// ```
    #[must_use]
    pub fn view_for(&self, config: &GameConfig, viewer: Seat) -> SeatView {
        let sides = PlayerMap::new(|seat| {
            let player = self.player(seat);
            let visible = seat == viewer || self.hand_revealed[seat];
            let kings = self.king_count(seat);

            SideView {
                name: player.name.clone(),
                hand: visible.then(|| player.hand.iter().copied().collect()),
                hand_size: player.hand.len(),
                field: player.field.iter().cloned().collect(),
                points: self.points(seat),
                win_target: config.win_target(kings),
                kings: player.kings,
            }
        });

        let seven_choices = match (&self.seven_choices, self.phase) {
            (Some(cards), Phase::SevenChoice) if viewer == self.current => {
                Some(cards.to_vec())
            }
            _ => None,
        };

        SeatView {
            viewer,
            current: self.current,
            phase: self.phase,
            winner: self.winner,
            turn: self.turn,
            deck_size: self.deck.len(),
            scrap: self.scrap.iter().copied().collect(),
            sides,
            seven_choices,
            message: self.interaction.message.clone(),
        }
    }
}
