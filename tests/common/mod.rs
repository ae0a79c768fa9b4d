//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_cuttle::cards::{CardId, Faction, Rank};
use rust_cuttle::core::{FieldRole, GameState, Seat};
use rust_cuttle::games::cuttle::CuttleGame;
use rust_cuttle::rules::Resolution;
use rust_cuttle::zones::verify_conservation;

pub fn id(rank: Rank, faction: Faction) -> CardId {
    CardId::of(rank, faction)
}

/// Default engine and an undealt, unshuffled table. First seat "Ada" acts.
pub fn table() -> (CuttleGame, GameState) {
    (CuttleGame::default(), GameState::unshuffled(["Ada", "Bo"]))
}

pub fn give(state: &mut GameState, seat: Seat, cards: &[CardId]) {
    for &card in cards {
        assert!(state.deal_to_hand(seat, card).is_some(), "{card} not in deck");
    }
}

pub fn point(state: &mut GameState, seat: Seat, card: CardId) {
    assert!(state.deal_to_field(seat, card, FieldRole::Point).is_some(), "{card} not in deck");
}

pub fn permanent(state: &mut GameState, seat: Seat, card: CardId) {
    assert!(state.deal_to_field(seat, card, FieldRole::Permanent).is_some(), "{card} not in deck");
}

/// Move every remaining deck card to the scrap pile.
pub fn empty_deck(state: &mut GameState) {
    while let Some(card) = state.deck.pop_front() {
        state.scrap.push_back(card);
    }
}

/// Assert an action applied and kept every card in one zone.
pub fn applied(res: Resolution) -> GameState {
    assert!(res.is_applied(), "rejected: {:?} ({})", res.violation, res.message());
    verify_conservation(&res.state).expect("conservation");
    res.state
}

/// Assert an action was refused without touching the board.
pub fn refused(res: &Resolution, prior: &GameState) {
    assert!(!res.is_applied(), "unexpectedly applied: {}", res.message());
    assert!(res.state.same_board(prior), "board changed on refusal");
}

pub fn in_scrap(state: &GameState, card: CardId) -> bool {
    state.scrap.iter().any(|c| c.id == card)
}
