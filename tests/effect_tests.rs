//! One-off effect integration tests.
//!
//! Each effect is cast through the engine so targeting, resolution and
//! the turn advance are exercised together.

mod common;

use common::*;
use rust_cuttle::cards::{Faction, Rank};
use rust_cuttle::core::{Phase, Seat, Target, FIVE_DRAW_COUNT};
use rust_cuttle::rules::RuleViolation;

// =============================================================================
// Ace / Ten: point removal
// =============================================================================

#[test]
fn test_ace_destroys_opposing_point() {
    let (game, mut state) = table();
    let ace = id(Rank::Ace, Faction::Elf);
    let victim = id(Rank::Seven, Faction::Demon);
    give(&mut state, Seat::First, &[ace]);
    point(&mut state, Seat::Second, victim);

    let state = applied(game.execute_one_off(&state, ace, Some(Target::Field(victim))));

    assert!(in_scrap(&state, victim));
    assert!(in_scrap(&state, ace));
    assert_eq!(state.points(Seat::Second), 0);
    assert_eq!(state.current, Seat::Second);
}

#[test]
fn test_ace_cannot_hit_own_point() {
    let (game, mut state) = table();
    let ace = id(Rank::Ace, Faction::Elf);
    let own = id(Rank::Seven, Faction::Elf);
    give(&mut state, Seat::First, &[ace]);
    point(&mut state, Seat::First, own);
    point(&mut state, Seat::Second, id(Rank::Two, Faction::Human));

    let res = game.execute_one_off(&state, ace, Some(Target::Field(own)));

    refused(&res, &state);
    assert_eq!(res.violation, Some(RuleViolation::InvalidTarget));
}

#[test]
fn test_ace_without_targets() {
    let (game, mut state) = table();
    let ace = id(Rank::Ace, Faction::Goblin);
    give(&mut state, Seat::First, &[ace]);

    let res = game.execute_one_off(&state, ace, None);

    refused(&res, &state);
    assert!(matches!(res.violation, Some(RuleViolation::NoLegalTarget(c)) if c.id == ace));
}

#[test]
fn test_ten_returns_point_to_owner() {
    let (game, mut state) = table();
    let ten = id(Rank::Ten, Faction::Human);
    let victim = id(Rank::Six, Faction::Goblin);
    give(&mut state, Seat::First, &[ten]);
    point(&mut state, Seat::Second, victim);

    let state = applied(game.execute_one_off(&state, ten, Some(Target::Field(victim))));

    assert!(state.player(Seat::Second).holds(victim));
    assert!(state.player(Seat::Second).field.is_empty());
    assert!(in_scrap(&state, ten));
}

#[test]
fn test_ten_recovers_stolen_card() {
    let (game, mut state) = table();
    let ten = id(Rank::Ten, Faction::Elf);
    let mine = id(Rank::Six, Faction::Elf);
    let knight = id(Rank::Knight, Faction::Demon);
    give(&mut state, Seat::First, &[ten]);
    point(&mut state, Seat::First, mine);
    state = applied(game.draw(&state));
    give(&mut state, Seat::Second, &[knight]);
    state = applied(game.play_knight(&state, knight, Some(mine)));
    assert_eq!(state.points(Seat::Second), 6);

    // Bo controls it now, so it is an opposing point for Ada
    let state = applied(game.execute_one_off(&state, ten, Some(Target::Field(mine))));

    assert!(state.player(Seat::First).holds(mine));
    assert!(in_scrap(&state, knight));
    assert_eq!(state.points(Seat::Second), 0);
}

// =============================================================================
// Mage protection
// =============================================================================

#[test]
fn test_mage_shields_points_from_one_offs() {
    let (game, mut state) = table();
    let ace = id(Rank::Ace, Faction::Human);
    let nine = id(Rank::Nine, Faction::Human);
    let ten = id(Rank::Ten, Faction::Goblin);
    let guarded = id(Rank::Eight, Faction::Demon);
    give(&mut state, Seat::First, &[ace, nine, ten]);
    point(&mut state, Seat::Second, guarded);
    permanent(&mut state, Seat::Second, id(Rank::Mage, Faction::Demon));

    for card in [ace, nine, ten] {
        let res = game.execute_one_off(&state, card, Some(Target::Field(guarded)));
        refused(&res, &state);
        assert_eq!(res.violation, Some(RuleViolation::Protected));
        assert_eq!(res.message(), "target is protected by a Mage");
    }
}

#[test]
fn test_mage_does_not_shield_permanents() {
    let (game, mut state) = table();
    let two = id(Rank::Two, Faction::Elf);
    let mage = id(Rank::Mage, Faction::Goblin);
    give(&mut state, Seat::First, &[two]);
    permanent(&mut state, Seat::Second, mage);
    point(&mut state, Seat::Second, id(Rank::Three, Faction::Goblin));

    let state = applied(game.execute_one_off(&state, two, Some(Target::Field(mage))));

    assert!(in_scrap(&state, mage));
    assert!(!state.has_mage(Seat::Second));
}

#[test]
fn test_mage_blocks_scuttle() {
    let (game, mut state) = table();
    let attacker = id(Rank::Ten, Faction::Demon);
    let guarded = id(Rank::Four, Faction::Elf);
    give(&mut state, Seat::First, &[attacker]);
    point(&mut state, Seat::Second, guarded);
    permanent(&mut state, Seat::Second, id(Rank::Mage, Faction::Human));

    let res = game.execute_scuttle(&state, attacker, Some(guarded));

    refused(&res, &state);
    assert_eq!(res.violation, Some(RuleViolation::Protected));
}

// =============================================================================
// Two: permanent removal
// =============================================================================

#[test]
fn test_two_destroys_king_and_raises_target() {
    let (game, mut state) = table();
    let two = id(Rank::Two, Faction::Human);
    let king = id(Rank::King, Faction::Elf);
    give(&mut state, Seat::First, &[two]);
    permanent(&mut state, Seat::Second, king);
    assert_eq!(state.player(Seat::Second).kings, 1);

    let state = applied(game.execute_one_off(&state, two, Some(Target::Field(king))));

    assert_eq!(state.player(Seat::Second).kings, 0);
    assert!(in_scrap(&state, king));
}

#[test]
fn test_two_removes_knight_and_restores_control() {
    let (game, mut state) = table();
    let two = id(Rank::Two, Faction::Goblin);
    let mine = id(Rank::Seven, Faction::Human);
    let knight = id(Rank::Knight, Faction::Elf);
    give(&mut state, Seat::First, &[two]);
    point(&mut state, Seat::First, mine);
    state = applied(game.draw(&state));
    give(&mut state, Seat::Second, &[knight]);
    state = applied(game.play_knight(&state, knight, Some(mine)));

    let state = applied(game.execute_one_off(&state, two, Some(Target::Field(knight))));

    assert!(in_scrap(&state, knight));
    let host = state.field_card(mine).expect("host stays on field");
    assert_eq!(host.controller, Seat::First);
    assert!(host.knights.is_empty());
    assert_eq!(state.points(Seat::First), 7);
}

#[test]
fn test_two_cannot_hit_point_card() {
    let (game, mut state) = table();
    let two = id(Rank::Two, Faction::Demon);
    let target = id(Rank::Five, Faction::Demon);
    give(&mut state, Seat::First, &[two]);
    point(&mut state, Seat::Second, target);

    let res = game.execute_one_off(&state, two, Some(Target::Field(target)));

    refused(&res, &state);
    assert_eq!(res.violation, Some(RuleViolation::InvalidTarget));
}

// =============================================================================
// Three: reclaim
// =============================================================================

#[test]
fn test_three_reclaims_from_scrap() {
    let (game, mut state) = table();
    let three = id(Rank::Three, Faction::Elf);
    let lost = id(Rank::King, Faction::Demon);
    give(&mut state, Seat::First, &[three]);
    state.deal_to_scrap(lost);

    let state = applied(game.execute_one_off(&state, three, Some(Target::Scrap(lost))));

    assert!(state.player(Seat::First).holds(lost));
    assert!(!in_scrap(&state, lost));
    assert!(in_scrap(&state, three));
}

#[test]
fn test_three_with_empty_scrap() {
    let (game, mut state) = table();
    let three = id(Rank::Three, Faction::Goblin);
    give(&mut state, Seat::First, &[three]);

    let res = game.execute_one_off(&state, three, None);

    refused(&res, &state);
    assert!(matches!(res.violation, Some(RuleViolation::NoLegalTarget(_))));
}

#[test]
fn test_three_rejects_field_target() {
    let (game, mut state) = table();
    let three = id(Rank::Three, Faction::Human);
    let on_field = id(Rank::Four, Faction::Human);
    give(&mut state, Seat::First, &[three]);
    point(&mut state, Seat::Second, on_field);
    state.deal_to_scrap(id(Rank::Two, Faction::Human));

    let res = game.execute_one_off(&state, three, Some(Target::Field(on_field)));

    refused(&res, &state);
}

// =============================================================================
// Five: draw
// =============================================================================

#[test]
fn test_five_draws_configured_count() {
    let (game, mut state) = table();
    let five = id(Rank::Five, Faction::Goblin);
    give(&mut state, Seat::First, &[five]);
    let deck_before = state.deck.len();

    let state = applied(game.execute_one_off(&state, five, None));

    assert_eq!(FIVE_DRAW_COUNT, 2);
    assert_eq!(state.player(Seat::First).hand.len(), FIVE_DRAW_COUNT);
    assert_eq!(state.deck.len(), deck_before - FIVE_DRAW_COUNT);
    assert_eq!(state.current, Seat::Second);
}

#[test]
fn test_five_draws_what_is_left() {
    let (game, mut state) = table();
    let five = id(Rank::Five, Faction::Elf);
    give(&mut state, Seat::First, &[five]);
    let last = state.deck.back().map(|c| c.id).expect("deck has cards");
    while state.deck.len() > 1 {
        let card = state.deck.pop_front().expect("checked length");
        state.scrap.push_back(card);
    }

    let state = applied(game.execute_one_off(&state, five, None));

    assert!(state.deck.is_empty());
    assert!(state.player(Seat::First).holds(last));
}

// =============================================================================
// Six: sweep
// =============================================================================

#[test]
fn test_six_scraps_permanents_and_knights() {
    let six = id(Rank::Six, Faction::Human);
    let stolen = id(Rank::Ten, Faction::Human);
    let knight = id(Rank::Knight, Faction::Goblin);
    let king = id(Rank::King, Faction::Goblin);
    let mage = id(Rank::Mage, Faction::Human);
    let spare = id(Rank::Three, Faction::Goblin);

    let (game, mut state) = table();
    give(&mut state, Seat::First, &[six]);
    point(&mut state, Seat::First, stolen);
    point(&mut state, Seat::Second, spare);
    permanent(&mut state, Seat::Second, king);
    permanent(&mut state, Seat::First, mage);
    let slot = state.locate_field(stolen).expect("on field");
    let card = state.take_from_deck(knight).expect("in deck");
    state.field_at_mut(slot).expect("slot").attach(card, Seat::Second);
    state.sync_derived();
    assert_eq!(state.points(Seat::Second), 13);

    let state = applied(game.execute_one_off(&state, six, None));

    for gone in [six, knight, king, mage] {
        assert!(in_scrap(&state, gone), "{gone} should be scrapped");
    }
    assert_eq!(state.points(Seat::First), 10);
    assert_eq!(state.points(Seat::Second), 3);
    assert_eq!(state.player(Seat::Second).kings, 0);
}

// =============================================================================
// Nine: bounce
// =============================================================================

#[test]
fn test_nine_returns_permanent_to_owner() {
    let (game, mut state) = table();
    let nine = id(Rank::Nine, Faction::Elf);
    let spy = id(Rank::Eight, Faction::Goblin);
    give(&mut state, Seat::First, &[nine]);
    permanent(&mut state, Seat::Second, spy);
    assert!(state.hand_revealed[Seat::First]);

    let state = applied(game.execute_one_off(&state, nine, Some(Target::Field(spy))));

    assert!(state.player(Seat::Second).holds(spy));
    assert!(!state.hand_revealed[Seat::First]);
}

#[test]
fn test_nine_returns_knight_to_its_attacher() {
    let (game, mut state) = table();
    let nine = id(Rank::Nine, Faction::Goblin);
    let mine = id(Rank::Ten, Faction::Goblin);
    let knight = id(Rank::Knight, Faction::Human);
    give(&mut state, Seat::First, &[nine]);
    point(&mut state, Seat::First, mine);
    state = applied(game.draw(&state));
    give(&mut state, Seat::Second, &[knight]);
    state = applied(game.play_knight(&state, knight, Some(mine)));
    assert_eq!(state.points(Seat::First), 0);

    let state = applied(game.execute_one_off(&state, nine, Some(Target::Field(knight))));

    assert!(state.player(Seat::Second).holds(knight));
    assert_eq!(state.points(Seat::First), 10);
    assert_eq!(state.field_card(mine).map(|fc| fc.owner), Some(Seat::First));
}

#[test]
fn test_nine_can_hit_unprotected_point() {
    let (game, mut state) = table();
    let nine = id(Rank::Nine, Faction::Demon);
    let target = id(Rank::Three, Faction::Elf);
    give(&mut state, Seat::First, &[nine]);
    point(&mut state, Seat::Second, target);

    let state = applied(game.execute_one_off(&state, nine, Some(Target::Field(target))));

    assert!(state.player(Seat::Second).holds(target));
}

// =============================================================================
// Eight: spy
// =============================================================================

#[test]
fn test_spy_reveals_opposing_hand() {
    let (game, mut state) = table();
    let eight = id(Rank::Eight, Faction::Elf);
    let secret = id(Rank::Two, Faction::Goblin);
    give(&mut state, Seat::First, &[eight]);
    give(&mut state, Seat::Second, &[secret]);
    assert_eq!(game.view(&state, Seat::First).other().hand, None);

    let state = applied(game.play_as_permanent(&state, eight));

    assert!(state.hand_revealed[Seat::Second]);
    let view = game.view(&state, Seat::First);
    assert_eq!(view.other().hand.as_ref().map(Vec::len), Some(1));
    // Bo still cannot see Ada's hand
    assert_eq!(game.view(&state, Seat::Second).other().hand, None);
}

#[test]
fn test_eight_has_no_one_off() {
    let (game, mut state) = table();
    let eight = id(Rank::Eight, Faction::Demon);
    give(&mut state, Seat::First, &[eight]);

    let res = game.execute_one_off(&state, eight, None);

    refused(&res, &state);
    assert!(matches!(res.violation, Some(RuleViolation::NoOneOff(_))));
}

#[test]
fn test_one_off_phase_guard() {
    let (game, mut state) = table();
    let seven = id(Rank::Seven, Faction::Human);
    let ace = id(Rank::Ace, Faction::Human);
    give(&mut state, Seat::First, &[seven, ace]);
    let state = applied(game.execute_one_off(&state, seven, None));
    assert_eq!(state.phase, Phase::SevenChoice);

    let res = game.execute_one_off(&state, ace, None);

    refused(&res, &state);
    assert_eq!(res.violation, Some(RuleViolation::WrongPhase { actual: Phase::SevenChoice }));
}
