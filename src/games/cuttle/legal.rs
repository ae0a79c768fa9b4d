//! Legal action enumeration.
//!
//! Lists complete actions only: targeted plays come with their target,
//! so every listed action applies without a detour through target
//! selection. `Select` is never listed (it has no rule effect).

use smallvec::SmallVec;

use crate::cards::{Card, CardId, Rank};
use crate::core::{Action, GameConfig, GameState, PendingAction, Phase, Seat, SevenChoice, Target};
use crate::effects::{is_protected, knight_targets, legal_targets, scuttle_outcome, OneOff, ScuttleOutcome};

/// Every complete action the acting seat may take.
#[must_use]
pub fn legal_actions(config: &GameConfig, state: &GameState) -> Vec<Action> {
    let seat = state.acting_seat();

    match state.phase {
        Phase::GameOver => Vec::new(),
        Phase::SelectAction => select_action(state, seat),
        Phase::SelectTarget => select_target(state, seat),
        Phase::OpponentMustDiscard => discards(config, state, seat),
        Phase::SevenChoice => {
            let mut actions: Vec<Action> = state
                .seven_choices
                .iter()
                .flatten()
                .map(|c| Action::Seven(SevenChoice::Take(c.id)))
                .collect();
            actions.push(Action::Seven(SevenChoice::Decline));
            actions
        }
    }
}

/// Opposing point cards `attacker` can scuttle without being blocked.
#[must_use]
pub fn scuttle_targets(state: &GameState, seat: Seat, attacker: Card) -> Vec<CardId> {
    if !attacker.rank.can_scuttle() {
        return Vec::new();
    }
    state
        .field_cards()
        .filter(|(_, fc)| fc.is_point() && fc.controller == seat.opponent())
        .filter(|(_, fc)| !is_protected(state, fc))
        .filter(|(_, fc)| scuttle_outcome(attacker, fc.card) != ScuttleOutcome::Blocked)
        .map(|(_, fc)| fc.card.id)
        .collect()
}

fn select_action(state: &GameState, seat: Seat) -> Vec<Action> {
    let mut actions = Vec::new();

    if state.deck.is_empty() {
        actions.push(Action::Pass);
    } else {
        actions.push(Action::Draw);
    }

    for card in state.player(seat).hand.iter().copied() {
        plays_for(state, seat, card, &mut actions);
    }

    actions
}

fn plays_for(state: &GameState, seat: Seat, card: Card, out: &mut Vec<Action>) {
    let id = card.id;

    if card.rank.can_play_as_point() {
        out.push(Action::PlayPoint { card: id });
    }
    if card.rank.can_play_as_permanent() {
        out.push(Action::PlayPermanent { card: id });
    }
    if card.rank == Rank::Knight {
        out.extend(
            knight_targets(state, seat)
                .into_iter()
                .map(|t| Action::PlayKnight { card: id, target: Some(t) }),
        );
    }
    out.extend(
        scuttle_targets(state, seat, card)
            .into_iter()
            .map(|t| Action::Scuttle { card: id, target: Some(t) }),
    );

    if let Some(effect) = OneOff::for_rank(card.rank) {
        if effect.needs_target() {
            out.extend(
                legal_targets(state, seat, effect.requirement())
                    .into_iter()
                    .map(|t| Action::OneOff { card: id, target: Some(t) }),
            );
        } else {
            out.push(Action::OneOff { card: id, target: None });
        }
    }
}

fn select_target(state: &GameState, seat: Seat) -> Vec<Action> {
    let selection = &state.interaction.selection;
    let mut actions = vec![Action::Cancel];

    let (Some(card), Some(pending)) = (selection.card, selection.pending) else {
        return actions;
    };

    let targets: Vec<Target> = match pending {
        PendingAction::OneOff => OneOff::for_rank(card.rank)
            .map(|effect| legal_targets(state, seat, effect.requirement()))
            .unwrap_or_default(),
        PendingAction::Knight => knight_targets(state, seat).into_iter().map(Target::Field).collect(),
        PendingAction::Scuttle => scuttle_targets(state, seat, card)
            .into_iter()
            .map(Target::Field)
            .collect(),
    };

    actions.extend(targets.into_iter().map(|target| Action::ResolveTarget { target }));
    actions
}

fn discards(config: &GameConfig, state: &GameState, victim: Seat) -> Vec<Action> {
    let hand: Vec<CardId> = state.player(victim).hand.iter().map(|c| c.id).collect();
    let count = config.discard_count.min(hand.len());

    let mut actions = Vec::new();
    let mut chosen: SmallVec<[CardId; 2]> = SmallVec::new();
    combinations(&hand, count, 0, &mut chosen, &mut actions);
    actions
}

fn combinations(
    hand: &[CardId],
    count: usize,
    start: usize,
    chosen: &mut SmallVec<[CardId; 2]>,
    out: &mut Vec<Action>,
) {
    if chosen.len() == count {
        out.push(Action::Discard { cards: chosen.clone() });
        return;
    }
    for i in start..hand.len() {
        chosen.push(hand[i]);
        combinations(hand, count, i + 1, chosen, out);
        chosen.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Faction;
    use crate::core::FieldRole;

    fn id(rank: Rank, faction: Faction) -> CardId {
        CardId::of(rank, faction)
    }

    #[test]
    fn test_opening_actions() {
        let config = GameConfig::default();
        let mut state = GameState::unshuffled(["A", "B"]);
        state.deal_to_hand(Seat::First, id(Rank::Four, Faction::Elf));
        state.deal_to_hand(Seat::First, id(Rank::Mage, Faction::Elf));

        let actions = legal_actions(&config, &state);

        assert!(actions.contains(&Action::Draw));
        assert!(!actions.contains(&Action::Pass));
        assert!(actions.contains(&Action::PlayPoint { card: id(Rank::Four, Faction::Elf) }));
        assert!(actions.contains(&Action::OneOff { card: id(Rank::Four, Faction::Elf), target: None }));
        assert!(actions.contains(&Action::PlayPermanent { card: id(Rank::Mage, Faction::Elf) }));
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_scuttle_targets_skip_blocked() {
        let mut state = GameState::unshuffled(["A", "B"]);
        state.deal_to_field(Seat::Second, id(Rank::Three, Faction::Human), FieldRole::Point);
        state.deal_to_field(Seat::Second, id(Rank::Eight, Faction::Human), FieldRole::Point);

        let five = Card::new(Rank::Five, Faction::Elf);
        assert_eq!(scuttle_targets(&state, Seat::First, five), vec![id(Rank::Three, Faction::Human)]);

        let king = Card::new(Rank::King, Faction::Elf);
        assert!(scuttle_targets(&state, Seat::First, king).is_empty());
    }

    #[test]
    fn test_discard_pairs() {
        let config = GameConfig::default();
        let mut state = GameState::unshuffled(["A", "B"]);
        for rank in [Rank::Two, Rank::Three, Rank::Four] {
            state.deal_to_hand(Seat::Second, id(rank, Faction::Goblin));
        }
        state.phase = Phase::OpponentMustDiscard;

        let actions = legal_actions(&config, &state);
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| matches!(a, Action::Discard { cards } if cards.len() == 2)));
    }

    #[test]
    fn test_game_over_has_no_actions() {
        let config = GameConfig::default();
        let mut state = GameState::unshuffled(["A", "B"]);
        state.phase = Phase::GameOver;

        assert!(legal_actions(&config, &state).is_empty());
    }
}
