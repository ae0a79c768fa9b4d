//! The Cuttle rules engine.
//!
//! Every operation follows the same transaction: clone the snapshot,
//! validate and mutate the clone, then finalize (derived counters, win
//! check, turn advance, history). A refused operation returns the prior
//! board with the refusal as its status message.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::cards::{Card, CardId, Rank};
use crate::core::state::turn_message;
use crate::core::{
    Action, ActionRecord, FieldCard, GameConfig, GameState, PendingAction, Phase, Seat,
    SeatView, Selection, SevenChoice, Target,
};
use crate::effects::{
    check_knight_target, check_target, draw_cards, is_protected, knight_targets, legal_targets,
    scuttle_outcome, EffectResolver, OneOff, Resolved, ResolverContext, ScuttleOutcome,
};
use crate::policy::HeuristicOpponent;
use crate::rules::{find_winner, GameResult, Resolution, RuleViolation, RulesEngine};
use crate::zones::verify_conservation;

use super::legal;

/// What happens to the turn after an operation succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// The other seat's turn begins.
    EndTurn,
    /// The same seat acts again (new phase already set).
    Stay,
    /// The pass limit was reached.
    Drawn,
}

/// The rules engine.
///
/// Stateless apart from its configuration; every call takes a snapshot and
/// returns a new one.
///
/// ```
/// use rust_cuttle::games::cuttle::CuttleGameBuilder;
/// use rust_cuttle::core::Seat;
///
/// let (game, state) = CuttleGameBuilder::new().build(7);
/// let next = game.draw(&state);
///
/// assert!(next.is_applied());
/// assert_eq!(next.state.current, Seat::Second);
/// assert_eq!(next.state.player(Seat::First).hand.len(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CuttleGame {
    config: GameConfig,
}

impl CuttleGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    // === Operations ===

    /// Draw the top card and end the turn. Refused on an empty deck.
    pub fn draw(&self, state: &GameState) -> Resolution {
        self.apply(state, &Action::Draw)
    }

    /// End the turn without acting. Refused while the deck has cards.
    pub fn pass(&self, state: &GameState) -> Resolution {
        self.apply(state, &Action::Pass)
    }

    pub fn play_as_point(&self, state: &GameState, card: CardId) -> Resolution {
        self.apply(state, &Action::PlayPoint { card })
    }

    pub fn play_as_permanent(&self, state: &GameState, card: CardId) -> Resolution {
        self.apply(state, &Action::PlayPermanent { card })
    }

    /// Attach a Knight. Without a target, enters target selection.
    pub fn play_knight(&self, state: &GameState, card: CardId, target: Option<CardId>) -> Resolution {
        self.apply(state, &Action::PlayKnight { card, target })
    }

    /// Attack an opposing point card. Without a target, enters target selection.
    pub fn execute_scuttle(&self, state: &GameState, card: CardId, target: Option<CardId>) -> Resolution {
        self.apply(state, &Action::Scuttle { card, target })
    }

    /// Activate a one-off. A targeted one-off without a target enters
    /// target selection; an untargeted one ignores `target`.
    pub fn execute_one_off(&self, state: &GameState, card: CardId, target: Option<Target>) -> Resolution {
        self.apply(state, &Action::OneOff { card, target })
    }

    /// Complete the pending selection.
    pub fn resolve_target(&self, state: &GameState, target: Target) -> Resolution {
        self.apply(state, &Action::ResolveTarget { target })
    }

    /// Answer a forced discard.
    pub fn discard_cards(&self, state: &GameState, cards: &[CardId]) -> Resolution {
        self.apply(state, &Action::discard(cards))
    }

    /// Answer the rank-7 reveal.
    pub fn resolve_seven_choice(&self, state: &GameState, choice: SevenChoice) -> Resolution {
        self.apply(state, &Action::Seven(choice))
    }

    pub fn select_card(&self, state: &GameState, card: CardId) -> Resolution {
        self.apply(state, &Action::Select { card })
    }

    /// Leave target selection.
    pub fn cancel(&self, state: &GameState) -> Resolution {
        self.apply(state, &Action::Cancel)
    }

    /// What `viewer` may see of `state`, with this engine's win targets.
    #[must_use]
    pub fn view(&self, state: &GameState, viewer: Seat) -> SeatView {
        state.view_for(&self.config, viewer)
    }

    /// The heuristic opponent's choice for the acting seat. No side effects.
    #[must_use]
    pub fn opponent_action(&self, state: &GameState) -> Option<Action> {
        HeuristicOpponent::default().decide(self, state)
    }

    // === Dispatch ===

    fn execute(&self, state: &mut GameState, seat: Seat, action: &Action) -> Result<Step, RuleViolation> {
        match action {
            Action::Draw => self.exec_draw(state, seat),
            Action::Pass => self.exec_pass(state, seat),
            Action::PlayPoint { card } => self.exec_play_point(state, seat, *card),
            Action::PlayPermanent { card } => self.exec_play_permanent(state, seat, *card),
            Action::PlayKnight { card, target } => self.exec_knight(state, seat, *card, *target),
            Action::Scuttle { card, target } => self.exec_scuttle(state, seat, *card, *target),
            Action::OneOff { card, target } => self.exec_one_off(state, seat, *card, *target),
            Action::ResolveTarget { target } => self.exec_resolve_target(state, seat, *target),
            Action::Select { card } => self.exec_select(state, seat, *card),
            Action::Cancel => self.exec_cancel(state),
            Action::Discard { cards } => self.exec_discard(state, seat, cards),
            Action::Seven(choice) => self.exec_seven(state, seat, *choice),
        }
    }

    fn exec_draw(&self, state: &mut GameState, seat: Seat) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        if state.deck.is_empty() {
            return Err(RuleViolation::DeckEmpty);
        }

        draw_cards(state, seat, 1);
        let name = state.player(seat).name.clone();
        state.set_message(format!("{name} drew a card"));
        Ok(Step::EndTurn)
    }

    fn exec_pass(&self, state: &mut GameState, seat: Seat) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        if !state.deck.is_empty() {
            return Err(RuleViolation::DeckNotEmpty);
        }

        state.consecutive_passes = state.consecutive_passes.saturating_add(1);
        let name = state.player(seat).name.clone();
        state.set_message(format!("{name} passed"));

        if state.consecutive_passes >= self.config.pass_limit {
            Ok(Step::Drawn)
        } else {
            Ok(Step::EndTurn)
        }
    }

    fn exec_play_point(&self, state: &mut GameState, seat: Seat, id: CardId) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        if !card.rank.can_play_as_point() {
            return Err(RuleViolation::NotAPointCard(card));
        }

        take_from_hand(state, seat, id)?;
        state.player_mut(seat).field.push_back(FieldCard::point(card, seat));
        state.set_message(format!("{card} played for {} points", card.value()));
        Ok(Step::EndTurn)
    }

    fn exec_play_permanent(&self, state: &mut GameState, seat: Seat, id: CardId) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        if !card.rank.can_play_as_permanent() {
            return Err(RuleViolation::NotAPermanent(card));
        }

        take_from_hand(state, seat, id)?;
        state.player_mut(seat).field.push_back(FieldCard::permanent(card, seat));
        state.set_message(format!("{card} played as a permanent"));
        Ok(Step::EndTurn)
    }

    fn exec_knight(
        &self,
        state: &mut GameState,
        seat: Seat,
        id: CardId,
        target: Option<CardId>,
    ) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        if card.rank != Rank::Knight {
            return Err(RuleViolation::NotAKnight(card));
        }
        if state.has_mage(seat.opponent()) {
            return Err(RuleViolation::Protected);
        }

        match target {
            Some(target) => self.attach_knight(state, seat, card, target),
            None if knight_targets(state, seat).is_empty() => Err(RuleViolation::NoLegalTarget(card)),
            None => Ok(enter_target_selection(state, card, PendingAction::Knight)),
        }
    }

    fn attach_knight(&self, state: &mut GameState, seat: Seat, card: Card, target: CardId) -> Result<Step, RuleViolation> {
        let slot = check_knight_target(state, seat, target)?;
        take_from_hand(state, seat, card.id)?;

        let host = state.field_at_mut(slot).ok_or(RuleViolation::InvalidTarget)?;
        host.attach(card, seat);
        let stolen = host.card;
        state.set_message(format!("{card} stole {stolen}"));
        Ok(Step::EndTurn)
    }

    fn exec_scuttle(
        &self,
        state: &mut GameState,
        seat: Seat,
        id: CardId,
        target: Option<CardId>,
    ) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        if !card.rank.can_scuttle() {
            return Err(RuleViolation::CannotScuttle(card));
        }

        match target {
            Some(target) => self.resolve_scuttle(state, seat, card, target),
            None if legal::scuttle_targets(state, seat, card).is_empty() => {
                Err(RuleViolation::NoLegalTarget(card))
            }
            None => Ok(enter_target_selection(state, card, PendingAction::Scuttle)),
        }
    }

    fn resolve_scuttle(&self, state: &mut GameState, seat: Seat, attacker: Card, target: CardId) -> Result<Step, RuleViolation> {
        let slot = state.locate_field(target).ok_or(RuleViolation::InvalidTarget)?;
        let defender = match state.field_at(slot) {
            Some(fc) if fc.is_point() && fc.controller == seat.opponent() => fc,
            _ => return Err(RuleViolation::InvalidTarget),
        };
        if is_protected(state, defender) {
            return Err(RuleViolation::Protected);
        }

        let defender = defender.card;
        let outcome = scuttle_outcome(attacker, defender);
        if outcome == ScuttleOutcome::Blocked {
            return Err(RuleViolation::ScuttleBlocked);
        }

        if outcome.spends_attacker() {
            take_from_hand(state, seat, attacker.id)?;
        }
        EffectResolver::new(&self.config).resolve_scuttle(state, attacker, slot, outcome);

        let text = match outcome {
            ScuttleOutcome::Mutual => format!("{attacker} and {defender} destroyed each other"),
            ScuttleOutcome::DefenderDestroyed => format!("{attacker} destroyed {defender}"),
            ScuttleOutcome::AttackerDestroyed => format!("{attacker} lost to {defender}"),
            ScuttleOutcome::Blocked => String::new(),
        };
        state.set_message(text);
        Ok(Step::EndTurn)
    }

    fn exec_one_off(
        &self,
        state: &mut GameState,
        seat: Seat,
        id: CardId,
        target: Option<Target>,
    ) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        let effect = OneOff::for_rank(card.rank).ok_or(RuleViolation::NoOneOff(card))?;

        if !effect.needs_target() {
            return self.cast_one_off(state, seat, card, effect, None);
        }

        match target {
            Some(target) => self.cast_one_off(state, seat, card, effect, Some(target)),
            None if legal_targets(state, seat, effect.requirement()).is_empty() => {
                Err(RuleViolation::NoLegalTarget(card))
            }
            None => Ok(enter_target_selection(state, card, PendingAction::OneOff)),
        }
    }

    fn cast_one_off(
        &self,
        state: &mut GameState,
        seat: Seat,
        card: Card,
        effect: OneOff,
        target: Option<Target>,
    ) -> Result<Step, RuleViolation> {
        let site = match target {
            Some(target) if effect.needs_target() => {
                Some(check_target(state, seat, effect.requirement(), target)?)
            }
            _ => None,
        };

        take_from_hand(state, seat, card.id)?;
        let ctx = ResolverContext::new(seat, card);
        let resolved = EffectResolver::new(&self.config).resolve_one_off(state, ctx, effect, site);
        state.set_message(format!("{card}: {effect}"));

        match resolved {
            Resolved::Done => Ok(Step::EndTurn),
            Resolved::AwaitDiscard => {
                state.phase = Phase::OpponentMustDiscard;
                let victim = state.player(seat.opponent()).name.clone();
                state.set_message(format!("{card}: {victim} must discard"));
                Ok(Step::Stay)
            }
            Resolved::AwaitSeven => {
                state.phase = Phase::SevenChoice;
                state.set_message(format!("{card}: choose a revealed card or decline"));
                Ok(Step::Stay)
            }
        }
    }

    fn exec_resolve_target(&self, state: &mut GameState, seat: Seat, target: Target) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectTarget)?;
        let selection = state.interaction.selection.clone();
        let (Some(selected), Some(pending)) = (selection.card, selection.pending) else {
            return Err(RuleViolation::NothingSelected);
        };
        let card = hand_card(state, seat, selected.id)?;

        state.phase = Phase::SelectAction;
        state.interaction.selection.clear();

        match (pending, target) {
            (PendingAction::OneOff, target) => {
                let effect = OneOff::for_rank(card.rank).ok_or(RuleViolation::NoOneOff(card))?;
                self.cast_one_off(state, seat, card, effect, Some(target))
            }
            (PendingAction::Knight, Target::Field(id)) => self.attach_knight(state, seat, card, id),
            (PendingAction::Scuttle, Target::Field(id)) => self.resolve_scuttle(state, seat, card, id),
            (_, Target::Scrap(_)) => Err(RuleViolation::InvalidTarget),
        }
    }

    fn exec_select(&self, state: &mut GameState, seat: Seat, id: CardId) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectAction)?;
        let card = hand_card(state, seat, id)?;
        state.interaction.selection = Selection {
            card: Some(card),
            pending: None,
            target: None,
        };
        state.set_message(format!("Selected {card}"));
        Ok(Step::Stay)
    }

    fn exec_cancel(&self, state: &mut GameState) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SelectTarget)?;
        state.interaction.selection.clear();
        state.phase = Phase::SelectAction;
        state.set_message("Cancelled");
        Ok(Step::Stay)
    }

    fn exec_discard(&self, state: &mut GameState, victim: Seat, cards: &[CardId]) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::OpponentMustDiscard)?;
        let expected = self.config.discard_count.min(state.player(victim).hand.len());

        let distinct: FxHashSet<CardId> = cards.iter().copied().collect();
        if cards.len() != expected || distinct.len() != expected {
            return Err(RuleViolation::DiscardCount {
                expected,
                actual: distinct.len(),
            });
        }
        if let Some(&missing) = cards.iter().find(|&&id| !state.player(victim).holds(id)) {
            return Err(RuleViolation::NotInHand(missing));
        }

        for &id in cards {
            let card = take_from_hand(state, victim, id)?;
            state.scrap.push_back(card);
        }
        let name = state.player(victim).name.clone();
        state.set_message(format!("{name} discarded {expected} card(s)"));
        Ok(Step::EndTurn)
    }

    fn exec_seven(&self, state: &mut GameState, seat: Seat, choice: SevenChoice) -> Result<Step, RuleViolation> {
        expect_phase(state, Phase::SevenChoice)?;
        let revealed = state.seven_choices.clone().unwrap_or_default();

        match choice {
            SevenChoice::Take(id) => {
                if !revealed.iter().any(|c| c.id == id) {
                    return Err(RuleViolation::NotRevealed(id));
                }
                let card = state.take_from_deck(id).ok_or(RuleViolation::NotRevealed(id))?;
                state.player_mut(seat).hand.push_back(card);
                state.interaction.selection = Selection {
                    card: Some(card),
                    pending: None,
                    target: None,
                };
                state.set_message(format!("Took {card}; choose an action"));
            }
            SevenChoice::Decline => {
                for card in revealed.iter() {
                    if let Some(card) = state.take_from_deck(card.id) {
                        state.deck.push_back(card);
                    }
                }
                state.set_message("Declined; choose an action");
            }
        }

        state.seven_choices = None;
        state.phase = Phase::SelectAction;
        Ok(Step::Stay)
    }

    // === Finalize ===

    fn finalize(&self, state: &mut GameState, seat: Seat, action: &Action, step: Step) {
        state.sync_derived();

        // Selection moves are not rule actions
        if !action.is_interaction_only() {
            state.history.push_back(ActionRecord::new(seat, action.clone(), state.turn));
            if !matches!(action, Action::Pass) {
                state.consecutive_passes = 0;
            }
        }

        if step == Step::Drawn {
            finish(state, None);
            info!(turn = state.turn, "match drawn by passing");
            return;
        }

        if let Some(winner) = find_winner(state, &self.config, seat) {
            finish(state, Some(winner));
            info!(winner = %winner, turn = state.turn, "match won");
            return;
        }

        if step == Step::EndTurn {
            end_turn(state);
        }
    }
}

impl RulesEngine for CuttleGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        legal::legal_actions(&self.config, state)
    }

    fn apply(&self, state: &GameState, action: &Action) -> Resolution {
        if state.is_over() {
            return Resolution::rejected(state, RuleViolation::GameOver);
        }

        let seat = state.acting_seat();
        let mut next = state.clone();

        match self.execute(&mut next, seat, action) {
            Ok(step) => {
                self.finalize(&mut next, seat, action, step);
                debug!(seat = %seat, action = ?action, phase = %next.phase, "action applied");
                debug_assert!(verify_conservation(&next).is_ok(), "card conservation violated");
                Resolution::applied(next)
            }
            Err(violation) => {
                debug!(
                    seat = %seat,
                    action = ?action,
                    targeting = violation.is_targeting(),
                    "action rejected: {violation}"
                );
                Resolution::rejected(state, violation)
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }
        Some(state.winner.map_or(GameResult::Draw, GameResult::Winner))
    }
}

// === Helpers ===

fn expect_phase(state: &GameState, phase: Phase) -> Result<(), RuleViolation> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(RuleViolation::WrongPhase { actual: state.phase })
    }
}

fn hand_card(state: &GameState, seat: Seat, id: CardId) -> Result<Card, RuleViolation> {
    state.player(seat).hand_card(id).ok_or(RuleViolation::NotInHand(id))
}

fn take_from_hand(state: &mut GameState, seat: Seat, id: CardId) -> Result<Card, RuleViolation> {
    state.player_mut(seat).take_from_hand(id).ok_or(RuleViolation::NotInHand(id))
}

fn enter_target_selection(state: &mut GameState, card: Card, pending: PendingAction) -> Step {
    state.phase = Phase::SelectTarget;
    state.interaction.selection = Selection {
        card: Some(card),
        pending: Some(pending),
        target: None,
    };
    state.set_message(format!("Choose a target for {card}"));
    Step::Stay
}

fn end_turn(state: &mut GameState) {
    state.current = state.current.opponent();
    state.turn += 1;
    state.phase = Phase::SelectAction;
    state.seven_choices = None;
    state.interaction.selection.clear();

    let next = turn_message(state.player(state.current));
    let event = std::mem::take(&mut state.interaction.message);
    let message = if event.is_empty() {
        next
    } else {
        format!("{event}. {next}")
    };
    state.set_message(message);
}

fn finish(state: &mut GameState, winner: Option<Seat>) {
    state.phase = Phase::GameOver;
    state.winner = winner;
    state.seven_choices = None;
    state.interaction.selection.clear();

    let message = match winner {
        Some(seat) => format!("{} wins!", state.player(seat).name),
        None => "The game is a draw".to_string(),
    };
    state.set_message(message);
}
