//! Priority-rule opponent.
//!
//! No search: each rule inspects the current snapshot and the first rule
//! that yields an action wins. Within a rule, higher-value cards and
//! targets come first.
//!
//! 1. Win now with a point card.
//! 2. Under threat, remove the best opposing point card (Ace, 10, 9, then
//!    an attack that takes it off the field).
//! 3. Break opposing permanents with a 2 (Mage, King, spy, Knight), or
//!    sweep with a 6 when outnumbered.
//! 4. Develop: King, Mage, high point card, 5, 7, 3, spy, 4, mid point card.
//! 5. Steal with a Knight.
//! 6. Draw, then any point card, then pass.

use tracing::trace;

use super::config::HeuristicConfig;
use super::discard::choose_discards;
use super::OpponentPolicy;
use crate::cards::{Card, CardId, Rank};
use crate::core::{Action, GameConfig, GameRng, GameState, Phase, Seat, SevenChoice, Target};
use crate::effects::{
    knight_targets, legal_targets, scuttle_outcome, ScuttleOutcome, TargetRequirement,
};
use crate::rules::RulesEngine;

/// Heuristic opponent.
///
/// ```
/// use rust_cuttle::cards::{CardId, Faction, Rank};
/// use rust_cuttle::core::{Action, FieldRole, GameState, Seat};
/// use rust_cuttle::games::cuttle::CuttleGame;
/// use rust_cuttle::policy::HeuristicOpponent;
///
/// let mut state = GameState::unshuffled(["Ada", "Bo"]);
/// state.deal_to_field(Seat::First, CardId::of(Rank::Ten, Faction::Elf), FieldRole::Point);
/// state.deal_to_field(Seat::First, CardId::of(Rank::Ten, Faction::Goblin), FieldRole::Point);
/// let ace = CardId::of(Rank::Ace, Faction::Elf);
/// state.deal_to_hand(Seat::First, ace);
///
/// let action = HeuristicOpponent::default().decide(&CuttleGame::default(), &state);
/// assert_eq!(action, Some(Action::PlayPoint { card: ace }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeuristicOpponent {
    pub config: HeuristicConfig,
}

impl<E: RulesEngine> OpponentPolicy<E> for HeuristicOpponent {
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        seat: Seat,
        _rng: &mut GameRng,
    ) -> Option<Action> {
        if state.acting_seat() != seat {
            return None;
        }
        self.decide(engine, state)
    }
}

impl HeuristicOpponent {
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// The action for the acting seat, or `None` once the game is over.
    #[must_use]
    pub fn decide<E: RulesEngine>(&self, engine: &E, state: &GameState) -> Option<Action> {
        let seat = state.acting_seat();
        let rules = engine.config();

        let action = match state.phase {
            Phase::GameOver => return None,
            Phase::SelectTarget => Action::Cancel,
            Phase::SevenChoice => seven_choice(state),
            Phase::OpponentMustDiscard => {
                let hand: Vec<Card> = state.player(seat).hand.iter().copied().collect();
                let count = rules.discard_count.min(hand.len());
                Action::Discard {
                    cards: choose_discards(&hand, count),
                }
            }
            Phase::SelectAction => {
                let (action, rule) = Turn::new(&self.config, rules, state, seat).choose();
                trace!(seat = %seat, rule, action = ?action, "heuristic choice");
                action
            }
        };

        Some(action)
    }
}

/// Development value of a card in hand.
fn card_score(card: &Card) -> u32 {
    match card.rank {
        Rank::King => 13,
        Rank::Mage => 12,
        Rank::Knight => 11,
        _ => card.value(),
    }
}

fn seven_choice(state: &GameState) -> Action {
    state
        .seven_choices
        .iter()
        .flatten()
        .max_by_key(|card| card_score(card))
        .map_or(Action::Seven(SevenChoice::Decline), |card| {
            Action::Seven(SevenChoice::Take(card.id))
        })
}

/// One `SelectAction` decision.
struct Turn<'a> {
    config: &'a HeuristicConfig,
    rules: &'a GameConfig,
    state: &'a GameState,
    seat: Seat,
    opponent: Seat,
    /// Hand sorted by value, highest first.
    hand: Vec<Card>,
}

impl<'a> Turn<'a> {
    fn new(config: &'a HeuristicConfig, rules: &'a GameConfig, state: &'a GameState, seat: Seat) -> Self {
        let mut hand: Vec<Card> = state.player(seat).hand.iter().copied().collect();
        hand.sort_by(|a, b| b.value().cmp(&a.value()).then(b.id.cmp(&a.id)));

        Self {
            config,
            rules,
            state,
            seat,
            opponent: seat.opponent(),
            hand,
        }
    }

    fn choose(&self) -> (Action, &'static str) {
        if let Some(action) = self.winning_point() {
            return (action, "win");
        }
        if self.opponent_threatens() {
            if let Some(action) = self.disrupt() {
                return (action, "disrupt");
            }
        }
        if let Some(action) = self.break_permanents() {
            return (action, "break permanents");
        }
        if let Some(action) = self.develop() {
            return (action, "develop");
        }
        if let Some(action) = self.steal() {
            return (action, "steal");
        }
        (self.fallback(), "fallback")
    }

    // === Hand Queries ===

    fn first_of(&self, rank: Rank) -> Option<Card> {
        self.hand.iter().copied().find(|c| c.rank == rank)
    }

    fn point_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand.iter().copied().filter(|c| c.rank.can_play_as_point())
    }

    fn target(&self, seat: Seat) -> u32 {
        self.rules.win_target(self.state.king_count(seat))
    }

    // === Rules ===

    fn winning_point(&self) -> Option<Action> {
        let points = self.state.points(self.seat);
        let target = self.target(self.seat);

        self.point_cards()
            .find(|c| points + c.value() >= target)
            .map(|c| Action::PlayPoint { card: c.id })
    }

    fn opponent_threatens(&self) -> bool {
        self.state.points(self.opponent) + self.config.threat_margin >= self.target(self.opponent)
    }

    /// Unprotected opposing point cards, highest value first.
    fn opposing_points(&self) -> Vec<CardId> {
        let mut victims: Vec<Card> = legal_targets(self.state, self.seat, TargetRequirement::OpposingPoint)
            .into_iter()
            .filter_map(|t| self.state.field_card(t.card_id()).map(|fc| fc.card))
            .collect();
        victims.sort_by(|a, b| b.value().cmp(&a.value()).then(b.id.cmp(&a.id)));
        victims.into_iter().map(|c| c.id).collect()
    }

    fn disrupt(&self) -> Option<Action> {
        let victims = self.opposing_points();
        let best = *victims.first()?;

        for rank in [Rank::Ace, Rank::Ten, Rank::Nine] {
            if let Some(card) = self.first_of(rank) {
                return Some(Action::OneOff {
                    card: card.id,
                    target: Some(Target::Field(best)),
                });
            }
        }

        for victim in victims {
            let defender = self.state.field_card(victim)?.card;
            let attacker = self
                .hand
                .iter()
                .rev()
                .copied()
                .filter(|&a| a.rank.can_scuttle())
                .map(|a| (a, scuttle_outcome(a, defender)))
                .filter(|(_, outcome)| outcome.removes_defender())
                .min_by_key(|(a, outcome)| (*outcome != ScuttleOutcome::DefenderDestroyed, a.value()));

            if let Some((attacker, _)) = attacker {
                return Some(Action::Scuttle {
                    card: attacker.id,
                    target: Some(victim),
                });
            }
        }

        None
    }

    fn break_permanents(&self) -> Option<Action> {
        if let Some(two) = self.first_of(Rank::Two) {
            let targets = legal_targets(self.state, self.seat, TargetRequirement::OpposingPermanent);
            let rank_of = |t: &Target| Card::from_id(t.card_id()).map(|c| c.rank);

            for wanted in [Rank::Mage, Rank::King, Rank::Eight, Rank::Knight] {
                if let Some(target) = targets.iter().find(|t| rank_of(*t) == Some(wanted)) {
                    return Some(Action::OneOff {
                        card: two.id,
                        target: Some(*target),
                    });
                }
            }
        }

        if let Some(six) = self.first_of(Rank::Six) {
            if self.permanent_weight(self.opponent) > self.permanent_weight(self.seat) {
                return Some(Action::OneOff { card: six.id, target: None });
            }
        }

        None
    }

    /// Permanents on `seat`'s field plus Knights it attached anywhere.
    fn permanent_weight(&self, seat: Seat) -> usize {
        let permanents = self.state.player(seat).field.iter().filter(|fc| fc.is_permanent()).count();
        let knights = self
            .state
            .field_cards()
            .flat_map(|(_, fc)| fc.knights.iter())
            .filter(|k| k.attached_by == seat)
            .count();
        permanents + knights
    }

    fn develop(&self) -> Option<Action> {
        let state = self.state;
        let deck_ok = state.deck.len() >= self.config.min_deck_for_draw;

        if self.state.king_count(self.seat) < self.config.king_cap {
            if let Some(king) = self.first_of(Rank::King) {
                return Some(Action::PlayPermanent { card: king.id });
            }
        }

        if !state.has_mage(self.seat) && state.points(self.seat) > 0 {
            if let Some(mage) = self.first_of(Rank::Mage) {
                return Some(Action::PlayPermanent { card: mage.id });
            }
        }

        if let Some(card) = self.point_cards().find(|c| c.value() >= self.config.high_point) {
            return Some(Action::PlayPoint { card: card.id });
        }

        for rank in [Rank::Five, Rank::Seven] {
            if let Some(card) = self.first_of(rank).filter(|_| deck_ok) {
                return Some(Action::OneOff { card: card.id, target: None });
            }
        }

        if let Some(three) = self.first_of(Rank::Three) {
            let best = state
                .scrap
                .iter()
                .filter(|c| card_score(c) > card_score(&three))
                .max_by_key(|c| card_score(c));
            if let Some(best) = best {
                return Some(Action::OneOff {
                    card: three.id,
                    target: Some(Target::Scrap(best.id)),
                });
            }
        }

        if !state.hand_revealed[self.opponent] {
            if let Some(spy) = self.first_of(Rank::Eight) {
                return Some(Action::PlayPermanent { card: spy.id });
            }
        }

        if state.player(self.opponent).hand.len() >= self.config.min_hand_for_discard {
            if let Some(four) = self.first_of(Rank::Four) {
                return Some(Action::OneOff { card: four.id, target: None });
            }
        }

        self.point_cards()
            .find(|c| c.value() >= self.config.mid_point)
            .map(|c| Action::PlayPoint { card: c.id })
    }

    fn steal(&self) -> Option<Action> {
        let knight = self.first_of(Rank::Knight)?;
        let target = knight_targets(self.state, self.seat)
            .into_iter()
            .filter_map(|id| self.state.field_card(id).map(|fc| fc.card))
            .max_by_key(|c| (c.value(), c.id))?;

        Some(Action::PlayKnight {
            card: knight.id,
            target: Some(target.id),
        })
    }

    fn fallback(&self) -> Action {
        if !self.state.deck.is_empty() {
            return Action::Draw;
        }
        self.point_cards()
            .next()
            .map_or(Action::Pass, |c| Action::PlayPoint { card: c.id })
    }
}
