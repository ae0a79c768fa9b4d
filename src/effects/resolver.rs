//! Effect resolution: the code that actually moves cards.
//!
//! Callers validate first (`targeting`) and hand the resolver a
//! `TargetSite`. The resolver never refuses; it only moves cards between
//! the deck, hands, fields and scrap pile, keeping every card in exactly
//! one zone.

use smallvec::SmallVec;
use tracing::trace;

use super::effect::OneOff;
use super::scuttle::ScuttleOutcome;
use super::targeting::TargetSite;
use crate::cards::Card;
use crate::core::{AttachedKnight, FieldSlot, GameConfig, GameState, KnightSlot, Seat};

/// What the turn does after a one-off resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The caster's turn ends.
    Done,
    /// The other seat must discard first.
    AwaitDiscard,
    /// The caster must answer the reveal.
    AwaitSeven,
}

/// Inputs to a one-off resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolverContext {
    pub caster: Seat,
    /// The card that cast the effect, already out of the caster's hand.
    pub source: Card,
}

impl ResolverContext {
    #[must_use]
    pub fn new(caster: Seat, source: Card) -> Self {
        Self { caster, source }
    }
}

/// Resolves one-offs and scuttles on a snapshot.
pub struct EffectResolver<'a> {
    config: &'a GameConfig,
}

impl<'a> EffectResolver<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Resolve a one-off. The source card goes to scrap afterwards.
    pub fn resolve_one_off(
        &self,
        state: &mut GameState,
        ctx: ResolverContext,
        effect: OneOff,
        site: Option<TargetSite>,
    ) -> Resolved {
        let resolved = match (effect, site) {
            (OneOff::DestroyPoint | OneOff::DestroyPermanent, Some(site)) => {
                destroy(state, site);
                Resolved::Done
            }
            (OneOff::Bounce | OneOff::BouncePoint, Some(site)) => {
                bounce(state, site);
                Resolved::Done
            }
            (OneOff::Reclaim, Some(TargetSite::Scrap(index))) => {
                if index < state.scrap.len() {
                    let card = state.scrap.remove(index);
                    trace!(card = %card, seat = %ctx.caster, "reclaimed from scrap");
                    state.player_mut(ctx.caster).hand.push_back(card);
                }
                Resolved::Done
            }
            (OneOff::ForceDiscard, _) => {
                if state.player(ctx.caster.opponent()).hand.is_empty() {
                    Resolved::Done
                } else {
                    Resolved::AwaitDiscard
                }
            }
            (OneOff::Draw, _) => {
                draw_cards(state, ctx.caster, self.config.five_draw_count);
                Resolved::Done
            }
            (OneOff::Sweep, _) => {
                sweep(state);
                Resolved::Done
            }
            (OneOff::Reveal, _) => {
                let count = self.config.seven_reveal_count.min(state.deck.len());
                if count == 0 {
                    Resolved::Done
                } else {
                    let revealed: SmallVec<[Card; 2]> = state.deck.iter().take(count).copied().collect();
                    state.seven_choices = Some(revealed);
                    Resolved::AwaitSeven
                }
            }
            // Targeted effects without a site have nothing to act on.
            _ => Resolved::Done,
        };

        trace!(card = %ctx.source, "one-off source to scrap");
        state.scrap.push_back(ctx.source);
        resolved
    }

    /// Apply a scuttle outcome. The attacker must already be out of hand
    /// when the outcome spends it.
    pub fn resolve_scuttle(
        &self,
        state: &mut GameState,
        attacker: Card,
        defender: FieldSlot,
        outcome: ScuttleOutcome,
    ) {
        if outcome.removes_defender() {
            destroy(state, TargetSite::Point(defender));
        }
        if outcome.spends_attacker() {
            trace!(card = %attacker, "attacker to scrap");
            state.scrap.push_back(attacker);
        }
    }
}

// === Card Movement ===

/// Send a target to the scrap pile (with any Knights on it).
pub fn destroy(state: &mut GameState, site: TargetSite) {
    match site {
        TargetSite::Point(slot) | TargetSite::Permanent(slot) => {
            if let Some((card, knights)) = take_field_card(state, slot) {
                scrap_knights(state, knights);
                trace!(card = %card, "destroyed");
                state.scrap.push_back(card);
            }
        }
        TargetSite::Knight(slot) => {
            if let Some(knight) = take_knight(state, slot) {
                trace!(card = %knight.card, "knight destroyed");
                state.scrap.push_back(knight.card);
            }
        }
        TargetSite::Scrap(_) => {}
    }
}

/// Return a target to hand. Field cards go to their owner; a Knight goes
/// to the seat that attached it. Knights on a returned card are scrapped.
pub fn bounce(state: &mut GameState, site: TargetSite) {
    match site {
        TargetSite::Point(slot) | TargetSite::Permanent(slot) => {
            if let Some((card, knights)) = take_field_card(state, slot) {
                scrap_knights(state, knights);
                trace!(card = %card, seat = %slot.side, "returned to hand");
                state.player_mut(slot.side).hand.push_back(card);
            }
        }
        TargetSite::Knight(slot) => {
            if let Some(knight) = take_knight(state, slot) {
                trace!(card = %knight.card, seat = %knight.attached_by, "knight returned to hand");
                state.player_mut(knight.attached_by).hand.push_back(knight.card);
            }
        }
        TargetSite::Scrap(_) => {}
    }
}

/// Draw up to `count` cards from the top of the deck. Returns the number drawn.
pub fn draw_cards(state: &mut GameState, seat: Seat, count: usize) -> usize {
    let mut drawn = 0;
    while drawn < count {
        let Some(card) = state.deck.pop_front() else {
            break;
        };
        trace!(card = %card, seat = %seat, "drawn");
        state.player_mut(seat).hand.push_back(card);
        drawn += 1;
    }
    drawn
}

/// Scrap every permanent and every attached Knight on both fields.
pub fn sweep(state: &mut GameState) {
    for seat in Seat::ALL {
        let field = std::mem::take(&mut state.player_mut(seat).field);
        let mut kept = im::Vector::new();

        for mut field_card in field {
            let knights = field_card.strip_knights();
            scrap_knights(state, knights);

            if field_card.is_permanent() {
                trace!(card = %field_card.card, "swept");
                state.scrap.push_back(field_card.card);
            } else {
                kept.push_back(field_card);
            }
        }

        state.player_mut(seat).field = kept;
    }
}

fn take_field_card(state: &mut GameState, slot: FieldSlot) -> Option<(Card, im::Vector<AttachedKnight>)> {
    let field = &mut state.player_mut(slot.side).field;
    if slot.index >= field.len() {
        return None;
    }
    let mut field_card = field.remove(slot.index);
    let knights = field_card.strip_knights();
    Some((field_card.card, knights))
}

fn take_knight(state: &mut GameState, slot: KnightSlot) -> Option<AttachedKnight> {
    let host = state.field_at_mut(slot.host)?;
    let id = host.knights.get(slot.index)?.card.id;
    host.detach(id)
}

fn scrap_knights(state: &mut GameState, knights: im::Vector<AttachedKnight>) {
    for knight in knights {
        trace!(card = %knight.card, "knight to scrap");
        state.scrap.push_back(knight.card);
    }
}
