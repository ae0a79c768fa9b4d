//! Target requirements and validation.
//!
//! Validation happens before anything moves: a refused target leaves the
//! board untouched. A valid target is turned into a `TargetSite` (the
//! concrete slot the resolver will act on).
//!
//! "Opposing" is decided by control, not ownership: a point card the caster
//! stole with a Knight is the caster's, and a Knight is opposing when the
//! other seat attached it.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{FieldCard, FieldRole, FieldSlot, GameState, KnightSlot, Seat, Target};
use crate::rules::RuleViolation;

/// What a one-off must be pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRequirement {
    /// No target.
    None,
    /// A point card the other seat controls.
    OpposingPoint,
    /// A permanent the other seat controls, or a Knight it attached.
    OpposingPermanent,
    /// Any card in the scrap pile.
    ScrapCard,
    /// Any of the above field targets.
    OpposingAny,
}

impl TargetRequirement {
    fn accepts_point(self) -> bool {
        matches!(self, TargetRequirement::OpposingPoint | TargetRequirement::OpposingAny)
    }

    fn accepts_permanent(self) -> bool {
        matches!(self, TargetRequirement::OpposingPermanent | TargetRequirement::OpposingAny)
    }
}

/// A validated target location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetSite {
    Point(FieldSlot),
    Permanent(FieldSlot),
    Knight(KnightSlot),
    /// Index into the scrap pile.
    Scrap(usize),
}

/// Is this field card shielded by its controller's Mage?
///
/// Only point cards are protected.
#[must_use]
pub fn is_protected(state: &GameState, field_card: &FieldCard) -> bool {
    field_card.is_point() && state.has_mage(field_card.controller)
}

/// Validate a one-off target for `caster`.
pub fn check_target(
    state: &GameState,
    caster: Seat,
    requirement: TargetRequirement,
    target: Target,
) -> Result<TargetSite, RuleViolation> {
    let opponent = caster.opponent();

    match (requirement, target) {
        (TargetRequirement::None, _) => Err(RuleViolation::InvalidTarget),

        (TargetRequirement::ScrapCard, Target::Scrap(id)) => state
            .scrap
            .iter()
            .position(|c| c.id == id)
            .map(TargetSite::Scrap)
            .ok_or(RuleViolation::InvalidTarget),

        (TargetRequirement::ScrapCard, Target::Field(_)) | (_, Target::Scrap(_)) => {
            Err(RuleViolation::InvalidTarget)
        }

        (_, Target::Field(id)) => {
            if let Some(slot) = state.locate_field(id) {
                let field_card = state.field_at(slot).ok_or(RuleViolation::InvalidTarget)?;
                if field_card.controller != opponent {
                    return Err(RuleViolation::InvalidTarget);
                }
                return match field_card.role {
                    FieldRole::Point if requirement.accepts_point() => {
                        if is_protected(state, field_card) {
                            Err(RuleViolation::Protected)
                        } else {
                            Ok(TargetSite::Point(slot))
                        }
                    }
                    FieldRole::Permanent if requirement.accepts_permanent() => {
                        Ok(TargetSite::Permanent(slot))
                    }
                    _ => Err(RuleViolation::InvalidTarget),
                };
            }

            let slot = state.locate_knight(id).ok_or(RuleViolation::InvalidTarget)?;
            let attached_by = state
                .field_at(slot.host)
                .and_then(|host| host.knights.get(slot.index))
                .map(|k| k.attached_by)
                .ok_or(RuleViolation::InvalidTarget)?;

            if requirement.accepts_permanent() && attached_by == opponent {
                Ok(TargetSite::Knight(slot))
            } else {
                Err(RuleViolation::InvalidTarget)
            }
        }
    }
}

/// Every target that passes `check_target`.
#[must_use]
pub fn legal_targets(state: &GameState, caster: Seat, requirement: TargetRequirement) -> Vec<Target> {
    let candidates: Vec<Target> = match requirement {
        TargetRequirement::None => Vec::new(),
        TargetRequirement::ScrapCard => state.scrap.iter().map(|c| Target::Scrap(c.id)).collect(),
        _ => state
            .field_cards()
            .flat_map(|(_, fc)| {
                std::iter::once(fc.card.id).chain(fc.knights.iter().map(|k| k.card.id))
            })
            .map(Target::Field)
            .collect(),
    };

    candidates
        .into_iter()
        .filter(|&t| check_target(state, caster, requirement, t).is_ok())
        .collect()
}

/// Validate a Knight attachment target for `caster`.
///
/// The whole effect is blocked while the other seat has a Mage.
pub fn check_knight_target(
    state: &GameState,
    caster: Seat,
    target: CardId,
) -> Result<FieldSlot, RuleViolation> {
    let opponent = caster.opponent();
    if state.has_mage(opponent) {
        return Err(RuleViolation::Protected);
    }

    let slot = state.locate_field(target).ok_or(RuleViolation::InvalidTarget)?;
    match state.field_at(slot) {
        Some(fc) if fc.is_point() && fc.controller == opponent && fc.points() > 0 => Ok(slot),
        _ => Err(RuleViolation::InvalidTarget),
    }
}

/// Point cards `caster` could steal with a Knight.
#[must_use]
pub fn knight_targets(state: &GameState, caster: Seat) -> Vec<CardId> {
    state
        .field_cards()
        .map(|(_, fc)| fc.card.id)
        .filter(|&id| check_knight_target(state, caster, id).is_ok())
        .collect()
}
