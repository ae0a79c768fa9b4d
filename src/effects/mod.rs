//! Card effects.
//!
//! - `OneOff`: the per-rank one-off table
//! - `TargetRequirement` / `check_target`: what an effect may point at
//! - `EffectResolver`: moves the cards
//! - `scuttle_outcome`: value comparison and faction tie-break for attacks
//!
//! Validation and movement are split: nothing in `targeting` mutates, and
//! nothing in `resolver` refuses.

mod effect;
mod targeting;
mod resolver;
mod scuttle;

pub use effect::OneOff;
pub use targeting::{
    check_knight_target, check_target, is_protected, knight_targets, legal_targets,
    TargetRequirement, TargetSite,
};
pub use resolver::{bounce, destroy, draw_cards, sweep, EffectResolver, Resolved, ResolverContext};
pub use scuttle::{faction_matchup, scuttle_outcome, Matchup, ScuttleOutcome};
