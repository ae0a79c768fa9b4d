//! # rust-cuttle
//!
//! Rules engine and heuristic opponent for a two-seat fantasy variant of
//! the card game Cuttle.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: every operation takes an immutable
//!    `GameState` and returns a new one. Cloning is O(1) via `im-rs`.
//!
//! 2. **Refusals Are Values**: an illegal action returns the prior board
//!    with a status message and a `RuleViolation`; nothing panics.
//!
//! 3. **Closed Enumerations**: ranks, factions and one-off effects are
//!    enums dispatched by exhaustive `match`.
//!
//! ## Architecture
//!
//! - **Owner vs. Controller**: field cards stay in their owner's field list;
//!   a Knight changes only who scores them.
//!
//! - **Conservation**: all 52 cards are always in exactly one zone. Checked
//!   by `zones::verify_conservation` after every applied action in debug
//!   builds.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, seat views
//! - `cards`: Card catalog
//! - `zones`: Card location census and conservation check
//! - `effects`: One-off table, targeting, resolution, scuttle matchup
//! - `rules`: RulesEngine trait, rule violations, win evaluation
//! - `games`: The Cuttle engine
//! - `policy`: Heuristic and random opponents

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod games;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, FieldCard, FieldRole, GameConfig, GameRng, GameState, Phase, PlayerMap,
    Seat, SeatView, SevenChoice, Target, FIVE_DRAW_COUNT, WIN_TARGETS,
};

pub use crate::cards::{Card, CardId, CardRegistry, Faction, Rank};

pub use crate::zones::{verify_conservation, ConservationError, Zone};

pub use crate::effects::{OneOff, ScuttleOutcome};

pub use crate::rules::{GameResult, Resolution, RuleViolation, RulesEngine};

pub use crate::games::cuttle::{CuttleGame, CuttleGameBuilder};

pub use crate::policy::{HeuristicConfig, HeuristicOpponent, OpponentPolicy, RandomOpponent};
