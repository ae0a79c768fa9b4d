//! Cuttle: a two-seat card battle.
//!
//! Each turn the current seat draws, passes (empty deck only), or plays a
//! hand card as points, as a permanent, as a Knight, as an attack, or for
//! its one-off. The first seat to control enough points wins; Kings lower
//! the target.

mod builder;
mod game;
pub mod legal;

pub use builder::CuttleGameBuilder;
pub use game::CuttleGame;
