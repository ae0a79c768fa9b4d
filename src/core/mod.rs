//! Core engine types: seats, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules that move cards between the
//! deck, hands, fields and scrap live in `effects` and `games::cuttle`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod view;

pub use player::{PlayerMap, Seat};
pub use rng::GameRng;
pub use config::{GameConfig, FIVE_DRAW_COUNT, WIN_TARGETS};
pub use action::{Action, ActionRecord, SevenChoice, Target};
pub use state::{
    AttachedKnight, FieldCard, FieldRole, FieldSlot, GameState, Interaction, KnightSlot,
    PendingAction, Phase, Player, Selection,
};
pub use view::{SeatView, SideView};
