//! # snakes-ladders
//!
//! A two-player Snakes and Ladders game engine.
//!
//! ## Design Principles
//!
//! 1. **Engine first**: All rules live in [`Game`] - movement, the
//!    exact-landing rule, link resolution, turn order, win detection.
//!    The console front end only prompts, prints, and loops.
//!
//! 2. **Board as lookup service**: [`Board`] owns the serpentine grid
//!    and the snake/ladder link table, immutable after construction.
//!    Link resolution is separate from movement arithmetic, so the link
//!    set can be swapped without touching turn logic.
//!
//! 3. **Deterministic when asked**: the die draws from a seedable
//!    ChaCha8 RNG. Production games seed from the OS; tests inject a
//!    seed and get reproducible rolls.
//!
//! 4. **Human/computer as data**: the computer player is a
//!    [`PlayerKind`] tag, not a subtype. Movement rules are identical;
//!    only the front end branches on the tag.
//!
//! ## Turn sequence
//!
//! Each turn: [`Game::roll_die`], [`Game::advance_active_player`],
//! [`Game::check_win`], [`Game::switch_turn`], exactly once each, in order. See
//! the [`game`] module docs for why the ordering is part of the
//! contract.
//!
//! ## Modules
//!
//! - `board`: serpentine grid, link table, resolution
//! - `die`: bounded random rolls with a remembered last value
//! - `rng`: deterministic, serializable RNG
//! - `player`: players, seats, the human/computer tag
//! - `config`: construction-time configuration
//! - `game`: the turn state machine
//! - `render`: text rendering of the board
//! - `error`: construction-time errors

pub mod board;
pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod player;
pub mod render;
pub mod rng;

// Re-export commonly used types
pub use crate::board::{Board, Link, LinkKind, Square, BOARD_SIDE, FINAL_SQUARE, START_SQUARE};
pub use crate::config::GameConfig;
pub use crate::die::{Die, DEFAULT_FACES};
pub use crate::error::ConfigError;
pub use crate::game::{Game, MoveOutcome};
pub use crate::player::{Player, PlayerKind, Seat};
pub use crate::render::render_board;
pub use crate::rng::{GameRng, GameRngState};
