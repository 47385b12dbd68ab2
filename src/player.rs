//! Players and seats.
//!
//! A [`Player`] is identity plus position. The human/computer split is a
//! plain data tag ([`PlayerKind`]): movement rules are identical for both,
//! and only the presentation layer branches on it (to prompt a human or
//! auto-roll for the computer). No dispatch, no strategy.

use serde::{Deserialize, Serialize};

use crate::board::{Square, START_SQUARE};

/// Who controls a player. Carried as data; never changes movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One of the two fixed seats at the table.
///
/// The engine's active-player reference is a seat, which makes the
/// "active is always one of the two owned players" invariant structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// 0-based index, for storage in a two-element array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A player: immutable identity, mutable board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    position: Square,
}

impl Player {
    /// Create a player standing on the starting square.
    ///
    /// Players begin already on square 1, not off-board.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: START_SQUARE,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who controls this player.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Shorthand for `kind() == PlayerKind::Computer`.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Current position on the board.
    #[must_use]
    pub fn position(&self) -> Square {
        self.position
    }

    /// Move forward by `amount`, unconditionally.
    ///
    /// No bounds check at this layer; the engine validates the candidate
    /// position against the exact-landing rule before calling this.
    pub fn advance(&mut self, amount: u32) {
        self.position += amount;
    }

    /// Overwrite the position directly (used to apply link resolution).
    pub fn set_position(&mut self, square: Square) {
        self.position = square;
    }
}
