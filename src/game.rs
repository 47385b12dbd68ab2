//! The game engine: turn order, movement, win detection.
//!
//! ## Turn sequence contract
//!
//! Each turn, a caller must invoke exactly once, in order:
//!
//! 1. [`Game::roll_die`]
//! 2. [`Game::advance_active_player`]
//! 3. [`Game::check_win`]
//! 4. [`Game::switch_turn`]
//!
//! `check_win` recomputes the terminal flag from the active player's
//! current position rather than latching it, so it must run immediately
//! after movement and before the turn switches. This ordering is part of
//! the public contract, not an incidental detail. Once `check_win`
//! returns `true`, the caller stops issuing turns; `switch_turn` becomes
//! a no-op, which keeps the winner as the active player so their identity
//! can be read for a win announcement.

use crate::board::{Board, Square, FINAL_SQUARE};
use crate::config::GameConfig;
use crate::die::Die;
use crate::error::ConfigError;
use crate::player::{Player, PlayerKind, Seat};

/// Result of one movement attempt.
///
/// Overshooting the final square is a normal outcome under the
/// exact-landing rule, not an error: the move is rejected, the position
/// stays put, and the turn still passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved, with link resolution already applied.
    Moved {
        /// Position before the roll was applied.
        from: Square,
        /// Final position, after any snake or ladder.
        to: Square,
    },
    /// The roll would have carried the player past the final square.
    Overshot {
        /// The rejected candidate position (always above the final square).
        candidate: Square,
    },
}

impl MoveOutcome {
    /// Whether any movement occurred.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// A two-player Snakes and Ladders game.
///
/// Composes the board, the die, and both players; owns turn order and the
/// terminal flag. Strictly single-threaded and turn-sequential: every
/// operation completes before the next is issued. The core never performs
/// I/O - the console front end drives it and renders the results.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    die: Die,
    players: [Player; 2],
    active: Seat,
    game_over: bool,
}

impl Game {
    /// Start a standard game: standard board, six-faced die, player one
    /// is the human "P1", the opponent is "P2" or the computer "CP".
    #[must_use]
    pub fn new(opponent: PlayerKind) -> Self {
        // The standard configuration is valid by construction.
        match Self::with_config(GameConfig::new(opponent)) {
            Ok(game) => game,
            Err(_) => unreachable!("standard configuration is valid"),
        }
    }

    /// Start a game from explicit configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let board = Board::with_links(config.links)?;
        let die = match config.seed {
            Some(seed) => Die::seeded(config.die_faces, seed)?,
            None => Die::new(config.die_faces)?,
        };

        let player_two = match config.opponent {
            PlayerKind::Human => Player::new("P2", PlayerKind::Human),
            PlayerKind::Computer => Player::new("CP", PlayerKind::Computer),
        };

        Ok(Self {
            board,
            die,
            players: [Player::new("P1", PlayerKind::Human), player_two],
            active: Seat::One,
            game_over: false,
        })
    }

    /// Roll the die for the active player's turn.
    pub fn roll_die(&mut self) {
        self.die.roll();
    }

    /// Apply the last roll to the active player.
    ///
    /// Computes `position + last_roll`. If the candidate passes the final
    /// square the move is rejected and the position is unchanged
    /// ([`MoveOutcome::Overshot`]). Otherwise the player advances and any
    /// snake or ladder at the landing square is resolved immediately,
    /// within the same turn and before any win check.
    pub fn advance_active_player(&mut self) -> MoveOutcome {
        let roll = self.die.last_roll();
        let player = &mut self.players[self.active.index()];
        let from = player.position();
        let candidate = from + roll;

        if candidate > FINAL_SQUARE {
            return MoveOutcome::Overshot { candidate };
        }

        player.advance(roll);
        let resolved = self.board.resolve(player.position());
        player.set_position(resolved);

        MoveOutcome::Moved { from, to: resolved }
    }

    /// Re-evaluate whether the active player has won.
    ///
    /// Recomputes `position == 100` from scratch and stores the result in
    /// the terminal flag. Call exactly once per turn, immediately after
    /// [`Game::advance_active_player`] - see the module docs for the
    /// sequence contract.
    pub fn check_win(&mut self) -> bool {
        self.game_over = self.active_player().position() == FINAL_SQUARE;
        self.game_over
    }

    /// Pass the turn to the other player.
    ///
    /// No-op once the game is over: the winner remains active.
    pub fn switch_turn(&mut self) {
        if !self.game_over {
            self.active = self.active.other();
        }
    }

    /// The seat whose turn is being resolved.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// The player whose turn is being resolved (the winner, once over).
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// The player in the given seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Mutable access to a player, for direct position overrides.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// The board, shared read-only with renderers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The most recent die roll (0 before the first roll of the game).
    #[must_use]
    pub fn last_roll(&self) -> u32 {
        self.die.last_roll()
    }

    /// The die face count.
    #[must_use]
    pub fn die_faces(&self) -> u32 {
        self.die.faces()
    }

    /// Whether the game has reached its terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }
}

impl Default for Game {
    /// A standard game against the computer, matching the console front
    /// end's fallback when opponent selection fails.
    fn default() -> Self {
        Self::new(PlayerKind::Computer)
    }
}

/// Roll until the die shows `value`, then return.
///
/// Test helper: with a seeded die every face appears quickly, so this
/// terminates in practice long before the iteration cap.
#[cfg(test)]
fn roll_exact(game: &mut Game, value: u32) {
    for _ in 0..10_000 {
        game.roll_die();
        if game.last_roll() == value {
            return;
        }
    }
    panic!("die never showed {value}");
}
