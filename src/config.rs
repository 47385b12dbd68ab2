//! Game configuration.
//!
//! The only choice the stock game exposes is whether the second
//! player is a human or the computer; everything else (six-faced die,
//! the four standard links) is a default. [`GameConfig`] keeps those
//! defaults but lets callers override them - and inject an RNG seed for
//! deterministic play - without touching turn logic.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Link};
use crate::die::DEFAULT_FACES;
use crate::player::PlayerKind;

/// Construction-time configuration for a [`Game`](crate::Game).
///
/// ## Example
///
/// ```
/// use snakes_ladders::{Game, GameConfig, PlayerKind};
///
/// let config = GameConfig::new(PlayerKind::Computer)
///     .with_die_faces(6)
///     .with_seed(42);
/// let game = Game::with_config(config).unwrap();
/// assert_eq!(game.player(snakes_ladders::Seat::Two).name(), "CP");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who controls the second player.
    pub opponent: PlayerKind,
    /// Die face count. Must be at least 1.
    pub die_faces: u32,
    /// Snake/ladder links, in the order labels are assigned.
    pub links: Vec<Link>,
    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Configuration for the standard game against the given opponent.
    #[must_use]
    pub fn new(opponent: PlayerKind) -> Self {
        Self {
            opponent,
            die_faces: DEFAULT_FACES,
            links: Board::STANDARD_LINKS.to_vec(),
            seed: None,
        }
    }

    /// Override the die face count.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    /// Replace the link set.
    #[must_use]
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    /// Fix the RNG seed for reproducible rolls.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
