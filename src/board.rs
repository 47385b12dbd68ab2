//! Board topology: the serpentine grid and the snake/ladder link table.
//!
//! ## Layout
//!
//! The 100 squares are arranged into a 10×10 grid using a serpentine
//! (boustrophedon) traversal: the bottom row holds squares 1–10 left to
//! right, the row above holds 11–20 right to left, and so on, ending with
//! square 100 at the top-left cell.
//!
//! ## Links
//!
//! A link relocates a player who lands on its source square to its
//! destination square. Links whose destination is below their source are
//! **drops** (snakes); links whose destination is above are **climbs**
//! (ladders). The board is a pure lookup service: it never mutates after
//! construction and carries no turn state, so it can be shared read-only
//! with any number of observers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A square number on the board, valid in `1..=100`.
pub type Square = u32;

/// Grid side length. The board is always `BOARD_SIDE` × `BOARD_SIDE`.
pub const BOARD_SIDE: usize = 10;

/// The final square. Landing here exactly wins the game.
pub const FINAL_SQUARE: Square = (BOARD_SIDE * BOARD_SIDE) as Square;

/// The square every player starts on.
pub const START_SQUARE: Square = 1;

/// Whether a link moves the player backward or forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Snake: destination below source.
    Drop,
    /// Ladder: destination above source.
    Climb,
}

/// A directed shortcut between two squares.
///
/// The kind is not stored; it is derived from the ordering of the
/// endpoints, so a link can never disagree with its own classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Square that triggers the relocation when landed on.
    pub source: Square,
    /// Square the player is relocated to.
    pub dest: Square,
}

impl Link {
    /// Create a new link.
    #[must_use]
    pub const fn new(source: Square, dest: Square) -> Self {
        Self { source, dest }
    }

    /// Classify this link as a drop or a climb.
    ///
    /// Only meaningful for validated links (`source != dest`); a
    /// degenerate self-link is reported as a climb but is rejected by
    /// [`Board::with_links`] before it can exist on a board.
    #[must_use]
    pub const fn kind(self) -> LinkKind {
        if self.source > self.dest {
            LinkKind::Drop
        } else {
            LinkKind::Climb
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            LinkKind::Drop => write!(f, "snake {} -> {}", self.source, self.dest),
            LinkKind::Climb => write!(f, "ladder {} -> {}", self.source, self.dest),
        }
    }
}

/// The immutable board: serpentine grid plus link table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: [[Square; BOARD_SIDE]; BOARD_SIDE],
    /// Links in insertion order, for stable iteration (rendering labels).
    links: Vec<Link>,
    /// Source-to-destination index for O(1) resolution.
    table: FxHashMap<Square, Square>,
}

impl Board {
    /// The standard link set: two snakes, then two ladders.
    pub const STANDARD_LINKS: [Link; 4] = [
        Link::new(37, 19),
        Link::new(73, 51),
        Link::new(7, 25),
        Link::new(64, 86),
    ];

    /// Build the standard board with its four fixed links.
    #[must_use]
    pub fn standard() -> Self {
        // The standard link set is valid by construction.
        match Self::with_links(Self::STANDARD_LINKS) {
            Ok(board) => board,
            Err(_) => unreachable!("standard links are valid"),
        }
    }

    /// Build a board with a caller-supplied link set.
    ///
    /// Validation:
    /// - every endpoint lies in `1..=100`
    /// - no link points to its own source
    /// - no two links share a source square
    ///
    /// A destination may be shared by multiple links, and a link's
    /// destination may itself be another link's source; only the square a
    /// player *lands* on is resolved, and resolution is applied once.
    pub fn with_links(links: impl IntoIterator<Item = Link>) -> Result<Self, ConfigError> {
        let links: Vec<Link> = links.into_iter().collect();
        let mut table = FxHashMap::default();

        for link in &links {
            for endpoint in [link.source, link.dest] {
                if !(START_SQUARE..=FINAL_SQUARE).contains(&endpoint) {
                    return Err(ConfigError::LinkOutOfRange(endpoint));
                }
            }
            if link.source == link.dest {
                return Err(ConfigError::SelfLink(link.source));
            }
            if table.insert(link.source, link.dest).is_some() {
                return Err(ConfigError::DuplicateLinkSource(link.source));
            }
        }

        Ok(Self {
            grid: build_grid(),
            links,
            table,
        })
    }

    /// Follow the link at `square`, if any.
    ///
    /// Returns the link destination when `square` is a drop or climb
    /// source, otherwise returns `square` unchanged. O(1).
    #[must_use]
    pub fn resolve(&self, square: Square) -> Square {
        self.table.get(&square).copied().unwrap_or(square)
    }

    /// Check whether `square` is the source of any link.
    #[must_use]
    pub fn is_link_source(&self, square: Square) -> bool {
        self.table.contains_key(&square)
    }

    /// All links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.links.iter().copied()
    }

    /// Drops (snakes) in insertion order.
    pub fn drops(&self) -> impl Iterator<Item = Link> + '_ {
        self.links().filter(|link| link.kind() == LinkKind::Drop)
    }

    /// Climbs (ladders) in insertion order.
    pub fn climbs(&self) -> impl Iterator<Item = Link> + '_ {
        self.links().filter(|link| link.kind() == LinkKind::Climb)
    }

    /// The full grid of square numbers.
    ///
    /// Row 0 is the top of the board: square 100 is at `[0][0]` and
    /// square 1 at `[BOARD_SIDE - 1][0]`.
    #[must_use]
    pub fn grid(&self) -> &[[Square; BOARD_SIDE]; BOARD_SIDE] {
        &self.grid
    }
}

/// Fill the grid with squares 1..=100 in serpentine order.
///
/// Rows are filled bottom-up; the bottom row runs left to right and each
/// row above reverses direction, which puts the final square at the
/// top-left cell.
fn build_grid() -> [[Square; BOARD_SIDE]; BOARD_SIDE] {
    let mut grid = [[0; BOARD_SIDE]; BOARD_SIDE];
    let mut next: Square = START_SQUARE;

    for (height, row) in (0..BOARD_SIDE).rev().enumerate() {
        if height % 2 == 0 {
            for col in 0..BOARD_SIDE {
                grid[row][col] = next;
                next += 1;
            }
        } else {
            for col in (0..BOARD_SIDE).rev() {
                grid[row][col] = next;
                next += 1;
            }
        }
    }

    grid
}
