//! Text rendering of the board.
//!
//! Pure string building; no I/O. The console front end prints the result.
//!
//! Cell precedence, highest first:
//! 1. both players on the square - `1/2`, or `1/C` against the computer
//! 2. a single player - their name
//! 3. a link square - a derived label
//! 4. the square number
//!
//! Labels are derived from the link tables in insertion order rather than
//! hardcoded per square: drop sources are `S1, S2, …` and their tails
//! `T1, T2, …`; climb bases are `L1, L2, …` and their tops `H1, H2, …`.
//! Swapping in a different link set relabels the board with no rendering
//! changes.

use rustc_hash::FxHashMap;

use crate::board::Square;
use crate::game::Game;
use crate::player::Seat;

/// Width of a cell's content; cells are right-aligned and `|`-separated.
const CELL_WIDTH: usize = 3;

/// Render the full board as a grid of `|`-separated cells.
///
/// Returns one line per row, top row first, each terminated with a
/// newline.
#[must_use]
pub fn render_board(game: &Game) -> String {
    let labels = link_labels(game);
    let player_one = game.player(Seat::One);
    let player_two = game.player(Seat::Two);
    let shared = if player_two.is_computer() { "1/C" } else { "1/2" };

    let mut out = String::new();
    for row in game.board().grid() {
        for &square in row {
            let on_one = player_one.position() == square;
            let on_two = player_two.position() == square;

            let cell = if on_one && on_two {
                shared.to_string()
            } else if on_one {
                player_one.name().to_string()
            } else if on_two {
                player_two.name().to_string()
            } else if let Some(label) = labels.get(&square) {
                label.clone()
            } else {
                square.to_string()
            };

            out.push('|');
            for _ in cell.len()..CELL_WIDTH {
                out.push(' ');
            }
            out.push_str(&cell);
        }
        out.push_str("|\n");
    }
    out
}

/// Assign ordinal labels to every link endpoint, in insertion order.
fn link_labels(game: &Game) -> FxHashMap<Square, String> {
    let mut labels = FxHashMap::default();

    for (i, link) in game.board().drops().enumerate() {
        labels.insert(link.source, format!("S{}", i + 1));
        labels.insert(link.dest, format!("T{}", i + 1));
    }
    for (i, link) in game.board().climbs().enumerate() {
        labels.insert(link.source, format!("L{}", i + 1));
        labels.insert(link.dest, format!("H{}", i + 1));
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIDE;
    use crate::config::GameConfig;
    use crate::player::PlayerKind;

    fn seeded_game(opponent: PlayerKind) -> Game {
        Game::with_config(GameConfig::new(opponent).with_seed(42)).unwrap()
    }

    /// Extract the rendered cell for a square.
    fn cell_for(game: &Game, rendered: &str, square: Square) -> String {
        for (r, row) in game.board().grid().iter().enumerate() {
            for (c, &candidate) in row.iter().enumerate() {
                if candidate == square {
                    let line = rendered.lines().nth(r).unwrap();
                    let cells: Vec<&str> = line.split('|').collect();
                    // cells[0] is the empty prefix before the first '|'.
                    return cells[c + 1].trim().to_string();
                }
            }
        }
        panic!("square {square} not on the board");
    }

    #[test]
    fn test_shape() {
        let game = seeded_game(PlayerKind::Human);
        let rendered = render_board(&game);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), BOARD_SIDE);
        for line in lines {
            assert_eq!(line.matches('|').count(), BOARD_SIDE + 1);
            assert!(line.ends_with('|'));
        }
    }

    #[test]
    fn test_derived_labels_on_standard_board() {
        let game = seeded_game(PlayerKind::Human);
        let rendered = render_board(&game);

        assert_eq!(cell_for(&game, &rendered, 37), "S1");
        assert_eq!(cell_for(&game, &rendered, 19), "T1");
        assert_eq!(cell_for(&game, &rendered, 73), "S2");
        assert_eq!(cell_for(&game, &rendered, 51), "T2");
        assert_eq!(cell_for(&game, &rendered, 7), "L1");
        assert_eq!(cell_for(&game, &rendered, 25), "H1");
        assert_eq!(cell_for(&game, &rendered, 64), "L2");
        assert_eq!(cell_for(&game, &rendered, 86), "H2");
    }

    #[test]
    fn test_plain_squares_show_their_number() {
        let game = seeded_game(PlayerKind::Human);
        let rendered = render_board(&game);

        assert_eq!(cell_for(&game, &rendered, 100), "100");
        assert_eq!(cell_for(&game, &rendered, 42), "42");
    }

    #[test]
    fn test_both_players_on_start_square() {
        let game = seeded_game(PlayerKind::Human);
        assert_eq!(cell_for(&game, &render_board(&game), 1), "1/2");

        let versus_computer = seeded_game(PlayerKind::Computer);
        assert_eq!(
            cell_for(&versus_computer, &render_board(&versus_computer), 1),
            "1/C"
        );
    }

    #[test]
    fn test_players_mask_link_labels() {
        let mut game = seeded_game(PlayerKind::Human);
        game.player_mut(Seat::One).set_position(37);
        game.player_mut(Seat::Two).set_position(25);

        let rendered = render_board(&game);
        assert_eq!(cell_for(&game, &rendered, 37), "P1");
        assert_eq!(cell_for(&game, &rendered, 25), "P2");
        // Start square is empty again.
        assert_eq!(cell_for(&game, &rendered, 1), "1");
    }

    #[test]
    fn test_labels_follow_a_custom_link_set() {
        let config = GameConfig::new(PlayerKind::Human)
            .with_links(vec![
                crate::board::Link::new(90, 2),
                crate::board::Link::new(3, 80),
            ])
            .with_seed(42);
        let game = Game::with_config(config).unwrap();
        let rendered = render_board(&game);

        assert_eq!(cell_for(&game, &rendered, 90), "S1");
        assert_eq!(cell_for(&game, &rendered, 2), "T1");
        assert_eq!(cell_for(&game, &rendered, 3), "L1");
        assert_eq!(cell_for(&game, &rendered, 80), "H1");
        // The standard board's link squares are unlabeled on this board.
        assert_eq!(cell_for(&game, &rendered, 37), "37");
    }
}
