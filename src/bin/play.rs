//! Console front end for the Snakes and Ladders engine.
//!
//! All I/O lives here: opponent selection, roll prompts, board printing,
//! and the win announcement. The engine itself never touches stdin or
//! stdout.

use std::io::{self, BufRead, Write};

use snakes_ladders::{render_board, Game, MoveOutcome, PlayerKind};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Welcome to my Snakes and Ladders game!")?;
    writeln!(
        output,
        "Press 1 to play against a human. Press 2 to play against a computer."
    )?;
    output.flush()?;

    let mut game = Game::new(read_opponent(&mut input, &mut output)?);

    while !game.is_over() {
        play_turn(&mut game, &mut input, &mut output)?;
    }

    Ok(())
}

/// Read the opponent selection: `1` for a human, `2` for a computer.
///
/// Anything else falls back to a computer opponent with a notice.
fn read_opponent(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<PlayerKind> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    match line.trim() {
        "1" => Ok(PlayerKind::Human),
        "2" => Ok(PlayerKind::Computer),
        _ => {
            writeln!(
                output,
                "Incorrect input. 1 or 2 should have been entered. Defaulting to a Computer Player."
            )?;
            Ok(PlayerKind::Computer)
        }
    }
}

/// Resolve one full turn: roll, move, print, win-check or turn switch.
fn play_turn(game: &mut Game, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    if game.active_player().is_computer() {
        writeln!(output, "Computer is rolling")?;
        writeln!(output, "...")?;
    } else {
        write!(
            output,
            "Player {} press <Enter> to roll.",
            game.active_player().name()
        )?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }
    game.roll_die();

    writeln!(
        output,
        "{} rolled a {}",
        game.active_player().name(),
        game.last_roll()
    )?;
    writeln!(output)?;

    if let MoveOutcome::Overshot { .. } = game.advance_active_player() {
        writeln!(
            output,
            "{} must land on 100 to win. Try again next turn.",
            game.active_player().name()
        )?;
    }

    write!(output, "{}", render_board(game))?;

    if game.check_win() {
        writeln!(output, "{} won!", game.active_player().name())?;
    } else {
        game.switch_turn();
    }

    Ok(())
}
