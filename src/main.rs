//! Omok terminal front end
//!
//! Plays against the random opponent on stdin/stdout, runs self-play
//! matches, and lists the game catalog.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use omok::{find_winning_line, AiEngine, GameKind, GameState, GameStatus, MoveError, Player};

/// Omok - five in a row against a naive computer opponent
#[derive(Parser, Debug)]
#[command(name = "omok")]
#[command(about = "Omok (Gomoku) on a 15x15 board", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter, overrides RUST_LOG (e.g. "debug", "omok=trace")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the computer
    Play {
        /// Seed for the opponent, random if omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer move first
        #[arg(long)]
        ai_first: bool,
    },

    /// Computer against computer
    Selfplay {
        /// Seed for the first game; later games use seed + n
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of games
        #[arg(long, default_value = "1")]
        games: u32,
    },

    /// List available games
    Games,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Command::Play { seed, ai_first } => play(seed, ai_first),
        Command::Selfplay { seed, games } => selfplay(seed, games),
        Command::Games => {
            list_games();
            Ok(())
        }
    }
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn list_games() {
    for kind in GameKind::iter() {
        let info = kind.info();
        let marker = if kind.is_playable() { "playable" } else { "coming soon" };
        println!("{:<7} {} ({}) [{}]", info.id, info.name, info.native_name, marker);
        println!("        {}", info.description);
    }
}

fn play(seed: Option<u64>, ai_first: bool) -> Result<()> {
    let mut engine = match seed {
        Some(seed) => AiEngine::with_seed(seed),
        None => AiEngine::new(),
    };
    let human = if ai_first { Player::PlayerTwo } else { Player::PlayerOne };
    info!(?human, ?seed, "starting single-player game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = GameState::new();

    while !game.is_over() {
        if game.current_player() != human {
            game = game.play_ai_move(engine.rng_mut())?;
            if let Some(pos) = game.last_move() {
                println!("Computer plays {pos}");
            }
            continue;
        }

        println!("{}", game.board());
        print!("{human} [{}] > ", human.stone().symbol());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        match parse_command(&line) {
            Input::Quit => return Ok(()),
            Input::Undo => {
                // Take back the computer's reply as well as our own move
                game = game.undo(2);
            }
            Input::Move(row, col) => match game.play_at(human, row, col) {
                Ok(next) => game = next,
                Err(err) => println!("{err}"),
            },
            Input::Invalid => println!("Enter `row col`, `undo` or `quit`"),
        }
    }

    println!("{}", game.board());
    report(&game);
    Ok(())
}

enum Input {
    Move(i32, i32),
    Undo,
    Quit,
    Invalid,
}

fn parse_command(line: &str) -> Input {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("quit" | "q"), None, None) => Input::Quit,
        (Some("undo" | "u"), None, None) => Input::Undo,
        (Some(row), Some(col), None) => match (row.parse::<i32>(), col.parse::<i32>()) {
            (Ok(row), Ok(col)) => Input::Move(row, col),
            _ => Input::Invalid,
        },
        _ => Input::Invalid,
    }
}

fn selfplay(seed: u64, games: u32) -> Result<()> {
    let mut tally = [0u32; 3];

    for n in 0..games {
        let game = play_out(seed.wrapping_add(n as u64))?;
        debug!(game = n, moves = game.history().len(), status = ?game.status(), "self-play finished");

        println!("Game {} ({} moves)", n + 1, game.history().len());
        println!("{}", game.board());
        report(&game);

        match game.status() {
            GameStatus::Won(Player::PlayerOne) => tally[0] += 1,
            GameStatus::Won(Player::PlayerTwo) => tally[1] += 1,
            _ => tally[2] += 1,
        }
    }

    println!(
        "Player One: {}  Player Two: {}  Draws: {}",
        tally[0], tally[1], tally[2]
    );
    Ok(())
}

/// Computer plays both sides until the game ends.
fn play_out(seed: u64) -> Result<GameState, MoveError> {
    let mut engine = AiEngine::with_seed(seed);
    let mut game = GameState::new();
    while !game.is_over() {
        game = game.play_ai_move(engine.rng_mut())?;
    }
    Ok(game)
}

fn report(game: &GameState) {
    match game.status() {
        GameStatus::Won(winner) => {
            println!("{winner} wins!");
            if let Some(line) = game.last_move().and_then(|pos| find_winning_line(game.board(), pos)) {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                println!("Winning line: {}", cells.join(" "));
            }
        }
        GameStatus::Draw => println!("Draw - the board is full"),
        GameStatus::InProgress => println!("Game abandoned"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("7 7"), Input::Move(7, 7)));
        assert!(matches!(parse_command("  3   14 "), Input::Move(3, 14)));
        assert!(matches!(parse_command("-1 20"), Input::Move(-1, 20)));
        assert!(matches!(parse_command("undo"), Input::Undo));
        assert!(matches!(parse_command("q"), Input::Quit));
        assert!(matches!(parse_command("7"), Input::Invalid));
        assert!(matches!(parse_command("a b"), Input::Invalid));
        assert!(matches!(parse_command("1 2 3"), Input::Invalid));
    }

    #[test]
    fn test_play_out_reaches_terminal_state() {
        for seed in 0..20 {
            let game = play_out(seed).unwrap();
            assert!(game.is_over());
            match game.status() {
                GameStatus::Won(winner) => assert_eq!(game.current_player(), winner),
                GameStatus::Draw => assert_eq!(game.board().empty_cells().count(), 0),
                GameStatus::InProgress => unreachable!(),
            }
        }
    }
}
