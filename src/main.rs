//! Alligator Chess - terminal driver
//!
//! Plays one human (Monkey) against the scripted Alligator over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use alligator_chess::{Board, GameConfig, GameState, Move, Position, Session, SessionError, SIZE};
use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

const RULES: &str = "\
Alligator Chess
  - Played on a 3x3 board: you are Monkey (M, bottom row), the computer is Alligator (A, top row).
  - Each side starts with 3 pieces.
  - Pieces only move forward, one row at a time, onto an empty cell.
  - Pieces capture only diagonally forward.
  - You win when:
      * one of your pieces reaches the far edge,
      * every enemy piece has been captured, or
      * the enemy has no legal move left, whoever is on move.
  - If neither side can move, Alligator wins.";

const HELP: &str = "\
Commands:
  r c r c     move the piece on (r, c) to (r, c), e.g. `2 0 1 0`
  select r c  show where the piece on (r, c) can go
  moves       list your legal moves
  state       print the game state as JSON
  reset       start over
  rules       print the rules
  quit        leave";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, delay_ms } => run_play(config, delay_ms).await,
        Command::Rules => {
            println!("{}", RULES);
            Ok(())
        }
    }
}

/// Installs the tracing subscriber. `RUST_LOG` wins over the config filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Move(Move),
    Select(Position),
    Moves,
    State,
    Reset,
    Rules,
    Help,
    Quit,
}

/// Parses a line of player input.
fn parse_input(line: &str) -> Result<Input, String> {
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    // Any integer is accepted; huge ones saturate and stay off the board.
    let coords = |words: &[&str]| -> Result<Vec<i8>, String> {
        words
            .iter()
            .map(|w| {
                w.parse::<i64>()
                    .map(|n| n.clamp(i64::from(i8::MIN), i64::from(i8::MAX)) as i8)
                    .map_err(|_| format!("`{}` is not a coordinate", w))
            })
            .collect()
    };

    match words.as_slice() {
        [] => Err("Empty input".to_string()),
        ["quit" | "exit" | "q"] => Ok(Input::Quit),
        ["reset" | "new"] => Ok(Input::Reset),
        ["moves"] => Ok(Input::Moves),
        ["state"] => Ok(Input::State),
        ["rules"] => Ok(Input::Rules),
        ["help" | "?"] => Ok(Input::Help),
        ["select", rest @ ..] => match coords(rest)?.as_slice() {
            [row, col] => Ok(Input::Select(Position::new(*row, *col))),
            _ => Err("select takes a row and a column".to_string()),
        },
        numbers => match coords(numbers)?.as_slice() {
            [r1, c1, r2, c2] => Ok(Input::Move(Move::new(
                Position::new(*r1, *c1),
                Position::new(*r2, *c2),
            ))),
            _ => Err("A move is four numbers: from-row from-col to-row to-col".to_string()),
        },
    }
}

/// Renders the board as a labelled grid.
fn render(board: &Board, highlighted: &[Position]) -> String {
    let mut out = String::from("    0 1 2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("  {}", row));
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row as i8, col as i8);
            let symbol = if cell.side().is_none() && highlighted.contains(&pos) {
                '*'
            } else {
                cell.symbol()
            };
            out.push(' ');
            out.push(symbol);
        }
        if row + 1 < SIZE {
            out.push('\n');
        }
    }
    out
}

fn print_status(state: &GameState) {
    match state.outcome() {
        Some(outcome) => println!("Game over: {}. Type `reset` to play again.", outcome),
        None => println!("{} to move.", state.to_move()),
    }
}

/// Runs the interactive game loop.
#[instrument(skip_all, fields(config = %config_path.display()))]
async fn run_play(config_path: PathBuf, delay_ms: Option<u64>) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(delay_ms) = delay_ms {
        config = config.with_opponent_delay_ms(delay_ms);
    }
    init_tracing(config.log_filter());
    info!(delay_ms = *config.opponent_delay_ms(), "Starting game");

    let mut session = Session::new(&config);
    println!("{}\n", RULES);
    println!("{}\n", HELP);
    println!("{}", render(session.state().board(), &[]));
    print_status(session.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        debug!(?input, "Player input");

        match input {
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Rules => println!("{}", RULES),
            Input::State => println!("{}", serde_json::to_string_pretty(session.state())?),
            Input::Reset => {
                let state = session.reset();
                println!("{}", render(state.board(), &[]));
                print_status(state);
            }
            Input::Moves => {
                let moves = session.state().legal_moves();
                if moves.is_empty() {
                    println!("No legal moves.");
                }
                for mv in moves {
                    println!("  {} {} {} {}", mv.from.row, mv.from.col, mv.to.row, mv.to.col);
                }
            }
            Input::Select(pos) => {
                if session.select(pos) {
                    println!("{}", render(session.state().board(), &session.highlighted()));
                } else {
                    println!("No Monkey of yours to select at {}.", pos);
                }
            }
            Input::Move(mv) => {
                match session.human_move(mv) {
                    Ok(state) => println!("{}", render(state.board(), &[])),
                    Err(SessionError::Move(err)) => {
                        println!("Move rejected: {}", err);
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                }
                if session.has_pending_reply() {
                    println!("Alligator is thinking...");
                    if let Some(state) = session.wait_for_opponent().await? {
                        println!("{}", render(state.board(), &[]));
                    }
                }
                print_status(session.state());
            }
        }
    }

    info!("Leaving game");
    Ok(())
}
