// Terminal Sokoban with undo/redo history.
// Controls: W/A/S/D or arrow keys move, Z undo, Y redo, R restart, K/L save/load history, Q quit.

mod console_interface;
mod core;
mod levels;
mod models;
mod persistence;
#[cfg(test)]
mod test;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use crate::core::{ActionResult, GameSession};
use crate::levels::LevelPack;
use crate::models::GameRenderState;
use crate::persistence::{resume_session, save_history};

#[derive(Parser)]
#[command(name = "pushbox")]
#[command(about = "A terminal Sokoban with undo and redo", long_about = None)]
struct Args {
    /// Level pack with `Level <n>` headers; the built-in pack is used when omitted
    #[arg(value_name = "LEVELS_FILE")]
    levels_file: Option<PathBuf>,

    /// Level number to start on (1-indexed)
    #[arg(short, long, default_value = "1")]
    level: usize,

    /// File used to save and load the move history
    #[arg(long, default_value = "pushbox_history.json")]
    history: PathBuf,

    /// Resume from the history file instead of starting the level fresh
    #[arg(long, default_value = "false")]
    resume: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let pack = match &args.levels_file {
        Some(path) => LevelPack::from_file(path)?,
        None => LevelPack::builtin(),
    };
    let session = if args.resume {
        resume_session(&args.history)?
    } else {
        GameSession::new(pack.level(args.level)?)?
    };
    info!(level = args.level, resumed = args.resume, levels = pack.len(), "starting");

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&args, &pack, session, &mut terminal);
    cleanup_terminal()?;

    if let Err(err) = &result {
        error!(error = %err, "game aborted");
    }
    result
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match log_file {
        Some(path) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(File::create(path)?))
                .with_ansi(false)
                .with_target(false)
                .compact()
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(false)
                .compact()
                .init();
        }
    }
    Ok(())
}

fn run_interactive(
    args: &Args,
    pack: &LevelPack,
    session: GameSession,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session;
    let mut level = (!args.resume).then_some(args.level);
    let mut last_result: Option<ActionResult> = None;
    let mut message: Option<String> = None;
    let mut error: Option<String> = None;

    loop {
        let won = session.is_solved();
        render_game(
            terminal,
            &GameRenderState {
                session: &session,
                level,
                level_count: pack.len(),
                won,
                last_result,
                message: message.clone(),
                error: error.clone(),
            },
        )?;

        let input = handle_input()?;
        if !matches!(input, Timeout) {
            message = None;
            error = None;
        }

        match input {
            Quit => break,
            UserAction(action) => {
                if won && matches!(action, crate::core::UserAction::Move(_)) {
                    continue;
                }
                last_result = Some(session.perform(action)?);
            }
            Restart => {
                if session.restart()? {
                    message = Some("Restarted".to_string());
                }
            }
            Save => match save_history(&args.history, session.history()) {
                Ok(()) => message = Some(format!("Saved to {}", args.history.display())),
                Err(err) => {
                    warn!(error = %err, "save failed");
                    error = Some(err.to_string());
                }
            },
            Load => match resume_session(&args.history) {
                Ok(resumed) => {
                    session = resumed;
                    level = None;
                    last_result = None;
                    message = Some(format!("Loaded {}", args.history.display()));
                }
                Err(err) => {
                    warn!(error = %err, "load failed");
                    error = Some(err.to_string());
                }
            },
            NextLevel if won => {
                let Some(current) = level else {
                    message = Some("Loaded history has no level number".to_string());
                    continue;
                };
                if current >= pack.len() {
                    message = Some("That was the last level".to_string());
                    continue;
                }
                let next = current + 1;
                session = GameSession::new(pack.level(next)?)?;
                level = Some(next);
                last_result = None;
                info!(level = next, "next level");
            }
            NextLevel | Timeout | Unknown => {}
        }
    }

    Ok(())
}
