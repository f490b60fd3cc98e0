use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::core::{GameError, GameSession, History, HistoryEntry};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to access history file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed history: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history has no snapshots")]
    EmptyHistory,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Serializes every checkpoint as rows of one-character symbols. The cursor is not stored.
pub fn history_to_json(history: &History) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(history.entries())?)
}

/// Loads checkpoints, positioned at the last one.
pub fn history_from_json(json: &str) -> Result<History, PersistenceError> {
    let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
    Ok(History::from_entries(entries))
}

pub fn save_history(path: impl AsRef<Path>, history: &History) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    fs::write(path, history_to_json(history)?)?;
    info!(path = %path.display(), entries = history.len(), "saved history");
    Ok(())
}

pub fn load_history(path: impl AsRef<Path>) -> Result<History, PersistenceError> {
    let path = path.as_ref();
    let history = history_from_json(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), entries = history.len(), "loaded history");
    Ok(history)
}

pub fn resume_session(path: impl AsRef<Path>) -> Result<GameSession, PersistenceError> {
    let history = load_history(path)?;
    if history.is_empty() {
        return Err(PersistenceError::EmptyHistory);
    }
    Ok(GameSession::from_history(history)?)
}
