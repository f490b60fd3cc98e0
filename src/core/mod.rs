mod errors;
mod grid;
mod history;
mod model_helpers;
mod models;
mod session;
mod update;

pub use errors::GameError;
pub use grid::{Grid, HistoryEntry};
pub use history::History;
#[cfg(test)]
pub use models::Vec2;
pub use models::{ActionResult, Cell, Direction, MoveOutcome, UserAction};
pub use session::GameSession;
