use tracing::{debug, trace};

use crate::core::errors::GameError;
use crate::core::grid::{Grid, HistoryEntry};
use crate::core::history::History;
use crate::core::models::{ActionResult, Direction, MoveOutcome, UserAction, Vec2};
use crate::core::update::step;

/// One puzzle being played: the live grid, its checkpoints, and the cached actor position.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    history: History,
    actor: Vec2,
}

impl GameSession {
    /// Starts a session on `grid`, recording it as the first checkpoint.
    pub fn new(grid: Grid) -> Result<Self, GameError> {
        let actor = validate_actor(&grid)?;
        let mut history = History::new();
        history.commit(grid.snapshot());
        debug!(
            width = grid.width(),
            height = grid.height(),
            boxes = grid.count_boxes(),
            "session created"
        );
        Ok(GameSession {
            grid,
            history,
            actor,
        })
    }

    /// Resumes from saved checkpoints at the most recent one.
    ///
    /// Every checkpoint must hold exactly one player, as undo and redo can reach any of them.
    pub fn from_history(history: History) -> Result<Self, GameError> {
        for entry in history.entries() {
            validate_actor(&entry.to_grid())?;
        }
        let grid = history.current().ok_or(GameError::NoActor)?.to_grid();
        let actor = validate_actor(&grid)?;
        debug!(entries = history.len(), "session resumed");
        Ok(GameSession {
            grid,
            history,
            actor,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    #[cfg(test)]
    pub fn actor(&self) -> Vec2 {
        self.actor
    }

    pub fn is_solved(&self) -> bool {
        self.grid.count_exposed_boxes() == 0
    }

    /// Steps taken from the start along the current branch.
    pub fn move_count(&self) -> usize {
        self.history.cursor().unwrap_or(0)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn attempt_move(&mut self, dir: Direction) -> Result<MoveOutcome, GameError> {
        let outcome = step(&mut self.grid, self.actor, dir)?;
        if outcome == MoveOutcome::Blocked {
            trace!(?dir, "move blocked");
            return Ok(outcome);
        }

        self.actor = self.actor + dir.offset();
        self.history.commit(self.grid.snapshot());
        debug!(?dir, ?outcome, actor = ?self.actor, "moved");
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Result<bool, GameError> {
        let Some(entry) = self.history.peek_undo().cloned() else {
            return Ok(false);
        };
        self.apply(&entry)?;
        self.history.undo();
        debug!(cursor = ?self.history.cursor(), "undo");
        Ok(true)
    }

    pub fn redo(&mut self) -> Result<bool, GameError> {
        let Some(entry) = self.history.peek_redo().cloned() else {
            return Ok(false);
        };
        self.apply(&entry)?;
        self.history.redo();
        debug!(cursor = ?self.history.cursor(), "redo");
        Ok(true)
    }

    /// Returns to the starting grid as a new, undoable checkpoint.
    pub fn restart(&mut self) -> Result<bool, GameError> {
        let Some(start) = self.history.first().cloned() else {
            return Ok(false);
        };
        if start == self.grid.snapshot() {
            return Ok(false);
        }
        self.apply(&start)?;
        self.history.commit(start);
        debug!("restarted");
        Ok(true)
    }

    pub fn perform(&mut self, action: UserAction) -> Result<ActionResult, GameError> {
        let result = match action {
            UserAction::Move(dir) => match self.attempt_move(dir)? {
                MoveOutcome::Blocked => ActionResult::NoChange,
                outcome => ActionResult::Moved(outcome),
            },
            UserAction::Undo => {
                if self.undo()? {
                    ActionResult::Undone
                } else {
                    ActionResult::NoChange
                }
            }
            UserAction::Redo => {
                if self.redo()? {
                    ActionResult::Redone
                } else {
                    ActionResult::NoChange
                }
            }
        };
        Ok(result)
    }

    /// Replaces the live grid with `entry`, leaving everything untouched if it is invalid.
    fn apply(&mut self, entry: &HistoryEntry) -> Result<(), GameError> {
        let actor = validate_actor(&entry.to_grid())?;
        self.grid.restore(entry);
        self.actor = actor;
        Ok(())
    }
}

fn validate_actor(grid: &Grid) -> Result<Vec2, GameError> {
    match grid.count_actors() {
        0 => Err(GameError::NoActor),
        1 => grid.find_actor(),
        n => Err(GameError::MultipleActors(n)),
    }
}
