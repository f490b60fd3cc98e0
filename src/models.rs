use crate::core::{ActionResult, GameSession};

pub struct GameRenderState<'a> {
    pub session: &'a GameSession,
    /// `None` once a saved history is loaded, since the file does not record which level it was.
    pub level: Option<usize>,
    pub level_count: usize,
    pub won: bool,
    pub last_result: Option<ActionResult>,
    pub message: Option<String>,
    pub error: Option<String>,
}
