/// Consistency failures of the puzzle core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid cell symbol {0:?}")]
    InvalidSymbol(char),

    #[error("position ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i32, row: i32 },

    #[error("grid has no player")]
    NoActor,

    #[error("grid has {0} players, expected exactly one")]
    MultipleActors(usize),
}
