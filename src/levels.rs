// Tiles: '#' wall, '@' player, '$' box, '.' target,
// '*' box on target, '+' player on target, ' ' floor.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::core::{Cell, GameError, Grid};

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] io::Error),

    #[error("level {0} not found")]
    LevelNotFound(usize),

    #[error("level has no rows")]
    EmptyLevel,

    #[error("level pack contains no levels")]
    EmptyPack,

    #[error("invalid symbol {symbol:?} at line {line}, column {column}")]
    InvalidSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[error(transparent)]
    Game(#[from] GameError),
}

pub const BUILTIN_LEVELS: &str = r#"
Level 1
#####
#@$.#
#####

Level 2
#####
#@$ #
#  .#
#####

Level 3
  #######
  #  .  #
  #  $  #
### $# ###
#   @   #
###   ###
  #  .  #
  #######

Level 4
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########

Level 5
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#;

/// Parses a single level. Blank lines are skipped and trailing whitespace is trimmed,
/// so rows keep their own lengths.
pub fn parse_level(s: &str) -> Result<Grid, LevelError> {
    let mut grid: Vec<Vec<Cell>> = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(j, ch)| {
                Cell::from_symbol(ch).map_err(|_| LevelError::InvalidSymbol {
                    symbol: ch,
                    line: i + 1,
                    column: j + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(row);
    }

    if grid.is_empty() {
        return Err(LevelError::EmptyLevel);
    }
    Ok(Grid::new(grid))
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for c in row {
            result.push(c.symbol());
        }
        result.push('\n');
    }
    result
}

/// Levels introduced by `Level <n>` header lines, each ending at a blank line.
#[derive(Debug, Clone)]
pub struct LevelPack {
    levels: Vec<String>,
}

impl LevelPack {
    pub fn from_text(contents: &str) -> Self {
        let mut levels = Vec::new();
        let mut current: Option<String> = None;

        for line in contents.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with("Level") {
                levels.extend(current.take().filter(|l| !l.is_empty()));
                current = Some(String::new());
                continue;
            }
            let Some(level) = current.as_mut() else {
                continue;
            };
            if trimmed.is_empty() {
                if !level.is_empty() {
                    levels.extend(current.take());
                }
                continue;
            }
            level.push_str(line.trim_end());
            level.push('\n');
        }
        levels.extend(current.take().filter(|l| !l.is_empty()));

        LevelPack { levels }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let pack = LevelPack::from_text(&contents);
        if pack.is_empty() {
            return Err(LevelError::EmptyPack);
        }
        info!(path = %path.display(), levels = pack.len(), "loaded level pack");
        Ok(pack)
    }

    pub fn builtin() -> Self {
        LevelPack::from_text(BUILTIN_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// 1-based, like the level headers.
    pub fn level(&self, number: usize) -> Result<Grid, LevelError> {
        let text = number
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .ok_or(LevelError::LevelNotFound(number))?;
        parse_level(text)
    }
}
