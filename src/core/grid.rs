use serde::{Deserialize, Serialize};

use crate::core::errors::GameError;
use crate::core::models::{Cell, Vec2};

/// Rows of cells. Rows may differ in length to model irregular level shapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// An immutable copy of a grid's contents at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get(&self, pos: Vec2) -> Option<Cell> {
        let (col, row) = self.index_of(pos)?;
        Some(self.rows[row][col])
    }

    pub fn at(&self, pos: Vec2) -> Result<Cell, GameError> {
        self.get(pos).ok_or(GameError::OutOfBounds {
            col: pos.x,
            row: pos.y,
        })
    }

    /// Unconditional write. Keeping the cell model legal is up to the caller.
    pub fn set(&mut self, pos: Vec2, cell: Cell) -> Result<(), GameError> {
        let (col, row) = self.index_of(pos).ok_or(GameError::OutOfBounds {
            col: pos.x,
            row: pos.y,
        })?;
        self.rows[row][col] = cell;
        Ok(())
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Vec2::new(x as i32, y as i32), cell))
        })
    }

    /// First player cell in row-major order.
    pub fn find_actor(&self) -> Result<Vec2, GameError> {
        self.iter_cells()
            .find(|(_, cell)| cell.has_player())
            .map(|(pos, _)| pos)
            .ok_or(GameError::NoActor)
    }

    pub fn count_actors(&self) -> usize {
        self.count_matching(|cell| cell.has_player())
    }

    /// Boxes that are not yet on a target.
    pub fn count_exposed_boxes(&self) -> usize {
        self.count_matching(|cell| cell == Cell::Box)
    }

    pub fn count_boxes_on_target(&self) -> usize {
        self.count_matching(|cell| cell == Cell::BoxOnTarget)
    }

    pub fn count_boxes(&self) -> usize {
        self.count_matching(Cell::has_box)
    }

    pub fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            rows: self.rows.clone(),
        }
    }

    pub fn restore(&mut self, entry: &HistoryEntry) {
        self.rows = entry.rows.clone();
    }

    fn count_matching(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| predicate(cell))
            .count()
    }

    fn index_of(&self, pos: Vec2) -> Option<(usize, usize)> {
        let col = usize::try_from(pos.x).ok()?;
        let row = usize::try_from(pos.y).ok()?;
        let cells = self.rows.get(row)?;
        if col < cells.len() {
            Some((col, row))
        } else {
            None
        }
    }
}

impl HistoryEntry {
    pub fn to_grid(&self) -> Grid {
        Grid::new(self.rows.clone())
    }

    #[cfg(test)]
    fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
