use std::ops::Add;

use crate::core::errors::GameError;
use crate::core::models::{Cell, Direction, Occupant, Terrain, Vec2};

impl Cell {
    pub fn from_symbol(symbol: char) -> Result<Cell, GameError> {
        Ok(match symbol {
            ' ' => Cell::Floor,
            '#' => Cell::Wall,
            '.' => Cell::Target,
            '$' => Cell::Box,
            '*' => Cell::BoxOnTarget,
            '@' => Cell::Player,
            '+' => Cell::PlayerOnTarget,
            other => return Err(GameError::InvalidSymbol(other)),
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Floor => ' ',
            Cell::Wall => '#',
            Cell::Target => '.',
            Cell::Box => '$',
            Cell::BoxOnTarget => '*',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
        }
    }

    /// The cell with its occupant stripped. Walls have no terrain.
    pub fn terrain(self) -> Option<Terrain> {
        match self {
            Cell::Wall => None,
            Cell::Floor | Cell::Box | Cell::Player => Some(Terrain::Floor),
            Cell::Target | Cell::BoxOnTarget | Cell::PlayerOnTarget => Some(Terrain::Target),
        }
    }

    pub fn occupant(self) -> Option<Occupant> {
        match self {
            Cell::Wall => None,
            Cell::Floor | Cell::Target => Some(Occupant::Empty),
            Cell::Box | Cell::BoxOnTarget => Some(Occupant::Box),
            Cell::Player | Cell::PlayerOnTarget => Some(Occupant::Player),
        }
    }

    pub fn place_occupant(terrain: Terrain, occupant: Occupant) -> Cell {
        match (terrain, occupant) {
            (Terrain::Floor, Occupant::Empty) => Cell::Floor,
            (Terrain::Floor, Occupant::Player) => Cell::Player,
            (Terrain::Floor, Occupant::Box) => Cell::Box,
            (Terrain::Target, Occupant::Empty) => Cell::Target,
            (Terrain::Target, Occupant::Player) => Cell::PlayerOnTarget,
            (Terrain::Target, Occupant::Box) => Cell::BoxOnTarget,
        }
    }

    pub fn is_empty(self) -> bool {
        self.occupant() == Some(Occupant::Empty)
    }

    pub fn has_box(self) -> bool {
        self.occupant() == Some(Occupant::Box)
    }

    pub fn has_player(self) -> bool {
        self.occupant() == Some(Occupant::Player)
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.symbol()
    }
}

impl TryFrom<char> for Cell {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Cell::from_symbol(symbol)
    }
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL_CELLS: [Cell; 7] = [
        Cell::Wall,
        Cell::Floor,
        Cell::Target,
        Cell::Box,
        Cell::BoxOnTarget,
        Cell::Player,
        Cell::PlayerOnTarget,
    ];

    #[test]
    fn symbols_map_both_ways() {
        for cell in ALL_CELLS {
            assert_eq!(Cell::from_symbol(cell.symbol()), Ok(cell));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(Cell::from_symbol('B'), Err(GameError::InvalidSymbol('B')));
        assert_eq!(Cell::try_from('&'), Err(GameError::InvalidSymbol('&')));
    }

    #[test]
    fn placing_an_occupant_keeps_terrain() {
        for cell in ALL_CELLS {
            let Some(terrain) = cell.terrain() else {
                continue;
            };
            for occupant in [Occupant::Empty, Occupant::Player, Occupant::Box] {
                let placed = Cell::place_occupant(terrain, occupant);
                assert_eq!(placed.terrain(), Some(terrain));
                assert_eq!(placed.occupant(), Some(occupant));
            }
        }
    }

    #[test]
    fn wall_has_no_terrain_or_occupant() {
        assert_eq!(Cell::Wall.terrain(), None);
        assert_eq!(Cell::Wall.occupant(), None);
        assert!(!Cell::Wall.is_empty());
    }

    #[test]
    fn vacating_a_target_leaves_a_target() {
        let terrain = Cell::PlayerOnTarget.terrain().unwrap();
        assert_eq!(Cell::place_occupant(terrain, Occupant::Empty), Cell::Target);
        let terrain = Cell::BoxOnTarget.terrain().unwrap();
        assert_eq!(Cell::place_occupant(terrain, Occupant::Player), Cell::PlayerOnTarget);
    }

    #[test]
    fn direction_offsets_are_unit_vectors() {
        assert_eq!(Direction::Up.offset(), Vec2::new(0, -1));
        assert_eq!(Direction::Down.offset(), Vec2::new(0, 1));
        assert_eq!(Direction::Left.offset(), Vec2::new(-1, 0));
        assert_eq!(Direction::Right.offset(), Vec2::new(1, 0));
        assert_eq!(Vec2::new(2, 3) + Direction::Left.offset(), Vec2::new(1, 3));
    }
}
