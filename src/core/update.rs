use crate::core::errors::GameError;
use crate::core::grid::Grid;
use crate::core::models::{Cell, Direction, MoveOutcome, Occupant, Vec2};

/// Moves the actor at `actor` one cell in `dir`, pushing a box if one is ahead.
///
/// Looks at most two cells ahead. A `Blocked` result leaves the grid untouched.
pub fn step(grid: &mut Grid, actor: Vec2, dir: Direction) -> Result<MoveOutcome, GameError> {
    let current = grid.at(actor)?;
    if !current.has_player() {
        return Err(GameError::NoActor);
    }
    let actor_terrain = current.terrain().ok_or(GameError::NoActor)?;

    let offset = dir.offset();
    let ahead = actor + offset;

    // off the edge or into a wall
    let Some(dest) = grid.get(ahead) else {
        return Ok(MoveOutcome::Blocked);
    };
    let (Some(dest_terrain), Some(dest_occupant)) = (dest.terrain(), dest.occupant()) else {
        return Ok(MoveOutcome::Blocked);
    };

    let outcome = match dest_occupant {
        Occupant::Empty => MoveOutcome::Stepped,
        Occupant::Box => {
            let beyond = ahead + offset;
            let Some(beyond_terrain) = grid
                .get(beyond)
                .filter(|cell| cell.is_empty())
                .and_then(Cell::terrain)
            else {
                return Ok(MoveOutcome::Blocked);
            };
            grid.set(beyond, Cell::place_occupant(beyond_terrain, Occupant::Box))?;
            MoveOutcome::Pushed
        }
        Occupant::Player => return Err(GameError::MultipleActors(2)),
    };

    grid.set(ahead, Cell::place_occupant(dest_terrain, Occupant::Player))?;
    grid.set(actor, Cell::place_occupant(actor_terrain, Occupant::Empty))?;

    Ok(outcome)
}
