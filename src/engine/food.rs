use super::grid::{Grid, Position};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// Choose a cell for a new piece of food.
///
/// Candidates are drawn uniformly from the grid's food region (see
/// [`Grid::food_region()`]) until one is found that is not in `occupied`.
/// After [`FOOD_PLACEMENT_ATTEMPTS`][consts::FOOD_PLACEMENT_ATTEMPTS] misses,
/// a free cell is instead chosen uniformly from an exhaustive scan of the
/// region, so a nearly-full board still terminates promptly.
///
/// # Errors
///
/// Returns `Err` if every cell in the food region is occupied.
pub(crate) fn place<R: Rng + ?Sized>(
    grid: Grid,
    occupied: &HashSet<Position>,
    rng: &mut R,
) -> Result<Position, FoodError> {
    let (xs, ys) = grid.food_region();
    if xs.is_empty() || ys.is_empty() {
        return Err(FoodError::NoFreeCell);
    }
    for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Position::new(rng.random_range(xs.clone()), rng.random_range(ys.clone()));
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }
    ys.flat_map(|y| xs.clone().map(move |x| Position::new(x, y)))
        .filter(|p| !occupied.contains(p))
        .choose(rng)
        .ok_or(FoodError::NoFreeCell)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum FoodError {
    #[error("no free cell left to place food in")]
    NoFreeCell,
}
