use super::direction::Direction;
use std::ops::Range;
use thiserror::Error;

/// A cell coordinate.  Coordinates are signed so that a head that has just
/// left the grid can still be represented and judged.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return the position one cell away from `self` in `direction`
    pub(crate) fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The fixed bounds of the playing field.  Every position in
/// `[0, width) × [0, height)` is playable; anything outside is a wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Food is only ever placed at least this many columns away from the left
    /// & right edges.
    const FOOD_MARGIN_X: i32 = 2;

    /// Food is only ever placed at least this many rows below the top edge ...
    const FOOD_MARGIN_TOP: i32 = 1;

    /// ... and this many rows above the bottom edge
    const FOOD_MARGIN_BOTTOM: i32 = 2;

    /// Create a grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the grid is too small for its food region to hold at
    /// least two cells, in which case food could not be placed next to a
    /// freshly-spawned snake.
    pub(crate) fn new(width: u16, height: u16) -> Result<Grid, GridError> {
        let grid = Grid { width, height };
        let (xs, ys) = grid.food_region();
        let cells = xs.len().saturating_mul(ys.len());
        if cells < 2 {
            Err(GridError::TooSmall { width, height })
        } else {
            Ok(grid)
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Return the cell at which a new snake is spawned
    pub(crate) fn center(self) -> Position {
        Position::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Test whether `pos` lies inside the playable area
    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..i32::from(self.width)).contains(&pos.x) && (0..i32::from(self.height)).contains(&pos.y)
    }

    /// Return the column & row ranges within which food may be placed.  The
    /// margins are deliberately asymmetric: two columns on either side, one
    /// row at the top, and two rows at the bottom.
    pub(crate) fn food_region(self) -> (Range<i32>, Range<i32>) {
        let xs = Self::FOOD_MARGIN_X..(i32::from(self.width) - Self::FOOD_MARGIN_X);
        let ys = Self::FOOD_MARGIN_TOP..(i32::from(self.height) - Self::FOOD_MARGIN_BOTTOM);
        (xs, ys)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("a {width}×{height} grid leaves no room for food")]
    TooSmall { width: u16, height: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(19, 9), true)]
    #[case(Position::new(10, 5), true)]
    #[case(Position::new(-1, 5), false)]
    #[case(Position::new(20, 5), false)]
    #[case(Position::new(10, -1), false)]
    #[case(Position::new(10, 10), false)]
    #[case(Position::new(-1, -1), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.contains(pos), inside);
    }

    #[test]
    fn center() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.center(), Position::new(10, 5));
    }

    #[test]
    fn food_region() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.food_region(), (2..18, 1..8));
    }

    #[rstest]
    #[case(4, 10)]
    #[case(20, 3)]
    #[case(5, 4)]
    #[case(0, 0)]
    fn too_small(#[case] width: u16, #[case] height: u16) {
        assert_eq!(
            Grid::new(width, height),
            Err(GridError::TooSmall { width, height })
        );
    }

    #[test]
    fn smallest_grid() {
        // Food regions of 2×1 and 1×2 cells
        assert!(Grid::new(6, 4).is_ok());
        assert!(Grid::new(5, 5).is_ok());
    }

    #[test]
    fn step() {
        let pos = Position::new(0, 5);
        assert_eq!(pos.step(Direction::Left), Position::new(-1, 5));
        assert_eq!(pos.step(Direction::Up), Position::new(0, 4));
    }
}
