use super::grid::{Grid, Position};
use std::fmt;

/// The result of judging where the snake's head is about to go
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Verdict {
    Safe,
    /// The head would leave the grid
    WallHit,
    /// The head would land on another part of the snake
    SelfHit,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Safe => "safe",
            Verdict::WallHit => "hit the wall",
            Verdict::SelfHit => "ran into itself",
        };
        f.pad(s)
    }
}

/// Judge a candidate head position.
///
/// `body` is the snake as it is *before* the move, minus the current head.
/// The tail is judged as still being there even though it would move out of
/// the way on a non-growing tick, so chasing one's own tail into the cell it
/// is vacating is fatal.
pub(crate) fn evaluate<I>(head: Position, body: I, grid: Grid) -> Verdict
where
    I: IntoIterator<Item = Position>,
{
    if !grid.contains(head) {
        Verdict::WallHit
    } else if body.into_iter().any(|p| p == head) {
        Verdict::SelfHit
    } else {
        Verdict::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NO_BODY: [Position; 0] = [];

    fn grid() -> Grid {
        Grid::new(20, 10).unwrap()
    }

    #[rstest]
    #[case(Position::new(-1, 5))]
    #[case(Position::new(20, 5))]
    #[case(Position::new(5, -1))]
    #[case(Position::new(5, 10))]
    #[case(Position::new(-1, -1))]
    #[case(Position::new(20, 10))]
    fn outside_is_wall_hit(#[case] head: Position) {
        assert_eq!(evaluate(head, NO_BODY, grid()), Verdict::WallHit);
    }

    #[rstest]
    #[case(Position::new(0, 0))]
    #[case(Position::new(19, 0))]
    #[case(Position::new(0, 9))]
    #[case(Position::new(19, 9))]
    #[case(Position::new(10, 5))]
    fn inside_is_safe(#[case] head: Position) {
        assert_eq!(evaluate(head, NO_BODY, grid()), Verdict::Safe);
    }

    #[test]
    fn every_cell_is_judged_by_bounds_alone() {
        let grid = grid();
        for x in -2..22 {
            for y in -2..12 {
                let pos = Position::new(x, y);
                let inside = (0..20).contains(&x) && (0..10).contains(&y);
                assert_eq!(
                    evaluate(pos, NO_BODY, grid) == Verdict::WallHit,
                    !inside,
                    "at {pos:?}"
                );
            }
        }
    }

    #[test]
    fn body_hit() {
        let body = [Position::new(4, 5), Position::new(4, 6), Position::new(5, 6)];
        assert_eq!(
            evaluate(Position::new(4, 6), body, grid()),
            Verdict::SelfHit
        );
    }

    #[test]
    fn vacating_tail_is_still_fatal() {
        // A 2×2 loop: head at (5,5) heading down, tail at (5,6)
        let body = [Position::new(4, 5), Position::new(4, 6), Position::new(5, 6)];
        assert_eq!(
            evaluate(Position::new(5, 6), body, grid()),
            Verdict::SelfHit
        );
    }

    #[test]
    fn wall_beats_body() {
        let body = [Position::new(-1, 5)];
        assert_eq!(
            evaluate(Position::new(-1, 5), body, grid()),
            Verdict::WallHit
        );
    }
}
