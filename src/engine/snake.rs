use super::direction::Direction;
use super::grid::Position;
use std::collections::VecDeque;

/// The snake's body and heading.
///
/// The body is stored as the head plus the segments trailing it, most recent
/// first, so that the head always exists without an `Option` dance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeState {
    /// The position of the snake's head
    head: Position,

    /// The positions of the remaining segments, from just behind the head to
    /// the tail
    trailing: VecDeque<Position>,

    /// The last accepted heading
    direction: Direction,
}

impl SnakeState {
    /// Create a single-segment snake at `head` facing `direction`
    pub(crate) fn new(head: Position, direction: Direction) -> SnakeState {
        SnakeState {
            head,
            trailing: VecDeque::new(),
            direction,
        }
    }

    /// Create a snake from its head and the segments following it in order
    /// from neck to tail
    #[cfg(test)]
    pub(crate) fn from_segments<I>(head: Position, trailing: I, direction: Direction) -> SnakeState
    where
        I: IntoIterator<Item = Position>,
    {
        SnakeState {
            head,
            trailing: trailing.into_iter().collect(),
            direction,
        }
    }

    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Iterate over every segment of the snake, head first
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.trailing.iter().copied())
    }

    /// Iterate over every segment except the head, tail last.  This still
    /// includes the tail even if the tail is about to move away.
    pub(crate) fn body_without_head(&self) -> impl Iterator<Item = Position> + '_ {
        self.trailing.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.trailing.len() + 1
    }

    pub(crate) fn current_direction(&self) -> Direction {
        self.direction
    }

    /// Turn to face `direction` unless that would mean doing a U-turn, in
    /// which case the request is ignored.
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Return where the head would end up after moving one cell in
    /// `direction`
    pub(crate) fn tentative_head(&self, direction: Direction) -> Position {
        self.head.step(direction)
    }

    /// Move the head to `new_head`.  Unless `grew` is true, the tail segment
    /// is dropped so that the length stays the same.
    pub(crate) fn commit_move(&mut self, new_head: Position, grew: bool) {
        let old_head = std::mem::replace(&mut self.head, new_head);
        self.trailing.push_front(old_head);
        if !grew {
            let _ = self.trailing.pop_back();
        }
    }
}
