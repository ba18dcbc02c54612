use super::direction::Direction;
use crate::command::Command;

/// Turns player commands into direction requests for the next tick.
///
/// Only the most recent acceptable request is kept; reading it with
/// [`InputTranslator::take()`] empties the slot, so a request is applied to at
/// most one tick and stale requests never pile up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputTranslator {
    pending: Option<Direction>,
}

impl InputTranslator {
    pub(crate) fn new() -> InputTranslator {
        InputTranslator::default()
    }

    /// Map `cmd` to a direction.  Returns `None` for commands that aren't
    /// directional.
    pub(crate) fn direction_for(cmd: Command) -> Option<Direction> {
        match cmd {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Handle a player command given that the snake is currently facing
    /// `heading`.  A directional command replaces any pending request unless
    /// it asks for a U-turn, in which case it is dropped.  Returns `true` if
    /// the command was directional, whether or not it was accepted.
    ///
    /// U-turns are judged against the heading at the time of the key press,
    /// not against the pending request, so a reversing key pressed after a
    /// valid one in the same tick leaves the valid one in place.
    pub(crate) fn handle_command(&mut self, cmd: Command, heading: Direction) -> bool {
        let Some(direction) = Self::direction_for(cmd) else {
            return false;
        };
        if direction != heading.reverse() {
            self.pending = Some(direction);
        }
        true
    }

    /// Return the pending request, if any, and clear it
    pub(crate) fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    /// Drop any pending request
    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }
}
