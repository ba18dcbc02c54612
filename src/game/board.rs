use crate::consts;
use crate::engine::{Direction, Ending, Position, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect, Size},
    style::Style,
    widgets::{Block, Widget},
};

/// Draws the playing field: a bordered box the size of the grid containing
/// the snake & the food
impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = Size {
            width: self.grid.width().saturating_add(2),
            height: self.grid.height().saturating_add(2),
        };
        let block_area = center_rect(area, size);
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &pos in self.body.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(pos) = self.food {
            canvas.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(head) = self.head() {
            if matches!(self.ending, Some(Ending::WallHit | Ending::SelfHit)) {
                canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw_cell(head, head_symbol(self.direction), consts::SNAKE_STYLE);
            }
        }
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` at grid position `pos`.  Positions that fall outside the
    /// canvas are skipped.
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Ok(x) = u16::try_from(pos.x) else {
            return;
        };
        let Ok(y) = u16::try_from(pos.y) else {
            return;
        };
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameStatus, Grid};
    use pretty_assertions::assert_eq;

    fn snapshot() -> Snapshot {
        Snapshot {
            grid: Grid::new(6, 4).unwrap(),
            body: vec![Position::new(2, 1), Position::new(1, 1)],
            direction: Direction::Right,
            food: Some(Position::new(4, 2)),
            status: GameStatus::Running,
            score: 1,
            ending: None,
        }
    }

    #[test]
    fn render_running() {
        let area = Rect::new(0, 0, 8, 6);
        let mut buffer = Buffer::empty(area);
        snapshot().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──────┐",
            "│      │",
            "│ O<   │",
            "│    @ │",
            "│      │",
            "└──────┘",
        ]);
        expected.set_style(Rect::new(2, 2, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(5, 3, 1, 1), consts::FOOD_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn render_centered() {
        let area = Rect::new(0, 0, 12, 8);
        let mut buffer = Buffer::empty(area);
        let mut snap = snapshot();
        snap.body = vec![Position::new(0, 0), Position::new(0, 1)];
        snap.direction = Direction::Up;
        snap.food = Some(Position::new(5, 3));
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "            ",
            "  ┌──────┐  ",
            "  │v     │  ",
            "  │O     │  ",
            "  │      │  ",
            "  │     @│  ",
            "  └──────┘  ",
            "            ",
        ]);
        expected.set_style(Rect::new(3, 2, 1, 2), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(8, 5, 1, 1), consts::FOOD_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn render_crash() {
        let area = Rect::new(0, 0, 8, 6);
        let mut buffer = Buffer::empty(area);
        let mut snap = snapshot();
        snap.body = vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)];
        snap.direction = Direction::Left;
        snap.status = GameStatus::Over;
        snap.ending = Some(Ending::WallHit);
        snap.food = Some(Position::new(3, 1));
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──────┐",
            "│      │",
            "│   @  │",
            "│×OO   │",
            "│      │",
            "└──────┘",
        ]);
        expected.set_style(Rect::new(1, 3, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(2, 3, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(4, 2, 1, 1), consts::FOOD_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn out_of_bounds_cells_are_skipped() {
        let area = Rect::new(0, 0, 8, 6);
        let mut buffer = Buffer::empty(area);
        let mut snap = snapshot();
        snap.body = vec![Position::new(6, 1), Position::new(-1, 1)];
        snap.food = None;
        snap.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "┌──────┐",
            "│      │",
            "│      │",
            "│      │",
            "│      │",
            "└──────┘",
        ]);
        assert_eq!(buffer, expected);
    }
}
