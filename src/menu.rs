use crate::app::{Globals, Screen};
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::game::Game;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The opening screen, on which the player picks a difficulty
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DifficultyMenu {
    globals: Globals,
    selection: Difficulty,
}

impl DifficultyMenu {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (Difficulty::LENGTH as u16) + 2 /* for border */;
    const WIDTH: u16 = 30;

    pub(crate) fn new(globals: Globals) -> DifficultyMenu {
        let selection = globals.config.difficulty;
        DifficultyMenu { globals, selection }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q | Command::Esc => return Some(Screen::Quit),
            Command::E => return Some(self.play(Difficulty::Easy)),
            Command::N => return Some(self.play(Difficulty::Normal)),
            Command::H => return Some(self.play(Difficulty::Hard)),
            Command::Enter => return Some(self.play(self.selection)),
            Command::Up => {
                if let Some(d) = self.selection.prev() {
                    self.selection = d;
                }
            }
            Command::Down => {
                if let Some(d) = self.selection.next() {
                    self.selection = d;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(Difficulty::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(Difficulty::max),
            Command::Home => self.selection = Difficulty::min(),
            Command::End => self.selection = Difficulty::max(),
            _ => (),
        }
        None
    }

    fn play(&mut self, difficulty: Difficulty) -> Screen {
        log::info!("Starting new game on {difficulty} difficulty");
        self.globals.config.difficulty = difficulty;
        Screen::Game(Game::new(self.globals.clone()))
    }

    /// Render a difficulty as a menu line
    fn to_line(&self, difficulty: Difficulty) -> Line<'static> {
        let selected = difficulty == self.selection;
        let ms = self.globals.config.tick_periods.get(difficulty).as_millis();
        let line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(format!("{difficulty:6} (")),
            Span::styled(String::from(difficulty.hotkey()), consts::KEY_STYLE),
            Span::raw(format!(")  {ms:>4} ms")),
        ]);
        if selected {
            line.style(consts::MENU_SELECTION_STYLE)
        } else {
            line
        }
    }
}

impl Widget for &DifficultyMenu {
    /*
     * ┌ Choose difficulty: ────────┐
     * │   Easy   (e)   200 ms      │
     * │ » Normal (n)   100 ms      │
     * │   Hard   (h)    50 ms      │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [title_area, menu_area, help_area] =
            Layout::vertical([1, DifficultyMenu::HEIGHT, 1])
                .flex(Flex::Center)
                .spacing(1)
                .areas(display);
        Line::from("S N A K E").centered().render(title_area, buf);

        let [menu_area] = Layout::horizontal([DifficultyMenu::WIDTH])
            .flex(Flex::Center)
            .areas(menu_area);
        let block = Block::bordered()
            .title(" Choose difficulty: ")
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(menu_area);
        block.render(menu_area, buf);
        for (difficulty, row) in Difficulty::iter().zip(inner.rows()) {
            self.to_line(difficulty).render(row, buf);
        }

        Line::from_iter([
            Span::raw("Move with "),
            Span::styled("←↓↑→", consts::KEY_STYLE),
            Span::raw(" or "),
            Span::styled("wasd", consts::KEY_STYLE),
            Span::raw(", quit with "),
            Span::styled("q", consts::KEY_STYLE),
        ])
        .centered()
        .render(help_area, buf);
    }
}
