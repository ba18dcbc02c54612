mod board;
use crate::app::{Globals, Screen};
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::engine::{Ending, GameEngine, GameStatus, InputTranslator, TickOutcome};
use crate::menu::DifficultyMenu;
use crate::util::get_display_area;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::time::{Duration, Instant};

/// The game screen: runs the engine on a fixed tick and feeds it the player's
/// key presses
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: GameEngine<R>,
    input: InputTranslator,
    globals: Globals,
    paused: bool,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        Game {
            engine: GameEngine::new(globals.grid, rng),
            input: InputTranslator::new(),
            globals,
            paused: false,
            next_tick: None,
        }
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it.  While the game is paused or over, this blocks
    /// until an event arrives.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let period = self.period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        match self.engine.tick(self.input.take()) {
            TickOutcome::Moved => (),
            TickOutcome::Ate => log::debug!("Score: {}", self.engine.score()),
            TickOutcome::Over(ending) => log::info!(
                "Game over on {} difficulty ({}); score {}",
                self.difficulty(),
                ending_message(ending),
                self.engine.score()
            ),
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.globals.config.difficulty
    }

    fn period(&self) -> Duration {
        self.globals.config.tick_periods.get(self.difficulty())
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.running() {
                self.pause();
            }
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if cmd == Command::Quit {
            return Some(Screen::Quit);
        }
        if self.running() {
            let heading = self.engine.current_direction();
            if !self.input.handle_command(cmd, heading) && matches!(cmd, Command::P | Command::Esc)
            {
                self.pause();
            }
        } else if self.paused {
            match cmd {
                Command::P | Command::Esc | Command::Enter => self.resume(),
                Command::R => return Some(self.restart()),
                Command::M => return Some(self.main_menu()),
                Command::Q => return Some(Screen::Quit),
                _ => (),
            }
        } else {
            match cmd {
                Command::R => return Some(self.restart()),
                Command::M => return Some(self.main_menu()),
                Command::Q => return Some(Screen::Quit),
                _ => (),
            }
        }
        None
    }

    fn running(&self) -> bool {
        !self.paused && self.engine.status() == GameStatus::Running
    }

    fn pause(&mut self) {
        self.paused = true;
        self.input.clear();
        self.next_tick = None;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn restart(&self) -> Screen {
        log::info!("Restarting on {} difficulty", self.difficulty());
        Screen::Game(Game::new(self.globals.clone()))
    }

    fn main_menu(&self) -> Screen {
        Screen::Menu(DifficultyMenu::new(self.globals.clone()))
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        let snapshot = self.engine.snapshot();
        Line::styled(
            format!(
                " Score: {}   Difficulty: {}",
                snapshot.score,
                self.difficulty()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        (&snapshot).render(board_area, buf);

        if self.paused {
            Line::from(" PAUSED").render(msg1_area, buf);
            key_menu(&[("Resume", "p"), ("Restart", "r"), ("Menu", "m"), ("Quit", "q")])
                .render(msg2_area, buf);
        } else if let Some(ending) = snapshot.ending {
            Line::from(format!(" GAME OVER: {}", ending_message(ending))).render(msg1_area, buf);
            key_menu(&[("Restart", "r"), ("Menu", "m"), ("Quit", "q")]).render(msg2_area, buf);
        } else {
            key_menu(&[("Pause", "p"), ("Quit", "Ctrl-C")]).render(msg2_area, buf);
        }
    }
}

/// Build a line of the form " Label (key) | Label (key) | ..."
fn key_menu(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::from(" ");
    for (i, &(label, key)) in items.iter().enumerate() {
        if i > 0 {
            line.push_span(" | ");
        }
        line.push_span(label);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

fn ending_message(ending: Ending) -> &'static str {
    match ending {
        Ending::WallHit => "the snake hit the wall",
        Ending::SelfHit => "the snake ran into itself",
        Ending::NoRoomForFood => "no room left for food",
    }
}
