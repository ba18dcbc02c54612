use crate::config::Config;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::engine::{Grid, GridError};
use crate::game::Game;
use crate::menu::DifficultyMenu;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Settings that stay fixed for the whole run of the program, apart from the
/// difficulty, which tracks the player's most recent choice
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) grid: Grid,
    pub(crate) config: Config,
}

impl Globals {
    pub(crate) fn new(config: Config) -> Result<Globals, GridError> {
        let grid = Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT)?;
        Ok(Globals { grid, config })
    }
}

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    /// Create the application.  If `difficulty` is given, the menu is skipped
    /// and a game at that difficulty starts immediately.
    pub(crate) fn new(mut globals: Globals, difficulty: Option<Difficulty>) -> App {
        let screen = if let Some(d) = difficulty {
            log::info!("Starting new game on {d} difficulty");
            globals.config.difficulty = d;
            Screen::Game(Game::new(globals))
        } else {
            Screen::Menu(DifficultyMenu::new(globals))
        };
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!("Exiting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Menu(ref mut menu) => menu.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Debug)]
pub(crate) enum Screen {
    Menu(DifficultyMenu),
    Game(Game),
    Quit,
}
