//! The game-state engine: everything that happens in one tick, independent of
//! how the game is drawn or how input arrives.
mod collision;
mod direction;
mod food;
mod grid;
mod input;
mod snake;
use self::collision::Verdict;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, GridError, Position};
pub(crate) use self::input::InputTranslator;
use self::snake::SnakeState;
use rand::Rng;
use std::collections::HashSet;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameEngine<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: SnakeState,
    /// `None` only once food could not be placed, which also ends the game
    food: Option<Position>,
    score: u32,
    ending: Option<Ending>,
}

impl<R: Rng> GameEngine<R> {
    /// Start a new game: a one-segment snake in the middle of `grid` heading
    /// right, plus one piece of food.
    pub(crate) fn new(grid: Grid, rng: R) -> GameEngine<R> {
        let snake = SnakeState::new(grid.center(), Direction::Right);
        GameEngine::with_snake(grid, snake, rng)
    }

    fn with_snake(grid: Grid, snake: SnakeState, rng: R) -> GameEngine<R> {
        let start = snake.head();
        log::debug!(
            "New game on {}×{} grid; snake at ({}, {}) heading {}",
            grid.width(),
            grid.height(),
            start.x,
            start.y,
            snake.current_direction()
        );
        let mut engine = GameEngine {
            rng,
            grid,
            snake,
            food: None,
            score: 0,
            ending: None,
        };
        engine.place_food();
        engine
    }

    /// Advance the game by one tick.  `requested` is the direction the player
    /// most recently asked for since the previous tick, if any.
    ///
    /// If the move would be fatal, the game ends and the snake is left exactly
    /// as it was.  Once the game is over, further ticks change nothing.
    pub(crate) fn tick(&mut self, requested: Option<Direction>) -> TickOutcome {
        if let Some(ending) = self.ending {
            return TickOutcome::Over(ending);
        }
        if let Some(d) = requested {
            self.snake.request_direction(d);
        }
        let head = self.snake.tentative_head(self.snake.current_direction());
        let grew = self.food == Some(head);
        let verdict = collision::evaluate(head, self.snake.body_without_head(), self.grid);
        if let Some(ending) = Ending::from_verdict(verdict) {
            self.ending = Some(ending);
            log::info!(
                "Snake {verdict} at ({}, {}); final score {}",
                head.x,
                head.y,
                self.score
            );
            return TickOutcome::Over(ending);
        }
        self.snake.commit_move(head, grew);
        if grew {
            self.score += 1;
            self.place_food();
            log::debug!(
                "Ate food at ({}, {}); score is now {}, length {}",
                head.x,
                head.y,
                self.score,
                self.snake.len()
            );
            if let Some(ending) = self.ending {
                return TickOutcome::Over(ending);
            }
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    fn place_food(&mut self) {
        let occupied = self.snake.body().collect::<HashSet<_>>();
        match food::place(self.grid, &occupied, &mut self.rng) {
            Ok(pos) => {
                log::debug!("Placed food at ({}, {})", pos.x, pos.y);
                self.food = Some(pos);
            }
            Err(e) => {
                log::error!("Ending game: {e}");
                self.food = None;
                self.ending = Some(Ending::NoRoomForFood);
            }
        }
    }
}

impl<R> GameEngine<R> {
    pub(crate) fn status(&self) -> GameStatus {
        if self.ending.is_some() {
            GameStatus::Over
        } else {
            GameStatus::Running
        }
    }

    pub(crate) fn current_direction(&self) -> Direction {
        self.snake.current_direction()
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Return a read-only copy of everything a renderer needs
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            body: self.snake.body().collect(),
            direction: self.snake.current_direction(),
            food: self.food,
            status: self.status(),
            score: self.score,
            ending: self.ending,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum GameStatus {
    Running,
    Over,
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Ending {
    /// The snake tried to leave the grid
    WallHit,
    /// The snake ran into its own body
    SelfHit,
    /// The snake ate the last piece of food there was room for
    NoRoomForFood,
}

impl Ending {
    /// Return the ending that `verdict` brings about, or `None` if the move
    /// is safe
    fn from_verdict(verdict: Verdict) -> Option<Ending> {
        match verdict {
            Verdict::Safe => None,
            Verdict::WallHit => Some(Ending::WallHit),
            Verdict::SelfHit => Some(Ending::SelfHit),
        }
    }
}

/// What happened during a call to [`GameEngine::tick()`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum TickOutcome {
    Moved,
    Ate,
    Over(Ending),
}

/// The state of a game as of the end of a tick
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) grid: Grid,
    /// Every segment of the snake, head first
    pub(crate) body: Vec<Position>,
    pub(crate) direction: Direction,
    pub(crate) food: Option<Position>,
    pub(crate) status: GameStatus,
    pub(crate) score: u32,
    pub(crate) ending: Option<Ending>,
}

impl Snapshot {
    pub(crate) fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }
}
