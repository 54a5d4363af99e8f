use std::thread::sleep;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::collision::{classify, Bounds, Collision};
use crate::config::GameConfig;
use crate::error::Result;
use crate::input::{DirectionController, InputSource};
use crate::render::{Frame, Renderer};
use crate::screen::Screen;
use crate::snake::{Direction::{self, *}, Snake};
use crate::Coords;

pub const INITIAL_SNAKE_LENGTH: usize = 3;
const APPLE_DRAWS: usize = 64;

/// Why a game stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Wall,
    Bitten,
    Interrupted,
    /// The snake covers the whole board, no room left for an apple.
    BoardFilled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(Ending),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Eaten {
    /// `None` once the board is full.
    pub new_apple: Option<Coords>,
    pub score: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords>, eaten: Option<Eaten> },
    Crashed(Ending),
}

pub struct Game<R = ThreadRng> {
    config: GameConfig,
    bounds: Bounds,
    snake: Snake,
    heading: Direction,
    apple: Coords,
    score: u64,
    ticks: u64,
    status: Status,
    rng: R,
    controller: DirectionController,
    renderer: Renderer,
}

impl Game<ThreadRng> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Game::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let bounds = Bounds::new(config.width, config.height);
        let mut game = Game {
            config,
            bounds,
            snake: Snake::new((0, 0), 1, Right),
            heading: Right,
            apple: (0, 0),
            score: 0,
            ticks: 0,
            status: Status::Running,
            rng,
            controller: DirectionController::new(),
            renderer: Renderer::new(config.width, config.height),
        };
        game.reset();
        Ok(game)
    }

    /// Starting position: a short snake centred on the board heading right,
    /// and one apple.
    pub fn reset(&mut self) {
        let center = (self.bounds.width / 2, self.bounds.height / 2);

        self.score = 0;
        self.ticks = 0;
        self.heading = Right;
        self.status = Status::Running;
        self.controller = DirectionController::new();
        self.snake = Snake::new(center, INITIAL_SNAKE_LENGTH, Right);

        // A validated board always has the cell ahead of the head free.
        self.apple = spawn_apple(&mut self.rng, self.bounds, &self.snake).unwrap_or((center.0 + 1, center.1));
    }

    /// Resets the state and draws it from scratch.
    pub fn initialize<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Result<()> {
        self.reset();
        self.redraw(screen)
    }

    pub fn redraw<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Result<()> {
        let frame = Frame {
            snake: &self.snake,
            heading: self.heading,
            apple: self.apple,
            score: self.score,
            elapsed: self.elapsed(),
        };
        self.renderer.full_frame(screen, &frame)?;
        Ok(())
    }

    /// Plays until the game ends, one tick per `tick_rate`.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<Ending>
    where
        I: InputSource + ?Sized,
        S: Screen + ?Sized,
    {
        self.initialize(screen)?;
        info!("game started on a {}x{} board", self.config.width, self.config.height);

        let mut ticker = Ticker::new(self.config.tick_rate);
        loop {
            ticker.wait();

            if let Status::GameOver(ending) = self.tick(input, screen)? {
                info!("game over ({:?}) after {} ticks, score {}", ending, self.ticks, self.score);
                return Ok(ending);
            }
        }
    }

    /// One cycle: drain input, move, draw what changed.
    pub fn tick<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<Status>
    where
        I: InputSource + ?Sized,
        S: Screen + ?Sized,
    {
        if self.status != Status::Running {
            return Ok(self.status);
        }

        let steering = self.controller.drain(self.heading, input)?;
        if steering.interrupted {
            self.status = Status::GameOver(Ending::Interrupted);
            return Ok(self.status);
        }

        let move_res = self.advance(steering.heading);
        if let MoveResult::Moved { new_head, old_head, old_tail, eaten } = move_res {
            if let Some(eaten) = eaten {
                if let Some(new_apple) = eaten.new_apple {
                    self.renderer.draw_apple(screen, new_apple)?;
                }
                self.renderer.draw_score(screen, eaten.score)?;
            }
            self.renderer.draw_snake_update(screen, self.heading, new_head, old_head, old_tail)?;

            self.ticks += 1;
            self.renderer.draw_time(screen, self.elapsed())?;
            self.renderer.park(screen)?;
        }

        Ok(self.status)
    }

    /// State update for one step in `heading`, no drawing.
    ///
    /// A crash leaves snake, apple and score untouched.
    pub fn advance(&mut self, heading: Direction) -> MoveResult {
        if let Status::GameOver(ending) = self.status {
            return MoveResult::Crashed(ending);
        }

        self.heading = heading;
        let old_head = self.snake.head();
        let new_head = self.snake.next_head(heading);

        match classify(new_head, &self.snake, self.apple, self.bounds) {
            Collision::OutOfBounds => self.crash(Ending::Wall),
            Collision::Snake => self.crash(Ending::Bitten),
            Collision::Food => {
                self.snake.push_head(new_head);
                self.score += self.snake.len() as u64;

                let new_apple = spawn_apple(&mut self.rng, self.bounds, &self.snake);
                match new_apple {
                    Some(apple) => {
                        debug!("apple eaten at {:?}, next one at {:?}", new_head, apple);
                        self.apple = apple;
                    }
                    None => self.status = Status::GameOver(Ending::BoardFilled),
                }

                let eaten = Eaten { new_apple, score: self.score };
                MoveResult::Moved { new_head, old_head, old_tail: None, eaten: Some(eaten) }
            }
            Collision::Empty => {
                self.snake.push_head(new_head);
                let old_tail = self.snake.pop_tail();
                MoveResult::Moved { new_head, old_head, old_tail, eaten: None }
            }
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed(&self) -> Duration {
        self.config.tick_rate * u32::try_from(self.ticks).unwrap_or(u32::MAX)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn crash(&mut self, ending: Ending) -> MoveResult {
        debug!("crashed into {:?} heading {:?}", ending, self.heading);
        self.status = Status::GameOver(ending);
        MoveResult::Crashed(ending)
    }
}

/// Uniform free cell, or `None` when the snake covers the board.
///
/// Draws at random first; a crowded board falls back to picking among the
/// free cells so the search always ends.
pub fn spawn_apple<R: Rng>(rng: &mut R, bounds: Bounds, snake: &Snake) -> Option<Coords> {
    if snake.len() >= bounds.cell_count() {
        return None;
    }

    for _ in 0..APPLE_DRAWS {
        let cell = (rng.gen_range(0..bounds.width), rng.gen_range(0..bounds.height));
        if !snake.contains(cell) {
            return Some(cell);
        }
    }

    bounds.cells().filter(|cell| !snake.contains(*cell)).choose(rng)
}

/// Fixed-rate tick boundaries on a monotonic clock.
///
/// A late tick is not made up for: the next boundary is measured from when
/// the late one actually began.
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Ticker { period, last: Instant::now() }
    }

    /// Sleeps until `period` has passed since the previous boundary.
    pub fn wait(&mut self) -> Instant {
        let deadline = self.last + self.period;
        let now = Instant::now();
        if now < deadline {
            sleep(deadline - now);
        }

        self.last = Instant::now().max(deadline);
        self.last
    }
}
