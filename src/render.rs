//! Projects game state onto a [`Screen`].
//!
//! Screen layout, 1-indexed:
//!
//! ```text
//! row 1            +------...------+
//! row 2            |Score: N    T.T|
//! row 3            +------...------+
//! rows 4..4+h      |  board cells  |
//! row h+4          +------...------+
//! ```
//!
//! Every glyph write is preceded by an absolute move.

use std::io;
use std::time::Duration;

use crate::screen::Screen;
use crate::snake::{Direction, Snake};
use crate::{Coords, TermInt};

const SCORE_TAB_HEIGHT: i32 = 1;
// Top border, score tab, score tab border.
const BOARD_TOP: i32 = 1 + SCORE_TAB_HEIGHT + 1 + 1;
// Side border.
const BOARD_LEFT: i32 = 2;
const SCORE_ROW: TermInt = 2;
const SCORE_COL: TermInt = 2;

pub const SNAKE_BODY_CHAR: char = '█';
pub const APPLE_CHAR: char = 'O';
pub const EMPTY_CHAR: char = ' ';

/// Everything a full frame shows.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    pub snake: &'a Snake,
    pub heading: Direction,
    pub apple: Coords,
    pub score: u64,
    pub elapsed: Duration,
}

pub struct Renderer {
    width: u16,
    height: u16,
    apple: Option<Coords>,
    // First column of the time text last drawn.
    time_col: usize,
}

impl Renderer {
    pub fn new(width: u16, height: u16) -> Self {
        Renderer { width, height, apple: None, time_col: SCORE_COL as usize + width as usize }
    }

    /// Terminal position of a board cell.
    pub fn cell_position(&self, (x, y): Coords) -> (TermInt, TermInt) {
        debug_assert!(x >= 0 && y >= 0, "cell ({x}, {y}) is off the board");
        ((y + BOARD_TOP) as TermInt, (x + BOARD_LEFT) as TermInt)
    }

    /// Row just below the bottom border, where the cursor rests between frames.
    pub fn park_row(&self) -> TermInt {
        self.height + BOARD_TOP as TermInt + 1
    }

    pub fn full_frame<S: Screen + ?Sized>(&mut self, screen: &mut S, frame: &Frame) -> io::Result<()> {
        screen.erase_display()?;
        self.apple = None;

        self.draw_borders(screen)?;
        self.draw_time(screen, frame.elapsed)?;
        self.draw_score(screen, frame.score)?;
        self.draw_snake(screen, frame.snake, frame.heading)?;
        self.draw_apple(screen, frame.apple)?;

        self.park(screen)
    }

    pub fn draw_borders<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        let right = self.width + 2;
        let separator = 1 + SCORE_TAB_HEIGHT as TermInt + 1;
        let bottom = self.park_row() - 1;

        let edge: String = std::iter::once('+')
            .chain(std::iter::repeat('-').take(self.width as usize))
            .chain(std::iter::once('+'))
            .collect();

        for row in [1, separator, bottom] {
            screen.move_to(row, 1)?;
            screen.put_str(&edge)?;
        }

        for row in (2..bottom).filter(|&row| row != separator) {
            screen.move_to(row, 1)?;
            screen.put_char('|')?;
            screen.move_to(row, right)?;
            screen.put_char('|')?;
        }

        Ok(())
    }

    /// Left-aligned, cut short so it stops one column before the time text.
    pub fn draw_score<S: Screen + ?Sized>(&mut self, screen: &mut S, score: u64) -> io::Result<()> {
        let room = self.time_col.saturating_sub(SCORE_COL as usize + 1);
        let text: String = format!("Score: {}", score).chars().take(room).collect();

        screen.move_to(SCORE_ROW, SCORE_COL)?;
        screen.put_str(&text)
    }

    /// Right-aligned against the right border and clipped to the board width.
    ///
    /// The column just left of the text is blanked so a longer time pushes
    /// the score back instead of running into it.
    pub fn draw_time<S: Screen + ?Sized>(&mut self, screen: &mut S, elapsed: Duration) -> io::Result<()> {
        let text: String = format_elapsed(elapsed).chars().take(self.width as usize).collect();
        let end = SCORE_COL as usize + self.width as usize;
        let col = end - text.len();
        self.time_col = col;

        if col > SCORE_COL as usize {
            screen.move_to(SCORE_ROW, (col - 1) as TermInt)?;
            screen.put_char(EMPTY_CHAR)?;
        } else {
            screen.move_to(SCORE_ROW, col as TermInt)?;
        }
        screen.put_str(&text)
    }

    pub fn draw_snake<S: Screen + ?Sized>(&mut self, screen: &mut S, snake: &Snake, heading: Direction) -> io::Result<()> {
        for pos in snake.body() {
            self.put_at(screen, *pos, SNAKE_BODY_CHAR)?;
        }

        self.put_at(screen, snake.head(), heading.head_char())
    }

    /// Steady-state move: the head advances and, unless the snake grew, the
    /// tail cell is vacated.
    pub fn draw_snake_update<S: Screen + ?Sized>(
        &mut self,
        screen: &mut S,
        heading: Direction,
        new_head: Coords,
        old_head: Coords,
        old_tail: Option<Coords>,
    ) -> io::Result<()> {
        self.put_at(screen, new_head, heading.head_char())?;
        self.put_at(screen, old_head, SNAKE_BODY_CHAR)?;

        if let Some(old_tail_pos) = old_tail {
            self.put_at(screen, old_tail_pos, EMPTY_CHAR)?;
        }

        Ok(())
    }

    /// Erases the last apple drawn, if any, and draws the new one.
    pub fn draw_apple<S: Screen + ?Sized>(&mut self, screen: &mut S, new_apple: Coords) -> io::Result<()> {
        if let Some(old_apple) = self.apple.take() {
            self.put_at(screen, old_apple, EMPTY_CHAR)?;
        }

        self.put_at(screen, new_apple, APPLE_CHAR)?;
        self.apple = Some(new_apple);
        Ok(())
    }

    pub fn park<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        screen.move_to(self.park_row(), 1)?;
        screen.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put_at<S: Screen + ?Sized>(&self, screen: &mut S, pos: Coords, ch: char) -> io::Result<()> {
        let (row, col) = self.cell_position(pos);
        screen.move_to(row, col)?;
        screen.put_char(ch)
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}
