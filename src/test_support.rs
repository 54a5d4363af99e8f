//! In-memory stand-ins for the terminal.

use std::collections::VecDeque;
use std::io;

use crate::input::InputSource;
use crate::screen::Screen;
use crate::TermInt;

/// Fixed-size character grid that interprets [`Screen`] calls the way a
/// terminal would. Writes past the right edge are dropped.
pub struct GridScreen {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    cursor: (usize, usize),
    pub flushes: usize,
    pub writes: usize,
}

impl GridScreen {
    pub fn new(rows: usize, cols: usize) -> Self {
        GridScreen { rows, cols, cells: vec![' '; rows * cols], cursor: (1, 1), flushes: 0, writes: 0 }
    }

    /// Character at 1-indexed `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row - 1) * self.cols + (col - 1)]
    }

    pub fn line(&self, row: usize) -> String {
        (1..=self.cols).map(|col| self.at(row, col)).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        (1..=self.rows).map(|row| self.line(row).trim_end().to_string()).collect()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }
}

impl Screen for GridScreen {
    fn move_to(&mut self, row: TermInt, col: TermInt) -> io::Result<()> {
        self.cursor = (row as usize, col as usize);
        Ok(())
    }

    fn erase_display(&mut self) -> io::Result<()> {
        self.cells.fill(' ');
        Ok(())
    }

    fn put_char(&mut self, ch: char) -> io::Result<()> {
        let (row, col) = self.cursor;
        assert!(row >= 1 && col >= 1, "cursor at ({row}, {col}) is off screen");
        if row <= self.rows && col <= self.cols {
            self.cells[(row - 1) * self.cols + (col - 1)] = ch;
        }
        self.cursor.1 += 1;
        self.writes += 1;
        Ok(())
    }

    fn put_str(&mut self, text: &str) -> io::Result<()> {
        text.chars().try_for_each(|ch| self.put_char(ch))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Bytes already sitting in the input buffer.
pub struct ScriptedInput {
    bytes: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(bytes: &[u8]) -> Self {
        ScriptedInput { bytes: bytes.iter().copied().collect() }
    }

    pub fn empty() -> Self {
        ScriptedInput::new(&[])
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn has_pending_byte(&mut self) -> io::Result<bool> {
        Ok(!self.bytes.is_empty())
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        self.bytes
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "scripted input would block"))
    }
}
