//! Terminal output channel.
//!
//! [`Screen`] is the only surface the renderer draws through. Positions are
//! absolute and 1-indexed, matching the ANSI `CUP` sequence, so nothing ever
//! depends on where the terminal cursor happened to be left.

use std::fmt;
use std::io::{self, Write};

use crossterm::{cursor, style::Print, terminal, Command, QueueableCommand};

use crate::TermInt;

pub trait Screen {
    fn move_to(&mut self, row: TermInt, col: TermInt) -> io::Result<()>;
    fn erase_display(&mut self) -> io::Result<()>;
    fn put_char(&mut self, ch: char) -> io::Result<()>;
    fn put_str(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Control sequences the game emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    MoveTo { row: TermInt, col: TermInt },
    EraseDisplay,
    HideCursor,
    ShowCursor,
}

impl Command for Escape {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match *self {
            // crossterm counts from zero
            Escape::MoveTo { row, col } => {
                cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)).write_ansi(f)
            }
            Escape::EraseDisplay => terminal::Clear(terminal::ClearType::All).write_ansi(f),
            Escape::HideCursor => cursor::Hide.write_ansi(f),
            Escape::ShowCursor => cursor::Show.write_ansi(f),
        }
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        match *self {
            Escape::MoveTo { row, col } => {
                cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)).execute_winapi()
            }
            Escape::EraseDisplay => terminal::Clear(terminal::ClearType::All).execute_winapi(),
            Escape::HideCursor => cursor::Hide.execute_winapi(),
            Escape::ShowCursor => cursor::Show.execute_winapi(),
        }
    }
}

/// Queues escape sequences and glyphs onto any writer; nothing reaches the
/// terminal until [`Screen::flush`].
pub struct AnsiScreen<W: Write> {
    out: W,
}

impl<W: Write> AnsiScreen<W> {
    pub fn new(out: W) -> Self {
        AnsiScreen { out }
    }

    pub fn queue(&mut self, escape: Escape) -> io::Result<()> {
        self.out.queue(escape)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for AnsiScreen<W> {
    fn move_to(&mut self, row: TermInt, col: TermInt) -> io::Result<()> {
        self.queue(Escape::MoveTo { row, col })
    }

    fn erase_display(&mut self) -> io::Result<()> {
        self.queue(Escape::EraseDisplay)
    }

    fn put_char(&mut self, ch: char) -> io::Result<()> {
        self.out.queue(Print(ch))?;
        Ok(())
    }

    fn put_str(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
