//! The real terminal: raw mode, stdin bytes and stdout.

use std::io::{self, Stdout, stdout};
use std::os::unix::io::RawFd;

use crossterm::terminal;
use log::{info, warn};

use crate::input::InputSource;
use crate::screen::{AnsiScreen, Escape, Screen};

/// Raw mode plus hidden cursor for as long as the value lives.
///
/// Dropping it, on a normal return or while unwinding from a panic, puts the
/// terminal back the way it was found.
pub struct TermSession {
    keyboard: Keyboard,
    screen: AnsiScreen<Stdout>,
}

impl TermSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut session = TermSession { keyboard: Keyboard::new(), screen: AnsiScreen::new(stdout()) };
        // From here on a failure still restores through Drop.
        session.screen.queue(Escape::HideCursor)?;
        session.screen.flush()?;

        info!("terminal switched to raw mode");
        Ok(session)
    }

    /// Both halves at once, for handing to the game loop.
    pub fn split(&mut self) -> (&mut Keyboard, &mut AnsiScreen<Stdout>) {
        (&mut self.keyboard, &mut self.screen)
    }

    fn restore(&mut self) -> io::Result<()> {
        self.screen.queue(Escape::ShowCursor)?;
        self.screen.flush()?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => info!("terminal restored"),
            Err(err) => warn!("could not restore the terminal: {}", err),
        }
    }
}

/// Unbuffered stdin.
///
/// `std::io::Stdin` reads ahead into its own buffer, which would hide bytes
/// from `poll`, so bytes are taken straight from the descriptor one by one.
pub struct Keyboard {
    fd: RawFd,
}

impl Keyboard {
    fn new() -> Self {
        Keyboard { fd: libc::STDIN_FILENO }
    }
}

impl InputSource for Keyboard {
    fn has_pending_byte(&mut self) -> io::Result<bool> {
        let mut fds = libc::pollfd { fd: self.fd, events: libc::POLLIN, revents: 0 };

        // SAFETY: one valid pollfd, zero timeout.
        let ready = unsafe { libc::poll(&mut fds, 1, 0) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            return if err.kind() == io::ErrorKind::Interrupted { Ok(false) } else { Err(err) };
        }

        if fds.revents & libc::POLLNVAL != 0 {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "keyboard descriptor is not open"));
        }
        if fds.revents & libc::POLLERR != 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "keyboard descriptor reported an error"));
        }

        Ok(ready > 0 && fds.revents & (libc::POLLIN | libc::POLLHUP) != 0)
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = 0u8;
        loop {
            // SAFETY: reads at most one byte into a live, writable u8.
            let n = unsafe { libc::read(self.fd, (&mut byte as *mut u8).cast(), 1) };
            match n {
                1 => return Ok(byte),
                0 => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err);
                    }
                }
            }
        }
    }
}
