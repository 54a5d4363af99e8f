//! Raw byte input and arrow-key decoding.

use std::io;

use crate::snake::Direction;

/// Lead byte of an arrow-key sequence (`ESC [ A` .. `ESC [ D`).
pub const ESCAPE: u8 = 0x1b;
/// Ctrl-C, delivered as a plain byte once the terminal is fully raw.
pub const INTERRUPT: u8 = 0x03;

/// Byte-at-a-time keyboard access.
pub trait InputSource {
    /// Whether [`read_byte`](Self::read_byte) would return without blocking.
    fn has_pending_byte(&mut self) -> io::Result<bool>;
    /// Blocks until a byte is available.
    fn read_byte(&mut self) -> io::Result<u8>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Decode {
    #[default]
    Idle,
    Lead,
    Code,
}

/// Heading chosen for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Steering {
    pub heading: Direction,
    pub interrupted: bool,
}

/// Turns buffered keystrokes into a heading.
///
/// The decoder state outlives a drain, so an escape sequence split across two
/// ticks is picked up where it stopped instead of blocking the tick on it.
#[derive(Debug, Default)]
pub struct DirectionController {
    decode: Decode,
}

impl DirectionController {
    pub fn new() -> Self {
        DirectionController::default()
    }

    /// Consumes every byte that is already buffered.
    ///
    /// Each candidate is checked against `start`, not against earlier
    /// candidates of the same drain, so two quick turns can never add up to a
    /// reversal. The last accepted candidate wins.
    pub fn drain<I: InputSource + ?Sized>(&mut self, start: Direction, input: &mut I) -> io::Result<Steering> {
        let mut steering = Steering { heading: start, interrupted: false };

        while input.has_pending_byte()? {
            let byte = input.read_byte()?;

            self.decode = match self.decode {
                Decode::Idle => {
                    match byte {
                        ESCAPE => Decode::Lead,
                        INTERRUPT => {
                            steering.interrupted = true;
                            Decode::Idle
                        }
                        _ => Decode::Idle,
                    }
                }
                // Marker byte, taken as is.
                Decode::Lead => Decode::Code,
                Decode::Code => {
                    match Direction::from_arrow_code(byte) {
                        Some(candidate) if !candidate.is_reverse_of(start) => steering.heading = candidate,
                        _ => {}
                    }
                    Decode::Idle
                }
            };
        }

        Ok(steering)
    }

    /// True while half of an escape sequence is still outstanding.
    pub fn mid_sequence(&self) -> bool {
        self.decode != Decode::Idle
    }
}
