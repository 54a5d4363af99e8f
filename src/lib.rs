//! Terminal snake: a fixed-tick engine that redraws only the cells that change.
//!
//! The engine talks to the terminal through two narrow traits,
//! [`screen::Screen`] for output and [`input::InputSource`] for raw bytes, so
//! everything but [`term`] runs against in-memory fakes in tests.

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod screen;
pub mod snake;
pub mod term;

#[cfg(test)]
mod test_support;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Ending, Game, Status};

/// Board-local cell, `(x, y)` with the origin at the top left.
///
/// Signed so a head that steps off the board is still representable.
pub type Coords = (i32, i32);

/// Terminal row/column, 1-indexed.
pub type TermInt = u16;
