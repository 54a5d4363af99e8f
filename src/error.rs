use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("board {width}x{height} is too small, need at least {min_width}x{min_height}")]
    BoardTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("board {width}x{height} is too large, each side must be at most {max}")]
    BoardTooLarge { width: u16, height: u16, max: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
