#[cfg(not(unix))]
compile_error!("termsnake reads the keyboard through termios and only runs on Unix");

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use termsnake::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use termsnake::term::TermSession;
use termsnake::{Game, GameConfig};

/// Log file path; logging is off when unset, since stdout is the board.
const LOG_ENV: &str = "SNAKE_LOG";

#[derive(Parser)]
#[command(name = "termsnake", about = "Snake in the terminal. Arrow keys steer, Ctrl+C quits.")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    // Reject a bad board before the terminal is touched.
    let config = GameConfig::new(args.width, args.height)?;
    let mut game = Game::new(config)?;

    let mut session = TermSession::start().context("could not put the terminal into raw mode")?;
    let (keyboard, screen) = session.split();
    let ending = game.run(keyboard, screen)?;

    // The last frame stays on screen; the cursor is already parked below it.
    drop(session);
    log::info!("session over: {:?}, score {}", ending, game.score());
    Ok(())
}

fn init_logging() -> Result<()> {
    let Some(path) = env::var_os(LOG_ENV).map(PathBuf::from) else {
        return Ok(());
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    WriteLogger::init(LevelFilter::Debug, log_config, create_log_file(&path)?)?;
    Ok(())
}

fn create_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("could not create log file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_path_is_reported() {
        let path = env::temp_dir().join("termsnake-no-such-dir").join("snake.log");

        let err = create_log_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("could not create log file"));
        assert!(err.to_string().contains("termsnake-no-such-dir"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn log_file_is_created() {
        let path = env::temp_dir().join(format!("termsnake-{}.log", std::process::id()));

        assert!(create_log_file(&path).is_ok());
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
