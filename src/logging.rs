use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

/// Installs the global logger.
///
/// With a log file, terminal and file output go through simplelog at `level`.
/// Otherwise env_logger is used and `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        Some(path) => {
            CombinedLogger::init(vec![
                TermLogger::new(
                    level,
                    Config::default(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(level, Config::default(), File::create(path)?),
            ])?;
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .try_init()?;
        }
    }
    Ok(())
}
