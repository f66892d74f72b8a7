use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Log level per verbosity step; anything past the end is DEBUG
const LOG_LEVELS: [Level; 4] = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG];

pub fn level_for_verbosity(verbosity: u8) -> Level {
    LOG_LEVELS.get(usize::from(verbosity)).copied().unwrap_or(Level::DEBUG)
}

/// Install the stderr subscriber; `RUST_LOG` takes precedence over `verbosity`
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for_verbosity(verbosity)).into())
        .from_env_lossy();

    // A subscriber may already be installed (tests), which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), Level::ERROR);
        assert_eq!(level_for_verbosity(1), Level::WARN);
        assert_eq!(level_for_verbosity(2), Level::INFO);
        assert_eq!(level_for_verbosity(3), Level::DEBUG);
        assert_eq!(level_for_verbosity(200), Level::DEBUG);
    }
}
