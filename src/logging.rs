use tracing::Level;

pub fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

/// Installs the global fmt subscriber, printing to stderr.
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install the log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG", Level::WARN), Level::DEBUG);
        assert_eq!(parse_log_level("error", Level::WARN), Level::ERROR);
        assert_eq!(parse_log_level("loud", Level::WARN), Level::WARN);
    }
}
