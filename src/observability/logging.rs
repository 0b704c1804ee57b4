use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};
use crate::error::ConfigError;

/// Installs the global tracing subscriber described by `config`. A subscriber
/// that is already installed is left in place.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|err| ConfigError::Invalid {
        key: "LOG_LEVEL".to_string(),
        reason: err.to_string(),
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(err) = installed {
        debug!(error = %err, "tracing subscriber not installed; keeping the existing one");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;
    use crate::config::{Config, LogFormat};

    #[test]
    fn second_init_is_a_no_op() {
        let config = Config {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        };

        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn rejects_unparseable_level() {
        let config = Config {
            log_level: "info,palace=loud".to_string(),
            log_format: LogFormat::Json,
        };

        assert!(init(&config).is_err());
    }
}
