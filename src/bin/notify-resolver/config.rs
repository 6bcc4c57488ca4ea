use anyhow::{Context, Result};
use std::env;
use tracing::Level;

#[derive(PartialEq, Eq, Debug)]
pub struct Config {
    pub log_level: Level,
    pub function_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("LOG_LEVEL").ok(),
            env::var("AWS_LAMBDA_FUNCTION_NAME").ok(),
        )
    }

    pub fn from_vars(log_level: Option<String>, function_name: Option<String>) -> Result<Self> {
        let log_level = match log_level {
            Some(level) => level
                .parse()
                .with_context(|| format!("invalid LOG_LEVEL {:?}", level))?,
            None => Level::INFO,
        };

        Ok(Self {
            log_level,
            function_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();

        assert_eq!(
            config,
            Config {
                log_level: Level::INFO,
                function_name: None,
            },
        );
    }

    #[test]
    fn test_log_level() {
        let cases = [
            ("debug", Level::DEBUG),
            ("WARN", Level::WARN),
            ("trace", Level::TRACE),
        ];

        for (raw, want) in cases {
            let config =
                Config::from_vars(Some(raw.into()), Some("notify-resolver".into())).unwrap();

            assert_eq!(config.log_level, want);
            assert_eq!(config.function_name.as_deref(), Some("notify-resolver"));
        }
    }

    #[test]
    #[should_panic(expected = "invalid LOG_LEVEL \"loud\"")]
    fn test_invalid_log_level() {
        Config::from_vars(Some("loud".into()), None).unwrap();
    }
}
