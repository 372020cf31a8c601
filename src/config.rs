const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Read `FORMCHECK_LOG` and `FORMCHECK_LOG_FORMAT`, falling back to
    /// human-readable `info` logging.
    pub fn from_env() -> Self {
        let log_filter = std::env::var("FORMCHECK_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = std::env::var("FORMCHECK_LOG_FORMAT")
            .map(|f| LogFormat::parse(&f))
            .unwrap_or(LogFormat::Pretty);

        Config {
            log_filter,
            log_format,
        }
    }
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}
