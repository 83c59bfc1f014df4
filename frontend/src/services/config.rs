use log::LevelFilter;

const DEFAULT_API_HOST: &str = "http://localhost";
const DEFAULT_API_PORT: &str = "4041";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Build-time settings for the console.
///
/// Values are baked in by trunk from `CONSOLE_API_HOST`, `CONSOLE_API_PORT`
/// and `CONSOLE_LOG_LEVEL`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api_host: String,
    pub api_port: String,
    pub log_level: LevelFilter,
}

impl ConsoleConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONSOLE_API_HOST"),
            option_env!("CONSOLE_API_PORT"),
            option_env!("CONSOLE_LOG_LEVEL"),
        )
    }

    fn from_values(host: Option<&str>, port: Option<&str>, level: Option<&str>) -> Self {
        let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_host: host.unwrap_or(DEFAULT_API_HOST).trim_end_matches('/').to_string(),
            api_port: port.unwrap_or(DEFAULT_API_PORT).to_string(),
            log_level: level.parse().unwrap_or(LevelFilter::Info),
        }
    }

    /// e.g. "http://localhost:4041/api/v1"
    pub fn api_base(&self) -> String {
        format!("{}:{}/api/v1", self.api_host, self.api_port)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
