//! CLI configuration

use clap::Args;
use showroom_app::client::{ApiConfig, DEFAULT_BASE_URL};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        global = true,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub(crate) log_format: LogFormat,
}

/// Backend settings.
#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// Showroom backend address
    #[arg(
        long,
        global = true,
        env = "SHOWROOM_API_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub(crate) api_url: String,
}

impl ApiArgs {
    pub(crate) fn into_config(self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url,
        }
    }
}
