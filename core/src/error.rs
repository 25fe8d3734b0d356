use thiserror::Error;

/// Errors are reserved for caller bugs and config loading. Data-quality
/// problems (unparseable dates, missing ratings, empty periods) never
/// surface here — they become dropped rows or `is_valid == false` results.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Unknown engine '{name}'")]
    UnknownEngine { name: String },

    #[error("Config read error: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
