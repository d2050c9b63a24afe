use thiserror::Error;

use snpstats_core::SnpStatsError;
use snpstats_remaf::RemafError;

#[derive(Error, Debug)]
pub enum BinsError {
    #[error("Bin edges must be finite and strictly increasing, got {0:?}")]
    InvalidEdges(Vec<f64>),

    #[error("Info score thresholds must be strictly increasing and inside (0, 1), got {0:?}")]
    InvalidThresholds(Vec<f64>),

    #[error("Unknown output format: {0}. Expected one of: tsv, json")]
    UnknownFormat(String),

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Remaf(#[from] RemafError),

    #[error(transparent)]
    Core(#[from] SnpStatsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BinsError>;
