use thiserror::Error;

use snpstats_core::SnpStatsError;

#[derive(Error, Debug)]
pub enum RemafError {
    #[error("Malformed MAF reference line {line}: {reason}")]
    ReferenceParse { line: u64, reason: String },

    #[error(
        "MAF reference is not sorted by chromosome: {chromosome} starts again at line {line}"
    )]
    UnsortedReference { chromosome: String, line: u64 },

    #[error("Unknown lookup strategy: {0}. Expected one of: cursor, index")]
    UnknownStrategy(String),

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),

    #[error(transparent)]
    Core(#[from] SnpStatsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RemafError>;
