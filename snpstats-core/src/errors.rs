use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnpStatsError {
    #[error("Can't open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't create file {path:?}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown header layout: {0}. Expected one of: standard, no-hw")]
    UnknownHeaderLayout(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnpStatsError>;
