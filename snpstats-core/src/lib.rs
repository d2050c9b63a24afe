//! # Core types for snp-stats processing
//!
//! This crate holds what every snpstats tool shares: the [models::VariantRecord]
//! parser and its two header layouts, the [models::MafRecord] reference line,
//! the per-run [reader::SnpStatsReader] that streams tables record by record,
//! per-chromosome file naming, run configuration and gzip aware readers/writers.
//!
pub mod chromosome;
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod naming;
pub mod reader;
pub mod utils;

// re-exports
pub use config::RunConfig;
pub use errors::{Result, SnpStatsError};
pub use naming::FileNaming;
pub use reader::{LineKind, SnpStatsReader};
