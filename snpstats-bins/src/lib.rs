//! # MAF bins and info score reports
//!
//! A [Bin] keeps the count and running mean of the values sorted into it,
//! a [BinSet] is an ordered list of bins. The reports stream folders of
//! snp-stats tables into bin sets keyed by MAF:
//! - [LineReport]: mean info score per MAF bin, per collection of tables
//! - [BandReport]: variant count per MAF bin, per info score band
//!
//! Either report renders to a [ReportTable] written as TSV or JSON.
pub mod bin;
pub mod binset;
pub mod consts;
pub mod errors;
pub mod report;
pub mod table;

// re-exports
pub use bin::Bin;
pub use binset::BinSet;
pub use errors::{BinsError, Result};
pub use report::{BandReport, InfoBand, LineReport, LineReportRow, ReportOptions};
pub use table::{OutputFormat, ReportRow, ReportTable};
