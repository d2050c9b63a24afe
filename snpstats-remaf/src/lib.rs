//! # Replacing MAF values in snp-stats tables
//!
//! Per-chromosome snp-stats tables carry a `minor_allele_frequency` column that
//! is often computed on the wrong population. This crate rewrites that column
//! from an external MAF reference, a whitespace separated file of
//! `chromosome position maf [major minor]` lines sorted by chromosome and
//! position.
//!
//! Two ways of reading the reference are provided behind the [MafLookup] trait:
//! - [MafCursor]: a forward-only merge over the reference, for full joins
//! - [MafIndex]: one pass to record line offsets, then binary search per lookup
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use snpstats_core::{FileNaming, SnpStatsReader};
//! use snpstats_remaf::{MafCursor, remaf_folder};
//!
//! let mut cursor = MafCursor::from_path(Path::new("maf_reference.txt.gz")).unwrap();
//! let mut reader = SnpStatsReader::default();
//! let summary = remaf_folder(
//!     Path::new("snp-stats/"),
//!     Path::new("remaf/"),
//!     &FileNaming::default(),
//!     &mut reader,
//!     &mut cursor,
//! )
//! .unwrap();
//! println!("{} hits", summary.total.hits);
//! ```
pub mod consts;
pub mod cursor;
pub mod errors;
pub mod index;
pub mod join;
pub mod lookup;

// re-exports
pub use cursor::{CursorState, MafCursor};
pub use errors::{RemafError, Result};
pub use index::MafIndex;
pub use join::{JoinStats, RemafSummary, remaf_folder, remaf_stream};
pub use lookup::{LookupStrategy, MafLookup, open_lookup, resolve_maf};
