use std::path::Path;
use std::str::FromStr;

use snpstats_core::models::VariantRecord;

use crate::cursor::MafCursor;
use crate::errors::{RemafError, Result};
use crate::index::MafIndex;

///
/// Given a chromosome and position, produce the reference MAF or nothing.
///
/// Implemented by [MafCursor] (sequential, queries must follow the
/// reference order) and [MafIndex] (random access).
///
pub trait MafLookup {
    /// Called once before the records of a chromosome are looked up.
    fn begin_chromosome(&mut self, _chromosome: &str) -> Result<()> {
        Ok(())
    }

    fn lookup(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>>;
}

impl<L: MafLookup + ?Sized> MafLookup for Box<L> {
    fn begin_chromosome(&mut self, chromosome: &str) -> Result<()> {
        (**self).begin_chromosome(chromosome)
    }

    fn lookup(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>> {
        (**self).lookup(chromosome, position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Forward-only merge over the reference. Needs both inputs sorted.
    #[default]
    Cursor,
    /// Pre-scanned line offsets with binary search per lookup.
    Index,
}

impl LookupStrategy {
    /// Whether one opened lookup can serve more than one pass over the tables.
    pub fn is_reusable(&self) -> bool {
        match self {
            LookupStrategy::Cursor => false,
            LookupStrategy::Index => true,
        }
    }
}

impl FromStr for LookupStrategy {
    type Err = RemafError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cursor" | "merge" | "sequential" => Ok(LookupStrategy::Cursor),
            "index" | "random" => Ok(LookupStrategy::Index),
            _ => Err(RemafError::UnknownStrategy(s.to_string())),
        }
    }
}

///
/// Open a MAF reference with the given strategy.
///
/// # Arguments
/// - strategy: cursor for full sequential joins, index for sparse lookups
/// - path: path to the MAF reference (the index needs an uncompressed file)
pub fn open_lookup(strategy: LookupStrategy, path: &Path) -> Result<Box<dyn MafLookup>> {
    Ok(match strategy {
        LookupStrategy::Cursor => Box::new(MafCursor::from_path(path)?),
        LookupStrategy::Index => Box::new(MafIndex::from_path(path)?),
    })
}

///
/// The MAF to use for a record: the external lookup's answer when one is
/// given, otherwise the record's own MAF column.
///
pub fn resolve_maf<L: MafLookup + ?Sized>(
    record: &VariantRecord,
    lookup: Option<&mut L>,
) -> Result<Option<f64>> {
    match lookup {
        Some(lookup) => match record.position() {
            Some(position) => lookup.lookup(record.chromosome(), position),
            None => Ok(None),
        },
        None => Ok(record.maf()),
    }
}
