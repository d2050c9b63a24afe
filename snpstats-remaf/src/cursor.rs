//! Forward-only cursor over a sorted MAF reference.
//!
//! The cursor holds exactly one reference record, the one it is positioned
//! on. It can only move forward, so callers must never need a record once
//! the cursor has advanced past it.

use std::cmp::Ordering;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::warn;
use snpstats_core::chromosome::{compare_chromosomes, same_chromosome};
use snpstats_core::models::MafRecord;
use snpstats_core::utils::get_dynamic_reader;

use crate::errors::{RemafError, Result};
use crate::lookup::MafLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    NotStarted,
    Positioned,
    /// Terminal. The last record read is kept but never changes again.
    Ended,
}

pub struct MafCursor<R: BufRead> {
    reader: R,
    state: CursorState,
    current: Option<MafRecord>,
    line_number: u64,
    buf: String,
    missing: Option<String>,
}

impl MafCursor<BufReader<Box<dyn Read>>> {
    ///
    /// Open a cursor over a (possibly gzipped) MAF reference file.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(MafCursor::new(get_dynamic_reader(path)?))
    }
}

impl<R: BufRead> MafCursor<R> {
    pub fn new(reader: R) -> Self {
        MafCursor {
            reader,
            state: CursorState::NotStarted,
            current: None,
            line_number: 0,
            buf: String::new(),
            missing: None,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == CursorState::Ended
    }

    pub fn current(&self) -> Option<&MafRecord> {
        self.current.as_ref()
    }

    pub fn chromosome(&self) -> Option<&str> {
        self.current.as_ref().map(|record| record.chromosome.as_str())
    }

    pub fn position(&self) -> Option<u64> {
        self.current.as_ref().map(|record| record.position)
    }

    /// The last chromosome a lookup asked for that the reference did not have.
    pub fn missing_chromosome(&self) -> Option<&str> {
        self.missing.as_deref()
    }

    /// Whether the current record lies on `chromosome`.
    pub fn is_on(&self, chromosome: &str) -> bool {
        self.chromosome()
            .is_some_and(|current| same_chromosome(current, chromosome))
    }

    ///
    /// Move to the next reference record.
    ///
    /// At end of input the cursor becomes [CursorState::Ended] and keeps
    /// its last record. Once ended, this is a no-op. Returns whether the
    /// cursor is positioned on a fresh record.
    ///
    pub fn advance(&mut self) -> Result<bool> {
        if self.is_ended() {
            return Ok(false);
        }

        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.state = CursorState::Ended;
                return Ok(false);
            }
            self.line_number += 1;
            if !self.buf.trim().is_empty() {
                break;
            }
        }

        let record = MafRecord::parse(&self.buf).map_err(|reason| RemafError::ReferenceParse {
            line: self.line_number,
            reason,
        })?;

        self.current = Some(record);
        self.state = CursorState::Positioned;
        Ok(true)
    }

    ///
    /// Advance until the cursor sits on `chromosome`, or the reference ends.
    ///
    /// No-op if already on the target. When both names are numeric and the
    /// cursor is already past the target, it stays put so the target is
    /// simply missing rather than skipping the rest of the reference.
    ///
    pub fn advance_to(&mut self, chromosome: &str) -> Result<bool> {
        while !self.is_ended() && !self.is_on(chromosome) {
            if let Some(current) = self.chromosome() {
                if compare_chromosomes(current, chromosome) == Some(Ordering::Greater) {
                    break;
                }
            }
            self.advance()?;
        }

        Ok(self.is_on(chromosome))
    }

    ///
    /// Skip records on `chromosome` that lie before `position`, then report the
    /// MAF if the cursor lands exactly on it.
    ///
    pub fn seek_position(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>> {
        while !self.is_ended()
            && self.is_on(chromosome)
            && self.position().is_some_and(|current| current < position)
        {
            self.advance()?;
        }

        Ok(self
            .current
            .as_ref()
            .filter(|record| same_chromosome(&record.chromosome, chromosome))
            .filter(|record| record.position == position)
            .map(|record| record.maf))
    }

    /// [MafCursor::advance_to], warning once per chromosome the reference lacks.
    fn find_chromosome(&mut self, chromosome: &str) -> Result<()> {
        if self.advance_to(chromosome)? || self.missing.as_deref() == Some(chromosome) {
            return Ok(());
        }

        match self.is_ended() {
            true => warn!(
                "Chromosome {} is not in the MAF reference; reached its end, later lookups will miss",
                chromosome
            ),
            false => warn!("Chromosome {} is not in the MAF reference", chromosome),
        }
        self.missing = Some(chromosome.to_string());
        Ok(())
    }
}

impl<R: BufRead> MafLookup for MafCursor<R> {
    fn begin_chromosome(&mut self, chromosome: &str) -> Result<()> {
        self.find_chromosome(chromosome)
    }

    fn lookup(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>> {
        if !self.is_on(chromosome) {
            self.find_chromosome(chromosome)?;
        }
        self.seek_position(chromosome, position)
    }
}
