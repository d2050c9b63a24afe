//! Sorted merge-join of snp-stats tables against a MAF reference ("remaf").
//!
//! The variant table drives the iteration. For every record the reference
//! lookup is asked for the record's position; with a [crate::MafCursor] this
//! advances the reference lazily, never further than needed and never
//! backwards. Records with a matching reference line get its MAF, all
//! others get `-1`.

use std::io::{BufRead, Write};
use std::ops::AddAssign;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;

use snpstats_core::chromosome::autosome_name;
use snpstats_core::consts::AUTOSOMES;
use snpstats_core::utils::{get_dynamic_reader, get_dynamic_writer};
use snpstats_core::{FileNaming, SnpStatsReader};

use crate::errors::{RemafError, Result};
use crate::lookup::MafLookup;

///
/// Hit/miss counts of one join.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub hits: u64,
    pub misses: u64,
}

impl JoinStats {
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

impl AddAssign for JoinStats {
    fn add_assign(&mut self, other: JoinStats) {
        self.hits += other.hits;
        self.misses += other.misses;
    }
}

///
/// Per-chromosome and overall join stats of a folder run.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RemafSummary {
    pub chromosomes: Vec<(String, JoinStats)>,
    pub total: JoinStats,
}

impl RemafSummary {
    fn push(&mut self, chromosome: String, stats: JoinStats) {
        self.total += stats;
        self.chromosomes.push((chromosome, stats));
    }
}

///
/// Join one chromosome's snp-stats table against a MAF lookup.
///
/// The header of the layout the source declares is written first, followed
/// by every data record with its MAF replaced. Comment lines are dropped.
///
/// # Arguments
/// - source: the chromosome's snp-stats table
/// - dest: where the updated table goes
/// - chromosome: the chromosome being joined, used for every lookup
/// - reader: the run's parsing context
/// - lookup: the reference, positioned for this chromosome
pub fn remaf_stream<R, W, L>(
    source: R,
    dest: &mut W,
    chromosome: &str,
    reader: &mut SnpStatsReader,
    lookup: &mut L,
) -> Result<JoinStats>
where
    R: BufRead,
    W: Write + ?Sized,
    L: MafLookup + ?Sized,
{
    let mut stats = JoinStats::default();
    let mut header_written = false;

    reader.for_each_record(source, |mut record| -> Result<()> {
        // header lines always precede data, so the layout is settled by now
        if !header_written {
            writeln!(dest, "{}", record.schema().header())?;
            header_written = true;
        }

        let maf = match record.position() {
            Some(position) => lookup.lookup(chromosome, position)?,
            None => None,
        };

        stats.record(maf.is_some());
        record.set_maf(maf);
        writeln!(dest, "{}", record.to_line())?;
        Ok(())
    })?;

    if !header_written {
        writeln!(dest, "{}", reader.schema().header())?;
    }

    Ok(stats)
}

///
/// Join every autosome table of `input` against the reference, writing the
/// updated tables under the same names into `output`.
///
/// Chromosomes are processed in order 1..22 and the reference must follow
/// the same order. Any I/O error aborts the run; tables already written stay.
///
/// # Arguments
/// - input: folder holding the per-chromosome snp-stats tables
/// - output: folder for the updated tables, created if missing
/// - naming: how the per-chromosome files are named
/// - reader: the run's parsing context
/// - lookup: the MAF reference
pub fn remaf_folder<L: MafLookup + ?Sized>(
    input: &Path,
    output: &Path,
    naming: &FileNaming,
    reader: &mut SnpStatsReader,
    lookup: &mut L,
) -> Result<RemafSummary> {
    std::fs::create_dir_all(output)?;

    let pb = ProgressBar::new(AUTOSOMES.count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chromosomes ({msg})")?
            .progress_chars("##-"),
    );

    let mut summary = RemafSummary::default();

    for n in AUTOSOMES {
        let chromosome = autosome_name(n);
        pb.set_message(chromosome.clone());

        lookup.begin_chromosome(&chromosome)?;

        let source = get_dynamic_reader(&naming.path_in(input, n))?;
        let mut dest = get_dynamic_writer(&naming.path_in(output, n))?;

        let stats = remaf_stream(source, &mut dest, &chromosome, reader, lookup)?;
        dest.finish().map_err(RemafError::Io)?;

        info!(
            "{}: {} hits, {} misses ({} records)",
            chromosome,
            stats.hits,
            stats.misses,
            stats.total()
        );
        summary.push(chromosome, stats);
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Done: {} hits, {} misses over {} records",
        summary.total.hits,
        summary.total.misses,
        summary.total.total()
    );

    Ok(summary)
}
