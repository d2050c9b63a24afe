//! Random access MAF lookups over a sorted, uncompressed reference file.
//!
//! Building the index takes one pass over the file, recording where every
//! line starts and which run of lines belongs to each chromosome. A lookup
//! then binary searches the chromosome's lines, seeking to and reading one
//! line per step: O(log k) reads for a chromosome with k lines.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::ops::Range;
use std::path::Path;

use log::{info, warn};

use snpstats_core::SnpStatsError;
use snpstats_core::chromosome::strip_chr_prefix;
use snpstats_core::models::MafRecord;

use crate::errors::{RemafError, Result};
use crate::lookup::MafLookup;

pub struct MafIndex<R = BufReader<File>> {
    source: R,
    /// Byte offset of each non-blank line.
    line_offsets: Vec<u64>,
    /// Physical (1-based) line number of each indexed line, for error messages.
    line_numbers: Vec<u64>,
    /// Chromosome (without `chr` prefix) to a half-open range into `line_offsets`.
    chr_lines: HashMap<String, Range<usize>>,
    chromosomes: Vec<String>,
    buf: String,
}

impl MafIndex<BufReader<File>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SnpStatsError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let index = MafIndex::build(BufReader::new(file))?;

        info!(
            "Indexed {} MAF reference lines over {} chromosomes from {:?}",
            index.n_lines(),
            index.chromosomes.len(),
            path
        );

        Ok(index)
    }
}

impl<R: BufRead + Seek> MafIndex<R> {
    ///
    /// Scan the whole reference once, recording line offsets and the line
    /// range of every chromosome.
    ///
    /// A chromosome change is detected by comparing each line's chromosome
    /// column with the previous line's. A chromosome that starts again after
    /// another one is rejected, since its lines would not be contiguous.
    ///
    pub fn build(mut source: R) -> Result<Self> {
        source.seek(SeekFrom::Start(0))?;

        let mut line_offsets: Vec<u64> = vec![];
        let mut line_numbers: Vec<u64> = vec![];
        let mut chr_lines: HashMap<String, Range<usize>> = HashMap::new();
        let mut chromosomes: Vec<String> = vec![];
        let mut seen: HashSet<String> = HashSet::new();

        let mut current: Option<(String, usize)> = None;
        let mut offset: u64 = 0;
        let mut physical_line: u64 = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            let n = source.read_line(&mut buf)?;
            if n == 0 {
                break;
            }
            physical_line += 1;
            let line_start = offset;
            offset += n as u64;

            let Some(chromosome) = buf.split_whitespace().next() else {
                continue;
            };
            let chromosome = strip_chr_prefix(chromosome);
            let line = line_offsets.len();

            line_offsets.push(line_start);
            line_numbers.push(physical_line);

            let same_chromosome = matches!(&current, Some((name, _)) if name == chromosome);
            if !same_chromosome {
                if let Some((name, start)) = current.take() {
                    chr_lines.insert(name, start..line);
                }
                if !seen.insert(chromosome.to_string()) {
                    return Err(RemafError::UnsortedReference {
                        chromosome: chromosome.to_string(),
                        line: physical_line,
                    });
                }
                chromosomes.push(chromosome.to_string());
                current = Some((chromosome.to_string(), line));
            }
        }

        if let Some((name, start)) = current {
            chr_lines.insert(name, start..line_offsets.len());
        }

        Ok(MafIndex {
            source,
            line_offsets,
            line_numbers,
            chr_lines,
            chromosomes,
            buf,
        })
    }

    /// Number of (non-blank) lines in the reference.
    pub fn n_lines(&self) -> usize {
        self.line_offsets.len()
    }

    /// Chromosomes in the order they appear in the reference, without `chr` prefix.
    pub fn chromosomes(&self) -> &[String] {
        &self.chromosomes
    }

    /// Half-open range of line numbers (0-based, blank lines excluded) for a chromosome.
    pub fn chromosome_range(&self, chromosome: &str) -> Option<Range<usize>> {
        self.chr_lines.get(strip_chr_prefix(chromosome)).cloned()
    }

    ///
    /// Seek to and parse the nth indexed line. `None` past the last line.
    ///
    pub fn read_line_at(&mut self, line: usize) -> Result<Option<MafRecord>> {
        let (Some(&offset), Some(&line_number)) =
            (self.line_offsets.get(line), self.line_numbers.get(line))
        else {
            return Ok(None);
        };

        self.source.seek(SeekFrom::Start(offset))?;
        self.buf.clear();
        self.source.read_line(&mut self.buf)?;

        MafRecord::parse(&self.buf)
            .map(Some)
            .map_err(|reason| RemafError::ReferenceParse {
                line: line_number,
                reason,
            })
    }

    ///
    /// Binary search a chromosome's lines for `position`.
    ///
    /// Returns `None` for an unknown chromosome or a position with no line.
    pub fn maf(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>> {
        let Some(range) = self.chromosome_range(chromosome) else {
            return Ok(None);
        };

        let (mut lower, mut upper) = (range.start, range.end);
        while lower < upper {
            let midpoint = lower + (upper - lower) / 2;
            let Some(record) = self.read_line_at(midpoint)? else {
                break;
            };

            match record.position.cmp(&position) {
                std::cmp::Ordering::Equal => return Ok(Some(record.maf)),
                std::cmp::Ordering::Greater => upper = midpoint,
                std::cmp::Ordering::Less => lower = midpoint + 1,
            }
        }

        Ok(None)
    }
}

impl<R: BufRead + Seek> MafLookup for MafIndex<R> {
    fn begin_chromosome(&mut self, chromosome: &str) -> Result<()> {
        if self.chromosome_range(chromosome).is_none() {
            warn!("Chromosome {} is not in the MAF reference", chromosome);
        }
        Ok(())
    }

    fn lookup(&mut self, chromosome: &str, position: u64) -> Result<Option<f64>> {
        self.maf(chromosome, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[fixture]
    fn reference() -> &'static str {
        "chr1\t100\t0.1\nchr1\t200\t0.2\nchr1\t300\t0.3\n\nchr2\t5\t0.05\nchr10\t7\t0.07\nchr10\t9\t0.09\n"
    }

    #[rstest]
    fn test_build_records_chromosome_ranges(reference: &str) {
        let index = MafIndex::build(Cursor::new(reference)).unwrap();

        assert_eq!(index.n_lines(), 6);
        assert_eq!(index.chromosomes(), &["1", "2", "10"]);
        assert_eq!(index.chromosome_range("chr1"), Some(0..3));
        assert_eq!(index.chromosome_range("2"), Some(3..4));
        assert_eq!(index.chromosome_range("chr10"), Some(4..6));
        assert_eq!(index.chromosome_range("chr3"), None);
    }

    #[rstest]
    fn test_chr1_prefix_does_not_swallow_chr10() {
        // "chr1" is a substring of "chr10"; boundaries come from the parsed column
        let index = MafIndex::build(Cursor::new("chr1 1 0.1\nchr10 1 0.2\n")).unwrap();
        assert_eq!(index.chromosome_range("chr1"), Some(0..1));
        assert_eq!(index.chromosome_range("chr10"), Some(1..2));
    }

    #[rstest]
    fn test_read_line_at_skips_blank_lines(reference: &str) {
        let mut index = MafIndex::build(Cursor::new(reference)).unwrap();
        let record = index.read_line_at(3).unwrap().unwrap();
        assert_eq!(record.chromosome, "chr2");
        assert_eq!(record.position, 5);
    }

    #[rstest]
    fn test_read_line_at_past_the_end(reference: &str) {
        let mut index = MafIndex::build(Cursor::new(reference)).unwrap();
        let n = index.n_lines();
        assert_eq!(index.read_line_at(n).unwrap(), None);
        assert_eq!(index.read_line_at(usize::MAX).unwrap(), None);
    }

    #[rstest]
    #[case("chr1", 100, Some(0.1))]
    #[case("chr1", 200, Some(0.2))]
    #[case("chr1", 300, Some(0.3))]
    #[case("chr1", 250, None)]
    #[case("chr1", 5, None)]
    #[case("chr1", 301, None)]
    #[case("2", 5, Some(0.05))]
    #[case("chr10", 9, Some(0.09))]
    #[case("chr10", 100, None)]
    #[case("chrX", 100, None)]
    fn test_lookup(
        reference: &str,
        #[case] chromosome: &str,
        #[case] position: u64,
        #[case] expected: Option<f64>,
    ) {
        let mut index = MafIndex::build(Cursor::new(reference)).unwrap();
        assert_eq!(index.lookup(chromosome, position).unwrap(), expected);
    }

    #[rstest]
    fn test_lookups_need_not_be_monotonic(reference: &str) {
        let mut index = MafIndex::build(Cursor::new(reference)).unwrap();

        assert_eq!(index.lookup("chr10", 9).unwrap(), Some(0.09));
        assert_eq!(index.lookup("chr1", 100).unwrap(), Some(0.1));
        assert_eq!(index.lookup("chr2", 5).unwrap(), Some(0.05));
        assert_eq!(index.lookup("chr1", 300).unwrap(), Some(0.3));
    }

    #[rstest]
    fn test_unsorted_chromosomes_are_rejected() {
        let result = MafIndex::build(Cursor::new("chr1 1 0.1\nchr2 1 0.1\nchr1 5 0.1\n"));
        match result {
            Err(RemafError::UnsortedReference { chromosome, line }) => {
                assert_eq!(chromosome, "1");
                assert_eq!(line, 3);
            }
            _ => panic!("expected an unsorted reference error"),
        }
    }

    #[rstest]
    fn test_from_path() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("maf.txt");
        std::fs::write(&path, "chr1 10 0.4\nchr1 20 0.45\n").unwrap();

        let mut index = MafIndex::from_path(&path).unwrap();
        assert_eq!(index.lookup("chr1", 20).unwrap(), Some(0.45));
    }
}
