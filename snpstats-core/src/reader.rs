//! Push-style traversal of snp-stats tables.
//!
//! A [SnpStatsReader] owns the column schema for one run and settles the
//! layout again for every file it reads. Files are never materialized: every data line is parsed into a [VariantRecord] and handed
//! to a caller supplied callback, then dropped.

use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::consts::{AUTOSOMES, COMMENT_CHAR};
use crate::errors::SnpStatsError;
use crate::models::{ColumnSchema, HeaderLayout, VariantRecord};
use crate::naming::FileNaming;
use crate::utils::get_dynamic_reader;

/// What a raw line of a snp-stats table turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// The header of the active layout.
    Header,
    /// The header of the alternate layout; the reader switched to it.
    SwitchHeader,
    Data,
}

///
/// Per-run parsing context holding the active column layout.
///
/// Every file starts out in the layout given at construction and switches
/// at most once, the first time the alternate header is seen in that file.
/// After that both headers are skipped as headers until the next file.
///
#[derive(Debug, Clone)]
pub struct SnpStatsReader {
    initial: HeaderLayout,
    schema: ColumnSchema,
    switched: bool,
}

impl Default for SnpStatsReader {
    fn default() -> Self {
        SnpStatsReader::new(HeaderLayout::default())
    }
}

impl SnpStatsReader {
    pub fn new(layout: HeaderLayout) -> Self {
        SnpStatsReader {
            initial: layout,
            schema: ColumnSchema::new(layout),
            switched: false,
        }
    }

    /// Go back to the construction layout, ready for a new file.
    pub fn begin_file(&mut self) {
        self.schema = ColumnSchema::new(self.initial);
        self.switched = false;
    }

    pub fn schema(&self) -> ColumnSchema {
        self.schema
    }

    pub fn layout(&self) -> HeaderLayout {
        self.schema.layout()
    }

    /// Whether the file read last switched to the alternate layout.
    pub fn has_switched(&self) -> bool {
        self.switched
    }

    ///
    /// Classify a raw line, switching the active layout if the line is the
    /// alternate header seen for the first time.
    ///
    pub fn classify_line(&mut self, line: &str) -> LineKind {
        if line.starts_with(COMMENT_CHAR) {
            return LineKind::Comment;
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        let active = self.layout();
        if active.matches(line) {
            return LineKind::Header;
        }

        if active.alternate().matches(line) {
            if self.switched {
                return LineKind::Header;
            }
            debug!("Switching snp-stats column layout from {} to {}", active, active.alternate());
            self.schema = ColumnSchema::new(active.alternate());
            self.switched = true;
            return LineKind::SwitchHeader;
        }

        LineKind::Data
    }

    ///
    /// Run `f` on every data line of a snp-stats table.
    ///
    /// The source is treated as one whole file, so the layout is reset first.
    /// Comments, blank lines and header lines are skipped. An error from `f`
    /// stops the traversal and is returned. Returns the number of records seen.
    ///
    /// # Arguments
    /// - reader: any buffered source of lines
    /// - f: callback for each parsed record
    pub fn for_each_record<R, F, E>(&mut self, mut reader: R, mut f: F) -> Result<u64, E>
    where
        R: BufRead,
        F: FnMut(VariantRecord) -> Result<(), E>,
        E: From<SnpStatsError>,
    {
        self.begin_file();

        let mut records = 0;
        let mut line = String::new();

        loop {
            line.clear();
            let n = reader
                .read_line(&mut line)
                .map_err(|e| E::from(SnpStatsError::Io(e)))?;
            if n == 0 {
                break;
            }

            if self.classify_line(&line) != LineKind::Data {
                continue;
            }

            f(VariantRecord::parse(&line, self.schema))?;
            records += 1;
        }

        Ok(records)
    }

    ///
    /// Run `f` on every record of every autosome file (chr1..chr22) in a folder.
    ///
    /// `on_chromosome` is called with the chromosome number and file path
    /// before each file is opened. A missing file is an error.
    ///
    /// # Arguments
    /// - folder: folder holding one file per chromosome
    /// - naming: how the per-chromosome files are named
    /// - on_chromosome: hook run before each chromosome
    /// - f: callback for each parsed record
    pub fn for_each_record_in_folder<H, F, E>(
        &mut self,
        folder: &Path,
        naming: &FileNaming,
        mut on_chromosome: H,
        mut f: F,
    ) -> Result<u64, E>
    where
        H: FnMut(u8, &Path) -> Result<(), E>,
        F: FnMut(VariantRecord) -> Result<(), E>,
        E: From<SnpStatsError>,
    {
        let mut records = 0;

        for chromosome in AUTOSOMES {
            let path = naming.path_in(folder, chromosome);
            on_chromosome(chromosome, &path)?;

            debug!("Reading {:?}", path);
            let reader = get_dynamic_reader(&path).map_err(E::from)?;
            records += self.for_each_record(reader, &mut f)?;
        }

        Ok(records)
    }
}
