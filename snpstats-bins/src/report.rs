//! Info score by MAF reports over folders of snp-stats tables.
//!
//! Both reports make one streaming pass per folder. A record counts when it
//! has both an info score and a MAF; the MAF picks the bin and the info score
//! is what the bin averages. The MAF comes from the table itself or, when a
//! [MafLookup] is given, from an external reference.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Serialize;

use snpstats_core::chromosome::autosome_name;
use snpstats_core::models::{HeaderLayout, VariantRecord};
use snpstats_core::{FileNaming, SnpStatsReader};
use snpstats_remaf::{MafLookup, resolve_maf};

use crate::binset::BinSet;
use crate::errors::{BinsError, Result};
use crate::table::ReportTable;

///
/// How the folders of a report are read.
///
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub naming: FileNaming,
    pub layout: HeaderLayout,
    /// Skip records whose alleles are longer than one base.
    pub exclude_structural: bool,
}

///
/// Stream every record of a folder and hand `(info, maf)` pairs to `f`.
///
/// Returns the number of pairs handed on.
fn fold_folder<L, F>(
    folder: &Path,
    options: &ReportOptions,
    mut lookup: Option<&mut L>,
    mut f: F,
) -> Result<u64>
where
    L: MafLookup + ?Sized,
    F: FnMut(f64, f64),
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );

    let mut reader = SnpStatsReader::new(options.layout);
    let mut used: u64 = 0;

    let seen = reader.for_each_record_in_folder(
        folder,
        &options.naming,
        |chromosome, path| -> Result<()> {
            debug!("Aggregating {:?}", path);
            spinner.set_message(format!("{} of {:?}", autosome_name(chromosome), folder));
            Ok(())
        },
        |record: VariantRecord| -> Result<()> {
            spinner.inc(1);
            if options.exclude_structural && record.is_structural_variant() {
                return Ok(());
            }

            let maf = resolve_maf(&record, lookup.as_deref_mut())?;
            if let (Some(info), Some(maf)) = (record.info(), maf) {
                f(info, maf);
                used += 1;
            }
            Ok(())
        },
    )?;

    spinner.finish_and_clear();
    info!("{:?}: {} of {} records had an info score and a MAF", folder, used, seen);

    Ok(used)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReportRow {
    pub bin: String,
    pub mean_info: Option<f64>,
    pub count: u64,
    pub collection: String,
}

///
/// Mean info score per MAF bin, one default bin set per named collection.
///
#[derive(Debug, Clone, Default)]
pub struct LineReport {
    collections: Vec<(String, BinSet)>,
}

impl LineReport {
    pub fn new() -> Self {
        LineReport::default()
    }

    /// Add a collection with an empty bin set, returning its bins.
    pub fn collection_mut(&mut self, name: &str) -> &mut BinSet {
        let i = match self.collections.iter().position(|(n, _)| n == name) {
            Some(i) => i,
            None => {
                self.collections.push((name.to_string(), BinSet::default_maf_bins()));
                self.collections.len() - 1
            }
        };
        &mut self.collections[i].1
    }

    pub fn collections(&self) -> &[(String, BinSet)] {
        &self.collections
    }

    ///
    /// Stream a folder into the named collection.
    ///
    /// # Arguments
    /// - name: collection name, used as the group column
    /// - folder: folder of per-chromosome snp-stats tables
    /// - options: naming, header layout and structural variant filter
    /// - lookup: external MAF reference to use instead of the tables' MAF column
    pub fn add_folder<L: MafLookup + ?Sized>(
        &mut self,
        name: &str,
        folder: &Path,
        options: &ReportOptions,
        lookup: Option<&mut L>,
    ) -> Result<u64> {
        let bins = self.collection_mut(name);
        fold_folder(folder, options, lookup, |info, maf| {
            bins.sort_into(maf, info);
        })
    }

    /// Long form rows in collection order, then bin order.
    pub fn rows(&self) -> Vec<LineReportRow> {
        self.collections
            .iter()
            .flat_map(|(collection, bins)| {
                bins.iter().map(move |bin| LineReportRow {
                    bin: bin.label(),
                    mean_info: bin.mean(),
                    count: bin.count(),
                    collection: collection.clone(),
                })
            })
            .collect()
    }

    /// Bin labels by collection, holding the mean info score.
    pub fn to_table(&self) -> ReportTable {
        let groups = self.collections.iter().map(|(name, _)| name.clone()).collect();
        let mut table = ReportTable::new(groups);

        for (i, label) in BinSet::default_maf_bins().labels().into_iter().enumerate() {
            let values = self
                .collections
                .iter()
                .map(|(_, bins)| bins.bins()[i].mean())
                .collect();
            table.push_row(label, values);
        }

        table
    }
}

///
/// One info score band with its own MAF bins.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoBand {
    lower: f64,
    upper: f64,
    /// The last band also holds its upper bound.
    closed: bool,
    bins: BinSet,
}

impl InfoBand {
    fn new(lower: f64, upper: f64, closed: bool) -> Self {
        InfoBand {
            lower,
            upper,
            closed,
            bins: BinSet::default_maf_bins(),
        }
    }

    pub fn contains(&self, info: f64) -> bool {
        self.lower <= info && (info < self.upper || (self.closed && info == self.upper))
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper)
    }

    pub fn bins(&self) -> &BinSet {
        &self.bins
    }
}

///
/// Variant counts per MAF bin, split into info score bands.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandReport {
    bands: Vec<InfoBand>,
}

impl BandReport {
    ///
    /// Thresholds `t1 < .. < tk` inside (0, 1) give the bands
    /// `[0, t1)`, `[t1, t2)`, .., `[tk, 1]`.
    ///
    pub fn new(thresholds: &[f64]) -> Result<Self> {
        let inside = thresholds.iter().all(|t| *t > 0.0 && *t < 1.0);
        let increasing = thresholds.windows(2).all(|pair| pair[0] < pair[1]);
        if !inside || !increasing {
            return Err(BinsError::InvalidThresholds(thresholds.to_vec()));
        }

        let mut edges = Vec::with_capacity(thresholds.len() + 2);
        edges.push(0.0);
        edges.extend_from_slice(thresholds);
        edges.push(1.0);

        let last = edges.len() - 2;
        let bands = edges
            .windows(2)
            .enumerate()
            .map(|(i, pair)| InfoBand::new(pair[0], pair[1], i == last))
            .collect();

        Ok(BandReport { bands })
    }

    pub fn bands(&self) -> &[InfoBand] {
        &self.bands
    }

    pub fn band_index(&self, info: f64) -> Option<usize> {
        self.bands.iter().position(|band| band.contains(info))
    }

    ///
    /// Add one record's info score to its band's MAF bin. Returns false when
    /// the info score is outside [0, 1] or the MAF outside every bin.
    ///
    pub fn observe(&mut self, info: f64, maf: f64) -> bool {
        match self.band_index(info) {
            Some(i) => self.bands[i].bins.sort_into(maf, info),
            None => false,
        }
    }

    ///
    /// Stream a folder into the bands.
    ///
    /// # Arguments
    /// - folder: folder of per-chromosome snp-stats tables
    /// - options: naming, header layout and structural variant filter
    /// - lookup: external MAF reference to use instead of the tables' MAF column
    pub fn add_folder<L: MafLookup + ?Sized>(
        &mut self,
        folder: &Path,
        options: &ReportOptions,
        lookup: Option<&mut L>,
    ) -> Result<u64> {
        fold_folder(folder, options, lookup, |info, maf| {
            self.observe(info, maf);
        })
    }

    /// MAF bin labels by band, holding the number of variants.
    pub fn to_table(&self) -> ReportTable {
        let groups = self.bands.iter().map(InfoBand::label).collect();
        let mut table = ReportTable::new(groups);

        for (i, label) in BinSet::default_maf_bins().labels().into_iter().enumerate() {
            let values = self
                .bands
                .iter()
                .map(|band| Some(band.bins.bins()[i].count() as f64))
                .collect();
            table.push_row(label, values);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use snpstats_core::consts::{AUTOSOMES, STANDARD_HEADER};
    use snpstats_remaf::MafCursor;
    use std::io::Cursor;

    fn snp_line(position: u64, alleles: (&str, &str), maf: f64, info: f64) -> String {
        format!(
            "--- rs{position} chr1 {position} {} {} NA 1 1 10 90 0.1 0.9 {maf} A G {info} 0.94 0.01 0 0 0 0 0 0 100\n",
            alleles.0, alleles.1
        )
    }

    /// A folder where chr1 holds `lines` and every other chromosome is empty.
    fn folder_with(lines: &[String]) -> tempfile::TempDir {
        let tempdir = tempfile::tempdir().unwrap();
        let naming = FileNaming::default();
        for n in AUTOSOMES {
            let mut table = format!("{STANDARD_HEADER}\n");
            if n == 1 {
                table.extend(lines.iter().cloned());
            }
            std::fs::write(naming.path_in(tempdir.path(), n), table).unwrap();
        }
        tempdir
    }

    #[fixture]
    fn lines() -> Vec<String> {
        vec![
            snp_line(100, ("A", "G"), 0.25, 0.9),
            snp_line(200, ("A", "G"), 0.21, 0.5),
            snp_line(300, ("AT", "G"), 0.25, 0.1),
            snp_line(400, ("C", "T"), 0.0001, 0.2),
            // boundary MAF, lands in no bin
            snp_line(500, ("C", "T"), 0.2, 0.99),
            // no MAF
            snp_line(600, ("C", "T"), -1.0, 0.99),
        ]
    }

    #[rstest]
    fn test_line_report(lines: Vec<String>) {
        let folder = folder_with(&lines);
        let mut report = LineReport::new();

        let used = report
            .add_folder::<dyn MafLookup>("ukb", folder.path(), &ReportOptions::default(), None)
            .unwrap();

        assert_eq!(used, 5);
        let table = report.to_table();
        assert_eq!(table.groups, vec!["ukb".to_string()]);
        assert!((table.get("0.2-0.3", "ukb").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(table.get("0-0.0005", "ukb"), Some(0.2));
        assert_eq!(table.get("0.0005-0.001", "ukb"), None);
    }

    #[rstest]
    fn test_line_report_excludes_structural_variants(lines: Vec<String>) {
        let folder = folder_with(&lines);
        let mut report = LineReport::new();
        let options = ReportOptions {
            exclude_structural: true,
            ..Default::default()
        };

        report
            .add_folder::<dyn MafLookup>("ukb", folder.path(), &options, None)
            .unwrap();

        let table = report.to_table();
        assert!((table.get("0.2-0.3", "ukb").unwrap() - 0.7).abs() < 1e-12);
    }

    #[rstest]
    fn test_line_report_rows_keep_collection_order(lines: Vec<String>) {
        let folder = folder_with(&lines);
        let mut report = LineReport::new();
        let options = ReportOptions::default();

        report
            .add_folder::<dyn MafLookup>("b", folder.path(), &options, None)
            .unwrap();
        report
            .add_folder::<dyn MafLookup>("a", folder.path(), &options, None)
            .unwrap();

        let rows = report.rows();
        assert_eq!(rows.len(), 28);
        assert_eq!(rows[0].collection, "b");
        assert_eq!(rows[0].bin, "0-0.0005");
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].mean_info, None);
        assert_eq!(rows[1].count, 0);
        assert_eq!(rows[14].collection, "a");
    }

    #[rstest]
    fn test_line_report_with_external_maf(lines: Vec<String>) {
        let folder = folder_with(&lines);
        let mut report = LineReport::new();
        let mut cursor = MafCursor::new(Cursor::new("chr1 100 0.45\nchr1 600 0.45\n"));

        let used = report
            .add_folder("ukb", folder.path(), &ReportOptions::default(), Some(&mut cursor))
            .unwrap();

        assert_eq!(used, 2);
        let table = report.to_table();
        assert!((table.get("0.4-0.5", "ukb").unwrap() - 0.945).abs() < 1e-12);
        assert_eq!(table.get("0.2-0.3", "ukb"), None);
    }

    #[rstest]
    fn test_band_membership() {
        let report = BandReport::new(&[0.3, 0.8]).unwrap();

        assert_eq!(report.bands().len(), 3);
        assert_eq!(report.band_index(0.0), Some(0));
        assert_eq!(report.band_index(0.29), Some(0));
        assert_eq!(report.band_index(0.3), Some(1));
        assert_eq!(report.band_index(0.8), Some(2));
        assert_eq!(report.band_index(1.0), Some(2));
        assert_eq!(report.band_index(1.01), None);
        assert_eq!(report.band_index(-0.01), None);
    }

    #[rstest]
    #[case(&[0.8, 0.3])]
    #[case(&[0.3, 0.3])]
    #[case(&[0.0, 0.5])]
    #[case(&[0.5, 1.0])]
    fn test_bad_thresholds(#[case] thresholds: &[f64]) {
        assert!(matches!(
            BandReport::new(thresholds),
            Err(BinsError::InvalidThresholds(_))
        ));
    }

    #[rstest]
    fn test_band_report(lines: Vec<String>) {
        let folder = folder_with(&lines);
        let mut report = BandReport::new(&[0.3, 0.8]).unwrap();

        report
            .add_folder::<dyn MafLookup>(folder.path(), &ReportOptions::default(), None)
            .unwrap();

        let table = report.to_table();
        assert_eq!(table.groups, vec!["0-0.3", "0.3-0.8", "0.8-1"]);
        assert_eq!(table.get("0.2-0.3", "0-0.3"), Some(1.0));
        assert_eq!(table.get("0.2-0.3", "0.3-0.8"), Some(1.0));
        assert_eq!(table.get("0.2-0.3", "0.8-1"), Some(1.0));
        assert_eq!(table.get("0-0.0005", "0-0.3"), Some(1.0));
        assert_eq!(table.get("0.4-0.5", "0.8-1"), Some(0.0));
    }
}
