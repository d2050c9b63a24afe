use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use snpstats_bins::BandReport;

use crate::barplot::cli::DEFAULT_INFO_THRESHOLDS;
use crate::common::{open_maf_source, report_options, write_report};

pub fn run_barplot(matches: &ArgMatches) -> Result<()> {
    let folder = matches
        .get_one::<String>("folder")
        .expect("A folder of snp-stats tables is required.");

    let thresholds: Vec<f64> = match matches.get_many::<f64>("thresholds") {
        Some(thresholds) => thresholds.copied().collect(),
        None => DEFAULT_INFO_THRESHOLDS.to_vec(),
    };

    let options = report_options(matches)?;
    let mut report = BandReport::new(&thresholds)?;
    let mut lookup = open_maf_source(matches)?;

    report.add_folder(Path::new(folder), &options, lookup.as_mut())?;

    write_report(&report.to_table(), matches)
}
