use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

use snpstats_bins::LineReport;

use crate::common::{lookup_strategy, open_maf_source, report_options, write_report};

///
/// Split a `name=folder` argument. A bare folder is named after its last component.
///
pub fn parse_collection(arg: &str) -> Result<(String, PathBuf)> {
    if let Some((name, folder)) = arg.split_once('=') {
        if name.is_empty() || folder.is_empty() {
            anyhow::bail!("Collections are given as name=folder, got: {}", arg);
        }
        return Ok((name.to_string(), PathBuf::from(folder)));
    }

    let folder = PathBuf::from(arg);
    let name = folder
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| arg.to_string());

    Ok((name, folder))
}

pub fn run_lineplot(matches: &ArgMatches) -> Result<()> {
    let collections = matches
        .get_many::<String>("collections")
        .expect("At least one collection is required.")
        .map(|arg| parse_collection(arg))
        .collect::<Result<Vec<_>>>()?;

    let options = report_options(matches)?;
    let reusable = lookup_strategy(matches)?.is_reusable();
    let mut report = LineReport::new();

    let mut lookup = open_maf_source(matches)?;
    for (i, (name, folder)) in collections.iter().enumerate() {
        if i > 0 && !reusable {
            lookup = open_maf_source(matches)?;
        }
        report.add_folder(name, Path::new(folder), &options, lookup.as_mut())?;
    }

    write_report(&report.to_table(), matches)
}
