use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use snpstats_core::SnpStatsReader;
use snpstats_remaf::consts::DEFAULT_OUT;
use snpstats_remaf::{open_lookup, remaf_folder};

use crate::common::{lookup_strategy, run_config};

pub fn run_remaf(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A folder of snp-stats tables is required.");

    let reference = matches
        .get_one::<String>("reference")
        .expect("A path to a MAF reference is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let strategy = lookup_strategy(matches)?;
    let config = run_config(matches)?;

    if input == output {
        anyhow::bail!("Refusing to overwrite the input tables in {}", input);
    }

    let mut reader = SnpStatsReader::new(config.header.unwrap_or_default());
    let mut lookup = open_lookup(strategy, Path::new(reference))
        .with_context(|| format!("Failed to open MAF reference {}", reference))?;

    info!("Joining {} against {} ({:?} lookups)", input, reference, strategy);
    let summary = remaf_folder(
        Path::new(input),
        Path::new(output),
        &config.naming,
        &mut reader,
        &mut lookup,
    )?;

    println!(
        "{} hits, {} misses over {} records. Tables written to {}",
        summary.total.hits,
        summary.total.misses,
        summary.total.total(),
        output
    );

    Ok(())
}
