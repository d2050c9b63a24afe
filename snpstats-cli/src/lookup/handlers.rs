use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use snpstats_core::consts::MISSING_VALUE;
use snpstats_remaf::MafIndex;

pub fn run_lookup(matches: &ArgMatches) -> Result<()> {
    let reference = matches
        .get_one::<String>("reference")
        .expect("A path to a MAF reference is required.");

    let chromosome = matches
        .get_one::<String>("chromosome")
        .expect("A chromosome is required.");

    let position = *matches
        .get_one::<u64>("position")
        .expect("A position is required.");

    let mut index = MafIndex::from_path(Path::new(reference))
        .with_context(|| format!("Failed to index MAF reference {}", reference))?;

    match index.maf(chromosome, position)? {
        Some(maf) => println!("{}", maf),
        None => println!("{}", MISSING_VALUE),
    }

    Ok(())
}
