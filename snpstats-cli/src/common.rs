//! Arguments and argument handling shared by the subcommands.

use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, arg};

use snpstats_bins::consts::DEFAULT_OUT;
use snpstats_bins::{OutputFormat, ReportOptions, ReportTable};
use snpstats_core::RunConfig;
use snpstats_core::models::HeaderLayout;
use snpstats_remaf::consts::DEFAULT_STRATEGY;
use snpstats_remaf::{LookupStrategy, MafLookup, open_lookup};

pub fn naming_args() -> [Arg; 4] {
    [
        arg!(--prefix <prefix> "Text before `chrN` in every table file name"),
        arg!(--suffix <suffix> "Text after `chrN` in every table file name (default: -snp-stats.txt)"),
        arg!(--header <layout> "Column layout to assume before a header line: standard or no-hw"),
        arg!(--config <config> "TOML file with naming and header defaults"),
    ]
}

pub fn strategy_arg() -> Arg {
    arg!(--strategy <strategy> "How to read the MAF reference: cursor (sequential) or index (random access)")
}

pub fn report_args() -> [Arg; 4] {
    [
        arg!(--output <output> "Where to write the report, `-` for stdout"),
        arg!(--format <format> "tsv or json"),
        Arg::new("maf-source")
            .long("maf-source")
            .value_name("reference")
            .help("Take MAFs from this reference instead of the tables' own MAF column"),
        Arg::new("exclude-structural")
            .long("exclude-structural")
            .action(ArgAction::SetTrue)
            .help("Skip variants with an allele longer than one base"),
    ]
}

///
/// Read the config file if one was given, then apply naming and header flags on top.
///
pub fn run_config(matches: &ArgMatches) -> Result<RunConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RunConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => RunConfig::default(),
    };

    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config.naming.prefix = prefix.clone();
    }
    if let Some(suffix) = matches.get_one::<String>("suffix") {
        config.naming.suffix = suffix.clone();
    }
    if let Some(layout) = matches.get_one::<String>("header") {
        config.header = Some(HeaderLayout::from_str(layout)?);
    }

    Ok(config)
}

pub fn lookup_strategy(matches: &ArgMatches) -> Result<LookupStrategy> {
    Ok(match matches.get_one::<String>("strategy") {
        Some(strategy) => LookupStrategy::from_str(strategy)?,
        None => DEFAULT_STRATEGY,
    })
}

pub fn report_options(matches: &ArgMatches) -> Result<ReportOptions> {
    let config = run_config(matches)?;

    Ok(ReportOptions {
        naming: config.naming,
        layout: config.header.unwrap_or_default(),
        exclude_structural: matches.get_flag("exclude-structural"),
    })
}

///
/// Open the external MAF reference, if one was given. A cursor only moves
/// forward, so every pass over a folder needs a freshly opened one; see
/// [LookupStrategy::is_reusable].
///
pub fn open_maf_source(matches: &ArgMatches) -> Result<Option<Box<dyn MafLookup>>> {
    let Some(reference) = matches.get_one::<String>("maf-source") else {
        return Ok(None);
    };

    let strategy = lookup_strategy(matches)?;
    let lookup = open_lookup(strategy, Path::new(reference))
        .with_context(|| format!("Failed to open MAF reference {}", reference))?;

    Ok(Some(lookup))
}

pub fn write_report(table: &ReportTable, matches: &ArgMatches) -> Result<()> {
    let format = match matches.get_one::<String>("format") {
        Some(format) => OutputFormat::from_str(format)?,
        None => OutputFormat::default(),
    };

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    if output == "-" {
        let mut stdout = io::stdout().lock();
        table.write(format, &mut stdout)?;
        stdout.flush()?;
    } else {
        table
            .write_to_path(format, Path::new(output))
            .with_context(|| format!("Failed to write report to {}", output))?;
    }

    Ok(())
}
