mod barplot;
mod common;
mod lineplot;
mod lookup;
mod remaf;

use anyhow::Result;
use clap::{ArgMatches, Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "snpstats";
    pub const BIN_NAME: &str = "snpstats";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Re-annotate per-chromosome snp-stats tables with reference MAFs and summarize info scores by MAF.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log debug output").global(true))
        .subcommand(remaf::cli::create_remaf_cli())
        .subcommand(lookup::cli::create_lookup_cli())
        .subcommand(lineplot::cli::create_lineplot_cli())
        .subcommand(barplot::cli::create_barplot_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_flag("verbose") {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // REMAF
        //
        Some((remaf::cli::REMAF_CMD, matches)) => {
            remaf::handlers::run_remaf(matches)?;
        }

        //
        // ONE-OFF MAF LOOKUP
        //
        Some((lookup::cli::LOOKUP_CMD, matches)) => {
            lookup::handlers::run_lookup(matches)?;
        }

        //
        // REPORTS
        //
        Some((lineplot::cli::LINEPLOT_CMD, matches)) => {
            lineplot::handlers::run_lineplot(matches)?;
        }
        Some((barplot::cli::BARPLOT_CMD, matches)) => {
            barplot::handlers::run_barplot(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
