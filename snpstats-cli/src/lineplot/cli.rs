use clap::{Arg, Command};

use crate::common::{naming_args, report_args, strategy_arg};

pub use snpstats_bins::consts::LINEPLOT_CMD;

pub fn create_lineplot_cli() -> Command {
    Command::new(LINEPLOT_CMD)
        .about("Mean info score per MAF bin for one or more collections of snp-stats tables.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("collections")
                .value_name("name=folder")
                .num_args(1..)
                .required(true)
                .help("Collections to compare, as name=folder or just folder"),
        )
        .args(report_args())
        .arg(strategy_arg())
        .args(naming_args())
}
