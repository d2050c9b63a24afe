use clap::{Command, arg, value_parser};

use crate::common::{naming_args, report_args, strategy_arg};

pub use snpstats_bins::consts::{BARPLOT_CMD, DEFAULT_INFO_THRESHOLDS};

pub fn create_barplot_cli() -> Command {
    Command::new(BARPLOT_CMD)
        .about("Variant counts per MAF bin, split into info score bands.")
        .arg_required_else_help(true)
        .arg(arg!(<folder> "Folder holding the chr1..chr22 snp-stats tables"))
        .arg(
            arg!(--thresholds <thresholds> "Comma separated info score band edges inside (0, 1) (default: 0.3,0.8)")
                .value_delimiter(',')
                .value_parser(value_parser!(f64)),
        )
        .args(report_args())
        .arg(strategy_arg())
        .args(naming_args())
}
