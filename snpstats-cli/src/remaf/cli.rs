use clap::{Command, arg};

use crate::common::{naming_args, strategy_arg};

pub use snpstats_remaf::consts::*;

pub fn create_remaf_cli() -> Command {
    Command::new(REMAF_CMD)
        .about("Replace the MAF column of per-chromosome snp-stats tables with MAFs from a sorted reference.")
        .arg_required_else_help(true)
        .arg(arg!(<input> "Folder holding the chr1..chr22 snp-stats tables"))
        .arg(arg!(<reference> "MAF reference: chromosome, position, MAF[, major, minor] per line"))
        .arg(arg!(--output <output> "Folder for the updated tables"))
        .arg(strategy_arg())
        .args(naming_args())
}
