use clap::{Command, arg, value_parser};

pub use snpstats_remaf::consts::LOOKUP_CMD;

pub fn create_lookup_cli() -> Command {
    Command::new(LOOKUP_CMD)
        .about("Look up the MAF of one position in an uncompressed, sorted MAF reference.")
        .arg_required_else_help(true)
        .arg(arg!(<reference> "MAF reference: chromosome, position, MAF[, major, minor] per line"))
        .arg(arg!(<chromosome> "Chromosome, with or without the chr prefix"))
        .arg(arg!(<position> "Position on the chromosome").value_parser(value_parser!(u64)))
}
