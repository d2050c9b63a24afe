//! Helpers for comparing chromosome names across files that disagree on the `chr` prefix.
use std::cmp::Ordering;

use crate::consts::CHR_PREFIX;

///
/// Name of the nth autosome, e.g. `chr7`.
///
pub fn autosome_name(n: u8) -> String {
    format!("{CHR_PREFIX}{n}")
}

///
/// Strip a leading `chr` (any case) from a chromosome name.
///
/// `chr7`, `CHR7` and `7` all become `7`.
pub fn strip_chr_prefix(name: &str) -> &str {
    match name.get(..CHR_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(CHR_PREFIX) => &name[CHR_PREFIX.len()..],
        _ => name,
    }
}

pub fn same_chromosome(a: &str, b: &str) -> bool {
    strip_chr_prefix(a) == strip_chr_prefix(b)
}

///
/// Order two chromosome names numerically when both are plain autosome numbers.
///
/// Returns `None` when either name is not numeric (e.g. `chrX`), since the
/// relative order of such chromosomes depends on the file rather than the name.
pub fn compare_chromosomes(a: &str, b: &str) -> Option<Ordering> {
    let a = strip_chr_prefix(a).parse::<u32>().ok()?;
    let b = strip_chr_prefix(b).parse::<u32>().ok()?;
    Some(a.cmp(&b))
}
