use std::ops::RangeInclusive;

/// Header of a snp-stats table that carries Hardy-Weinberg columns.
pub const STANDARD_HEADER: &str = "alternate_ids rsid chromosome position alleleA alleleB comment HW_exact_p_value HW_lrt_p_value alleleA_count alleleB_count alleleA_frequency alleleB_frequency minor_allele_frequency minor_allele major_allele info impute_info missing_proportion A B AA AB BB NULL total";

/// Header of a snp-stats table written without Hardy-Weinberg columns.
pub const NO_HW_HEADER: &str = "alternate_ids rsid chromosome position alleleA alleleB comment alleleA_count alleleB_count alleleA_frequency alleleB_frequency minor_allele_frequency minor_allele major_allele info impute_info missing_proportion A B AA AB BB NULL total";

pub const CHROMOSOME_COLUMN: &str = "chromosome";
pub const POSITION_COLUMN: &str = "position";
pub const ALLELE_A_COLUMN: &str = "alleleA";
pub const ALLELE_B_COLUMN: &str = "alleleB";
pub const MAF_COLUMN: &str = "minor_allele_frequency";
pub const INFO_COLUMN: &str = "info";
pub const MISSING_PROPORTION_COLUMN: &str = "missing_proportion";

/// The autosomes every per-chromosome pass walks through, in order.
pub const AUTOSOMES: RangeInclusive<u8> = 1..=22;

pub const CHR_PREFIX: &str = "chr";
pub const DEFAULT_PREFIX: &str = "";
pub const DEFAULT_SUFFIX: &str = "-snp-stats.txt";

/// Written in place of a value that is absent (unparsable or not found in the reference).
pub const MISSING_VALUE: &str = "-1";
pub const MISSING_SENTINEL: f64 = -1.0;

pub const COMMENT_CHAR: char = '#';
