use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::SnpStatsError;

///
/// The two column layouts a snp-stats table can declare in its header line.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderLayout {
    /// Includes `HW_exact_p_value` and `HW_lrt_p_value`.
    #[default]
    Standard,
    /// Hardy-Weinberg columns omitted; everything after `comment` shifts left by two.
    #[serde(alias = "no-hw")]
    WithoutHardyWeinberg,
}

impl HeaderLayout {
    pub fn header(&self) -> &'static str {
        match self {
            HeaderLayout::Standard => STANDARD_HEADER,
            HeaderLayout::WithoutHardyWeinberg => NO_HW_HEADER,
        }
    }

    pub fn alternate(&self) -> HeaderLayout {
        match self {
            HeaderLayout::Standard => HeaderLayout::WithoutHardyWeinberg,
            HeaderLayout::WithoutHardyWeinberg => HeaderLayout::Standard,
        }
    }

    ///
    /// Check whether a raw line is exactly this layout's header.
    ///
    /// Compares whitespace separated tokens, so line endings and
    /// the delimiter used (tab or space) do not matter.
    pub fn matches(&self, line: &str) -> bool {
        line.split_whitespace().eq(self.header().split_whitespace())
    }

    pub fn n_columns(&self) -> usize {
        self.header().split_whitespace().count()
    }
}

impl FromStr for HeaderLayout {
    type Err = SnpStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "hw" => Ok(HeaderLayout::Standard),
            "no-hw" | "nohw" | "without-hardy-weinberg" => Ok(HeaderLayout::WithoutHardyWeinberg),
            _ => Err(SnpStatsError::UnknownHeaderLayout(s.to_string())),
        }
    }
}

impl Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderLayout::Standard => write!(f, "standard"),
            HeaderLayout::WithoutHardyWeinberg => write!(f, "no-hw"),
        }
    }
}

///
/// Column indices of the fields a [crate::models::VariantRecord] exposes,
/// resolved from one [HeaderLayout].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    layout: HeaderLayout,
    pub chromosome: usize,
    pub position: usize,
    pub allele_a: usize,
    pub allele_b: usize,
    pub maf: usize,
    pub info: usize,
    pub missing_proportion: usize,
}

impl ColumnSchema {
    pub fn new(layout: HeaderLayout) -> Self {
        // every name below appears in both headers
        let index_of = |name: &str| column_index(layout, name).unwrap_or(usize::MAX);

        ColumnSchema {
            layout,
            chromosome: index_of(CHROMOSOME_COLUMN),
            position: index_of(POSITION_COLUMN),
            allele_a: index_of(ALLELE_A_COLUMN),
            allele_b: index_of(ALLELE_B_COLUMN),
            maf: index_of(MAF_COLUMN),
            info: index_of(INFO_COLUMN),
            missing_proportion: index_of(MISSING_PROPORTION_COLUMN),
        }
    }

    pub fn layout(&self) -> HeaderLayout {
        self.layout
    }

    pub fn header(&self) -> &'static str {
        self.layout.header()
    }

    /// Look up any column of the active layout by name.
    pub fn column(&self, name: &str) -> Option<usize> {
        column_index(self.layout, name)
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        ColumnSchema::new(HeaderLayout::default())
    }
}

impl From<HeaderLayout> for ColumnSchema {
    fn from(layout: HeaderLayout) -> Self {
        ColumnSchema::new(layout)
    }
}

fn column_index(layout: HeaderLayout, name: &str) -> Option<usize> {
    layout.header().split_whitespace().position(|column| column == name)
}
