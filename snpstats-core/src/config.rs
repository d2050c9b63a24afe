use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SnpStatsError};
use crate::models::HeaderLayout;
use crate::naming::FileNaming;

///
/// Run options that can be kept in a TOML file instead of repeated on the command line.
///
/// ```toml
/// header = "no-hw"
///
/// [naming]
/// prefix = "cohort_"
/// suffix = "-snp-stats.txt.gz"
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub naming: FileNaming,
    /// Layout to assume before a header line is seen. Defaults to [HeaderLayout::Standard].
    pub header: Option<HeaderLayout>,
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SnpStatsError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
