use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chromosome::autosome_name;
use crate::consts::{DEFAULT_PREFIX, DEFAULT_SUFFIX};

///
/// How per-chromosome files are named inside a folder: `{prefix}chrN{suffix}`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNaming {
    pub prefix: String,
    pub suffix: String,
}

impl Default for FileNaming {
    fn default() -> Self {
        FileNaming {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl FileNaming {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        FileNaming {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn file_name(&self, chromosome: u8) -> String {
        format!("{}{}{}", self.prefix, autosome_name(chromosome), self.suffix)
    }

    pub fn path_in(&self, folder: &Path, chromosome: u8) -> PathBuf {
        folder.join(self.file_name(chromosome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_default_naming() {
        let naming = FileNaming::default();
        assert_eq!(naming.file_name(1), "chr1-snp-stats.txt");
        assert_eq!(
            naming.path_in(Path::new("/data/cohort"), 22),
            PathBuf::from("/data/cohort/chr22-snp-stats.txt")
        );
    }

    #[rstest]
    fn test_custom_naming() {
        let naming = FileNaming::new("ukb_", ".stats.gz");
        assert_eq!(naming.file_name(7), "ukb_chr7.stats.gz");
    }
}
