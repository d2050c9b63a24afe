use std::fmt::{self, Display};

///
/// One line of a MAF reference: `chromosome position maf [major minor]`.
///
/// The allele columns are only present in references meant for the
/// sequential join; the random access index reads the first three columns.
///
#[derive(Debug, Clone, PartialEq)]
pub struct MafRecord {
    pub chromosome: String,
    pub position: u64,
    pub maf: f64,
    pub major_allele: Option<String>,
    pub minor_allele: Option<String>,
}

impl MafRecord {
    ///
    /// Parse a reference line. Returns a human readable reason on failure so
    /// callers can attach the line number.
    ///
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut fields = line.split_whitespace();

        let chromosome = fields
            .next()
            .ok_or_else(|| "empty line".to_string())?
            .to_string();

        let position = fields
            .next()
            .ok_or_else(|| format!("missing position column: '{}'", line.trim()))?;
        let position = position
            .parse::<u64>()
            .map_err(|e| format!("cannot parse position '{}': {}", position, e))?;

        let maf = fields
            .next()
            .ok_or_else(|| format!("missing MAF column: '{}'", line.trim()))?;
        let maf = maf
            .parse::<f64>()
            .map_err(|e| format!("cannot parse MAF '{}': {}", maf, e))?;

        let major_allele = fields.next().map(str::to_string);
        let minor_allele = fields.next().map(str::to_string);

        Ok(MafRecord {
            chromosome,
            position,
            maf,
            major_allele,
            minor_allele,
        })
    }
}

impl Display for MafRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chromosome, self.position, self.maf)?;
        if let (Some(major), Some(minor)) = (&self.major_allele, &self.minor_allele) {
            write!(f, "\t{}\t{}", major, minor)?;
        }
        Ok(())
    }
}
