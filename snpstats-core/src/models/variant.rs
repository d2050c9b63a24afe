use std::fmt::{self, Display};

use crate::consts::MISSING_VALUE;
use crate::models::schema::ColumnSchema;
use crate::utils::parse_optional_f64;

///
/// One data line of a snp-stats table.
///
/// The raw tokens are kept as-is so the record can be written back out
/// unchanged apart from the MAF column, which the join may overwrite.
///
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    fields: Vec<String>,
    schema: ColumnSchema,
    maf: Option<f64>,
}

impl VariantRecord {
    ///
    /// Parse a whitespace delimited line. Never fails: numeric columns that
    /// can't be parsed are simply absent.
    ///
    pub fn parse(line: &str, schema: ColumnSchema) -> Self {
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let maf = fields
            .get(schema.maf)
            .and_then(|token| parse_optional_f64(token));

        VariantRecord {
            fields,
            schema,
            maf,
        }
    }

    fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn schema(&self) -> ColumnSchema {
        self.schema
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn chromosome(&self) -> &str {
        self.field(self.schema.chromosome)
    }

    pub fn position(&self) -> Option<u64> {
        self.field(self.schema.position).parse().ok()
    }

    pub fn allele_a(&self) -> &str {
        self.field(self.schema.allele_a)
    }

    pub fn allele_b(&self) -> &str {
        self.field(self.schema.allele_b)
    }

    pub fn info(&self) -> Option<f64> {
        parse_optional_f64(self.field(self.schema.info))
    }

    /// The current MAF: the table's own value unless the join replaced it.
    pub fn maf(&self) -> Option<f64> {
        self.maf
    }

    pub fn set_maf(&mut self, maf: Option<f64>) {
        self.maf = maf;
    }

    pub fn missing_proportion(&self) -> Option<f64> {
        parse_optional_f64(self.field(self.schema.missing_proportion))
    }

    ///
    /// A structural variant is any variant where either allele is not a single nucleotide.
    ///
    pub fn is_structural_variant(&self) -> bool {
        self.allele_a().chars().count() != 1 || self.allele_b().chars().count() != 1
    }

    ///
    /// Serialize back to a space delimited line (without a trailing newline),
    /// with the MAF column holding the current MAF or `-1` if it's absent.
    ///
    pub fn to_line(&self) -> String {
        let maf = self
            .maf
            .map_or_else(|| MISSING_VALUE.to_string(), |maf| maf.to_string());

        self.fields
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if index == self.schema.maf {
                    maf.as_str()
                } else {
                    token.as_str()
                }
            })
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}
