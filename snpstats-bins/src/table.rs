use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use snpstats_core::utils::get_dynamic_writer;

use crate::consts::BIN_COLUMN;
use crate::errors::{BinsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = BinsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(BinsError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub bin: String,
    pub values: Vec<Option<f64>>,
}

///
/// Bin labels by groups (collections or info bands), one number per cell.
/// Empty cells are written as an empty TSV field or `null` in JSON.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub groups: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(groups: Vec<String>) -> Self {
        ReportTable {
            groups,
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, bin: String, values: Vec<Option<f64>>) {
        self.rows.push(ReportRow { bin, values });
    }

    /// The value for a bin label and group name, if that cell is filled.
    pub fn get(&self, bin: &str, group: &str) -> Option<f64> {
        let column = self.groups.iter().position(|g| g == group)?;
        self.rows
            .iter()
            .find(|row| row.bin == bin)
            .and_then(|row| row.values.get(column).copied().flatten())
    }

    pub fn write_tsv<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}\t{}", BIN_COLUMN, self.groups.join("\t"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .values
                .iter()
                .map(|value| value.map(|v| v.to_string()).unwrap_or_default())
                .collect();
            writeln!(writer, "{}\t{}", row.bin, cells.join("\t"))?;
        }

        Ok(())
    }

    pub fn write_json<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn write<W: Write + ?Sized>(&self, format: OutputFormat, writer: &mut W) -> Result<()> {
        match format {
            OutputFormat::Tsv => self.write_tsv(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    ///
    /// Write the table to a file, gzipped if the name ends in `.gz`.
    ///
    pub fn write_to_path(&self, format: OutputFormat, path: &Path) -> Result<()> {
        let mut writer = get_dynamic_writer(path)?;
        self.write(format, &mut writer)?;
        writer.finish()?;
        Ok(())
    }
}
