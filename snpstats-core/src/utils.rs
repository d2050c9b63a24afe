use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::consts::MISSING_SENTINEL;
use crate::errors::{Result, SnpStatsError};

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|source| SnpStatsError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// A buffered file writer that gzips its output when the target ends in `.gz`.
///
/// Call [DynamicWriter::finish] once done so that the gzip trailer is written
/// and any flush error surfaces instead of being swallowed on drop.
pub enum DynamicWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl DynamicWriter {
    pub fn finish(self) -> io::Result<()> {
        match self {
            DynamicWriter::Plain(mut writer) => writer.flush(),
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DynamicWriter::Plain(writer) => writer.write(buf),
            DynamicWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DynamicWriter::Plain(writer) => writer.flush(),
            DynamicWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

///
/// Get a writer for a file, creating parent directories as needed.
/// Files ending in `.gz` are gzip compressed.
///
/// # Arguments
///
/// - path: path to the file to write
///
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    let create_error = |source| SnpStatsError::FileCreate {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(create_error)?;
    }

    let file = BufWriter::new(File::create(path).map_err(create_error)?);

    Ok(match is_gzipped(path) {
        true => DynamicWriter::Gzip(GzEncoder::new(file, Compression::default())),
        false => DynamicWriter::Plain(file),
    })
}

///
/// Parse a float column, treating anything unparsable, non-finite, or equal to
/// the on-disk missing sentinel (`-1`) as absent.
///
pub fn parse_optional_f64(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != MISSING_SENTINEL)
}
