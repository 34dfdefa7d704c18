use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::TadError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Iterate the data lines of a text file as `(line_number, line)`, skipping
/// blank lines and `#` comments. Line numbers are 1-based.
pub fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((idx + 1, line)))
                }
            }
            Err(e) => Some(Err(e)),
        })
}

/// Convert a user supplied window size into the core representation.
///
/// Zero and negative values are rejected.
pub fn checked_window_size(value: i64) -> Result<u32, TadError> {
    match u32::try_from(value) {
        Ok(window_size) if window_size > 0 => Ok(window_size),
        _ => Err(TadError::InvalidWindowSize(value)),
    }
}
