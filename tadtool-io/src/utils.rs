use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

pub(crate) fn is_npy(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("npy"))
}

///
/// Create `path` (and its parent directories) and hand a buffered writer to
/// `write`. The output is gzip compressed when `gzip` is set.
///
pub fn write_output<P, F>(path: P, gzip: bool, write: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;

    if gzip {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        write(&mut encoder)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
    }

    Ok(())
}

/// Text form of a value, `nan` when missing.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}
