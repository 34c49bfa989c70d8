use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use cars_parser::Record;

use crate::error::{Result, TransformError};

/// Serialize `records` as one JSON array at `path`.
///
/// The array is written to a sibling `<name>.tmp` file and renamed over
/// `path` once complete, so a failed write leaves any previous output intact.
pub fn write_records(path: &Path, records: &[Record], pretty: bool) -> Result<()> {
    let tmp_path = temporary_path(path)?;

    if let Err(err) = write_json(&tmp_path, records, pretty) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        TransformError::io(path, source)
    })
}

fn write_json(path: &Path, records: &[Record], pretty: bool) -> Result<()> {
    let file = File::create(path).map_err(|source| TransformError::io(path, source))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer
        .flush()
        .map_err(|source| TransformError::io(path, source))?;
    Ok(())
}

fn temporary_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        TransformError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
