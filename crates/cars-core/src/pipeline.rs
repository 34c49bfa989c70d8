use std::io;
use std::path::{Path, PathBuf};

use cars_parser::{manufacturer_label, parse_file, Record};
use tracing::{debug, info};

use crate::config::TransformConfig;
use crate::error::{Result, TransformError};
use crate::output::write_records;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub files: usize,
    pub records: usize,
    /// Records per manufacturer label, in the order files were processed.
    pub makes: Vec<(String, usize)>,
}

impl TransformSummary {
    fn add_file(&mut self, make: String, records: usize) {
        self.files += 1;
        self.records += records;
        match self.makes.iter_mut().find(|(label, _)| *label == make) {
            Some((_, count)) => *count += records,
            None => self.makes.push((make, records)),
        }
    }
}

/// Read every file in `config.input_dir`, normalize its rows and write the
/// combined JSON array to `config.output_path`.
///
/// Any error aborts the run before the output file is touched.
pub fn process(config: &TransformConfig) -> Result<TransformSummary> {
    let options = config.parse_options();
    let files = list_input_files(&config.input_dir)?;
    info!(
        input_dir = %config.input_dir.display(),
        files = files.len(),
        "Starting cars transform"
    );

    let mut records: Vec<Record> = Vec::new();
    let mut summary = TransformSummary::default();

    for path in &files {
        let parsed = parse_file(path, &options)?;
        let make = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| manufacturer_label(name, &options.extension, &options.make_overrides))
            .unwrap_or_default();
        info!(
            file = %path.display(),
            make = %make,
            records = parsed.len(),
            "Parsed manufacturer file"
        );
        summary.add_file(make, parsed.len());
        records.extend(parsed);
    }

    write_records(&config.output_path, &records, config.pretty)?;
    info!(
        output = %config.output_path.display(),
        files = summary.files,
        records = summary.records,
        "Wrote combined output"
    );

    Ok(summary)
}

/// Regular files directly inside `dir`, sorted by path.
fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(dir).map_err(|source| TransformError::io(dir, source))?;
    if !metadata.is_dir() {
        return Err(TransformError::io(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "input path is not a directory"),
        ));
    }

    let dir_str = dir.to_str().ok_or_else(|| {
        TransformError::io(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "input path is not valid UTF-8"),
        )
    })?;
    let pattern = Path::new(&glob::Pattern::escape(dir_str)).join("*");
    let pattern_str = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob::glob(&pattern_str)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-file entry");
        }
    }
    files.sort();

    Ok(files)
}
