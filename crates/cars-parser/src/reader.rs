use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::errors::{ParseError, Result};
use crate::make::manufacturer_label;
use crate::model::{FieldValue, Record, RecordBuilder, MAKE_FIELD};

/// Per-file parsing rules shared by every source in a run.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub extension: String,
    pub make_overrides: BTreeMap<String, String>,
    pub integer_fields: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extension: "csv".to_string(),
            make_overrides: BTreeMap::from([("merc".to_string(), "mercedes".to_string())]),
            integer_fields: ["tax", "price", "mileage", "year"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Vec<Record>> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ParseError::InvalidFileName {
            path: path.to_path_buf(),
        })?;
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(file_name, file, options)
}

/// Parse one manufacturer's CSV. `source_name` is the file name the
/// manufacturer label is derived from.
pub fn parse_records<R: Read>(
    source_name: &str,
    reader: R,
    options: &ParseOptions,
) -> Result<Vec<Record>> {
    let make = manufacturer_label(source_name, &options.extension, &options.make_overrides);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);
    let header = csv_reader
        .headers()
        .map_err(|err| ParseError::csv(source_name, err))?
        .clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|err| ParseError::csv(source_name, err))?;
        records.push(build_record(source_name, &header, &row, &make, options)?);
    }

    Ok(records)
}

fn build_record(
    source_name: &str,
    header: &StringRecord,
    row: &StringRecord,
    make: &str,
    options: &ParseOptions,
) -> Result<Record> {
    let line = row.position().map(|pos| pos.line()).unwrap_or_default();

    let mut builder = RecordBuilder::default();
    for (name, value) in header.iter().zip(row.iter()) {
        builder.set(name.to_string(), FieldValue::from(value));
    }
    builder.set(MAKE_FIELD.to_string(), FieldValue::from(make));

    for field in &options.integer_fields {
        let Some(FieldValue::Text(text)) = builder.get(field) else {
            continue;
        };
        let value = coerce_integer(source_name, line, field, text)?;
        builder.set(field.clone(), FieldValue::Integer(value));
    }

    Ok(builder.build())
}

pub fn coerce_integer(source_name: &str, line: u64, field: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            source_name: source_name.to_string(),
            line,
            field: field.to_string(),
            value: value.to_string(),
        })
}
