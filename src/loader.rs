//! Tab-separated data loading.
//!
//! The expected input is a headered TSV with a `name` column (category label)
//! and a `number` column (numeric string). Any malformed row surfaces as a
//! [`LoadError`]; callers short-circuit rather than rendering partial data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::DataPoint;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tab-separated data: {0}")]
    Malformed(#[from] csv::Error),

    #[error("header row is missing required column `{0}`")]
    MissingColumn(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    number: f64,
}

/// Loads data points from a TSV file on disk.
pub fn load_tsv_path(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, LoadError> {
    let file = File::open(path.as_ref())?;
    load_tsv_reader(file)
}

/// Loads data points from any byte reader of headered TSV content.
pub fn load_tsv_reader<R: Read>(reader: R) -> Result<Vec<DataPoint>, LoadError> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    // An empty input has no header record; treat it as an empty dataset
    // rather than a missing-column failure.
    let headers = tsv.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    for column in ["name", "number"] {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut points = Vec::new();
    for row in tsv.deserialize::<RawRow>() {
        let row = row?;
        points.push(DataPoint::new(row.name, row.number));
    }

    debug!(rows = points.len(), "loaded tab-separated series");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_headered_rows() {
        let input = "name\tnumber\nalpha\t3\nbeta\t1.5\n";
        let points = load_tsv_reader(input.as_bytes()).expect("valid tsv");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "alpha");
        assert!((points[0].value - 3.0).abs() <= 1e-12);
        assert!((points[1].value - 1.5).abs() <= 1e-12);
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let input = "name\tnumber\nalpha\tnot-a-number\n";
        let error = load_tsv_reader(input.as_bytes()).expect_err("parse failure");
        assert!(matches!(error, LoadError::Malformed(_)));
    }

    #[test]
    fn missing_number_column_is_an_error() {
        let input = "name\tcount\nalpha\t3\n";
        let error = load_tsv_reader(input.as_bytes()).expect_err("missing column");
        assert!(matches!(error, LoadError::MissingColumn("number")));
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let points = load_tsv_reader("".as_bytes()).expect("empty input is valid");
        assert!(points.is_empty());
    }

    #[test]
    fn header_only_input_yields_empty_series() {
        let points = load_tsv_reader("name\tnumber\n".as_bytes()).expect("header only");
        assert!(points.is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "name\tnumber\tnote\nalpha\t3\tkept out\n";
        let points = load_tsv_reader(input.as_bytes()).expect("extra columns ok");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "alpha");
    }
}
