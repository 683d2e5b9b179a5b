//! In-memory CSV table with whole-column access.
//!
//! Planning needs the frequency of every value in a column before any row
//! can be rewritten, so the table is loaded completely rather than streamed.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{
    io_utils,
    participle::{Replacements, apply_replacements},
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Column '{name}' not found (available: {available})")]
    UnknownColumn { name: String, available: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn load(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Self> {
        let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
        let headers = io_utils::reader_headers(&mut reader, encoding)
            .with_context(|| format!("Reading headers from {path:?}"))?;
        let mut rows = Vec::new();
        for (idx, record) in reader.byte_records().enumerate() {
            let record = record.with_context(|| format!("Reading row {}", idx + 2))?;
            let decoded = io_utils::decode_record(&record, encoding)
                .with_context(|| format!("Decoding row {}", idx + 2))?;
            rows.push(decoded);
        }
        debug!(
            "Loaded {} row(s) across {} column(s) from {:?}",
            rows.len(),
            headers.len(),
            path
        );
        Ok(Self { headers, rows })
    }

    pub fn save(&self, path: Option<&Path>, delimiter: u8) -> Result<()> {
        let mut writer = io_utils::open_csv_writer(path, delimiter)?;
        writer
            .write_record(self.headers.iter())
            .context("Writing output headers")?;
        for (idx, row) in self.rows.iter().enumerate() {
            writer
                .write_record(row.iter())
                .with_context(|| format!("Writing output row {}", idx + 2))?;
        }
        writer.flush().context("Flushing output writer")?;
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Result<usize, DatasetError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| DatasetError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.iter().map(|h| format!("'{h}'")).join(", "),
            })
    }

    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[column].as_str())
    }

    /// Rewrites `column` in one pass over the original values and returns how
    /// many cells changed.
    pub fn replace_column(&mut self, column: usize, replacements: &Replacements) -> usize {
        let original = self.column_values(column).collect::<Vec<_>>();
        let rewritten = apply_replacements(&original, replacements);
        let changed = original
            .iter()
            .zip(&rewritten)
            .filter(|(before, after)| **before != after.as_str())
            .count();
        for (row, value) in self.rows.iter_mut().zip(rewritten) {
            row[column] = value;
        }
        changed
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Dataset {
        Dataset {
            headers: vec!["id".to_string(), "participle".to_string()],
            rows: vec![
                vec!["1".to_string(), "geplaatsd".to_string()],
                vec!["2".to_string(), "geplaatst".to_string()],
                vec!["3".to_string(), "gewerkt".to_string()],
            ],
        }
    }

    #[test]
    fn column_index_reports_available_headers() {
        let dataset = sample();
        assert_eq!(dataset.column_index("participle").unwrap(), 1);
        let err = dataset.column_index("lemma").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Column 'lemma' not found (available: 'id', 'participle')"
        );
    }

    #[test]
    fn replace_column_touches_only_the_selected_column() {
        let mut dataset = sample();
        dataset.rows[0][0] = "geplaatsd".to_string();
        let replacements: Replacements =
            [("geplaatsd".to_string(), "geplaatst".to_string())].into();
        let changed = dataset.replace_column(1, &replacements);
        assert_eq!(changed, 1);
        assert_eq!(dataset.rows[0], vec!["geplaatsd", "geplaatst"]);
        assert_eq!(
            dataset.column_values(1).collect::<Vec<_>>(),
            vec!["geplaatst", "geplaatst", "gewerkt"]
        );
    }

    #[test]
    fn replace_column_does_not_chain_replacements() {
        let mut dataset = Dataset {
            headers: vec!["participle".to_string()],
            rows: vec![vec!["gewerkd".to_string()], vec!["gewerkt".to_string()]],
        };
        let replacements: Replacements = [
            ("gewerkd".to_string(), "gewerkt".to_string()),
            ("gewerkt".to_string(), "gewerkd".to_string()),
        ]
        .into();
        let changed = dataset.replace_column(0, &replacements);
        assert_eq!(changed, 2);
        assert_eq!(
            dataset.column_values(0).collect::<Vec<_>>(),
            vec!["gewerkt", "gewerkd"]
        );
    }

    #[test]
    fn replace_column_without_matches_changes_nothing() {
        let mut dataset = sample();
        let replacements: Replacements =
            [("gebeurd".to_string(), "gebeurt".to_string())].into();
        assert_eq!(dataset.replace_column(1, &replacements), 0);
        assert_eq!(dataset, sample());
    }

    #[test]
    fn load_rejects_ragged_rows() {
        let dir = tempdir().expect("temp dir");
        let input = dir.path().join("ragged.csv");
        fs::write(&input, "id,participle\n1,geplaatsd\n2\n").expect("write");
        let err = Dataset::load(&input, b',', UTF_8).unwrap_err();
        assert!(format!("{err:#}").contains("Reading row 3"));
    }

    #[test]
    fn load_and_save_round_trip_through_disk() {
        let dir = tempdir().expect("temp dir");
        let input = dir.path().join("in.csv");
        fs::write(&input, "id;participle\n1;geplaatsd\n2;\"met;puntkomma\"\n").expect("write");
        let dataset = Dataset::load(&input, b';', UTF_8).expect("load");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows[1][1], "met;puntkomma");

        let output = dir.path().join("out.csv");
        dataset.save(Some(&output), b';').expect("save");
        let written = fs::read_to_string(&output).expect("read back");
        assert_eq!(written, "id;participle\n1;geplaatsd\n2;\"met;puntkomma\"\n");
    }
}
