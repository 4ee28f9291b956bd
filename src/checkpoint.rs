//! Checkpoint files
//!
//! Each checkpoint is a standalone CSV file holding only the rows collected
//! since the previous one. Files are truncated, never appended to.

use crate::error::CheckpointError;
use crate::pairs::{PairRow, PairTable};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CheckpointWriter {
    output_dir: PathBuf,
    prefix: String,
}

impl CheckpointWriter {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    /// `<output_dir>/<prefix>_<label>.csv`
    pub fn path_for(&self, label: usize) -> PathBuf {
        self.output_dir.join(format!("{}_{}.csv", self.prefix, label))
    }

    /// Write `table` to the checkpoint file for `label`, then clear it.
    ///
    /// On error the table is left untouched.
    pub fn flush(&self, table: &mut PairTable, label: usize) -> Result<PathBuf, CheckpointError> {
        let path = self.path_for(label);
        write_rows(&path, table.rows())?;
        log::debug!("wrote {} rows to {}", table.len(), path.display());
        table.clear();
        Ok(path)
    }
}

fn write_rows(path: &Path, rows: &[PairRow]) -> Result<(), CheckpointError> {
    let csv_error = |source| CheckpointError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| CheckpointError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    // The header is written by hand so that empty tables still get one
    writer.write_record(PairRow::HEADER).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| CheckpointError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row(governor: &str, dependent: &str) -> PairRow {
        PairRow {
            governor_lemma: governor.to_string(),
            dependent_lemma: dependent.to_string(),
            governor_pos: "V".to_string(),
            dependent_pos: "S".to_string(),
        }
    }

    #[test]
    fn test_path_for() {
        let writer = CheckpointWriter::new("out", "syntagrus_lemma");
        assert_eq!(
            writer.path_for(20),
            Path::new("out").join("syntagrus_lemma_20.csv")
        );
    }

    #[test]
    fn test_flush_writes_and_clears() {
        let dir = tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path(), "pairs");

        let mut table = PairTable::new();
        table.push(row("спать", "кот"));
        table.push(row("читать", "книга, \"новая\""));

        let path = writer.flush(&mut table, 10).unwrap();
        assert_eq!(path, dir.path().join("pairs_10.csv"));
        assert!(table.is_empty());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "governor_lemma,dependent_lemma,governor_pos,dependent_pos\n\
             спать,кот,V,S\n\
             читать,\"книга, \"\"новая\"\"\",V,S\n"
        );
    }

    #[test]
    fn test_flush_empty_table_writes_header() {
        let dir = tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path(), "pairs");

        let path = writer.flush(&mut PairTable::new(), 0).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "governor_lemma,dependent_lemma,governor_pos,dependent_pos\n"
        );
    }

    #[test]
    fn test_flush_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path(), "pairs");

        let mut table = PairTable::new();
        table.extend(vec![row("a", "b"), row("c", "d")]);
        writer.flush(&mut table, 10).unwrap();

        table.push(row("e", "f"));
        let path = writer.flush(&mut table, 10).unwrap();

        let mut reader = csv::Reader::from_path(path).unwrap();
        let records: Vec<_> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "e");
    }

    #[test]
    fn test_flush_into_missing_dir_fails_and_keeps_rows() {
        let dir = tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path().join("missing"), "pairs");

        let mut table = PairTable::new();
        table.push(row("a", "b"));

        let err = writer.flush(&mut table, 10).unwrap_err();
        assert!(matches!(err, CheckpointError::Io { .. }));
        assert_eq!(table.len(), 1);
    }
}
