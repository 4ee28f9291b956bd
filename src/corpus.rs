//! Corpus traversal
//!
//! Walks a directory tree, turns every document into pair rows and
//! checkpoints the accumulated table every `checkpoint_interval` successful
//! documents. A document that fails in any way contributes no rows and is
//! counted and skipped; a checkpoint that cannot be written stops the walk.

use crate::checkpoint::CheckpointWriter;
use crate::config::Config;
use crate::document::DocumentParser;
use crate::error::{CheckpointError, FailureKind, FileError};
use crate::pairs::{PairTable, extract_pairs};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of a successfully processed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub sentences: usize,
    pub pairs: usize,
}

/// Running totals for a walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: FxHashMap<FailureKind, usize>,
    pub sentences: usize,
    pub pairs: usize,
    pub checkpoints: Vec<PathBuf>,
}

impl WalkSummary {
    pub fn failures_of(&self, kind: FailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    fn record_success(&mut self, report: &FileReport) {
        self.succeeded += 1;
        self.sentences += report.sentences;
        self.pairs += report.pairs;
    }

    fn record_failure(&mut self, kind: FailureKind) {
        self.failed += 1;
        *self.failures.entry(kind).or_default() += 1;
    }
}

/// A treebank directory being converted into pair tables
///
/// # Examples
///
/// ```no_run
/// use deppairs::{Config, Corpus};
///
/// let mut corpus = Corpus::new(Config::new("syntagrus").with_output_dir("out"));
/// let summary = corpus.walk().unwrap();
/// println!("{} documents, {} failed", summary.succeeded, summary.failed);
/// ```
#[derive(Debug)]
pub struct Corpus {
    config: Config,
    parser: DocumentParser,
    writer: CheckpointWriter,
    table: PairTable,
    summary: WalkSummary,
}

impl Corpus {
    pub fn new(config: Config) -> Self {
        let writer = CheckpointWriter::new(&config.output_dir, &config.prefix);
        Self {
            config,
            parser: DocumentParser::new(),
            writer,
            table: PairTable::new(),
            summary: WalkSummary::default(),
        }
    }

    /// Rows accumulated since the last checkpoint
    pub fn table(&self) -> &PairTable {
        &self.table
    }

    pub fn summary(&self) -> &WalkSummary {
        &self.summary
    }

    /// Process every file under the corpus root.
    ///
    /// Each call starts from an empty table and fresh totals, so rows left
    /// over from a previous walk must be flushed before walking again.
    pub fn walk(&mut self) -> Result<WalkSummary, CheckpointError> {
        let root = self.config.corpus_root.clone();
        self.table.clear();
        self.summary = WalkSummary::default();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let path = match entry {
                // Follows symlinks, so linked directories are skipped too
                Ok(entry) if entry.path().is_dir() => continue,
                Ok(entry) => entry.into_path(),
                Err(err) => {
                    let path = err.path().unwrap_or(&root).to_path_buf();
                    self.record(Err(FileError::Io {
                        path,
                        source: err.into(),
                    }))?;
                    continue;
                }
            };

            if self.selects(&path) {
                let outcome = self.process_file(&path);
                self.record(outcome)?;
            }
        }

        if self.config.flush_remainder {
            self.flush()?;
        }

        Ok(self.summary.clone())
    }

    /// Parse one document and append its pairs to the table.
    ///
    /// Rows are only appended once the whole document has been parsed and
    /// every governor resolved.
    pub fn process_file(&mut self, path: &Path) -> Result<FileReport, FileError> {
        let sentences = self.parser.parse_file(path)?;
        let rows = extract_pairs(&sentences).map_err(|source| FileError::Extract {
            path: path.to_path_buf(),
            source,
        })?;

        let report = FileReport {
            path: path.to_path_buf(),
            sentences: sentences.len(),
            pairs: rows.len(),
        };
        self.table.extend(rows);
        Ok(report)
    }

    /// Write the rows collected since the last checkpoint, labelled with the
    /// number of successful documents so far.
    ///
    /// Does nothing and returns `None` when the table is empty, so a batch
    /// already checkpointed under the same label is never overwritten.
    pub fn flush(&mut self) -> Result<Option<PathBuf>, CheckpointError> {
        if self.table.is_empty() {
            return Ok(None);
        }
        self.checkpoint().map(Some)
    }

    fn checkpoint(&mut self) -> Result<PathBuf, CheckpointError> {
        let rows = self.table.len();
        let path = self.writer.flush(&mut self.table, self.summary.succeeded)?;
        log::info!("saved {} rows to {}", rows, path.display());
        self.summary.checkpoints.push(path.clone());
        Ok(path)
    }

    fn selects(&self, path: &Path) -> bool {
        match &self.config.extension {
            None => true,
            Some(extension) => path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(extension.as_str())),
        }
    }

    fn record(&mut self, outcome: Result<FileReport, FileError>) -> Result<(), CheckpointError> {
        match outcome {
            Ok(report) => {
                self.summary.record_success(&report);
                log::info!(
                    "[{}] {} ({} sentences, {} pairs)",
                    self.summary.succeeded,
                    report.path.display(),
                    report.sentences,
                    report.pairs
                );
                if self.summary.succeeded % self.config.checkpoint_interval.max(1) == 0 {
                    self.checkpoint()?;
                }
            }
            Err(err) => {
                self.summary.record_failure(err.kind());
                log::error!("{} - {}", err, err.kind().label());
            }
        }
        Ok(())
    }
}
