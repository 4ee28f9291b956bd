//! Run configuration
//!
//! Defaults reproduce the layout of the SynTagRus 2016 release: the corpus
//! under `./syntagrus/SynTagRus2016`, checkpoints in the working directory
//! named `syntagrus_lemma_<count>.csv`, one every 10 documents.

use std::path::PathBuf;

pub const DEFAULT_CORPUS_ROOT: &str = "./syntagrus/SynTagRus2016";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_PREFIX: &str = "syntagrus_lemma";
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory walked recursively for documents
    pub corpus_root: PathBuf,
    /// Directory receiving checkpoint files
    pub output_dir: PathBuf,
    /// Checkpoint file name prefix
    pub prefix: String,
    /// Successful documents between checkpoints
    pub checkpoint_interval: usize,
    /// Only visit files whose name ends with this suffix
    pub extension: Option<String>,
    /// Write the rows left over after the walk as a final checkpoint
    pub flush_remainder: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            extension: None,
            flush_remainder: false,
        }
    }
}

impl Config {
    pub fn new(corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// An interval of 0 is treated as 1
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval.max(1);
        self
    }

    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_flush_remainder(mut self, flush_remainder: bool) -> Self {
        self.flush_remainder = flush_remainder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.corpus_root, PathBuf::from("./syntagrus/SynTagRus2016"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.prefix, "syntagrus_lemma");
        assert_eq!(config.checkpoint_interval, 10);
        assert_eq!(config.extension, None);
        assert!(!config.flush_remainder);
    }

    #[test]
    fn test_builder() {
        let config = Config::new("corpus")
            .with_output_dir("out")
            .with_prefix("pairs")
            .with_checkpoint_interval(0)
            .with_extension(Some(".tgt".to_string()))
            .with_flush_remainder(true);

        assert_eq!(config.corpus_root, PathBuf::from("corpus"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.prefix, "pairs");
        assert_eq!(config.checkpoint_interval, 1);
        assert_eq!(config.extension.as_deref(), Some(".tgt"));
        assert!(config.flush_remainder);
    }
}
