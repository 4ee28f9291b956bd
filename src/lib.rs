//! Deppairs: governor/dependent pairs from XML dependency treebanks
//!
//! Reads a SynTagRus-style corpus (a directory tree of XML documents whose
//! words carry morphological tags and a head index) and writes every
//! dependency as a (governor lemma, dependent lemma, governor POS,
//! dependent POS) row to periodically checkpointed CSV files.

pub mod checkpoint; // CSV checkpoint files
pub mod config; // Run configuration
pub mod corpus; // Directory walk, per-file outcomes, checkpoint cadence
pub mod document; // XML document parsing
pub mod error; // Error taxonomy
pub mod features; // Morphological and relation tag translation
pub mod pairs; // Governor/dependent pair extraction
pub mod tree; // Sentence data structures

// Re-exports for convenience
pub use checkpoint::CheckpointWriter;
pub use config::Config;
pub use corpus::{Corpus, FileReport, WalkSummary};
pub use document::{DocumentParser, read_document};
pub use error::{CheckpointError, ExtractError, FailureKind, FileError, ParseError};
pub use features::{Features, refine_pos, translate_feature, translate_link};
pub use pairs::{PairRow, PairTable, extract_pairs};
pub use tree::{Sentence, Token, Word};
