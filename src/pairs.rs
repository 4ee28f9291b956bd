//! Governor/dependent pair extraction
//!
//! Every non-root word yields one `PairRow` linking it to the word at its
//! governor position. Rows are collected per document first, so a document
//! with a dangling governor contributes nothing.

use crate::error::ExtractError;
use crate::tree::{Sentence, Word};
use serde::Serialize;

/// One output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRow {
    pub governor_lemma: String,
    pub dependent_lemma: String,
    pub governor_pos: String,
    pub dependent_pos: String,
}

impl PairRow {
    pub const HEADER: [&'static str; 4] = [
        "governor_lemma",
        "dependent_lemma",
        "governor_pos",
        "dependent_pos",
    ];

    pub fn new(governor: &Word, dependent: &Word) -> Self {
        Self {
            governor_lemma: governor.lemma.clone(),
            dependent_lemma: dependent.lemma.clone(),
            governor_pos: governor.pos.clone(),
            dependent_pos: dependent.pos.clone(),
        }
    }
}

/// Extract the pairs of one sentence. `index` is the 1-based sentence
/// number, used only in error messages.
pub fn sentence_pairs(sentence: &Sentence, index: usize) -> Result<Vec<PairRow>, ExtractError> {
    let mut rows = Vec::new();
    for (position, word) in sentence.words() {
        if let Some(governor) = sentence.governor_of(word, index, position)? {
            rows.push(PairRow::new(governor, word));
        }
    }
    Ok(rows)
}

/// Extract the pairs of a whole document, failing on the first dangling
/// governor.
pub fn extract_pairs(sentences: &[Sentence]) -> Result<Vec<PairRow>, ExtractError> {
    let mut rows = Vec::new();
    for (idx, sentence) in sentences.iter().enumerate() {
        rows.extend(sentence_pairs(sentence, idx + 1)?);
    }
    Ok(rows)
}

/// In-memory table accumulated between checkpoints
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    rows: Vec<PairRow>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: PairRow) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = PairRow>) {
        self.rows.extend(rows);
    }

    /// Number of rows since the last checkpoint
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PairRow] {
        &self.rows
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
