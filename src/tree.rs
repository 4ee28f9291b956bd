//! Sentence data structures
//!
//! A sentence is a flat, ordered list of tokens. Dependency structure is
//! encoded by each word's 1-based `governor` position within the same
//! sentence, with 0 marking the root.

use crate::error::ExtractError;
use crate::features::Features;

/// 1-based position of a word within its sentence (0 = root)
pub type Position = usize;

/// Morphosyntactic record for one `<W>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub pos: String,
    pub governor: Position,
    pub features: Features,
    pub id: usize,
    pub lemma: String,
    pub link: Option<String>,
}

impl Word {
    pub fn is_root(&self) -> bool {
        self.governor == 0
    }
}

/// A word paired with its surface form
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub form: String,
    pub word: Word,
}

impl Token {
    pub fn new(form: impl Into<String>, word: Word) -> Self {
        Self {
            form: form.into(),
            word,
        }
    }
}

/// An ordered sequence of tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the word at a 1-based position
    pub fn word(&self, position: Position) -> Option<&Word> {
        position
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map(|token| &token.word)
    }

    /// Iterate over `(position, word)` with 1-based positions
    pub fn words(&self) -> impl Iterator<Item = (Position, &Word)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (idx + 1, &token.word))
    }

    /// Resolve the governor of `word`.
    ///
    /// Returns `Ok(None)` for the root and an error when the governor index
    /// points past the end of the sentence. `sentence` and `position` only
    /// label the error.
    pub fn governor_of(
        &self,
        word: &Word,
        sentence: usize,
        position: Position,
    ) -> Result<Option<&Word>, ExtractError> {
        if word.is_root() {
            return Ok(None);
        }
        self.word(word.governor)
            .map(Some)
            .ok_or(ExtractError::GovernorOutOfRange {
                sentence,
                position,
                governor: word.governor,
                len: self.len(),
            })
    }
}
