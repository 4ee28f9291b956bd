//! SynTagRus XML document parsing
//!
//! Parses XML treebank documents into sentences. A document contains `<S>`
//! elements, each holding `<W>` elements:
//!
//! ```xml
//! <S ID="1">
//!   <W DOM="2" FEAT="S ЕД МУЖ ИМ ОД" ID="1" LEMMA="Кот" LINK="предик">Кот</W>
//!   <W DOM="_root" FEAT="V НЕСОВ ИЗЪЯВ НЕПРОШ ЕД 3-Л" ID="2" LEMMA="спать">спит</W>
//! </S>
//! ```
//!
//! The parser is a single-pass state machine over `xml-rs` events. It does
//! not validate the schema: unknown elements are ignored and the text of a
//! word is whatever character data appears inside its `<W>` element.

use crate::error::{FileError, ParseError};
use crate::features::{refine_pos, translate_link};
use crate::tree::{Sentence, Token, Word};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

pub const SENTENCE: &str = "S";
pub const WORD: &str = "W";

const FEAT: &str = "FEAT";
const LEMMA: &str = "LEMMA";
const DOM: &str = "DOM";
const ID: &str = "ID";
const LINK: &str = "LINK";

/// `DOM` value marking the sentence root
pub const ROOT: &str = "_root";

/// Read a whole document into memory, gunzipping `.gz` files
pub fn read_document(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        MultiGzDecoder::new(file).read_to_string(&mut content)?;
    } else {
        file.read_to_string(&mut content)?;
    }
    Ok(content)
}

/// Transient state for one `parse` call
#[derive(Debug, Default)]
struct ParseState {
    sentences: Vec<Sentence>,
    sentence: Sentence,
    pending: Option<Word>,
    text: String,
}

impl ParseState {
    fn start_element(
        &mut self,
        name: &str,
        attributes: &[OwnedAttribute],
    ) -> Result<(), ParseError> {
        if name == WORD {
            self.pending = Some(parse_word(attributes)?);
            self.text.clear();
        }
        Ok(())
    }

    fn end_element(&mut self, name: &str) {
        match name {
            SENTENCE => self.sentences.push(std::mem::take(&mut self.sentence)),
            WORD => {
                if let Some(word) = self.pending.take() {
                    let form = std::mem::take(&mut self.text);
                    self.sentence.push(Token::new(form, word));
                }
            }
            _ => {}
        }
    }

    fn characters(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Reusable parser for SynTagRus XML documents
#[derive(Debug, Default)]
pub struct DocumentParser {
    state: ParseState,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete document into its sentences
    pub fn parse(&mut self, content: &str) -> Result<Vec<Sentence>, ParseError> {
        self.state = ParseState::default();

        for event in EventReader::from_str(content) {
            match event? {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => self.state.start_element(&name.local_name, &attributes)?,
                XmlEvent::EndElement { name } => self.state.end_element(&name.local_name),
                XmlEvent::Characters(text)
                | XmlEvent::Whitespace(text)
                | XmlEvent::CData(text) => self.state.characters(&text),
                _ => {}
            }
        }

        Ok(std::mem::take(&mut self.state.sentences))
    }

    /// Read and parse a document from disk
    pub fn parse_file(&mut self, path: &Path) -> Result<Vec<Sentence>, FileError> {
        let content = read_document(path).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content).map_err(|source| FileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn find_attribute<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name.local_name == name)
        .map(|attr| attr.value.as_str())
}

fn require_attribute<'a>(
    attributes: &'a [OwnedAttribute],
    name: &'static str,
) -> Result<&'a str, ParseError> {
    find_attribute(attributes, name).ok_or(ParseError::MissingAttribute {
        element: WORD,
        attribute: name,
    })
}

fn parse_index(value: &str, attribute: &'static str) -> Result<usize, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidAttribute {
        element: WORD,
        attribute,
        value: value.to_string(),
    })
}

/// Build a `Word` from the attributes of a `<W>` element
fn parse_word(attributes: &[OwnedAttribute]) -> Result<Word, ParseError> {
    let (pos, features) = refine_pos(
        find_attribute(attributes, FEAT)
            .unwrap_or_default()
            .split_whitespace(),
    );

    let lemma = find_attribute(attributes, LEMMA)
        .map(str::to_lowercase)
        .unwrap_or_default();

    let link = find_attribute(attributes, LINK).map(|tag| translate_link(tag).to_string());

    let governor = match require_attribute(attributes, DOM)? {
        ROOT => 0,
        value => parse_index(value, DOM)?,
    };

    let id = parse_index(require_attribute(attributes, ID)?, ID)?;

    Ok(Word {
        pos,
        governor,
        features,
        id,
        lemma,
        link,
    })
}
