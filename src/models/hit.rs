// file: src/models/hit.rs
// description: positional token arrays returned for each hit
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Match,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Match => "match",
            Side::Right => "right",
        }
    }
}

/// One side of a hit. The four arrays are index-aligned: `punct[i]` is the
/// whitespace or punctuation that follows `word[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitTokenSpan {
    pub word: Vec<String>,
    pub punct: Vec<String>,
    pub lemma: Vec<String>,
    pub pos: Vec<String>,
}

impl HitTokenSpan {
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn validate(&self, side: Side) -> Result<()> {
        let n = self.word.len();
        if self.punct.len() != n || self.lemma.len() != n || self.pos.len() != n {
            return Err(CorpusError::MalformedSpan {
                side: side.as_str(),
                words: n,
                punct: self.punct.len(),
                lemmas: self.lemma.len(),
                pos: self.pos.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHit {
    #[serde(rename = "docPid")]
    pub doc_pid: String,
    pub start: i64,
    pub end: i64,
    pub left: HitTokenSpan,
    #[serde(rename = "match")]
    pub matched: HitTokenSpan,
    pub right: HitTokenSpan,
}

impl RawHit {
    pub fn span(&self, side: Side) -> &HitTokenSpan {
        match side {
            Side::Left => &self.left,
            Side::Match => &self.matched,
            Side::Right => &self.right,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for side in [Side::Left, Side::Match, Side::Right] {
            self.span(side).validate(side)?;
        }
        Ok(())
    }
}
