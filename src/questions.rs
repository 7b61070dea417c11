//! Question-definition parsing.
//!
//! The definitions file is a line-oriented text. A header line such as
//! `3. Prompt text` opens a question; option lines such as `a) Red` attach to
//! the open question; everything else is skipped. Parsing is a two-state
//! machine (idle / accumulating) driven by [`classify_line`], which is the one
//! place every leniency decision lives.

use std::{fs, io, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AvaliaError;

/// Tag on a header line marking a multiple-choice question.
pub const MULTIPLE_CHOICE_TAG: &str = "[MULTIPLA_ESCOLHA]";

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\. (.*)$").unwrap());
static OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-jA-J]\) ").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionKind {
    #[default]
    Open,
    MultipleChoice,
}

/// One parsed question. Immutable after parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The number written on the header line. Shown to users, never used as
    /// a lookup index.
    pub ordinal: u32,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Option lines exactly as written (letter, `) `, text), in file order.
    /// Only meaningful for multiple choice; emptiness is not enforced.
    pub options: Vec<String>,
}

/// How a single definitions line is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Blank line or comment; no state change.
    Skip,
    /// Opens a new question, finalizing any accumulating one.
    Header {
        ordinal: u32,
        text: String,
        kind: QuestionKind,
    },
    /// The trimmed option line, attached while a question is accumulating.
    Option(String),
    /// Any other line; silently dropped.
    Other,
}

/// Classifies one line of the definitions source.
///
/// Every permissive choice of the grammar is concentrated here: malformed
/// lines classify as `Other` and are dropped rather than rejected, and option
/// lines outside a question are dropped by the state machine.
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LineClass::Skip;
    }
    if let Some(caps) = HEADER.captures(line) {
        if let Ok(ordinal) = caps[1].parse() {
            let raw = &caps[2];
            let (text, kind) = if raw.contains(MULTIPLE_CHOICE_TAG) {
                (
                    raw.replace(MULTIPLE_CHOICE_TAG, "").trim().to_string(),
                    QuestionKind::MultipleChoice,
                )
            } else {
                (raw.to_string(), QuestionKind::Open)
            };
            return LineClass::Header {
                ordinal,
                text,
                kind,
            };
        }
    }
    if OPTION.is_match(trimmed) {
        return LineClass::Option(trimmed.to_string());
    }
    LineClass::Other
}

/// The ordered, immutable question sequence, indexed by parse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Loads the definitions file. Unlike the config, an absent file is fatal:
    /// there is no sensible empty-question fallback.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AvaliaError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AvaliaError::QuestionsNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AvaliaError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::from_source(&source))
    }

    /// Parses definitions text. Structurally this never fails; a multiple
    /// choice question that collected zero options is accepted as-is.
    pub fn from_source(source: &str) -> Self {
        let mut questions = Vec::new();
        // None = idle, Some = accumulating.
        let mut current: Option<Question> = None;
        for line in source.lines() {
            match classify_line(line) {
                LineClass::Skip | LineClass::Other => {}
                LineClass::Header {
                    ordinal,
                    text,
                    kind,
                } => {
                    if let Some(done) = current.take() {
                        questions.push(done);
                    }
                    current = Some(Question {
                        ordinal,
                        prompt: text,
                        kind,
                        options: Vec::new(),
                    });
                }
                LineClass::Option(option) => {
                    if let Some(question) = current.as_mut() {
                        question.options.push(option);
                    }
                }
            }
        }
        if let Some(done) = current.take() {
            questions.push(done);
        }
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The prompt rendered as shown to users: `"<ordinal>. <text>"`.
    /// Empty string for an out-of-range index.
    pub fn prompt(&self, index: usize) -> String {
        self.get(index)
            .map(|q| format!("{}. {}", q.ordinal, q.prompt))
            .unwrap_or_default()
    }

    /// Open for an out-of-range index.
    pub fn kind(&self, index: usize) -> QuestionKind {
        self.get(index).map(|q| q.kind).unwrap_or_default()
    }

    /// Verbatim option lines; empty for open questions and out-of-range
    /// indices.
    pub fn options(&self, index: usize) -> &[String] {
        self.get(index).map(|q| q.options.as_slice()).unwrap_or(&[])
    }
}
