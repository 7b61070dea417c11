//! Transcript rendering and the append-only response log.
//!
//! A submission is reconciled against the parsed questions into one
//! banner-delimited text block, then appended whole to the log file. Records
//! are never rewritten or reordered after the append.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use chrono::{DateTime, Local};
use log::info;
use serde::Deserialize;

use crate::{
    errors::AvaliaError,
    questions::{QuestionKind, QuestionSet},
};

const BANNER_WIDTH: usize = 100;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One submitted response, decoded from the wire format
/// `{"nome": ..., "respostas": [...]}`.
///
/// The answer count is deliberately not validated against the question count;
/// see [`render_transcript`].
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "respostas")]
    pub answers: Vec<String>,
}

impl Submission {
    /// Decodes a JSON payload. A missing `nome` or `respostas` field is the
    /// boundary's required-field rejection; nothing gets written in that case.
    pub fn from_json(payload: &str) -> Result<Self, AvaliaError> {
        serde_json::from_str(payload).map_err(|e| AvaliaError::InvalidSubmission {
            reason: e.to_string(),
        })
    }
}

/// Renders one transcript record.
///
/// Iteration is driven by the submitted answers: fewer answers than questions
/// gives a partial transcript, and an answer index with no matching question
/// is skipped outright. Per-answer problems (bad choice index) render a
/// placeholder and never abort the record.
pub fn render_transcript(
    questions: &QuestionSet,
    submission: &Submission,
    timestamp: DateTime<Local>,
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut record = String::new();
    record.push('\n');
    record.push_str(&banner);
    record.push('\n');
    record.push_str(&format!(
        "DATA/HORA: {}\n",
        timestamp.format(TIMESTAMP_FORMAT)
    ));
    record.push_str(&format!("NOME: {}\n", submission.name));
    record.push_str(&format!(
        "TOTAL DE RESPOSTAS: {}/{}\n",
        submission.answers.len(),
        questions.len()
    ));
    record.push_str(&banner);
    record.push_str("\n\n");

    for (index, answer) in submission.answers.iter().enumerate() {
        if questions.get(index).is_none() {
            continue;
        }
        record.push_str(&questions.prompt(index));
        record.push('\n');
        record.push_str(&format!(
            "RESPOSTA: {}\n\n",
            render_answer(questions, index, answer)
        ));
    }
    record
}

fn render_answer(questions: &QuestionSet, index: usize, answer: &str) -> String {
    match questions.kind(index) {
        QuestionKind::Open => answer.to_string(),
        QuestionKind::MultipleChoice => {
            let options = questions.options(index);
            match answer.trim().parse::<usize>() {
                Ok(choice) if choice < options.len() => options[choice].clone(),
                _ => format!("[Alternativa inválida: {}]", answer),
            }
        }
    }
}

/// The durable, write-only response log.
///
/// Appends are serialized through an internal lock so that two records can
/// never interleave their banners when the log is shared across threads.
#[derive(Debug)]
pub struct TranscriptLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl TranscriptLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one whole record: open in append mode, write, close.
    /// Existing content is never truncated.
    pub fn append(&self, record: &str) -> Result<(), AvaliaError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let append_error = |source| AvaliaError::LogAppend {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_error)?;
        file.write_all(record.as_bytes()).map_err(append_error)
    }
}

/// Ties the loaded question set to the log: the `record` operation the
/// boundary layer calls once per submission.
#[derive(Debug)]
pub struct Recorder {
    questions: QuestionSet,
    log: TranscriptLog,
}

impl Recorder {
    pub fn new(questions: QuestionSet, log: TranscriptLog) -> Self {
        Self { questions, log }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Renders the submission against the question set and appends it.
    pub fn record(&self, submission: &Submission) -> Result<(), AvaliaError> {
        let record = render_transcript(&self.questions, submission, Local::now());
        self.log.append(&record)?;
        info!("recorded submission from {}", submission.name);
        Ok(())
    }
}
