//! Avalia error handling.
//!
//! One crate-wide error type. Optional inputs (config) degrade to defaults and
//! never surface here; mandatory inputs (the question definitions) and log
//! appends do.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AvaliaError {
    /// The definitions file is mandatory: there is no safe empty substitute,
    /// so startup aborts on this.
    #[error("questions file not found: {}", .path.display())]
    #[diagnostic(
        code(avalia::questions::not_found),
        help("create the definitions file or point --questions at its location")
    )]
    QuestionsNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(avalia::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append transcript to {}", .path.display())]
    #[diagnostic(code(avalia::transcript::append))]
    LogAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A submission payload missing a required field (`nome`, `respostas`).
    /// Rejected before any transcript write happens.
    #[error("invalid submission: {reason}")]
    #[diagnostic(code(avalia::submission::invalid))]
    InvalidSubmission { reason: String },
}

/// Prints an error with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: AvaliaError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
