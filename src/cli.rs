//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. It stands in for the web boundary: the same
//! startup sequence (config first, then the mandatory questions) and the same
//! `record` operation a request handler would call.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use log::info;

use crate::{
    config::Config,
    errors::print_error,
    questions::{QuestionKind, QuestionSet},
    transcript::{Recorder, Submission, TranscriptLog},
    AvaliaError,
};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "avalia",
    version,
    about = "Collects training-assessment responses into an append-only transcript log."
)]
pub struct AvaliaArgs {
    /// Path to the question definitions file.
    #[arg(long, default_value = "perguntas.txt")]
    pub questions: PathBuf,

    /// Path to the optional config file.
    #[arg(long, default_value = "config.txt")]
    pub config: PathBuf,

    /// Path to the transcript log.
    #[arg(long, default_value = "respostas.txt")]
    pub log: PathBuf,

    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Parse the definitions file and list every question.
    Questions,
    /// Show the resolved institution and color configuration.
    Config,
    /// Decode a JSON submission and append its transcript to the log.
    Record {
        /// Path to the submission JSON, or `-` to read stdin.
        #[arg(required = true)]
        file: PathBuf,
    },
}

/// The main entry point for the CLI.
pub fn run() {
    pretty_env_logger::init();
    let args = AvaliaArgs::parse();

    match args.command {
        ArgsCommand::Questions => {
            let questions = load_questions_or_exit(&args.questions);
            print_questions(&questions);
        }

        ArgsCommand::Config => {
            let config = Config::load(&args.config);
            print_config(&config);
        }

        ArgsCommand::Record { file } => {
            let questions = load_questions_or_exit(&args.questions);
            info!(
                "{} questions loaded from {}",
                questions.len(),
                args.questions.display()
            );
            let recorder = Recorder::new(questions, TranscriptLog::new(args.log));
            if let Err(e) = record_from_file(&recorder, &file) {
                print_error(e);
                process::exit(1);
            }
        }
    }
}

fn load_questions_or_exit(path: &Path) -> QuestionSet {
    QuestionSet::load(path).unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    })
}

fn record_from_file(recorder: &Recorder, file: &Path) -> Result<(), AvaliaError> {
    let payload = read_payload(file)?;
    let submission = Submission::from_json(&payload)?;
    recorder.record(&submission)?;
    println!("Resposta registrada: {}", submission.name);
    Ok(())
}

fn read_payload(file: &Path) -> Result<String, AvaliaError> {
    let read_error = |source| AvaliaError::Read {
        path: file.to_path_buf(),
        source,
    };
    if file == Path::new("-") {
        let mut payload = String::new();
        io::stdin().read_to_string(&mut payload).map_err(read_error)?;
        Ok(payload)
    } else {
        fs::read_to_string(file).map_err(read_error)
    }
}

fn print_questions(questions: &QuestionSet) {
    if questions.is_empty() {
        println!("(no questions)");
        return;
    }

    println!("{} perguntas carregadas", questions.len());
    for index in 0..questions.len() {
        match questions.kind(index) {
            QuestionKind::Open => println!("{}", questions.prompt(index)),
            QuestionKind::MultipleChoice => {
                println!("{} [múltipla escolha]", questions.prompt(index));
                for option in questions.options(index) {
                    println!("   {}", option);
                }
            }
        }
    }
}

fn print_config(config: &Config) {
    println!("Instituição: {}", config.institution);
    println!(
        "Cor: {} (RGB: {}, {}, {})",
        config.color, config.color_rgb.0, config.color_rgb.1, config.color_rgb.2
    );
}
