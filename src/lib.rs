pub use crate::errors::{print_error, AvaliaError};

pub mod cli;
pub mod config;
pub mod errors;
pub mod questions;
pub mod transcript;
