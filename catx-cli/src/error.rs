//! Error handling for CatX CLI

use catx_core::RangeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot encode configuration: {message}")]
    Config { message: String },

    #[error("Cannot read or write axis files: {message}")]
    Io { message: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid axis configuration in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Invalid factor range: {source}")]
    Range { source: RangeError },

    #[error("Axis could not be rendered: {message}")]
    Rendering { message: String },
}

impl CliError {
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn parse<S: Into<String>>(file: S, message: S) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    pub fn rendering<S: Into<String>>(message: S) -> Self {
        Self::Rendering { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string() }
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config { message: err.to_string() }
    }
}

impl From<RangeError> for CliError {
    fn from(source: RangeError) -> Self {
        Self::Range { source }
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Hints for fixing `catx.toml`, keyed on what went wrong.
fn hints(error: &CliError) -> &'static [&'static str] {
    match error {
        CliError::FileNotFound { .. } => &[
            "Pass --config with the path of an existing catx.toml",
            "Run 'catx config --example --out catx.toml' to start from a sample",
        ],
        CliError::Parse { .. } => &[
            "Factors are a string, or an array of 2 or 3 strings for nested groups",
            "Orientations are parallel, horizontal, vertical, normal, or an angle in radians",
            "Sides are above, below, left or right",
        ],
        CliError::Range { source: RangeError::NonContiguous(_) } => &[
            "List all factors of a group (or subgroup) next to each other",
        ],
        CliError::Range { source: RangeError::MixedLevels { .. } } => &[
            "Give every factor the same nesting depth",
        ],
        CliError::Range { source: RangeError::Duplicate(_) } => &[
            "Make sub-factors unique within their group",
        ],
        CliError::Range { source: RangeError::InvalidPadding(_) } => &[
            "Keep padding values finite and non-negative",
        ],
        _ => &[],
    }
}

pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();
    let hints = hints(error);
    if !hints.is_empty() {
        message.push_str("\n\nSuggestions:");
        for hint in hints {
            message.push_str("\n  • ");
            message.push_str(hint);
        }
    }
    message
}

pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
