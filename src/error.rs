// Errors surfaced by the convop command
//
// Declined rewrites are never errors; only problems reading, lexing or
// parsing the input end up here.

use rewrite::ReparseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing the input file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The lexer rejected characters (already reported with code E002)
    #[error("{file}: {count} invalid character(s)")]
    Lex { file: String, count: usize },

    /// The parser failed (already reported with code E001)
    #[error("{file}: {count} parse error(s)")]
    Parse { file: String, count: usize },

    /// Splicing rewrites into the source produced text that no longer parses
    #[error("{file}: {source}")]
    Reparse {
        file: String,
        #[source]
        source: ReparseError,
    },

    /// Writing diagnostics to stderr failed
    #[error("cannot write diagnostics: {0}")]
    Report(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error. 1 is reserved for `--check` finding rewrites,
    /// 2 for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } | CliError::Report(_) => 3,
            CliError::Lex { .. } => 4,
            CliError::Parse { .. } => 5,
            CliError::Reparse { .. } => 6,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
