use thiserror::Error;

/// Errors raised by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading numerals from a file failed.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Reading numerals from stdin failed.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    /// One or more inputs were rejected in strict mode.
    #[error("{rejected} of {total} numerals rejected in strict mode")]
    StrictRejections {
        /// Number of rejected inputs.
        rejected: usize,
        /// Number of inputs processed.
        total: usize,
    },
}
