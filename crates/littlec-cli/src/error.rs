//! Fatal errors of the `littlec` binary

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the tokenizer and make it exit non-zero
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be opened
    #[error("cannot open input file {} for reading: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed part way through
    #[error("failed reading {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the token listing failed
    #[error("failed writing tokens: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
