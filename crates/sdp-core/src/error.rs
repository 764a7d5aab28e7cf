use std::io;
use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a session description.
///
/// Every grammar violation is reported as [`Error::MalformedInput`]: an
/// unsplit or mis-shaped line, a missing or misordered mandatory field, a
/// field value that fails its own sub-grammar, or end of input while a
/// mandatory field is still expected. Parsing is all-or-nothing; no partial
/// session description is ever produced alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// The input violates the RFC 4566 grammar
    #[error("malformed SDP: {0}")]
    MalformedInput(String),

    /// Reading from the caller-supplied stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&'a str>>) -> Self {
        Error::MalformedInput(format!("parsing failed: {err}"))
    }
}
