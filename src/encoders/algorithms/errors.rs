use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing an alphabet or rendering a digest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Fewer than two symbols survived tokenization.
    #[error("parse error: alphabet needs at least 2 symbols, found {found}")]
    AlphabetTooSmall { found: usize },
    /// The base does not fit the 32-bit divisor used by the long division.
    #[error("parse error: alphabet has {found} symbols, at most {max} are supported")]
    AlphabetTooLarge { found: usize, max: usize },
    /// A working buffer could not be reserved.
    #[error("allocation error: could not reserve {what}")]
    AllocationFailure { what: &'static str },
    /// The rendered symbols are not valid UTF-8 and a `String` was requested.
    #[error("render error: output is not valid UTF-8 (alphabet contains non-UTF-8 symbols)")]
    NonUtf8Output,
}

impl EncodeError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| EncodeError::AllocationFailure { what }
    }
}

/// Errors raised while turning rendered symbols back into digest bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("decode error: cannot decode empty input")]
    EmptyInput,
    /// No alphabet symbol starts at this byte offset.
    #[error("decode error: no alphabet symbol matches at byte {position}")]
    InvalidSymbol { position: usize },
    /// The decoded value needs more bytes than the requested tag length.
    #[error("decode error: value needs {needed} bytes but tag length is {tag_length}")]
    Overflow { needed: usize, tag_length: usize },
}

/// Failure reported by the hashing primitive, carried verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("hash error: {message}")]
pub struct HashError {
    pub message: String,
}

impl HashError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Top-level error for the hash-then-encode pipeline and its file collaborators.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_stage() {
        assert!(
            EncodeError::AlphabetTooSmall { found: 1 }
                .to_string()
                .starts_with("parse error")
        );
        assert!(
            EncodeError::AllocationFailure { what: "digits" }
                .to_string()
                .starts_with("allocation error")
        );
        assert_eq!(
            HashError::new("salt is too short").to_string(),
            "hash error: salt is too short"
        );

        let err = Error::io("nonce.txt")(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.to_string(), "I/O error on nonce.txt: missing");
    }

    #[test]
    fn test_encode_error_wraps_transparently() {
        let err: Error = EncodeError::AlphabetTooSmall { found: 0 }.into();
        assert_eq!(
            err.to_string(),
            "parse error: alphabet needs at least 2 symbols, found 0"
        );
    }
}
