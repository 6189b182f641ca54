#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(EncodingError),
}

/// Reason a hex encoding was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Input did not have exactly `expected` characters.
    #[error("expected {expected} hex digits, found {found}")]
    Length { expected: usize, found: usize },
    /// Non-hexadecimal character at `position` (counted in characters).
    #[error("{found:?} at position {position} is not a hex digit")]
    Digit { position: usize, found: char },
}

impl Error {
    pub(crate) fn length(expected: usize, found: usize) -> Error {
        Error::InvalidEncoding(EncodingError::Length { expected, found })
    }

    pub(crate) fn digit(position: usize, found: char) -> Error {
        Error::InvalidEncoding(EncodingError::Digit { position, found })
    }
}
