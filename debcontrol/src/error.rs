//! Error type for the parser.

/// Error type for the parser.
///
/// All variants except [`Error::Io`] describe malformed input and carry the
/// 1-based line number at which the problem was found.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line that is neither blank, a continuation nor a valid `Name: value` header.
    ///
    /// Besides lines without a colon or with an empty name, this covers names
    /// containing whitespace or control characters, such as `Package : foo`.
    #[error("line {line}: malformed field header: {text:?}")]
    MalformedHeader {
        /// Line number of the offending line.
        line: usize,
        /// The offending line, without its terminator.
        text: String,
    },

    /// A continuation line with no field to continue.
    #[error("line {line}: continuation line without a preceding field: {text:?}")]
    OrphanContinuation {
        /// Line number of the offending line.
        line: usize,
        /// The offending line, without its terminator.
        text: String,
    },

    /// A field name that occurs twice in one paragraph.
    ///
    /// Only raised under [`crate::DuplicatePolicy::Reject`].
    #[error("line {line}: duplicate field {name:?}")]
    DuplicateField {
        /// Line number of the second header.
        line: usize,
        /// Name of the repeated field.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Line number the error refers to, if it is a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedHeader { line, .. }
            | Self::OrphanContinuation { line, .. }
            | Self::DuplicateField { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
