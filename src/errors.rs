use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the subtitle parser
#[derive(Debug)]
pub enum SubtitleParserError {
    TimeCode(TimeCodeError),
    Subtitle(SubtitleError),
    Other(io::Error),
}

/// Time code token could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCodeError {
    pub message: String,
}

impl TimeCodeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Subtitle input specific errors
#[derive(Debug)]
pub struct SubtitleError {
    pub message: String,
}

impl SubtitleError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubtitleParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleParserError::Other(err) => write!(f, "I/O error: {}", err),
            SubtitleParserError::TimeCode(err) => write!(f, "Time code error: {}", err),
            SubtitleParserError::Subtitle(err) => write!(f, "Subtitle error: {}", err),
        }
    }
}

impl fmt::Display for TimeCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SubtitleParserError {}
impl Error for TimeCodeError {}
impl Error for SubtitleError {}

// Conversion implementations
impl From<io::Error> for SubtitleParserError {
    fn from(err: io::Error) -> Self {
        SubtitleParserError::Other(err)
    }
}

impl From<TimeCodeError> for SubtitleParserError {
    fn from(err: TimeCodeError) -> Self {
        SubtitleParserError::TimeCode(err)
    }
}

impl From<SubtitleError> for SubtitleParserError {
    fn from(err: SubtitleError) -> Self {
        SubtitleParserError::Subtitle(err)
    }
}

// Conversion to io::Error for callers that only deal in I/O results
impl From<SubtitleParserError> for io::Error {
    fn from(err: SubtitleParserError) -> Self {
        io::Error::other(err)
    }
}

impl From<TimeCodeError> for io::Error {
    fn from(err: TimeCodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<SubtitleError> for io::Error {
    fn from(err: SubtitleError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// Type alias for Result with SubtitleParserError
pub type SubtitleParserResult<T> = Result<T, SubtitleParserError>;
