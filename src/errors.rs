use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while inspecting or
/// patching a container file
#[derive(Debug)]
pub enum TrackFlagsError {
    Mp4(Mp4Error),
    Patch(PatchError),
    Other(io::Error),
}

/// Flag patching specific errors
#[derive(Debug)]
pub struct PatchError {
    pub message: String,
}

impl PatchError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// MP4 format specific errors
#[derive(Debug)]
pub enum Mp4Error {
    /// Generic MP4 error with a descriptive message
    Error { message: String },
}

impl fmt::Display for TrackFlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackFlagsError::Other(err) => write!(f, "I/O error: {}", err),
            TrackFlagsError::Mp4(err) => write!(f, "MP4 error: {}", err),
            TrackFlagsError::Patch(err) => write!(f, "Patch error: {}", err),
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mp4Error::Error { message } => write!(f, "MP4 error: {}", message),
        }
    }
}

impl Error for TrackFlagsError {}
impl Error for PatchError {}
impl Error for Mp4Error {}

// Conversion implementations
impl From<io::Error> for TrackFlagsError {
    fn from(err: io::Error) -> Self {
        TrackFlagsError::Other(err)
    }
}

impl From<PatchError> for TrackFlagsError {
    fn from(err: PatchError) -> Self {
        TrackFlagsError::Patch(err)
    }
}

impl From<Mp4Error> for TrackFlagsError {
    fn from(err: Mp4Error) -> Self {
        TrackFlagsError::Mp4(err)
    }
}

// Conversion to io::Error for backward compatibility
impl From<TrackFlagsError> for io::Error {
    fn from(err: TrackFlagsError) -> Self {
        io::Error::other(err)
    }
}

impl From<PatchError> for io::Error {
    fn from(err: PatchError) -> Self {
        io::Error::other(err)
    }
}

impl From<Mp4Error> for io::Error {
    fn from(err: Mp4Error) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with TrackFlagsError
pub type TrackFlagsResult<T> = Result<T, TrackFlagsError>;
