//
// stdf_error.rs
//

use std::fmt;
use std::io::{self, ErrorKind};
use std::str::Utf8Error;

/// The distinct failure classes a codec operation can raise.
///
/// `EndOfRecord` and `UnknownRecord` are recoverable at the call site (the
/// decoder fills the remaining fields with their missing sentinel, or skips
/// the record, respectively); the rest are fatal to whichever stream raised
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdfErrorKind {
    /// Input exhausted before a full record header could be read.
    EndOfFile,
    /// A record's payload ended before its schema was satisfied.
    EndOfRecord,
    /// The first record in the stream was not `FAR`.
    InitialSequence,
    /// Verification mode found a byte mismatch between decode and re-encode.
    Mismatch,
    /// A required field had no value at encode time.
    RequiredMissing,
    /// `(type, subtype)` is not in the record registry.
    UnknownRecord,
    /// Malformed ATDF text.
    InvalidAtdf,
    /// Underlying I/O failure, not otherwise classified.
    Io,
    /// Non-ASCII bytes where ATDF requires ASCII.
    NonAscii,
}

#[derive(Debug)]
pub struct StdfError {
    pub kind: StdfErrorKind,
    pub msg: String,
}

impl StdfError {
    pub fn new(kind: StdfErrorKind, msg: impl Into<String>) -> Self {
        StdfError {
            kind,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for StdfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let short_msg = match self.kind {
            StdfErrorKind::EndOfFile => "End of file",
            StdfErrorKind::EndOfRecord => "End of record",
            StdfErrorKind::InitialSequence => "Invalid initial sequence",
            StdfErrorKind::Mismatch => "Round-trip mismatch",
            StdfErrorKind::RequiredMissing => "Required field missing",
            StdfErrorKind::UnknownRecord => "Unknown record type",
            StdfErrorKind::InvalidAtdf => "Invalid ATDF file",
            StdfErrorKind::Io => "IO error",
            StdfErrorKind::NonAscii => "Non-ASCII found",
        };
        write!(f, "{}, {}", short_msg, self.msg)
    }
}

impl std::error::Error for StdfError {}

impl From<io::Error> for StdfError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            ErrorKind::UnexpectedEof => {
                StdfError::new(StdfErrorKind::EndOfFile, "End of file detected")
            }
            _ => StdfError::new(StdfErrorKind::Io, format!("{}, {}", error.kind(), error)),
        }
    }
}

impl From<Utf8Error> for StdfError {
    fn from(error: Utf8Error) -> Self {
        StdfError::new(StdfErrorKind::NonAscii, format!("{}", error))
    }
}
