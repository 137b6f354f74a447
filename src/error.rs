use std::{io, net};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("end of buffer")]
    ErrBufferOutOfRange,
    #[error("message exceeds 512 bytes")]
    ErrMessageTooLong,
    #[error("limit of {0} jumps exceeded")]
    ErrTooManyJumps(usize),
    #[error("single label exceeds 63 characters of length")]
    ErrLabelTooLong,
    #[error("zero length label")]
    ErrEmptyLabel,
    #[error("unknown record type: {0}")]
    ErrUnknownType(String),
    #[error("type code {0} must be written with its named record type")]
    ErrNonCanonicalType(u16),
    #[error("record type {0} cannot be written without its data")]
    ErrMissingRecordData(String),
    #[error("address does not fit the record type")]
    ErrAddressWidthMismatch,
    #[error("too many Questions to pack (>65535)")]
    ErrTooManyQuestions,
    #[error("too many Answers to pack (>65535)")]
    ErrTooManyAnswers,
    #[error("too many Authorities to pack (>65535)")]
    ErrTooManyAuthorities,
    #[error("too many Additionals to pack (>65535)")]
    ErrTooManyAdditionals,
    #[error("dns: query timed out")]
    ErrTimeout,
    #[error("dns: response id {got} does not match query id {want}")]
    ErrIdMismatch { want: u16, got: u16 },
    #[error("{0}")]
    Io(#[source] IoError),
    #[error("parse addr: {0}")]
    ParseIp(#[from] net::AddrParseError),
}

#[derive(Debug, Error)]
#[error("io error: {0}")]
pub struct IoError(#[from] pub io::Error);

// Workaround for wanting PartialEq for io::Error.
impl PartialEq for IoError {
    fn eq(&self, other: &Self) -> bool {
        self.0.kind() == other.0.kind()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(IoError(e))
    }
}
