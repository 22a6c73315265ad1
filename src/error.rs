//! Crate-wide error type.
//!
//! Validity of a decoded structure is never reported through [`Error`]: a header with a stale
//! checksum decodes fine and simply answers `false` to `is_valid()`. [`Error`] is reserved for
//! inputs that cannot be decoded or combined at all, for broken internal post-conditions, and
//! for slot lookups that find nothing.

use core::fmt;

/// Error type for every fallible codec and table operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A buffer or list does not have the length required by the structure being
    /// decoded or encoded.
    MalformedInput {
        /// Structure being processed.
        what: &'static str,

        /// Length required by the structure.
        expected: usize,

        /// Length that was provided.
        actual: usize,
    },

    /// Two tables (or a table and its target layout) have geometries that cannot be reconciled.
    IncompatibleFormat(&'static str),

    /// A post-condition of an internal recompute step does not hold.
    InternalError(&'static str),

    /// No used partition has the requested index.
    NoSuchPartition(usize),

    /// Every slot of the partition entry array is in use.
    TableFull,
}

impl Error {
    pub(crate) fn malformed(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::MalformedInput {
            what,
            expected,
            actual,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput {
                what,
                expected,
                actual,
            } => write!(
                f,
                "malformed {what}: expected {expected} bytes or items, got {actual}"
            ),
            Error::IncompatibleFormat(msg) => write!(f, "incompatible format: {msg}"),
            Error::InternalError(msg) => write!(f, "internal error: {msg}"),
            Error::NoSuchPartition(idx) => write!(f, "no partition with index {idx}"),
            Error::TableFull => write!(f, "partition entry array is full"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T, E = Error> = core::result::Result<T, E>;
