//! Error taxonomy for OCR reference generation and validation.
//!
//! [`OcrError`] covers both caller misuse ([`OcrError::InvalidInput`],
//! [`OcrError::InvalidConfig`]), which is returned as `Err` from the
//! operations that accept options, and malformed reference data
//! ([`OcrError::OutOfRange`], [`OcrError::InvalidChar`]), which is carried
//! inside a [`crate::Validation`] instead of being returned as `Err`.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Stable identifier for the data errors a validation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The reference (or its digit content) is outside the permitted length range.
    OutOfRange,
    /// A non-digit character was found where only digits are allowed.
    InvalidChar,
}

impl ErrorKind {
    /// Returns the stable upper-snake-case identifier (`"OUT_OF_RANGE"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidChar => "INVALID_CHAR",
        }
    }

    /// Returns the wire error code used in serialised results
    /// (`"ERR_OCR_OUT_OF_RANGE"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::OutOfRange => "ERR_OCR_OUT_OF_RANGE",
            Self::InvalidChar => "ERR_OCR_INVALID_CHAR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of the permitted length range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBound {
    /// Longer than the maximum.
    TooLong,
    /// Shorter than the minimum.
    TooShort,
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => f.write_str("too long"),
            Self::TooShort => f.write_str("too short"),
        }
    }
}

/// All error conditions produced by the checksum engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OcrError {
    /// The argument was neither text nor an integer.
    #[error("input must be a string or an integer, got {found}")]
    InvalidInput {
        /// Name of the rejected value kind (e.g. `"null"`, `"float"`).
        found: &'static str,
    },

    /// Length options are inconsistent or outside the scheme bounds.
    #[error("invalid length configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the inconsistency.
        reason: String,
    },

    /// The reference length is outside `[min, max]`.
    #[error("OCR reference {bound}, length must be between {min} and {max}")]
    OutOfRange {
        /// Which bound was violated.
        bound: LengthBound,
        /// Lower bound in effect.
        min: usize,
        /// Upper bound in effect.
        max: usize,
    },

    /// A non-digit character was met in validation mode.
    #[error("invalid character {found:?} detected at {index}")]
    InvalidChar {
        /// Zero-based character index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl OcrError {
    /// Returns the data error kind, or `None` for caller-misuse errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::OutOfRange { .. } => Some(ErrorKind::OutOfRange),
            Self::InvalidChar { .. } => Some(ErrorKind::InvalidChar),
            Self::InvalidInput { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    /// Returns the wire code for this error.
    ///
    /// Caller-misuse errors have no counterpart in the reference error codes
    /// and report `"ERR_OCR_INVALID_INPUT"` / `"ERR_OCR_INVALID_CONFIG"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "ERR_OCR_INVALID_INPUT",
            Self::InvalidConfig { .. } => "ERR_OCR_INVALID_CONFIG",
            Self::OutOfRange { .. } => ErrorKind::OutOfRange.code(),
            Self::InvalidChar { .. } => ErrorKind::InvalidChar.code(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl Serialize for OcrError {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut state = s.serialize_struct("OcrError", 2)?;
        state.serialize_field("error_code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
