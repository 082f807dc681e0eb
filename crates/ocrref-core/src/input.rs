//! The "text or integer" argument accepted by every public operation.
//!
//! Typed call sites convert through the [`From`] impls. Untyped data (for
//! example a field of a JSON request body) goes through
//! [`TryFrom<&serde_json::Value>`], which is the only place an
//! [`OcrError::InvalidInput`] can arise.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::OcrError;

/// An OCR operation argument: either free text or a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrInput<'a> {
    /// Arbitrary text; non-digits are skipped when generating and rejected
    /// when validating.
    Text(&'a str),
    /// A whole number, rendered in base 10 (negative values keep their `-`).
    Integer(i128),
}

impl<'a> OcrInput<'a> {
    /// Normalises the input to the digit-bearing text the engine scans.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Integer(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// Normalises any accepted argument to the text the engine scans.
pub(crate) fn text_of<'a>(input: impl Into<OcrInput<'a>>) -> Cow<'a, str> {
    let input: OcrInput<'a> = input.into();
    input.as_text()
}

impl<'a> From<&'a str> for OcrInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for OcrInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OcrInput<'_> {
                fn from(n: $t) -> Self {
                    Self::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_from_pointer_sized {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OcrInput<'_> {
                fn from(n: $t) -> Self {
                    // Fits on every platform with pointers of at most 128 bits.
                    i128::try_from(n).map_or(Self::Integer(i128::MAX), Self::Integer)
                }
            }
        )*
    };
}

impl_from_pointer_sized!(usize, isize);

impl<'a> TryFrom<&'a Value> for OcrInput<'a> {
    type Error = OcrError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Text(s.as_str())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Integer(i128::from(u)))
                } else {
                    Err(OcrError::InvalidInput { found: "float" })
                }
            }
            Value::Null => Err(OcrError::InvalidInput { found: "null" }),
            Value::Bool(_) => Err(OcrError::InvalidInput { found: "bool" }),
            Value::Array(_) => Err(OcrError::InvalidInput { found: "array" }),
            Value::Object(_) => Err(OcrError::InvalidInput { found: "object" }),
        }
    }
}
