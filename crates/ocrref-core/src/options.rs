//! Length policies accepted by the checksum engine.
//!
//! Every struct defaults to the scheme bounds [`MIN_LENGTH`]..=[`MAX_LENGTH`]
//! and deserialises from camelCase JSON with every field optional, so a payer
//! agreement can be stored as e.g. `{"minLength": 5, "maxLength": 15}`.

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Shortest complete reference the scheme permits, control digits included.
pub const MIN_LENGTH: usize = 2;

/// Longest complete reference the scheme permits, control digits included.
pub const MAX_LENGTH: usize = 25;

/// Options for [`crate::calculate_checksum_reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecksumOptions {
    /// Total reference length the extracted digits must leave room for.
    ///
    /// Scanning stops once `fixed_length - 2` digits have been kept.
    pub fixed_length: Option<usize>,
    /// Upper bound on the complete reference length.
    ///
    /// Default: [`MAX_LENGTH`].
    pub max_length: usize,
    /// Validation mode: non-digits and overlong input are errors, and the
    /// position weights account for the stripped control digit.
    pub validation: bool,
}

impl Default for ChecksumOptions {
    fn default() -> Self {
        Self {
            fixed_length: None,
            max_length: MAX_LENGTH,
            validation: false,
        }
    }
}

/// Options for [`crate::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Exact length of the generated reference. Shorter input is zero-padded
    /// on the left, longer input loses its leftmost digits.
    ///
    /// Ignored for padding when greater than `max_length`.
    pub fixed_length: Option<usize>,
    /// Default: [`MIN_LENGTH`].
    pub min_length: usize,
    /// Default: [`MAX_LENGTH`].
    pub max_length: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            fixed_length: None,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl GenerateOptions {
    /// Options with only `fixed_length` set.
    pub fn fixed(fixed_length: usize) -> Self {
        Self {
            fixed_length: Some(fixed_length),
            ..Self::default()
        }
    }

    /// Checks the options for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::InvalidConfig`] when `min_length > max_length`,
    /// when `max_length` lies outside [`MIN_LENGTH`]..=[`MAX_LENGTH`], or when
    /// `fixed_length < MIN_LENGTH`.
    pub fn check(&self) -> Result<(), OcrError> {
        if self.min_length > self.max_length {
            return Err(OcrError::config(format!(
                "minLength {} is above maxLength {}",
                self.min_length, self.max_length
            )));
        }
        if self.max_length < MIN_LENGTH {
            return Err(OcrError::config(format!(
                "maxLength {} is below {MIN_LENGTH}",
                self.max_length
            )));
        }
        if self.max_length > MAX_LENGTH {
            return Err(OcrError::config(format!(
                "maxLength {} is above {MAX_LENGTH}",
                self.max_length
            )));
        }
        if let Some(fixed) = self.fixed_length.filter(|&f| f < MIN_LENGTH) {
            return Err(OcrError::config(format!(
                "fixedLength {fixed} is below {MIN_LENGTH}"
            )));
        }
        Ok(())
    }
}

/// Options for [`crate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LengthOptions {
    /// Default: [`MIN_LENGTH`].
    pub min_length: usize,
    /// Default: [`MAX_LENGTH`].
    pub max_length: usize,
}

impl Default for LengthOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}
