//! OCR reference validation.
//!
//! [`validate`] never returns `Err`: malformed reference data is reported
//! through [`Validation::error`], so callers checking many candidates need
//! no error plumbing. The boolean validators are total functions built on
//! top of it.
//!
//! Four agreement levels exist for Bankgiro payees:
//!
//! | Level | Function | Checks |
//! |---|---|---|
//! | soft | [`validate_soft`] | control digit |
//! | hard | [`validate_hard`] | control digit |
//! | variable length | [`validate_variable_length`] | control digit, length-control digit |
//! | fixed length | [`validate_fixed_length`] | control digit, total length |
//!
//! Soft and hard differ only in how the payer's bank reacts to a failure,
//! not in the result computed here.

use serde::Serialize;

use crate::checksum::{calculate_checksum_reversed, control_digit};
use crate::error::{ErrorKind, LengthBound, OcrError};
use crate::input::{OcrInput, text_of};
use crate::options::{ChecksumOptions, LengthOptions, MAX_LENGTH, MIN_LENGTH};

/// Outcome of validating one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// The control digit matches and no error occurred.
    pub valid: bool,
    /// Expected control digit, when the reference was well-formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<u8>,
    /// Weighted sum over every digit except the control digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<u32>,
    /// Why the reference is malformed.
    #[serde(flatten)]
    pub error: Option<OcrError>,
}

impl Validation {
    fn failed(error: OcrError) -> Self {
        tracing::trace!(code = error.code(), %error, "OCR reference rejected");
        Self {
            valid: false,
            control: None,
            sum: None,
            error: Some(error),
        }
    }

    /// Returns the kind of the data error, if any.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().and_then(OcrError::kind)
    }

    /// Returns the human-readable error message, if any.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Validates the control digit of `ocr` and its length against `options`.
///
/// Every character of `ocr` must be a decimal digit. Length bounds apply to
/// the raw character count, and `options.max_length` never extends past
/// [`MAX_LENGTH`].
///
/// # Examples
///
/// ```
/// use ocrref_core::{ErrorKind, LengthOptions, validate};
///
/// let ok = validate("1636976", &LengthOptions::default());
/// assert!(ok.valid);
/// assert_eq!(ok.control, Some(6));
///
/// let bad = validate("0abc3", &LengthOptions::default());
/// assert!(!bad.valid);
/// assert_eq!(bad.error_kind(), Some(ErrorKind::InvalidChar));
/// ```
pub fn validate<'a>(ocr: impl Into<OcrInput<'a>>, options: &LengthOptions) -> Validation {
    let ocr = text_of(ocr);
    let len = ocr.chars().count();
    let max = options.max_length.min(MAX_LENGTH);
    let out_of_range = |bound| OcrError::OutOfRange {
        bound,
        min: options.min_length,
        max,
    };

    let Some(claimed) = ocr.chars().next_back() else {
        return Validation::failed(out_of_range(LengthBound::TooShort));
    };
    let Some(claimed) = claimed.to_digit(10) else {
        return Validation::failed(OcrError::InvalidChar {
            index: len - 1,
            found: claimed,
        });
    };

    let prefix = &ocr[..ocr.len() - 1];
    let extracted = match calculate_checksum_reversed(
        prefix,
        &ChecksumOptions {
            fixed_length: None,
            max_length: max,
            validation: true,
        },
    ) {
        Ok(extracted) => extracted,
        Err(OcrError::OutOfRange { bound, .. }) => {
            return Validation::failed(out_of_range(bound));
        }
        Err(error) => return Validation::failed(error),
    };

    if len > max {
        return Validation::failed(out_of_range(LengthBound::TooLong));
    }
    if len < options.min_length {
        return Validation::failed(out_of_range(LengthBound::TooShort));
    }

    let control = control_digit(extracted.sum);
    Validation {
        valid: u32::from(control) == claimed,
        control: Some(control),
        sum: Some(extracted.sum),
        error: None,
    }
}

/// Soft control level: the control digit is correct.
pub fn validate_soft<'a>(ocr: impl Into<OcrInput<'a>>) -> bool {
    validate(ocr, &LengthOptions::default()).valid
}

/// Hard control level: the control digit is correct.
pub fn validate_hard<'a>(ocr: impl Into<OcrInput<'a>>) -> bool {
    validate(ocr, &LengthOptions::default()).valid
}

/// Variable length control: the control digit is correct and the
/// second-to-last digit equals the total length mod 10.
///
/// # Examples
///
/// ```
/// use ocrref_core::validate_variable_length;
///
/// assert!(validate_variable_length("1636976"));
/// // Correct control digit, but the length digit says 1 for a 7-digit reference.
/// assert!(!validate_variable_length("1636919"));
/// ```
pub fn validate_variable_length<'a>(ocr: impl Into<OcrInput<'a>>) -> bool {
    let ocr = text_of(ocr);
    if !validate_hard(&*ocr) {
        return false;
    }
    let len = ocr.chars().count();
    let length_digit = ocr.chars().rev().nth(1).and_then(|c| c.to_digit(10));
    length_digit == u32::try_from(len % 10).ok()
}

/// Fixed length control: the control digit is correct and the total length
/// is `length1` or `length2` (which defaults to `length1`).
///
/// Lengths outside [`MIN_LENGTH`]..=[`MAX_LENGTH`] make the result `false`.
///
/// # Examples
///
/// ```
/// use ocrref_core::validate_fixed_length;
///
/// assert!(validate_fixed_length("1636919", 7, Some(8)));
/// assert!(validate_fixed_length("1636919", 7, None));
/// assert!(!validate_fixed_length("1636919", 11, None));
/// ```
pub fn validate_fixed_length<'a>(
    ocr: impl Into<OcrInput<'a>>,
    length1: usize,
    length2: Option<usize>,
) -> bool {
    let length2 = length2.unwrap_or(length1);
    let in_scheme = |l: usize| (MIN_LENGTH..=MAX_LENGTH).contains(&l);
    if !in_scheme(length1) || !in_scheme(length2) {
        return false;
    }

    let ocr = text_of(ocr);
    if !validate_hard(&*ocr) {
        return false;
    }
    let len = ocr.chars().count();
    len == length1 || len == length2
}
