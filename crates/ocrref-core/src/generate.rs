//! OCR reference generation.
//!
//! A generated reference is the digits of the input, zero-padded or
//! left-truncated to satisfy the length policy, followed by a length-control
//! digit (total length mod 10) and a control digit.
//!
//! Soft and hard control levels differ only in how a payment processor
//! reacts to a bad control digit, so [`soft`] and [`hard`] produce the same
//! reference for the same input.

use serde::Serialize;

use crate::checksum::{calculate_checksum_reversed, control_digit, weighted_digit};
use crate::error::OcrError;
use crate::input::{OcrInput, text_of};
use crate::options::{ChecksumOptions, GenerateOptions};

/// A complete reference number and its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generated {
    /// The reference, control digits included.
    pub numbers: String,
    /// Second-to-last digit: `length % 10`.
    pub length_control: u8,
    /// Last digit.
    pub control: u8,
    /// Total length of [`Generated::numbers`].
    pub length: usize,
    /// Weighted sum over every digit except the control digit.
    pub sum: u32,
    /// Input digits were dropped from the left to honour the length policy.
    pub truncated: bool,
}

/// Generates a reference with length control and control digit.
///
/// # Errors
///
/// Returns [`OcrError::InvalidConfig`] when `options` fail
/// [`GenerateOptions::check`]. Characters in `from` never cause an error.
///
/// # Examples
///
/// ```
/// use ocrref_core::{GenerateOptions, generate};
///
/// let generated = generate("2019-12-07200", &GenerateOptions::default()).unwrap();
/// assert_eq!(generated.numbers, "2019120720030");
/// assert_eq!(generated.length_control, 3);
/// assert_eq!(generated.control, 0);
/// ```
pub fn generate<'a>(
    from: impl Into<OcrInput<'a>>,
    options: &GenerateOptions,
) -> Result<Generated, OcrError> {
    options.check()?;
    Ok(generate_checked(&text_of(from), options))
}

/// Generates a reference with the default length policy.
pub fn soft<'a>(from: impl Into<OcrInput<'a>>) -> String {
    generate_checked(&text_of(from), &GenerateOptions::default()).numbers
}

/// Generates a reference with the default length policy.
///
/// Identical output to [`soft`].
pub fn hard<'a>(from: impl Into<OcrInput<'a>>) -> String {
    generate_checked(&text_of(from), &GenerateOptions::default()).numbers
}

/// Generates a reference of exactly `fixed_length` digits.
///
/// Short input is padded with leading zeros, long input is capped from the
/// left.
///
/// # Errors
///
/// Returns [`OcrError::InvalidConfig`] when `fixed_length` is below
/// [`crate::MIN_LENGTH`]. A `fixed_length` above [`crate::MAX_LENGTH`] is
/// ignored and the reference is capped at [`crate::MAX_LENGTH`].
///
/// # Examples
///
/// ```
/// use ocrref_core::fixed;
///
/// let reference = fixed("Customer007:Date2019-12-24:Amount$200", 13).unwrap();
/// assert_eq!(reference, "2019122420035");
/// ```
pub fn fixed<'a>(from: impl Into<OcrInput<'a>>, fixed_length: usize) -> Result<String, OcrError> {
    generate(from, &GenerateOptions::fixed(fixed_length)).map(|g| g.numbers)
}

/// Generation proper; `options` must already have passed
/// [`GenerateOptions::check`].
fn generate_checked(from: &str, options: &GenerateOptions) -> Generated {
    // Generation mode never reports an error.
    let extracted = calculate_checksum_reversed(
        from,
        &ChecksumOptions {
            fixed_length: options.fixed_length,
            max_length: options.max_length,
            validation: false,
        },
    )
    .unwrap_or_default();

    let mut numbers = extracted.numbers;
    let mut sum = extracted.sum;
    let mut length = extracted.length + 2;

    match options.fixed_length {
        Some(fixed) if fixed <= options.max_length => {
            numbers = pad(&numbers, length, fixed);
            length = fixed;
        }
        Some(_) | None => {
            if length < options.min_length {
                numbers = pad(&numbers, length, options.min_length);
                length = options.min_length;
            }
        }
    }

    // Always in 0..=9.
    let length_control = (length % 10) as u8;
    numbers.push(char::from(b'0' + length_control));
    sum += weighted_digit(0, length_control);

    let control = control_digit(sum);
    numbers.push(char::from(b'0' + control));

    if extracted.truncated {
        tracing::debug!(
            kept = extracted.length,
            length,
            max_length = options.max_length,
            fixed_length = ?options.fixed_length,
            "input digits dropped from the left to fit the reference length"
        );
    }

    Generated {
        numbers,
        length_control,
        control,
        length,
        sum,
        truncated: extracted.truncated,
    }
}

/// Left-pads `digits` with zeros so that a reference currently `from_length`
/// long becomes `upto_length` long.
fn pad(digits: &str, from_length: usize, upto_length: usize) -> String {
    let zeros = upto_length.saturating_sub(from_length);
    let mut padded = String::with_capacity(zeros + digits.len());
    padded.extend(std::iter::repeat_n('0', zeros));
    padded.push_str(digits);
    padded
}
