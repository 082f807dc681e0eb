//! Digit extraction and weighted mod-10 summation for OCR references.
//!
//! The engine scans its input from the last character towards the first,
//! keeping decimal digits and weighting each kept digit by the parity of its
//! position counted from the right. Position 0 always belongs to the
//! length-control digit (when generating) or to the stripped control digit
//! (when validating), so the parity of a data digit does not depend on which
//! of the two modes produced it.
//!
//! # Weighting
//!
//! Digits at odd positions contribute their own value. Digits at even
//! positions are doubled and, when the product has two digits, reduced to
//! the sum of those digits: `2d` for `d < 5`, `2d - 9` otherwise.
//!
//! The control digit `c` makes `(sum + c) mod 10 == 0`, i.e.
//! `c == (10 - (sum mod 10)) mod 10`.

use serde::Serialize;

use crate::error::{LengthBound, OcrError};
use crate::options::{ChecksumOptions, MIN_LENGTH};

/// Outcome of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checksum {
    /// Kept digits in their original left-to-right order.
    pub numbers: String,
    /// Weighted digit sum of the kept digits.
    pub sum: u32,
    /// Number of kept digits.
    pub length: usize,
    /// Digits were dropped from the left to satisfy a length limit.
    pub truncated: bool,
}

/// Weighted contribution of `digit` at `position` (counted from the right,
/// zero-based).
///
/// # Examples
///
/// ```
/// use ocrref_core::weighted_digit;
///
/// assert_eq!(weighted_digit(1, 7), 7);
/// assert_eq!(weighted_digit(0, 4), 8);
/// assert_eq!(weighted_digit(2, 7), 5);
/// ```
pub fn weighted_digit(position: usize, digit: u8) -> u32 {
    let d = u32::from(digit);
    if position % 2 == 1 {
        d
    } else if d < 5 {
        d * 2
    } else {
        d * 2 - 9
    }
}

/// Control digit completing `sum` to a multiple of ten.
///
/// # Examples
///
/// ```
/// use ocrref_core::control_digit;
///
/// assert_eq!(control_digit(34), 6);
/// assert_eq!(control_digit(40), 0);
/// ```
pub fn control_digit(sum: u32) -> u8 {
    // Always in 0..=9.
    ((10 - sum % 10) % 10) as u8
}

/// Extracts the digits of `from` and computes their reversed weighted sum.
///
/// In generation mode (`options.validation == false`) non-digit characters
/// are skipped and do not advance the position, and input that would make
/// the complete reference (kept digits plus two control digits) longer than
/// `options.max_length` loses its leftmost digits. `options.fixed_length`
/// stops the scan once `fixed_length - 2` digits have been kept.
///
/// In validation mode `from` is a reference with its control digit already
/// stripped, so the scan starts one position earlier and only the control
/// digit's slot is reserved against `options.max_length`.
///
/// # Errors
///
/// Only in validation mode:
/// - [`OcrError::InvalidChar`] for the first non-digit met (scanning from
///   the right), with its character index;
/// - [`OcrError::OutOfRange`] when the digits do not fit in
///   `options.max_length`.
///
/// # Examples
///
/// ```
/// use ocrref_core::{ChecksumOptions, calculate_checksum_reversed};
///
/// let result = calculate_checksum_reversed(
///     "Customer007:Date2019-12-24:Amount$200",
///     &ChecksumOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(result.numbers, "00720191224200");
/// assert_eq!(result.sum, 34);
/// assert_eq!(result.length, 14);
/// ```
pub fn calculate_checksum_reversed(
    from: &str,
    options: &ChecksumOptions,
) -> Result<Checksum, OcrError> {
    let reserved = if options.validation { 2 } else { 3 };
    let char_count = from.chars().count();

    let mut kept: Vec<char> = Vec::new();
    let mut sum: u32 = 0;
    let mut position = usize::from(!options.validation);
    let mut truncated = false;

    for (offset, c) in from.chars().rev().enumerate() {
        if !c.is_ascii_digit() {
            if options.validation {
                return Err(OcrError::InvalidChar {
                    index: char_count - 1 - offset,
                    found: c,
                });
            }
            continue;
        }

        if options
            .fixed_length
            .is_some_and(|fixed| kept.len() + 2 == fixed)
        {
            truncated = true;
            break;
        }
        if kept.len() + reserved > options.max_length {
            if options.validation {
                return Err(OcrError::OutOfRange {
                    bound: LengthBound::TooLong,
                    min: MIN_LENGTH,
                    max: options.max_length,
                });
            }
            truncated = true;
            break;
        }

        let digit = c as u8 - b'0';
        sum += weighted_digit(position, digit);
        position += 1;
        kept.push(c);
    }

    let length = kept.len();
    Ok(Checksum {
        numbers: kept.into_iter().rev().collect(),
        sum,
        length,
        truncated,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    const INVOICE: &str = "Customer007:Date2019-12-24:Amount$200";

    fn extract(from: &str, options: ChecksumOptions) -> Checksum {
        calculate_checksum_reversed(from, &options).expect("extraction succeeds")
    }

    fn validation() -> ChecksumOptions {
        ChecksumOptions {
            validation: true,
            ..ChecksumOptions::default()
        }
    }

    #[test]
    fn weighted_digit_odd_positions_pass_through() {
        for d in 0..=9 {
            assert_eq!(weighted_digit(1, d), u32::from(d));
            assert_eq!(weighted_digit(13, d), u32::from(d));
        }
    }

    #[test]
    fn weighted_digit_even_positions_double_and_fold() {
        let expected = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];
        for (d, want) in (0..=9).zip(expected) {
            assert_eq!(weighted_digit(0, d), want, "digit {d}");
            assert_eq!(weighted_digit(24, d), want, "digit {d}");
        }
    }

    #[test]
    fn control_digit_completes_to_ten() {
        assert_eq!(control_digit(0), 0);
        assert_eq!(control_digit(1), 9);
        assert_eq!(control_digit(37), 3);
        assert_eq!(control_digit(110), 0);
        for sum in 0..200 {
            assert_eq!((sum + u32::from(control_digit(sum))) % 10, 0);
        }
    }

    #[test]
    fn extracts_digits_from_invoice_text() {
        let result = extract(INVOICE, ChecksumOptions::default());
        assert_eq!(
            result,
            Checksum {
                numbers: "00720191224200".to_owned(),
                sum: 34,
                length: 14,
                truncated: false,
            }
        );
    }

    #[test]
    fn separators_do_not_shift_parity() {
        let plain = extract("00720191224200", ChecksumOptions::default());
        let noisy = extract(INVOICE, ChecksumOptions::default());
        assert_eq!(plain.sum, noisy.sum);
        assert_eq!(plain.numbers, noisy.numbers);
    }

    #[test]
    fn empty_and_digitless_input() {
        for input in ["", "abc", "-/:"] {
            let result = extract(input, ChecksumOptions::default());
            assert_eq!(result.numbers, "");
            assert_eq!(result.sum, 0);
            assert_eq!(result.length, 0);
            assert!(!result.truncated);
        }
    }

    #[test]
    fn fixed_length_keeps_rightmost_digits() {
        let options = ChecksumOptions {
            fixed_length: Some(13),
            ..ChecksumOptions::default()
        };
        let result = extract(INVOICE, options);
        assert_eq!(result.numbers, "20191224200");
        assert_eq!(result.length, 11);
        assert!(result.truncated);
    }

    #[test]
    fn max_length_caps_from_the_left() {
        let result = extract("1234567890123456789012345", ChecksumOptions::default());
        assert_eq!(result.numbers, "34567890123456789012345");
        assert_eq!(result.length, 23);
        assert!(result.truncated);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let result = extract("34567890123456789012345", ChecksumOptions::default());
        assert_eq!(result.length, 23);
        assert!(!result.truncated);
    }

    #[test]
    fn validation_starts_at_even_position() {
        // "1636976" without its control digit: the length digit 7 sits at
        // position 0 and is doubled.
        let result = extract("163697", validation());
        assert_eq!(result.sum, 24);
        assert_eq!(result.numbers, "163697");
    }

    #[test]
    fn validation_rejects_non_digits_with_index() {
        let err = calculate_checksum_reversed("0abc", &validation()).expect_err("invalid");
        assert_eq!(
            err,
            OcrError::InvalidChar {
                index: 3,
                found: 'c',
            }
        );
    }

    #[test]
    fn validation_index_counts_characters_not_bytes() {
        let err = calculate_checksum_reversed("12å45", &validation()).expect_err("invalid");
        assert_eq!(
            err,
            OcrError::InvalidChar {
                index: 2,
                found: 'å',
            }
        );
    }

    #[test]
    fn validation_rejects_overlong_prefix() {
        let err =
            calculate_checksum_reversed(&"0".repeat(25), &validation()).expect_err("too long");
        assert!(matches!(
            err,
            OcrError::OutOfRange {
                bound: LengthBound::TooLong,
                max: 25,
                ..
            }
        ));
    }

    #[test]
    fn validation_accepts_full_length_prefix() {
        let result = extract(&"0".repeat(24), validation());
        assert_eq!(result.length, 24);
    }

    #[test]
    fn generation_ignores_non_ascii_digits() {
        let result = extract("١٢3", ChecksumOptions::default());
        assert_eq!(result.numbers, "3");
    }
}
