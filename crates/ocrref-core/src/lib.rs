#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Generation and validation of Swedish Bankgiro/Plusgiro OCR reference
//! numbers.
//!
//! An OCR reference is a digit string of [`MIN_LENGTH`]..=[`MAX_LENGTH`]
//! characters whose last digit is a mod-10 control digit and, for the
//! variable-length agreement, whose second-to-last digit is the total length
//! mod 10.
//!
//! ```
//! use ocrref_core::{soft, validate_variable_length};
//!
//! let reference = soft("Customer007:Date2019-12-24:Amount$200");
//! assert_eq!(reference, "0072019122420063");
//! assert!(validate_variable_length(reference.as_str()));
//! ```

pub mod checksum;
pub mod error;
pub mod generate;
pub mod input;
pub mod options;
pub mod validate;

pub use checksum::{Checksum, calculate_checksum_reversed, control_digit, weighted_digit};
pub use error::{ErrorKind, LengthBound, OcrError};
pub use generate::{Generated, fixed, generate, hard, soft};
pub use input::OcrInput;
pub use options::{ChecksumOptions, GenerateOptions, LengthOptions, MAX_LENGTH, MIN_LENGTH};
pub use validate::{
    Validation, validate, validate_fixed_length, validate_hard, validate_soft,
    validate_variable_length,
};

/// Returns the current version of the ocrref-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
