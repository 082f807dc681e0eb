//! Post-operation invariant checkers for correctness sweeps.

use ocrref_core::{
    Generated, LengthOptions, MAX_LENGTH, MIN_LENGTH, validate, validate_fixed_length,
    validate_variable_length,
};

/// Verifies that a reference generated with the default policy from `input`
/// is well-formed and accepted by every validator.
pub fn check_generated(input: &str, generated: &Generated) -> Result<(), String> {
    let reference = generated.numbers.as_str();
    if generated.length != reference.len() {
        return Err(format!(
            "length mismatch for {input:?}: reported {}, actual {}",
            generated.length,
            reference.len()
        ));
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&reference.len()) {
        return Err(format!("{reference} outside {MIN_LENGTH}..={MAX_LENGTH}"));
    }
    if !reference.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("{reference} contains non-digits"));
    }

    let validation = validate(reference, &LengthOptions::default());
    if !validation.valid {
        return Err(format!(
            "{reference} generated from {input:?} does not validate: {:?}",
            validation.message()
        ));
    }
    if validation.control != Some(generated.control) || validation.sum != Some(generated.sum) {
        return Err(format!(
            "{reference}: validator computed control {:?} sum {:?}, generator {} {}",
            validation.control, validation.sum, generated.control, generated.sum
        ));
    }
    if !validate_variable_length(reference) {
        return Err(format!("{reference} fails the length-control check"));
    }
    if !validate_fixed_length(reference, reference.len(), None) {
        return Err(format!("{reference} fails the fixed-length check"));
    }
    Ok(())
}

/// Verifies that the kept data digits are the rightmost digits of `input`.
pub fn check_rightmost_digits_kept(input: &str, generated: &Generated) -> Result<(), String> {
    let input_digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let data = generated
        .numbers
        .get(..generated.numbers.len().saturating_sub(2))
        .unwrap_or_default();
    let data = data.trim_start_matches('0');
    if !input_digits.ends_with(data) {
        return Err(format!(
            "{} does not end {input:?}'s digits",
            generated.numbers
        ));
    }
    Ok(())
}
