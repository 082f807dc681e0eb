//! Independent check routines modelled on the OCR checker published by
//! Bankgirot, used only as an oracle for the library under test.
//!
//! These deliberately work on raw character positions instead of sharing
//! any code with `ocrref_core`: the control digit is computed by walking the
//! reference from its second-to-last character to its first, doubling every
//! other digit and adding the digits of two-digit products.
#![allow(dead_code)]

/// Field checks performed before any of the mod-10 routines: only digits,
/// between 2 and 25 characters.
pub fn fields_valid(ocr: &str) -> bool {
    let len = ocr.chars().count();
    !ocr.is_empty() && ocr.chars().all(|c| c.is_ascii_digit()) && (2..=25).contains(&len)
}

/// Ten-modulus check of the last digit.
fn modulus10(ocr: &[u32]) -> bool {
    let Some((&check, body)) = ocr.split_last() else {
        return false;
    };
    let mut total = 0;
    for (round, &digit) in body.iter().rev().enumerate() {
        if round % 2 == 0 {
            let doubled = 2 * digit;
            if doubled > 9 {
                total += 1 + (doubled - 10);
            } else {
                total += doubled;
            }
        } else {
            total += digit;
        }
    }
    let remainder = total % 10;
    let expected = if remainder == 0 { 0 } else { 10 - remainder };
    expected == check
}

fn digits(ocr: &str) -> Vec<u32> {
    ocr.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Soft control level ("mjuk kontroll").
pub fn soft_check(ocr: &str) -> bool {
    fields_valid(ocr) && modulus10(&digits(ocr))
}

/// Hard control level ("hård kontroll").
pub fn hard_check(ocr: &str) -> bool {
    fields_valid(ocr) && modulus10(&digits(ocr))
}

/// Variable length control ("längdsiffra").
pub fn length_digit_check(ocr: &str) -> bool {
    if !fields_valid(ocr) {
        return false;
    }
    let d = digits(ocr);
    let len = d.len();
    let expected = if len > 9 { len % 10 } else { len };
    modulus10(&d) && d[len - 2] as usize == expected
}

/// Fixed length control ("fast längd").
pub fn fixed_length_check(ocr: &str, length1: usize, length2: Option<usize>) -> bool {
    let length2 = length2.unwrap_or(length1);
    let lengths_ok = [length1, length2].iter().all(|l| (2..=25).contains(l));
    if !lengths_ok || !fields_valid(ocr) {
        return false;
    }
    let d = digits(ocr);
    modulus10(&d) && (d.len() == length1 || d.len() == length2)
}

/// Known-valid references taken from payment slips.
pub const VALIDS: [&str; 7] = [
    "18108401345678778",
    "18196701475307475",
    "1018966492531",
    "1019080881039",
    "03368912618",
    "1202951008",
    "1636976",
];

/// Input, variable-length reference, fixed-length reference.
pub const FROM_STRING: [(&str, &str, &str); 6] = [
    ("2019121", "201912193", "0000201912136"),
    ("2019-12-07200", "2019120720030", "0002019120720063"),
    ("2019-12-072002376", "20191207200237673", "020191207200237681"),
    (
        "Customer007:Date2019-12-24:Amount$200",
        "0072019122420063",
        "000000072019122420014",
    ),
    (
        "1234567890123456789012345",
        "3456789012345678901234559",
        "3456789012345678901234559",
    ),
    ("0", "034", "0000075"),
];
