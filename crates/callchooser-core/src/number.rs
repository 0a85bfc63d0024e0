//! Phone number normalization
//!
//! Numbers are reduced to bare digits in international form without the
//! leading `+`. Ukrainian national numbers (`0XXXXXXXXX`) gain the `38`
//! country prefix, and anything after the 12th digit of a `380` number is
//! dropped.

const COUNTRY_PREFIX: &str = "38";
const NATIONAL_LEN: usize = 10;
const INTERNATIONAL_LEN: usize = 12;

pub fn normalize_number(input: &str) -> String {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with('0') && digits.len() == NATIONAL_LEN {
        digits.insert_str(0, COUNTRY_PREFIX);
    }

    if digits.starts_with("380") && digits.len() > INTERNATIONAL_LEN {
        digits.truncate(INTERNATIONAL_LEN);
    }

    digits
}
