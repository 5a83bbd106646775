//! Field-specific checks layered on top of the required-field rule.
//!
//! All checks treat an empty value as passing; pair them with a required
//! validator when the field is mandatory.

/// ABN weighting factors, applied after subtracting 1 from the first digit.
const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Australian Business Number checksum (modulus 89).
pub fn is_valid_abn(input: &str) -> bool {
    let digits: Vec<u32> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() != ABN_WEIGHTS.len() || digits[0] == 0 {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .zip(ABN_WEIGHTS)
        .enumerate()
        .map(|(idx, (digit, weight))| {
            let digit = if idx == 0 { digit - 1 } else { *digit };
            digit * weight
        })
        .sum();

    sum % 89 == 0
}

/// Australian landline, mobile, or 1300/1800 number.
///
/// Spaces, dashes, dots and parentheses are ignored; a leading `+61` is read
/// as the trunk prefix `0`.
pub fn is_valid_au_phone(input: &str) -> bool {
    let compact: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let national = match compact.strip_prefix("+61") {
        Some(rest) => format!("0{rest}"),
        None => compact,
    };

    if !national.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match national.len() {
        10 if national.starts_with("1300") || national.starts_with("1800") => true,
        10 => matches!(&national.as_bytes()[..2], [b'0', b'2' | b'3' | b'4' | b'7' | b'8']),
        6 => national.starts_with("13"),
        _ => false,
    }
}
