/// Input sanitizer: reduces raw keystrokes to a digit string.
///
/// Length is not constrained here; the UI caps keystrokes and
/// [`crate::bounds`] enforces the digit ceiling.
use crate::error::ErrorKind;

/// Remove every character that is not an ASCII digit.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Accept only a non-empty digit string without a leading zero.
///
/// A lone `"0"` is rejected as well: only strictly positive integers in
/// canonical form get through.
pub fn validate_digit_string(digits: &str) -> Result<&str, ErrorKind> {
    match digits.as_bytes().first() {
        None => Err(ErrorKind::EmptyInput),
        Some(b'0') => Err(ErrorKind::LeadingZero),
        Some(_) => Ok(digits),
    }
}
