/// Bounds checking: digit-string to integer with a size ceiling.
///
/// The two pages deliberately carry different policies: the currency page
/// caps both length and value, the abbreviation page only caps length.
/// They stay separate [`Bounds`] values.
use crate::error::{ErrorKind, Limit};

/// A size policy for validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Largest accepted value, inclusive.
    pub max_value: Option<u128>,
    /// Longest accepted digit string. Checked before parsing.
    pub max_digits: Option<usize>,
}

impl Bounds {
    /// Compact + currency page: at most 17 digits and at most 10^17.
    pub const CURRENCY: Bounds = Bounds {
        max_value: Some(100_000_000_000_000_000),
        max_digits: Some(17),
    };

    /// Abbreviation page: at most 23 digits, no numeric ceiling.
    pub const ABBREVIATE: Bounds = Bounds {
        max_value: None,
        max_digits: Some(23),
    };
}

/// Parse `digits` and enforce `bounds`.
pub fn parse_and_bound(digits: &str, bounds: &Bounds) -> Result<u128, ErrorKind> {
    if let Some(max) = bounds.max_digits {
        if digits.len() > max {
            return Err(ErrorKind::TooLarge {
                limit: Limit::Digits(max),
            });
        }
    }

    // `u128::from_str` accepts a leading '+', which is not a digit string.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::NotANumber);
    }
    let value: u128 = digits.parse().map_err(|_| ErrorKind::NotANumber)?;

    if value == 0 {
        return Err(ErrorKind::NonPositive);
    }
    if let Some(max) = bounds.max_value {
        if value > max {
            return Err(ErrorKind::TooLarge {
                limit: Limit::Value(max),
            });
        }
    }
    Ok(value)
}
