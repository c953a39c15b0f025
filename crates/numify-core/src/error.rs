/// Pipeline error taxonomy.
///
/// Every variant's `Display` text is the user-facing message; nothing
/// internal leaks through it. `FormattingFailure` carries a detail string
/// for logs only.
use num_format::{Locale, ToFormattedString};
use std::fmt;
use thiserror::Error;

/// The ceiling that a `TooLarge` input ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Maximum number of digits accepted.
    Digits(usize),
    /// Maximum numeric value accepted.
    Value(u128),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits(n) => write!(f, "max {n} digits"),
            Self::Value(v) => write!(f, "max {}", v.to_formatted_string(&Locale::en)),
        }
    }
}

/// Why a pipeline run produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Invalid input (only numbers, no leading zeros)")]
    EmptyInput,
    #[error("Invalid input (only numbers, no leading zeros)")]
    LeadingZero,
    #[error("Invalid number input")]
    NotANumber,
    #[error("Invalid number input")]
    NonPositive,
    #[error("Number too large ({limit})")]
    TooLarge { limit: Limit },
    #[error("Error processing number")]
    FormattingFailure { detail: String },
}

impl ErrorKind {
    pub(crate) fn formatting(detail: impl Into<String>) -> Self {
        Self::FormattingFailure {
            detail: detail.into(),
        }
    }
}
