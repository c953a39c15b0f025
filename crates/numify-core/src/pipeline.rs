/// Pipeline driver: raw input + selector to an [`Outcome`].
///
/// Stages run in order and short-circuit on the first error:
/// sanitize → validate → bound → resolve → format → sanitize for display.
/// Every run recomputes from scratch; nothing is carried between runs.
use crate::bounds::{parse_and_bound, Bounds};
use crate::dialect::resolve_dialect;
use crate::display::sanitize_for_display;
use crate::error::ErrorKind;
use crate::format::{abbreviate, format_compact_currency, FormattedOutput};
use crate::locale::resolve_country;
use crate::sanitize::{sanitize, validate_digit_string};
use compact_str::CompactString;
use std::time::Duration;
use tracing::{debug, error};

/// Quiet period before the Numify page recomputes after typing.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// What the UI should show for the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing typed yet, so no output and no error.
    Empty,
    Valid(FormattedOutput),
    Invalid(ErrorKind),
}

impl Outcome {
    /// The user-facing error message, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn output(&self) -> Option<&FormattedOutput> {
        match self {
            Self::Valid(out) => Some(out),
            _ => None,
        }
    }
}

/// Which of the two pages a pipeline run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// Compact + currency, keyed by country code.
    Currency,
    /// Word-suffix abbreviation, keyed by format code.
    Abbreviate,
}

impl PipelineKind {
    pub fn bounds(self) -> Bounds {
        match self {
            Self::Currency => Bounds::CURRENCY,
            Self::Abbreviate => Bounds::ABBREVIATE,
        }
    }

    /// Keystroke cap applied by the input field.
    pub fn input_char_limit(self) -> usize {
        match self {
            Self::Currency => 17,
            Self::Abbreviate => 23,
        }
    }

    /// Debounce applied to free-text input, `None` for synchronous.
    pub fn debounce(self) -> Option<Duration> {
        match self {
            Self::Currency => None,
            Self::Abbreviate => Some(DEBOUNCE_DELAY),
        }
    }

    pub fn default_selector(self) -> &'static str {
        match self {
            Self::Currency => crate::locale::default_country().code,
            Self::Abbreviate => crate::dialect::default_dialect().code,
        }
    }

    /// Run the full pipeline for this page.
    pub fn run(self, raw: &str, selector: &str) -> Outcome {
        match self {
            Self::Currency => run_currency(raw, selector),
            Self::Abbreviate => run_abbreviate(raw, selector),
        }
    }
}

/// Compact + currency pipeline.
pub fn run_currency(raw: &str, country: &str) -> Outcome {
    finish(PipelineKind::Currency, raw, || {
        let value = validated(raw, &Bounds::CURRENCY)?;
        let value = u64::try_from(value)
            .map_err(|_| ErrorKind::formatting(format!("{value} does not fit u64")))?;
        format_compact_currency(value, resolve_country(country))
    })
}

/// Word-suffix abbreviation pipeline.
pub fn run_abbreviate(raw: &str, format: &str) -> Outcome {
    finish(PipelineKind::Abbreviate, raw, || {
        let value = validated(raw, &Bounds::ABBREVIATE)?;
        let abbreviated = abbreviate(value, resolve_dialect(format))?;
        Ok(FormattedOutput::Abbreviated { abbreviated })
    })
}

/// Sanitize, validate and bound a raw input string.
pub fn validated(raw: &str, bounds: &Bounds) -> Result<u128, ErrorKind> {
    let digits = sanitize(raw);
    validate_digit_string(&digits)?;
    parse_and_bound(&digits, bounds)
}

fn finish(
    kind: PipelineKind,
    raw: &str,
    run: impl FnOnce() -> Result<FormattedOutput, ErrorKind>,
) -> Outcome {
    if raw.is_empty() {
        return Outcome::Empty;
    }

    match run() {
        Ok(out) => {
            let out = out.map_strings(|s| CompactString::from(sanitize_for_display(s)));
            debug!(?kind, ?out, "pipeline produced output");
            Outcome::Valid(out)
        }
        Err(err) => {
            if let ErrorKind::FormattingFailure { detail } = &err {
                error!(?kind, "Error formatting number: {}", detail);
            } else {
                debug!(?kind, %err, "input rejected");
            }
            Outcome::Invalid(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Limit;

    #[test]
    fn test_empty_raw_is_empty_outcome() {
        assert_eq!(run_currency("", "US"), Outcome::Empty);
        assert_eq!(run_abbreviate("", "en"), Outcome::Empty);
    }

    #[test]
    fn test_non_digit_raw_is_invalid_not_empty() {
        assert_eq!(
            run_abbreviate("abc", "en"),
            Outcome::Invalid(ErrorKind::EmptyInput)
        );
    }

    #[test]
    fn test_validated_strips_before_checking() {
        assert_eq!(validated("1,234", &Bounds::CURRENCY), Ok(1_234));
        assert_eq!(
            validated(" 0 12", &Bounds::CURRENCY),
            Err(ErrorKind::LeadingZero)
        );
    }

    #[test]
    fn test_currency_length_cap_counts_digits_only() {
        // 17 digits with separators is still 17 digits.
        let raw = "99,999,999,999,999,999";
        assert!(matches!(run_currency(raw, "US"), Outcome::Valid(_)));
        assert_eq!(
            run_currency("123456789012345678", "US"),
            Outcome::Invalid(ErrorKind::TooLarge {
                limit: Limit::Digits(17)
            })
        );
    }

    #[test]
    fn test_error_message_only_for_invalid() {
        assert_eq!(Outcome::Empty.error_message(), None);
        assert_eq!(
            run_currency("0", "US").error_message().as_deref(),
            Some("Invalid input (only numbers, no leading zeros)")
        );
    }

    #[test]
    fn test_kind_configuration_differs() {
        assert_ne!(
            PipelineKind::Currency.bounds(),
            PipelineKind::Abbreviate.bounds()
        );
        assert_eq!(PipelineKind::Currency.debounce(), None);
        assert_eq!(PipelineKind::Abbreviate.debounce(), Some(DEBOUNCE_DELAY));
        assert_eq!(PipelineKind::Currency.default_selector(), "US");
        assert_eq!(PipelineKind::Abbreviate.default_selector(), "en");
    }
}
