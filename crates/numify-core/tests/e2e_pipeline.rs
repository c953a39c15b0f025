/// End-to-end pipeline integration tests.
///
/// These tests drive the public `run_currency` / `run_abbreviate` entry
/// points and the `Form` state holder exactly the way the GUI does: raw
/// keystroke strings in, display strings or one error message out.
///
/// Exact numerals come from static locale tables, so only en-US and the
/// `en` dialect are pinned to concrete strings; other locales are checked
/// for the shape rules (symbol prefix, digits and separators only).
use numify_core::form::Form;
use numify_core::locale::COUNTRIES;
use numify_core::pipeline::DEBOUNCE_DELAY;
use numify_core::{run_abbreviate, run_currency, ErrorKind, FormattedOutput, Limit, Outcome};
use std::time::{Duration, Instant};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn compact_currency(outcome: Outcome) -> (String, String) {
    match outcome {
        Outcome::Valid(FormattedOutput::Compact { compact, currency }) => {
            (compact.to_string(), currency.to_string())
        }
        other => panic!("expected compact + currency output, got {other:?}"),
    }
}

fn abbreviated(outcome: Outcome) -> String {
    match outcome {
        Outcome::Valid(FormattedOutput::Abbreviated { abbreviated }) => abbreviated.to_string(),
        other => panic!("expected abbreviated output, got {other:?}"),
    }
}

// ── Currency page ────────────────────────────────────────────────────────────

/// "1234567" in the US renders as 1.2M and "$ 1,234,567".
#[test]
fn us_compact_and_currency() {
    let (compact, currency) = compact_currency(run_currency("1234567", "US"));
    assert_eq!(compact, "1.2M");
    assert_eq!(currency, "$ 1,234,567");
}

/// A leading zero is rejected for every country and nothing is rendered.
#[test]
fn leading_zero_rejected_everywhere() {
    for country in COUNTRIES {
        let outcome = run_currency("0450", country.code);
        assert_eq!(outcome, Outcome::Invalid(ErrorKind::LeadingZero));
        assert!(outcome.output().is_none());
    }
}

/// Unknown countries behave exactly like the US fallback.
#[test]
fn unknown_country_uses_us() {
    assert_eq!(run_currency("98765", "ZZ"), run_currency("98765", "US"));
}

/// Typed separators and symbols are stripped before validation.
#[test]
fn pasted_currency_text_is_accepted() {
    let (_, currency) = compact_currency(run_currency("$1,000,000.00", "US"));
    // Stripping the decimal point leaves 100000000.
    assert_eq!(currency, "$ 100,000,000");
}

/// Every country produces "<symbol> <digits and separators>".
#[test]
fn currency_shape_for_all_countries() {
    for country in COUNTRIES {
        let (compact, currency) = compact_currency(run_currency("4000000", country.code));
        assert!(!compact.is_empty(), "{} compact empty", country.code);

        let (symbol, body) = currency
            .split_once(' ')
            .unwrap_or_else(|| panic!("{} currency has no space: {currency:?}", country.code));
        assert_eq!(symbol, country.currency_symbol);
        assert!(body.starts_with('4') && body.ends_with('0'));
        assert!(!body.contains('<') && !body.contains(country.currency_code));
    }
}

/// 18 digits is over the 17-digit cap.
#[test]
fn currency_too_large() {
    let outcome = run_currency("100000000000000000", "US");
    assert_eq!(
        outcome,
        Outcome::Invalid(ErrorKind::TooLarge {
            limit: Limit::Digits(17)
        })
    );
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Number too large (max 17 digits)")
    );
}

// ── Numify page ──────────────────────────────────────────────────────────────

/// Below the smallest unit the number is shown as is.
#[test]
fn small_number_not_abbreviated() {
    assert_eq!(abbreviated(run_abbreviate("500", "en")), "500");
}

#[test]
fn en_dialect_ladder() {
    assert_eq!(abbreviated(run_abbreviate("1234", "en")), "1.2K");
    assert_eq!(abbreviated(run_abbreviate("3400000", "en")), "3.4M");
    assert_eq!(abbreviated(run_abbreviate("7000000000", "en")), "7B");
    assert_eq!(abbreviated(run_abbreviate("1500000000000", "en")), "1.5T");
}

/// Every dialect returns something for the largest accepted input.
#[test]
fn every_dialect_handles_23_digits() {
    let max = "9".repeat(23);
    for code in ["en", "in", "de", "fr", "es", "it", "se"] {
        let out = abbreviated(run_abbreviate(&max, code));
        assert!(!out.is_empty(), "{code} produced nothing");
        assert!(!out.starts_with('0'), "{code}: {out}");
    }
}

/// 24 digits exceeds the digit cap and clears the output.
#[test]
fn numify_too_many_digits() {
    let outcome = run_abbreviate(&"1".repeat(24), "en");
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Number too large (max 23 digits)")
    );
    assert!(outcome.output().is_none());
}

#[test]
fn numify_messages_match_form_copy() {
    assert_eq!(
        run_abbreviate("abc", "en").error_message().as_deref(),
        Some("Invalid input (only numbers, no leading zeros)")
    );
    assert_eq!(
        run_abbreviate("007", "de").error_message().as_deref(),
        Some("Invalid input (only numbers, no leading zeros)")
    );
}

// ── Form state ───────────────────────────────────────────────────────────────

/// Typing fast on the Numify page only computes the last value.
#[test]
fn numify_form_debounces_keystrokes() {
    let t0 = Instant::now();
    let mut form = Form::new(numify_core::PipelineKind::Abbreviate);

    for (i, text) in ["1", "12", "123", "1234"].iter().enumerate() {
        form.set_input(text, t0 + Duration::from_millis(100 * i as u64));
        assert!(!form.tick(t0 + Duration::from_millis(100 * i as u64 + 50)));
    }
    assert_eq!(form.outcome(), &Outcome::Empty);

    let last = t0 + Duration::from_millis(300);
    assert!(form.tick(last + DEBOUNCE_DELAY));
    assert_eq!(abbreviated(form.outcome().clone()), "1.2K");
}

/// A format change applies to the current input without waiting.
#[test]
fn numify_form_selector_change_is_immediate() {
    let t0 = Instant::now();
    let mut form = Form::new(numify_core::PipelineKind::Abbreviate);
    form.set_input("2500000", t0);
    assert!(form.tick(t0 + DEBOUNCE_DELAY));

    form.set_selector("de");
    assert_eq!(abbreviated(form.outcome().clone()), "2,5 Mio.");
}

/// Invalid input after valid input clears the output.
#[test]
fn form_error_replaces_output() {
    let mut form = Form::new(numify_core::PipelineKind::Currency);
    form.set_input("42", Instant::now());
    assert!(form.output().is_some());

    form.set_input("042", Instant::now());
    assert!(form.output().is_none());
    assert_eq!(form.outcome(), &Outcome::Invalid(ErrorKind::LeadingZero));
}
