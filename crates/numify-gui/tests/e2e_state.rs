/// End-to-end tests for `AppState`, the GUI application state machine.
///
/// These tests drive `AppState` the way the frame loop does, without
/// spinning up an egui window, and supply their own `Instant`s so the
/// debounce timing is deterministic.
///
/// **Scope:**
///   - Page switching and the active form
///   - Debounced recompute on the Numify page via `tick`
///   - Copy notice lifetime
///   - Preferences snapshot, restore and tolerant deserialisation
use numify_core::pipeline::DEBOUNCE_DELAY;
use numify_core::{ErrorKind, FormattedOutput, Outcome};
use numify_gui::state::{AppState, Page, Preferences, COPY_NOTICE_DURATION};
use std::time::{Duration, Instant};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn compact_of(state: &AppState) -> Option<(String, String)> {
    match state.currency.output() {
        Some(FormattedOutput::Compact { compact, currency }) => {
            Some((compact.to_string(), currency.to_string()))
        }
        _ => None,
    }
}

fn abbreviated_of(state: &AppState) -> Option<String> {
    match state.numify.output() {
        Some(FormattedOutput::Abbreviated { abbreviated }) => Some(abbreviated.to_string()),
        _ => None,
    }
}

// ── Initial state ─────────────────────────────────────────────────────────────

#[test]
fn new_state_starts_on_currency_page_with_defaults() {
    let state = AppState::new();
    assert_eq!(state.page, Page::Currency);
    assert!(state.dark_mode);
    assert!(!state.show_about);
    assert_eq!(state.currency.selector(), "US");
    assert_eq!(state.numify.selector(), "en");
    assert_eq!(state.currency.outcome(), &Outcome::Empty);
    assert_eq!(state.numify.outcome(), &Outcome::Empty);
}

#[test]
fn active_form_follows_page() {
    let mut state = AppState::new();
    state.numify.set_input("42", Instant::now());

    assert_eq!(state.active_form().input(), "");
    state.page = Page::Numify;
    assert_eq!(state.active_form().input(), "42");
}

// ── Currency page ─────────────────────────────────────────────────────────────

#[test]
fn currency_input_formats_without_ticking() {
    let mut state = AppState::new();
    state.currency.set_input("1234567", Instant::now());
    assert_eq!(
        compact_of(&state),
        Some(("1.2M".to_string(), "$ 1,234,567".to_string()))
    );
}

#[test]
fn currency_country_change_recomputes_immediately() {
    let mut state = AppState::new();
    state.currency.set_input("12345678", Instant::now());
    state.currency.set_selector("IN");
    assert_eq!(
        compact_of(&state),
        Some(("1.2Cr".to_string(), "₹ 1,23,45,678".to_string()))
    );
}

#[test]
fn currency_error_is_reported_on_active_form() {
    let mut state = AppState::new();
    state.currency.set_input("0", Instant::now());
    assert_eq!(
        state.active_form().outcome(),
        &Outcome::Invalid(ErrorKind::LeadingZero)
    );
    assert_eq!(
        state.active_form().error_message().as_deref(),
        Some("Invalid input (only numbers, no leading zeros)")
    );
}

// ── Numify page debounce ──────────────────────────────────────────────────────

#[test]
fn numify_input_waits_for_tick() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.page = Page::Numify;
    state.numify.set_input("1234", t0);

    assert!(state.is_pending(t0));
    assert_eq!(abbreviated_of(&state), None);

    // Mid-window tick: nothing fires, repaint is requested for later.
    let wait = state.tick(t0 + DEBOUNCE_DELAY / 2);
    assert!(wait.is_some_and(|w| w <= DEBOUNCE_DELAY / 2));
    assert_eq!(abbreviated_of(&state), None);

    // Due tick: recompute runs and nothing is left waiting.
    let wait = state.tick(t0 + DEBOUNCE_DELAY);
    assert_eq!(wait, None);
    assert!(!state.is_pending(t0 + DEBOUNCE_DELAY));
    assert_eq!(abbreviated_of(&state), Some("1.2K".to_string()));
}

#[test]
fn rapid_typing_only_formats_last_value() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.numify.set_input("1", t0);
    state.numify.set_input("12", t0 + Duration::from_millis(100));
    state.numify.set_input("1234", t0 + Duration::from_millis(200));

    // The first schedule would have been due here, but it was replaced.
    state.tick(t0 + DEBOUNCE_DELAY);
    assert_eq!(abbreviated_of(&state), None);

    state.tick(t0 + Duration::from_millis(200) + DEBOUNCE_DELAY);
    assert_eq!(abbreviated_of(&state), Some("1.2K".to_string()));
}

#[test]
fn numify_format_change_does_not_wait() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.numify.set_input("3400000", t0);
    state.tick(t0 + DEBOUNCE_DELAY);
    assert_eq!(abbreviated_of(&state), Some("3.4M".to_string()));

    state.numify.set_selector("de");
    assert_eq!(abbreviated_of(&state), Some("3,4 Mio.".to_string()));
}

#[test]
fn clear_drops_pending_recompute() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.numify.set_input("999", t0);
    state.numify.clear();

    assert_eq!(state.tick(t0 + DEBOUNCE_DELAY), None);
    assert_eq!(state.numify.outcome(), &Outcome::Empty);
    assert_eq!(state.numify.input(), "");
}

// ── Copy notice ───────────────────────────────────────────────────────────────

#[test]
fn copy_notice_expires_after_duration() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.mark_copied(t0);

    let wait = state.tick(t0 + Duration::from_millis(500));
    assert_eq!(wait, Some(COPY_NOTICE_DURATION - Duration::from_millis(500)));
    assert!(state.copied_at.is_some());

    assert_eq!(state.tick(t0 + COPY_NOTICE_DURATION), None);
    assert!(state.copied_at.is_none());
}

#[test]
fn tick_reports_soonest_timer() {
    let t0 = Instant::now();
    let mut state = AppState::new();
    state.mark_copied(t0);
    state.numify.set_input("5", t0);

    // Debounce (250 ms) is due before the copy notice (1.5 s) expires.
    assert_eq!(state.tick(t0), Some(DEBOUNCE_DELAY));
}

// ── Preferences ───────────────────────────────────────────────────────────────

#[test]
fn preferences_round_trip_through_state() {
    let mut state = AppState::new();
    state.page = Page::Numify;
    state.dark_mode = false;
    state.currency.set_selector("JP");
    state.numify.set_selector("in");

    let prefs = state.preferences();
    let restored = AppState::from_preferences(&prefs);
    assert_eq!(restored.page, Page::Numify);
    assert!(!restored.dark_mode);
    assert_eq!(restored.currency.selector(), "JP");
    assert_eq!(restored.numify.selector(), "in");
    assert_eq!(restored.preferences(), prefs);
}

#[test]
fn preferences_never_carry_input() {
    let mut state = AppState::new();
    state.currency.set_input("123", Instant::now());
    let restored = AppState::from_preferences(&state.preferences());
    assert_eq!(restored.currency.input(), "");
    assert_eq!(restored.currency.outcome(), &Outcome::Empty);
}

#[test]
fn unknown_stored_codes_fall_back_to_defaults() {
    let prefs = Preferences {
        page: Page::Currency,
        country: "ZZ".to_string(),
        format: "klingon".to_string(),
        dark_mode: true,
    };
    let state = AppState::from_preferences(&prefs);
    assert_eq!(state.currency.selector(), "US");
    assert_eq!(state.numify.selector(), "en");
}

#[test]
fn partial_stored_preferences_fill_in_defaults() {
    let prefs: Preferences = serde_json::from_str(r#"{ "country": "DE" }"#).unwrap();
    assert_eq!(prefs.country, "DE");
    assert_eq!(prefs.format, "en");
    assert_eq!(prefs.page, Page::Currency);
    assert!(prefs.dark_mode);
}

#[test]
fn page_titles_differ() {
    assert_ne!(Page::Currency.window_title(), Page::Numify.window_title());
    assert!(Page::Currency.window_title().starts_with("Numify"));
}
