/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Each page
/// owns a [`Form`] from `numify-core`; the UI thread is its only writer.
/// Debounced recomputes fire from [`AppState::tick`], which runs once per
/// frame.
use numify_core::dialect::DIALECTS;
use numify_core::form::Form;
use numify_core::locale::COUNTRIES;
use numify_core::PipelineKind;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long the "copied" confirmation stays in the status bar.
pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(1_500);

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Compact + currency.
    Currency,
    /// Word-suffix abbreviation.
    Numify,
}

impl Page {
    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Currency => "💱 Currency",
            Self::Numify => "📊 Numify",
        }
    }

    /// Window title while this page is showing.
    pub fn window_title(self) -> &'static str {
        match self {
            Self::Currency => "Numify -- compact and currency number formats",
            Self::Numify => "Numify -- convert long numbers to human readable format",
        }
    }
}

/// Settings remembered between sessions. Never includes typed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub page: Page,
    pub country: String,
    pub format: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page: Page::Currency,
            country: PipelineKind::Currency.default_selector().to_owned(),
            format: PipelineKind::Abbreviate.default_selector().to_owned(),
            dark_mode: true,
        }
    }
}

/// All application state.
pub struct AppState {
    pub page: Page,
    /// Compact + currency form.
    pub currency: Form,
    /// Abbreviation form.
    pub numify: Form,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub show_about: bool,
    /// When an output was last copied to the clipboard.
    pub copied_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self {
            page: Page::Currency,
            currency: Form::new(PipelineKind::Currency),
            numify: Form::new(PipelineKind::Abbreviate),
            dark_mode: true,
            show_about: false,
            copied_at: None,
        }
    }

    /// Create state from stored preferences.
    ///
    /// Selector codes that are no longer in the tables are dropped in
    /// favour of the defaults.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let mut state = Self::new();
        state.page = prefs.page;
        state.dark_mode = prefs.dark_mode;

        if COUNTRIES.iter().any(|c| c.code == prefs.country) {
            state.currency.set_selector(&prefs.country);
        } else {
            warn!("Ignoring stored country {:?}", prefs.country);
        }
        if DIALECTS.iter().any(|d| d.code == prefs.format) {
            state.numify.set_selector(&prefs.format);
        } else {
            warn!("Ignoring stored format {:?}", prefs.format);
        }

        info!(
            "Restored preferences: page {:?}, country {}, format {}",
            state.page,
            state.currency.selector(),
            state.numify.selector()
        );
        state
    }

    /// Snapshot the settings worth remembering.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            page: self.page,
            country: self.currency.selector().to_owned(),
            format: self.numify.selector().to_owned(),
            dark_mode: self.dark_mode,
        }
    }

    /// The form behind the visible page.
    pub fn active_form(&self) -> &Form {
        match self.page {
            Page::Currency => &self.currency,
            Page::Numify => &self.numify,
        }
    }

    /// Fire due debounced recomputes and expire the copy notice.
    ///
    /// Returns how long until the next timed change, so the caller can ask
    /// for a repaint then. `None` means nothing is waiting.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.currency.tick(now);
        self.numify.tick(now);

        let notice_left = match self.copied_at {
            Some(at) => {
                let left = COPY_NOTICE_DURATION.saturating_sub(now.saturating_duration_since(at));
                if left.is_zero() {
                    self.copied_at = None;
                    None
                } else {
                    Some(left)
                }
            }
            None => None,
        };

        [
            self.currency.time_remaining(now),
            self.numify.time_remaining(now),
            notice_left,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Record that an output was copied.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the visible page is waiting for a debounced recompute.
    pub fn is_pending(&self, now: Instant) -> bool {
        self.active_form().time_remaining(now).is_some()
    }
}
