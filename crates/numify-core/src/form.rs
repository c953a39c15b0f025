/// Form state: the single-writer (input, selector, outcome) triple.
///
/// The UI owns one [`Form`] per page and is its only writer. Each change
/// recomputes from the current input and selector; the Numify page defers
/// recomputation on typing through a [`Debouncer`].
use crate::debounce::Debouncer;
use crate::format::FormattedOutput;
use crate::pipeline::{Outcome, PipelineKind};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Form {
    kind: PipelineKind,
    input: String,
    selector: String,
    outcome: Outcome,
    debouncer: Option<Debouncer<String>>,
}

impl Form {
    /// An empty form with the page's default selector.
    pub fn new(kind: PipelineKind) -> Self {
        Self {
            kind,
            input: String::new(),
            selector: kind.default_selector().to_owned(),
            outcome: Outcome::Empty,
            debouncer: kind.debounce().map(Debouncer::new),
        }
    }

    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn error_message(&self) -> Option<String> {
        self.outcome.error_message()
    }

    pub fn output(&self) -> Option<&FormattedOutput> {
        self.outcome.output()
    }

    /// Store new input text, truncated to the page's keystroke cap.
    ///
    /// The Currency page recomputes immediately; the Numify page schedules
    /// a recompute for `now + DEBOUNCE_DELAY`, replacing any pending one.
    pub fn set_input(&mut self, raw: &str, now: Instant) {
        self.input = raw.chars().take(self.kind.input_char_limit()).collect();
        let input = self.input.clone();
        match self.debouncer.as_mut() {
            Some(debouncer) => debouncer.schedule(input, now),
            None => self.recompute_with(&input),
        }
    }

    /// Change the selector and recompute from the current input at once.
    pub fn set_selector(&mut self, code: &str) {
        if self.selector == code {
            return;
        }
        self.selector = code.to_owned();
        let input = self.input.clone();
        self.recompute_with(&input);
    }

    /// Fire a due debounced recompute. Returns `true` if one ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.debouncer.as_mut().and_then(|d| d.poll(now));
        match due {
            Some(raw) => {
                self.recompute_with(&raw);
                true
            }
            None => false,
        }
    }

    /// How long until the pending debounced recompute fires.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.as_ref().and_then(|d| d.time_remaining(now))
    }

    /// Clear input and outcome, dropping any pending recompute.
    pub fn clear(&mut self) {
        self.input.clear();
        self.outcome = Outcome::Empty;
        if let Some(debouncer) = self.debouncer.as_mut() {
            debouncer.cancel();
        }
    }

    fn recompute_with(&mut self, raw: &str) {
        self.outcome = self.kind.run(raw, &self.selector);
    }
}
