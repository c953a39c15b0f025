/// Numify Core: input validation and locale-aware number formatting.
///
/// This crate contains all business logic with zero UI dependencies.
/// Every pipeline run is a pure function of (raw input, selector); the
/// frontend only owns a [`form::Form`] per page and displays its outcome.
///
/// # Modules
///
/// - [`sanitize`]: Raw keystrokes to a validated digit string.
/// - [`bounds`]: Digit string to integer under a size policy.
/// - [`locale`]: Country table and the selector resolver.
/// - [`dialect`]: Abbreviation dialect table.
/// - [`ladder`]: Unit ladders and the abbreviation algorithm.
/// - [`format`]: Compact, currency and abbreviated renderings.
/// - [`display`]: Markup stripping for display strings.
/// - [`pipeline`]: Stage composition and the [`pipeline::Outcome`] type.
/// - [`debounce`]: Trailing-edge debounce primitive.
/// - [`form`]: Single-writer form state for one page.
pub mod bounds;
pub mod debounce;
pub mod dialect;
pub mod display;
pub mod error;
pub mod form;
pub mod format;
pub mod ladder;
pub mod locale;
pub mod pipeline;
pub mod sanitize;

pub use error::{ErrorKind, Limit};
pub use form::Form;
pub use format::FormattedOutput;
pub use pipeline::{run_abbreviate, run_currency, Outcome, PipelineKind};
