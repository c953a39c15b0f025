/// Formatters: validated values to display strings.
///
/// Locale data (grouping, separators, unit ladders) comes from the static
/// tables in [`crate::locale`] and [`crate::dialect`]; digit grouping itself
/// is delegated to `num-format`.
use crate::dialect::Dialect;
use crate::error::ErrorKind;
use crate::locale::LocaleConfig;
use compact_str::{format_compact, CompactString};
use num_format::ToFormattedString;

/// Result of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedOutput {
    /// Compact + currency page.
    Compact {
        compact: CompactString,
        currency: CompactString,
    },
    /// Numify page.
    Abbreviated { abbreviated: CompactString },
}

impl FormattedOutput {
    /// Apply `f` to every display string.
    pub fn map_strings(self, mut f: impl FnMut(&str) -> CompactString) -> Self {
        match self {
            Self::Compact { compact, currency } => Self::Compact {
                compact: f(&compact),
                currency: f(&currency),
            },
            Self::Abbreviated { abbreviated } => Self::Abbreviated {
                abbreviated: f(&abbreviated),
            },
        }
    }
}

/// Compact and currency renderings of `value` for `cfg`.
pub fn format_compact_currency(
    value: u64,
    cfg: &LocaleConfig,
) -> Result<FormattedOutput, ErrorKind> {
    let compact = cfg.compact.abbreviate(u128::from(value))?;
    let currency = format_currency(value, cfg);
    Ok(FormattedOutput::Compact { compact, currency })
}

/// `"<symbol> <digits-and-separators>"`.
///
/// The grouped rendering is filtered down to ASCII digits and the locale's
/// own separator characters, so symbol placement or ISO code text from the
/// grouping step never reaches the result.
pub fn format_currency(value: u64, cfg: &LocaleConfig) -> CompactString {
    let grouped = value.to_formatted_string(&cfg.grouping);
    let separator = cfg.grouping.separator();
    let decimal = cfg.grouping.decimal();

    let digits: String = grouped
        .chars()
        .filter(|c| c.is_ascii_digit() || separator.contains(*c) || decimal.contains(*c))
        .collect();

    format_compact!("{} {}", cfg.currency_symbol, digits)
}

/// Word-suffix abbreviation of `value` in `dialect`.
pub fn abbreviate(value: u128, dialect: &Dialect) -> Result<CompactString, ErrorKind> {
    dialect.ladder.abbreviate(value)
}
