/// Unit ladders: magnitude suffix tables and the abbreviation algorithm.
///
/// All arithmetic is done on integers. The value is scaled by
/// `10^fraction_digits` before dividing by the unit, so rounding is exact
/// and no float ever touches the digits that end up on screen.
use crate::error::ErrorKind;
use compact_str::{CompactString, ToCompactString};
use num_format::{Locale, ToFormattedString};

/// One rung: a magnitude and the suffix written after the scaled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub value: u128,
    pub suffix: &'static str,
}

/// Shorthand for table literals.
pub const fn unit(value: u128, suffix: &'static str) -> Unit {
    Unit { value, suffix }
}

/// A complete abbreviation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    /// Rungs in strictly increasing order of `value`.
    pub units: &'static [Unit],
    /// Decimal separator placed before the fractional digits.
    pub decimal: char,
    /// Text between the number and the suffix (empty, space, NBSP).
    pub spacer: &'static str,
    /// Maximum fractional digits kept after rounding.
    pub fraction_digits: u32,
    /// Digit grouping for whole parts, `None` for plain digits.
    pub grouping: Option<Locale>,
}

impl Ladder {
    /// Abbreviate `value` using the largest rung not above it.
    ///
    /// Values below the first rung come back as whole numbers. When
    /// rounding pushes the scaled value up to the next rung's ratio
    /// (`999 950` → `1000.0K`) the next rung is used instead (`1M`).
    pub fn abbreviate(&self, value: u128) -> Result<CompactString, ErrorKind> {
        let Some(mut idx) = self.units.iter().rposition(|u| u.value <= value) else {
            return Ok(self.whole(value));
        };

        let pow = 10u128.pow(self.fraction_digits);
        loop {
            let rung = self.units[idx];
            let scaled = scale(value, rung.value, pow)?;

            if let Some(next) = self.units.get(idx + 1) {
                let ratio = next.value / rung.value;
                if scaled >= ratio.saturating_mul(pow) {
                    idx += 1;
                    continue;
                }
            }
            return Ok(self.render(scaled, pow, rung));
        }
    }

    /// Render a whole number with this ladder's grouping.
    pub fn whole(&self, value: u128) -> CompactString {
        match self.grouping {
            Some(locale) => CompactString::from(value.to_formatted_string(&locale)),
            None => value.to_compact_string(),
        }
    }

    fn render(&self, scaled: u128, pow: u128, rung: Unit) -> CompactString {
        let mut out = self.whole(scaled / pow);

        let frac = scaled % pow;
        if frac > 0 {
            let width = self.fraction_digits as usize;
            let digits = format!("{frac:0width$}");
            out.push(self.decimal);
            out.push_str(digits.trim_end_matches('0'));
        }

        out.push_str(self.spacer);
        out.push_str(rung.suffix);
        out
    }
}

/// `round(value * pow / unit)`, half away from zero.
fn scale(value: u128, unit: u128, pow: u128) -> Result<u128, ErrorKind> {
    value
        .checked_mul(pow)
        .and_then(|v| v.checked_add(unit / 2))
        .and_then(|v| v.checked_div(unit))
        .ok_or_else(|| ErrorKind::formatting(format!("cannot scale {value} by unit {unit}")))
}
