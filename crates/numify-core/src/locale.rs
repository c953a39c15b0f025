/// Country table for the compact + currency page, and the generic
/// selector resolver shared with [`crate::dialect`].
use crate::ladder::{unit, Ladder};
use num_format::Locale;
use tracing::warn;

/// A table entry addressable by a selector code.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Look `selector` up in `table`, falling back to `fallback`.
///
/// Never fails: an unknown selector is a defined default path, not an
/// error. Codes compare case-insensitively.
pub fn resolve<'a, T: Keyed>(selector: &str, table: &'a [T], fallback: &'a T) -> &'a T {
    match table
        .iter()
        .find(|entry| entry.key().eq_ignore_ascii_case(selector))
    {
        Some(entry) => entry,
        None => {
            warn!(
                "Unknown selector {:?} -- falling back to {:?}",
                selector,
                fallback.key()
            );
            fallback
        }
    }
}

/// Locale settings for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Selector code shown in the UI (ISO 3166 alpha-2).
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// BCP 47 locale identifier.
    pub locale_id: &'static str,
    /// ISO 4217 currency code.
    pub currency_code: &'static str,
    /// Symbol prefixed to the currency rendering.
    pub currency_symbol: &'static str,
    /// Digit grouping and decimal conventions.
    pub grouping: Locale,
    /// Compact notation style.
    pub compact: &'static Ladder,
}

impl Keyed for LocaleConfig {
    fn key(&self) -> &str {
        self.code
    }
}

const NBSP: &str = "\u{a0}";

const EN_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "K"),
        unit(1_000_000, "M"),
        unit(1_000_000_000, "B"),
        unit(1_000_000_000_000, "T"),
    ],
    decimal: '.',
    spacer: "",
    fraction_digits: 1,
    grouping: Some(Locale::en),
};

const EN_IN_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "K"),
        unit(100_000, "L"),
        unit(10_000_000, "Cr"),
        unit(1_000_000_000_000, "LCr"),
    ],
    decimal: '.',
    spacer: "",
    fraction_digits: 1,
    grouping: Some(Locale::en_IN),
};

// German and Italian do not abbreviate thousands.
const DE_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000_000, "Mio."),
        unit(1_000_000_000, "Mrd."),
        unit(1_000_000_000_000, "Bio."),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::de),
};

const DE_CH_COMPACT: Ladder = Ladder {
    decimal: '.',
    grouping: Some(Locale::de_CH),
    ..DE_COMPACT
};

const IT_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000_000, "Mln"),
        unit(1_000_000_000, "Mrd"),
        unit(1_000_000_000_000, "Bln"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::it),
};

const FR_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "k"),
        unit(1_000_000, "M"),
        unit(1_000_000_000, "Md"),
        unit(1_000_000_000_000, "Bn"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::fr),
};

const ES_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "mil"),
        unit(1_000_000, "M"),
        unit(1_000_000_000, "mil M"),
        unit(1_000_000_000_000, "B"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::es),
};

const PT_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "mil"),
        unit(1_000_000, "mi"),
        unit(1_000_000_000, "bi"),
        unit(1_000_000_000_000, "tri"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::pt),
};

const RU_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "тыс."),
        unit(1_000_000, "млн"),
        unit(1_000_000_000, "млрд"),
        unit(1_000_000_000_000, "трлн"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::ru),
};

const SV_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "tn"),
        unit(1_000_000, "mn"),
        unit(1_000_000_000, "md"),
        unit(1_000_000_000_000, "bn"),
    ],
    decimal: ',',
    spacer: NBSP,
    fraction_digits: 1,
    grouping: Some(Locale::sv),
};

// East Asian ladders step by 10^4.
const JA_COMPACT: Ladder = Ladder {
    units: &[
        unit(10_000, "万"),
        unit(100_000_000, "億"),
        unit(1_000_000_000_000, "兆"),
        unit(10_000_000_000_000_000, "京"),
    ],
    decimal: '.',
    spacer: "",
    fraction_digits: 1,
    grouping: Some(Locale::ja),
};

const ZH_COMPACT: Ladder = Ladder {
    units: &[
        unit(10_000, "万"),
        unit(100_000_000, "亿"),
        unit(1_000_000_000_000, "万亿"),
    ],
    decimal: '.',
    spacer: "",
    fraction_digits: 1,
    grouping: Some(Locale::zh),
};

const KO_COMPACT: Ladder = Ladder {
    units: &[
        unit(1_000, "천"),
        unit(10_000, "만"),
        unit(100_000_000, "억"),
        unit(1_000_000_000_000, "조"),
    ],
    decimal: '.',
    spacer: "",
    fraction_digits: 1,
    grouping: Some(Locale::ko),
};

const fn country(
    code: &'static str,
    name: &'static str,
    locale_id: &'static str,
    currency_code: &'static str,
    currency_symbol: &'static str,
    grouping: Locale,
    compact: &'static Ladder,
) -> LocaleConfig {
    LocaleConfig {
        code,
        name,
        locale_id,
        currency_code,
        currency_symbol,
        grouping,
        compact,
    }
}

/// Every supported country. The first entry is the fallback.
pub static COUNTRIES: &[LocaleConfig] = &[
    country("US", "United States", "en-US", "USD", "$", Locale::en, &EN_COMPACT),
    country("IN", "India", "en-IN", "INR", "₹", Locale::en_IN, &EN_IN_COMPACT),
    country("GB", "United Kingdom", "en-GB", "GBP", "£", Locale::en, &EN_COMPACT),
    country("DE", "Germany", "de-DE", "EUR", "€", Locale::de, &DE_COMPACT),
    country("FR", "France", "fr-FR", "EUR", "€", Locale::fr, &FR_COMPACT),
    country("ES", "Spain", "es-ES", "EUR", "€", Locale::es, &ES_COMPACT),
    country("IT", "Italy", "it-IT", "EUR", "€", Locale::it, &IT_COMPACT),
    country("JP", "Japan", "ja-JP", "JPY", "¥", Locale::ja, &JA_COMPACT),
    country("CN", "China", "zh-CN", "CNY", "¥", Locale::zh, &ZH_COMPACT),
    country("KR", "South Korea", "ko-KR", "KRW", "₩", Locale::ko, &KO_COMPACT),
    country("BR", "Brazil", "pt-BR", "BRL", "R$", Locale::pt, &PT_COMPACT),
    country("RU", "Russia", "ru-RU", "RUB", "₽", Locale::ru, &RU_COMPACT),
    country("CA", "Canada", "en-CA", "CAD", "$", Locale::en, &EN_COMPACT),
    country("AU", "Australia", "en-AU", "AUD", "$", Locale::en, &EN_COMPACT),
    country("CH", "Switzerland", "de-CH", "CHF", "CHF", Locale::de_CH, &DE_CH_COMPACT),
    country("SE", "Sweden", "sv-SE", "SEK", "kr", Locale::sv, &SV_COMPACT),
];

/// The fallback country (`US`).
pub fn default_country() -> &'static LocaleConfig {
    &COUNTRIES[0]
}

/// Resolve a country code, falling back to `US`.
pub fn resolve_country(code: &str) -> &'static LocaleConfig {
    resolve(code, COUNTRIES, default_country())
}
