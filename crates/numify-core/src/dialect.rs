/// Abbreviation dialects for the Numify page.
///
/// Each format code maps straight to a [`Ladder`]; no currency data is
/// involved. Unknown codes fall back to `en`.
use crate::ladder::{unit, Ladder};
use crate::locale::{resolve, Keyed};

/// One abbreviation dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Format code shown in the selector.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    pub ladder: Ladder,
}

impl Keyed for Dialect {
    fn key(&self) -> &str {
        self.code
    }
}

const K: u128 = 1_000;
const M: u128 = 1_000_000;
const B: u128 = 1_000_000_000;
const T: u128 = 1_000_000_000_000;
const QA: u128 = 1_000_000_000_000_000;
const QI: u128 = 1_000_000_000_000_000_000;
const SX: u128 = 1_000_000_000_000_000_000_000;

// Continental dialects: decimal comma and a space before the suffix.
const SPACED: Ladder = Ladder {
    units: &[],
    decimal: ',',
    spacer: " ",
    fraction_digits: 1,
    grouping: None,
};

/// Every supported dialect. The first entry is the fallback.
pub static DIALECTS: &[Dialect] = &[
    Dialect {
        code: "en",
        name: "English",
        ladder: Ladder {
            units: &[
                unit(K, "K"),
                unit(M, "M"),
                unit(B, "B"),
                unit(T, "T"),
                unit(QA, "Qa"),
                unit(QI, "Qi"),
                unit(SX, "Sx"),
            ],
            decimal: '.',
            spacer: "",
            fraction_digits: 1,
            grouping: None,
        },
    },
    Dialect {
        code: "in",
        name: "Indian",
        ladder: Ladder {
            units: &[
                unit(K, "K"),
                unit(100_000, "L"),
                unit(10_000_000, "Cr"),
                unit(T, "L Cr"),
                unit(100_000_000_000_000, "Cr Cr"),
            ],
            decimal: '.',
            spacer: "",
            fraction_digits: 1,
            grouping: None,
        },
    },
    Dialect {
        code: "de",
        name: "German",
        ladder: Ladder {
            units: &[
                unit(K, "Tsd."),
                unit(M, "Mio."),
                unit(B, "Mrd."),
                unit(T, "Bio."),
                unit(QA, "Brd."),
                unit(QI, "Trio."),
                unit(SX, "Trd."),
            ],
            ..SPACED
        },
    },
    Dialect {
        code: "fr",
        name: "French",
        ladder: Ladder {
            units: &[
                unit(K, "k"),
                unit(M, "M"),
                unit(B, "Md"),
                unit(T, "Bn"),
                unit(QA, "Bd"),
                unit(QI, "Tn"),
                unit(SX, "Td"),
            ],
            ..SPACED
        },
    },
    Dialect {
        code: "es",
        name: "Spanish",
        ladder: Ladder {
            units: &[
                unit(K, "mil"),
                unit(M, "M"),
                unit(B, "mil M"),
                unit(T, "B"),
                unit(QI, "T"),
            ],
            ..SPACED
        },
    },
    Dialect {
        code: "it",
        name: "Italian",
        ladder: Ladder {
            units: &[
                unit(K, "k"),
                unit(M, "Mln"),
                unit(B, "Mld"),
                unit(T, "Bln"),
                unit(QA, "Bld"),
                unit(QI, "Trl"),
                unit(SX, "Trd"),
            ],
            ..SPACED
        },
    },
    Dialect {
        code: "se",
        name: "Swedish",
        ladder: Ladder {
            units: &[
                unit(K, "tn"),
                unit(M, "mn"),
                unit(B, "md"),
                unit(T, "bn"),
                unit(QA, "bd"),
                unit(QI, "tn bn"),
                unit(SX, "trd"),
            ],
            ..SPACED
        },
    },
];

/// The fallback dialect (`en`).
pub fn default_dialect() -> &'static Dialect {
    &DIALECTS[0]
}

/// Resolve a format code, falling back to `en`.
pub fn resolve_dialect(code: &str) -> &'static Dialect {
    resolve(code, DIALECTS, default_dialect())
}
