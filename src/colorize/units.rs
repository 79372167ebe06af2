//! Human-readable magnitudes
//!
//! A value is divided by the largest prefix not exceeding it. The unit is
//! colored `unit_human_readable + 2 * |exponent|`, so bigger magnitudes walk
//! further along the logical palette.

use super::Colorizers;

/// Prefix family used to scale a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScale {
    /// Metric prefixes, base 1000 (plus `c`), `q` through `Q`.
    Si,
    /// Binary prefixes, base 1024, `Ki` through `Qi`.
    Iec,
    /// Short-scale count suffixes: K, M, B, T, ...
    Short,
}

/// Result of scaling a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaled {
    pub value: f64,
    pub exponent: i32,
    /// Prefix symbol followed by the unit
    pub unit: String,
}

// (symbol, exponent); the base comes from the scale.
const SI: &[(&str, i32)] = &[
    ("q", -30),
    ("r", -27),
    ("y", -24),
    ("z", -21),
    ("a", -18),
    ("f", -15),
    ("p", -12),
    ("n", -9),
    ("\u{b5}", -6),
    ("m", -3),
    ("c", -2),
    (" ", 0),
    ("k", 3),
    ("M", 6),
    ("G", 9),
    ("T", 12),
    ("P", 15),
    ("E", 18),
    ("Z", 21),
    ("Y", 24),
    ("R", 27),
    ("Q", 30),
];

const IEC: &[(&str, i32)] = &[
    ("  ", 0),
    ("Ki", 1),
    ("Mi", 2),
    ("Gi", 3),
    ("Ti", 4),
    ("Pi", 5),
    ("Ei", 6),
    ("Zi", 7),
    ("Yi", 8),
    ("Ri", 9),
    ("Qi", 10),
];

const SHORT: &[(&str, i32)] = &[
    ("", 0),
    ("K", 3),
    ("M", 6),
    ("B", 9),
    ("T", 12),
    ("Q", 15),
    ("QN", 18),
    ("S", 21),
    ("SN", 24),
    ("O", 27),
    ("N", 30),
];

impl UnitScale {
    fn table(self) -> (&'static [(&'static str, i32)], f64) {
        match self {
            UnitScale::Si => (SI, 10.0),
            UnitScale::Iec => (IEC, 1024.0),
            UnitScale::Short => (SHORT, 10.0),
        }
    }

    /// Scale `value` and attach the chosen prefix to `unit`.
    ///
    /// Zero (and NaN) stays unprefixed instead of taking the smallest
    /// prefix.
    pub fn scale(self, value: f64, unit: &str) -> Scaled {
        let (prefixes, base) = self.table();
        let magnitude = value.abs();

        let mut chosen = prefixes[0];
        if magnitude == 0.0 || magnitude.is_nan() {
            chosen = prefixes
                .iter()
                .copied()
                .find(|&(_, exp)| exp == 0)
                .unwrap_or(chosen);
        } else {
            for &(symbol, exp) in prefixes {
                if magnitude < base.powi(exp) {
                    break;
                }
                chosen = (symbol, exp);
            }
        }

        let (symbol, exponent) = chosen;
        Scaled {
            value: value / base.powi(exponent),
            exponent,
            unit: format!("{}{}", symbol, unit),
        }
    }
}

impl Colorizers {
    fn scaled(&self, scaled: &Scaled, separator: &str) -> String {
        let color = self.config.colors.unit_human_readable + 2 * scaled.exponent.abs();
        format!(
            "{}{}{}",
            self.float(scaled.value, self.config.format.float_precision),
            separator,
            self.wrap(&scaled.unit, color)
        )
    }

    pub fn human_readable_si(&self, value: f64, unit: &str) -> String {
        self.scaled(&UnitScale::Si.scale(value, unit), " ")
    }

    pub fn human_readable_iec(&self, value: f64, unit: &str) -> String {
        self.scaled(&UnitScale::Iec.scale(value, unit), " ")
    }

    /// Counts with short-scale suffixes, no separator: `1.50K`.
    pub fn human_readable_short(&self, value: f64) -> String {
        self.scaled(&UnitScale::Short.scale(value, ""), "")
    }

    pub fn bytes_si(&self, bytes: f64) -> String {
        self.human_readable_si(bytes, "B")
    }

    pub fn bytes_iec(&self, bytes: f64) -> String {
        self.human_readable_iec(bytes, "B")
    }

    /// `value` accumulated over `interval`, e.g. `1.20 MB/s`.
    pub fn rate_si(&self, value: f64, unit: &str, interval: &str) -> String {
        let unit = format!("{}/{}", unit, interval);
        self.scaled(&UnitScale::Si.scale(value, &unit), " ")
    }

    pub fn rate_iec(&self, value: f64, unit: &str, interval: &str) -> String {
        let unit = format!("{}/{}", unit, interval);
        self.scaled(&UnitScale::Iec.scale(value, &unit), " ")
    }
}
