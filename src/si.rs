//! SI-prefixed number formatting: engineering notation with as few digits as needed.
//!
//! The main entry point is [`format_si`], which renders a value with the
//! nearest SI magnitude prefix (`1500.0` → `"1.5k"`). [`SiFormatter`] wraps the
//! same logic in a reusable options struct with an optional unit suffix.

use serde::{Deserialize, Serialize};

/// SI magnitude prefix symbols, atto (`1e-18`) through yotta (`1e24`).
///
/// Index 6 is the empty prefix for the `10^0` band.
pub const SI_PREFIXES: [&str; 15] = [
    "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Decade exponents matching [`SI_PREFIXES`] entry for entry.
pub const SI_DECADES: [i32; 15] = [
    -18, -15, -12, -9, -6, -3, 0, 3, 6, 9, 12, 15, 18, 21, 24,
];

/// Index into [`SI_DECADES`] of the decade band containing `value`.
///
/// The band is the smallest decade `d` such that `log10(|value|) < d + 3`,
/// i.e. the value scaled by `10^-d` stays below 1000. Magnitudes beyond the
/// yotta range clamp to the last entry.
///
/// ```
/// # use tickfmt::si::{si_decade_index, SI_DECADES};
/// assert_eq!(SI_DECADES[si_decade_index(1500.0)], 3);
/// assert_eq!(SI_DECADES[si_decade_index(0.0025)], -3);
/// ```
pub fn si_decade_index(value: f64) -> usize {
    let exp = value.abs().log10();
    SI_DECADES
        .iter()
        .position(|&d| exp < (d + 3) as f64)
        .unwrap_or(SI_DECADES.len() - 1)
}

/// Format `value` with an SI prefix and at most `max_precision` fractional digits.
///
/// Zero and non-finite values are rendered via `Display` without any prefix
/// scaling (`"0"`, `"inf"`, `"NaN"`). With `drop_trailing_zeros` set, trailing
/// zeros in the fractional part are stripped, along with the decimal point if
/// nothing remains after it.
pub fn format_si(value: f64, max_precision: usize, drop_trailing_zeros: bool) -> String {
    if value == 0.0 {
        // Covers -0.0 as well, which `Display` would render as "-0".
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{}", value);
    }

    let idx = si_decade_index(value);
    let scaled = value * 10f64.powi(-SI_DECADES[idx]);
    let mut mantissa = format!("{:.*}", max_precision, scaled);

    if drop_trailing_zeros && mantissa.contains('.') {
        let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.').len();
        mantissa.truncate(trimmed);
    }

    format!("{}{}", mantissa, SI_PREFIXES[idx])
}

// ─────────────────────────────────────────────────────────────────────────────
// SiFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Reusable SI formatter with an optional unit suffix.
///
/// The unit is appended directly after the prefix symbol, so with
/// `unit: Some("V".into())` the value `1500.0` renders as `"1.5kV"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiFormatter {
    /// Maximum number of fractional digits in the mantissa.
    pub max_precision: usize,
    /// Strip trailing zeros (and a then-dangling decimal point).
    pub drop_trailing_zeros: bool,
    /// Optional unit suffix appended after the prefix (e.g. `"V"`).
    pub unit: Option<String>,
}

impl Default for SiFormatter {
    fn default() -> Self {
        Self {
            max_precision: 4,
            drop_trailing_zeros: true,
            unit: None,
        }
    }
}

impl SiFormatter {
    /// Format `value` with this formatter's settings.
    pub fn format(&self, value: f64) -> String {
        let s = format_si(value, self.max_precision, self.drop_trailing_zeros);
        match &self.unit {
            Some(u) => format!("{}{}", s, u),
            None => s,
        }
    }
}
