//! Date-axis labels: a timestamp plus a granularity tier maps to a calendar string.
//!
//! [`Granularity`] tiers run from sub-second up to decades; [`DateFormatter`]
//! picks the label shape from the tier (year only, month + year, month + day,
//! or a 12-hour clock stacked above the day).

use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Abbreviated month names, indexed by zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Left-pad `value` with zeros to `width` digits. Never truncates.
///
/// ```
/// assert_eq!(tickfmt::date::zeropad(7, 3), "007");
/// assert_eq!(tickfmt::date::zeropad(123, 2), "123");
/// ```
pub fn zeropad(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

// ─────────────────────────────────────────────────────────────────────────────
// Granularity
// ─────────────────────────────────────────────────────────────────────────────

/// Time-scale resolution of axis labels, ordered finest to coarsest.
///
/// The ordering is significant: tier checks are plain comparisons, e.g.
/// seconds are only rendered below [`Granularity::Minutely`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Millisecondly,
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
    Decadal,
}

impl Granularity {
    /// Pick the tier matching a tick step of `step` seconds.
    pub fn from_step_secs(step: f64) -> Self {
        const MINUTE: f64 = 60.0;
        const HOUR: f64 = 3_600.0;
        const DAY: f64 = 86_400.0;
        const YEAR: f64 = 365.25 * DAY;

        if step >= 10.0 * YEAR {
            Granularity::Decadal
        } else if step >= YEAR {
            Granularity::Annual
        } else if step >= 90.0 * DAY {
            Granularity::Quarterly
        } else if step >= 28.0 * DAY {
            Granularity::Monthly
        } else if step >= 7.0 * DAY {
            Granularity::Weekly
        } else if step >= DAY {
            Granularity::Daily
        } else if step >= HOUR {
            Granularity::Hourly
        } else if step >= MINUTE {
            Granularity::Minutely
        } else if step >= 1.0 {
            Granularity::Secondly
        } else {
            Granularity::Millisecondly
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DateFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Formats a seconds-since-epoch timestamp into a date-axis label.
///
/// # Label shapes by granularity
/// * `>= Decadal` – `"2024"`
/// * `>= Monthly` – `"Mar 2024"`
/// * `>= Daily` – `"Mar 5"`
/// * finer – `"1:05p"` style 12-hour clock, with a `:SS` field below
///   [`Granularity::Minutely`], stacked above the day string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateFormatter {
    /// Interpret timestamps in UTC instead of the local timezone.
    pub utc: bool,
    /// Put the day string of sub-daily labels on its own line.
    /// Default: `true` (egui renders `\n` as a line break in tick labels).
    pub day_on_new_line: bool,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            utc: false,
            day_on_new_line: true,
        }
    }
}

impl DateFormatter {
    /// Shorthand for a UTC formatter with default settings.
    pub fn utc() -> Self {
        Self {
            utc: true,
            ..Self::default()
        }
    }

    /// Format `timestamp_secs` (seconds since the UNIX epoch) at `granularity`.
    ///
    /// Non-finite or out-of-range timestamps fall back to the UNIX epoch.
    pub fn format(&self, timestamp_secs: f64, granularity: Granularity) -> String {
        let (year, month0, day, hours, mins, secs) = self.civil_fields(timestamp_secs);
        let month_name = MONTH_NAMES[month0 as usize];

        if granularity >= Granularity::Decadal {
            return year.to_string();
        }
        if granularity >= Granularity::Monthly {
            return format!("{} {}", month_name, year);
        }

        let day_str = format!("{} {}", month_name, day);
        if granularity >= Granularity::Daily {
            return day_str;
        }

        let sec_str = if granularity < Granularity::Minutely {
            format!(":{}", zeropad(secs, 2))
        } else {
            String::new()
        };

        let (mut hour12, period) = if hours >= 12 {
            (hours - 12, 'p')
        } else {
            (hours, 'a')
        };
        if hour12 == 0 {
            hour12 = 12;
        }

        let sep = if self.day_on_new_line { '\n' } else { ' ' };
        format!(
            "{}:{}{}{}{}{}",
            hour12,
            zeropad(mins, 2),
            sec_str,
            period,
            sep,
            day_str
        )
    }

    /// Calendar fields (year, zero-based month, day, hour, minute, second) in
    /// the configured timezone.
    fn civil_fields(&self, timestamp_secs: f64) -> (i32, u32, u32, u32, u32, u32) {
        let dt = secs_to_utc(timestamp_secs);
        if self.utc {
            extract(&dt)
        } else {
            extract(&dt.with_timezone(&Local))
        }
    }
}

fn extract<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> (i32, u32, u32, u32, u32, u32) {
    (
        dt.year(),
        dt.month0(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    )
}

/// Convert seconds-since-epoch (as `f64`) to [`chrono::DateTime<chrono::Utc>`].
/// Clamped to valid range; values outside fall back to the UNIX epoch.
fn secs_to_utc(secs: f64) -> DateTime<Utc> {
    if !secs.is_finite() {
        return DateTime::from_timestamp(0, 0).unwrap();
    }
    let s = secs.floor() as i64;
    let ns_frac = ((secs - s as f64) * 1e9).round() as u32;
    let ns_frac = ns_frac.min(999_999_999);
    DateTime::from_timestamp(s, ns_frac)
        .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
}
