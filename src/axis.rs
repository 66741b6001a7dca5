//! Adapters from the formatters to `egui_plot` axis-formatter callbacks.
//!
//! Each function returns a closure with the signature
//! `Fn(GridMark, &RangeInclusive<f64>) -> String` expected by
//! [`egui_plot::Plot::x_axis_formatter`] and `y_axis_formatter`:
//!
//! ```ignore
//! Plot::new("scope")
//!     .y_axis_formatter(tickfmt::compressed_axis_formatter(TickLabeler::default()))
//!     .x_axis_formatter(tickfmt::date_axis_formatter(DateFormatter::default()));
//! ```

use std::ops::RangeInclusive;

use egui_plot::GridMark;

use crate::date::{DateFormatter, Granularity};
use crate::si::format_si;
use crate::ticks::{offset_metric, TickLabeler};

/// Absolute SI-prefixed labels at `max_precision` fractional digits.
pub fn si_axis_formatter(
    max_precision: usize,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| format_si(mark.value, max_precision, true)
}

/// Offset-compressed labels driven by the visible range.
///
/// `egui_plot` requests one label at a time, so unlike
/// [`TickLabeler::relabel`] there is no tick list to anchor on; the anchor is
/// recomputed as the first step-aligned position at or above the lower bound.
pub fn compressed_axis_formatter(
    labeler: TickLabeler,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, range| {
        let (lower, upper) = (*range.start(), *range.end());
        if offset_metric(lower, upper) <= labeler.offset_metric_threshold {
            return format_si(mark.value, labeler.delta_precision, true);
        }

        let step = mark.step_size.abs().max(f64::EPSILON);
        let anchor = (lower / step).ceil() * step;
        if (mark.value - anchor).abs() < step * 0.5 {
            format!("≈{}", format_si(anchor, labeler.offset_precision, true))
        } else if mark.value < anchor {
            String::new()
        } else {
            format!(
                "+{}",
                format_si(mark.value - anchor, labeler.delta_precision, true)
            )
        }
    }
}

/// Date labels with the granularity tier derived from the grid step.
pub fn date_axis_formatter(
    fmt: DateFormatter,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| fmt.format(mark.value, Granularity::from_step_secs(mark.step_size))
}
