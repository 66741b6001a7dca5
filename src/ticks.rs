//! Axis tick generation and offset-compressed tick labeling.
//!
//! [`TickLabeler`] rewrites the labels of a tick set produced by a
//! [`TickGenerator`]. When the axis range sits far from zero relative to its
//! span (think a sensor hovering around 1.000025 V), absolute labels would all
//! render identically; the labeler then switches to an offset-compressed
//! scheme showing one approximate reference value and signed deltas from it.

use serde::{Deserialize, Serialize};

use crate::si::format_si;

/// A labeled position on a chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Axis-space position of the tick.
    pub value: f64,
    /// Label text; empty labels mark unlabeled (minor) ticks.
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TickGenerator
// ─────────────────────────────────────────────────────────────────────────────

/// Produces the initial, ordered tick set for an axis range.
///
/// This is the seam towards the host chart's own tick algorithm; the labeler
/// only rewrites labels and never invents positions itself.
pub trait TickGenerator {
    /// Generate ascending ticks covering `[lower, upper]` sized to
    /// `pixel_width` pixels of axis length.
    fn ticks(&self, lower: f64, upper: f64, pixel_width: f32) -> Vec<Tick>;
}

/// Default linear tick generator using 1/2/5 × 10^n steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTicks {
    /// Horizontal pixel budget per labeled tick. Default: `70.0`.
    pub pixels_per_label: f32,
}

impl Default for LinearTicks {
    fn default() -> Self {
        Self {
            pixels_per_label: 70.0,
        }
    }
}

impl TickGenerator for LinearTicks {
    fn ticks(&self, lower: f64, upper: f64, pixel_width: f32) -> Vec<Tick> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Vec::new();
        }

        let max_ticks = (pixel_width / self.pixels_per_label).floor().max(2.0) as usize;
        let step = nice_step((upper - lower) / max_ticks as f64);
        let decimals = (-step.log10().floor()).max(0.0) as usize;

        let start = (lower / step).ceil() * step;
        // A step wider than the span can put the first multiple past `upper`.
        if start > upper {
            return Vec::new();
        }
        let count = ((upper - start) / step).floor() as usize;

        (0..=count)
            .map(|i| {
                let v = start + step * i as f64;
                Tick::new(v, format!("{:.*}", decimals, v))
            })
            .collect()
    }
}

/// Round `raw` up to the nearest 1/2/5 × 10^n step.
fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.abs().log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

// ─────────────────────────────────────────────────────────────────────────────
// Offset-compressed labeling
// ─────────────────────────────────────────────────────────────────────────────

/// Dynamic-range metric deciding between absolute and offset-compressed labels.
///
/// Defined as `log10(|(lower + upper) / (lower - upper)|)`: roughly how many
/// orders of magnitude the range midpoint exceeds the range span by.
///
/// ```
/// assert_eq!(tickfmt::ticks::offset_metric(0.0, 100.0), 0.0);
/// assert!(tickfmt::ticks::offset_metric(1.0e6, 1.0e6 + 100.0) > 2.0);
/// ```
pub fn offset_metric(lower: f64, upper: f64) -> f64 {
    ((lower + upper) / (lower - upper)).abs().log10()
}

/// Rewrites tick labels, switching to offset-compressed form for far-from-zero ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLabeler {
    /// [`offset_metric`] value above which offset-compressed labels are used.
    /// Default: `2.0`.
    pub offset_metric_threshold: f64,
    /// Fractional digits for the approximate offset label. Default: `2`.
    pub offset_precision: usize,
    /// Fractional digits for delta and absolute labels. Default: `4`.
    pub delta_precision: usize,
}

impl Default for TickLabeler {
    fn default() -> Self {
        Self {
            offset_metric_threshold: 2.0,
            offset_precision: 2,
            delta_precision: 4,
        }
    }
}

impl TickLabeler {
    /// Generate ticks for `[lower, upper]` via `generator` and relabel them.
    pub fn build_ticks(
        &self,
        lower: f64,
        upper: f64,
        pixel_width: f32,
        generator: &dyn TickGenerator,
    ) -> Vec<Tick> {
        let mut ticks = generator.ticks(lower, upper, pixel_width);
        self.relabel(lower, upper, &mut ticks);
        ticks
    }

    /// Overwrite the labels of `ticks` in place.
    ///
    /// With the metric above the threshold, the first tick at or above `lower`
    /// that carries a label becomes the offset anchor: it is relabeled as
    /// `≈<value>`, every later labeled tick as `+<delta>`, and every tick
    /// before it is blanked. If no tick qualifies as an anchor, or the metric
    /// is at or below the threshold, all labeled ticks get their absolute
    /// SI-formatted value instead.
    pub fn relabel(&self, lower: f64, upper: f64, ticks: &mut [Tick]) {
        if offset_metric(lower, upper) > self.offset_metric_threshold {
            let anchor = ticks
                .iter()
                .position(|t| t.value >= lower && !t.label.is_empty());
            if let Some(i0) = anchor {
                let offset = ticks[i0].value;
                ticks[i0].label = format!("≈{}", format_si(offset, self.offset_precision, true));

                // Unlabeled (minor) ticks stay blank, e.g. on log axes.
                for t in &mut ticks[i0 + 1..] {
                    if !t.label.is_empty() {
                        t.label =
                            format!("+{}", format_si(t.value - offset, self.delta_precision, true));
                    }
                }

                // Stray labels below the anchor would sneak through on occasion.
                for t in &mut ticks[..i0] {
                    t.label.clear();
                }
                return;
            }
            // No anchor found: fall through to absolute labels.
        }

        for t in ticks.iter_mut() {
            if !t.label.is_empty() {
                t.label = format_si(t.value, self.delta_precision, true);
            }
        }
    }
}
