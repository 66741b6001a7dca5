//! tickfmt crate root: re-exports and module wiring.
//!
//! This crate provides axis-label formatting helpers for egui_plot-based
//! charts:
//! - `si`: engineering-notation number formatting with SI prefixes
//! - `ticks`: tick generation and offset-compressed tick labeling
//! - `date`: calendar/time labels driven by an axis granularity tier
//! - `color`: static CSS color-name lookup and hex parsing
//! - `axis`: adapter closures for `egui_plot`'s axis-formatter callbacks

pub mod axis;
pub mod color;
pub mod date;
pub mod si;
pub mod ticks;

// Public re-exports for a compact external API
pub use axis::{compressed_axis_formatter, date_axis_formatter, si_axis_formatter};
pub use color::{color_by_name, parse_color};
pub use date::{zeropad, DateFormatter, Granularity, MONTH_NAMES};
pub use si::{format_si, si_decade_index, SiFormatter, SI_DECADES, SI_PREFIXES};
pub use ticks::{offset_metric, LinearTicks, Tick, TickGenerator, TickLabeler};
