//! # Stockscope Charts
//!
//! Figure specifications derived from analyzed price series, plus the
//! renderer boundary.
//!
//! A [`FigureSpec`] is a serializable description of a chart: title, axis
//! labels, and one or more datasets (lines, bars, histogram bins). Actual
//! drawing belongs to an external [`ChartRenderer`]; this crate ships a
//! [`JsonRenderer`] that emits the spec itself, keeping the figure object
//! opaque to the core.
//!
//! | Chart kind | Content |
//! |------------|---------|
//! | `price-volume` | Close line over date, volume bars below |
//! | `moving-averages` | Close line plus short/long SMA lines |
//! | `return-histogram` | Daily returns binned into 50 equal-width bins |

mod error;
mod figure;
mod histogram;
mod renderer;

pub use error::ChartError;
pub use figure::{ChartKind, Dataset, DatasetKind, FigureSpec, Point};
pub use histogram::{histogram, HistogramBin};
pub use renderer::{ChartRenderer, JsonRenderer};
