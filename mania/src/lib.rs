//! Rearranging the columns of [osu!mania](https://osu.ppy.sh/wiki/en/Game_mode/osu%21mania) charts
//!
//! osu!mania charts are plain `.osu` text files, in which every note stores its column as an
//! x-coordinate on the playfield. This crate rewrites those coordinates to move notes between
//! columns according to a [`ColumnOrder`](order::ColumnOrder), e.g. to mirror a chart or to swap
//! hands, and tags the difficulty name with the order that was applied.
//!
//! ```no_run
//! # use mania::{chart::{output_path, Chart}, columns::ColumnRange, order::ColumnOrder};
//! # use std::path::Path;
//! let path = Path::new("chart.osu");
//! let chart = Chart::from_path(path)?;
//!
//! let columns = chart.column_count(ColumnRange::default())?;
//! let mirror = ColumnOrder::parse("4321", columns)?;
//!
//! chart.rearrange(&mirror).to_path(output_path(path, &mirror)?)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Everything except reading and writing files is pure, see
//! [`rearrange_lines()`](rewrite::rearrange_lines) for the core transformation.

pub mod chart;
pub mod columns;
pub mod order;
pub mod remap;
pub mod rewrite;
