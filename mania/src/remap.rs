//! Mapping note x-coordinates between columns
//!
//! osu!mania stores the column of a note as an x-coordinate on the 512 pixel wide osu! playfield,
//! divided into equal-width columns. Moving a note to another column means bucketing its
//! coordinate into a column, and placing it at the center of the destination column. Where a note
//! was _within_ its column is lost in the process, which is harmless because the game does the
//! same bucketing when reading the chart.

use crate::{columns::ColumnCount, order::ColumnOrder};

/// The width of the osu! playfield in osu!pixels
pub const PLAYFIELD_WIDTH: f64 = 512.0;

/// The largest valid x-coordinate on the playfield
pub const MAX_X: i32 = 511;

/// The width of a single column, in osu!pixels
pub fn column_width(columns: ColumnCount) -> f64 {
    PLAYFIELD_WIDTH / columns.get() as f64
}

/// The 0-based column an x-coordinate falls into
///
/// Coordinates right of the playfield land in the last column, and coordinates left of it in the
/// first.
pub fn column_of(x: i32, columns: ColumnCount) -> usize {
    let column = (f64::from(x) / column_width(columns)).floor();
    let last = columns.get() - 1;

    if column <= 0.0 {
        0
    } else {
        (column as usize).min(last)
    }
}

/// The x-coordinate of the center of a 0-based column, clamped to the playfield
pub fn column_center(column: usize, columns: ColumnCount) -> i32 {
    let width = column_width(columns);
    let center = (column as f64 * width + width / 2.0).floor() as i32;

    center.clamp(0, MAX_X)
}

/// Move an x-coordinate to the center of the column `order` sends it to
///
/// ```
/// # use mania::{columns::{ColumnCount, ColumnRange}, order::ColumnOrder, remap::remap_x};
/// let columns = ColumnCount::new(4, ColumnRange::default())?;
/// let order = ColumnOrder::parse("2143", columns)?;
///
/// // Column 0 moves to column 1, which is centered at x = 192
/// assert_eq!(remap_x(100, &order), 192);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn remap_x(x: i32, order: &ColumnOrder) -> i32 {
    let columns = order.columns();
    let destination = order.destination(column_of(x, columns));

    column_center(destination, columns)
}
