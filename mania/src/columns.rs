//! Column counts and the range of counts the rearranger supports

use std::fmt;
use thiserror::Error;

/// The metadata key whose value holds the number of columns in an osu!mania chart
pub const CIRCLE_SIZE_KEY: &str = "CircleSize:";

/// The number of columns (or "keys") in an osu!mania chart
///
/// osu! reuses the `CircleSize` field of the `[Difficulty]` section to store the lane count for
/// mania charts. A [`ColumnCount`] can only be constructed through a [`ColumnRange`], so it is
/// always within the supported bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(u8);

impl ColumnCount {
    /// Try to create a column count, checking it against the supported range
    pub fn new(count: i32, range: ColumnRange) -> Result<Self, ColumnCountError> {
        if range.contains(count) {
            Ok(Self(count as u8))
        } else {
            Err(ColumnCountError::Unsupported { count, range })
        }
    }

    /// Find the column count declared by the first `CircleSize:` line
    ///
    /// Only the first matching line is considered. If its value isn't an integer, the count is
    /// treated as missing, just like when no such line exists at all.
    pub fn from_lines<I, S>(lines: I, range: ColumnRange) -> Result<Self, ColumnCountError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let count = lines
            .into_iter()
            .find_map(|line| {
                line.as_ref()
                    .trim_start()
                    .strip_prefix(CIRCLE_SIZE_KEY)
                    .map(parse_value)
            })
            .unwrap_or(0);

        // 0 doubles as the "not found" sentinel
        if count == 0 {
            return Err(ColumnCountError::Missing);
        }

        let count = Self::new(count, range)?;
        tracing::debug!(columns = count.get(), "detected column count");

        Ok(count)
    }

    /// The number of columns as an index-friendly integer
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

/// Parse the value part of a `CircleSize:` line, which may contain more colons
fn parse_value(rest: &str) -> i32 {
    rest.split(':')
        .next()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// An inclusive range of column counts the rearranger accepts
///
/// Column orders are typed as one digit per column, which is why the upper bound can never exceed
/// [`ColumnRange::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    min: u8,
    max: u8,
}

impl ColumnRange {
    /// The largest column count expressible with single-digit column orders
    pub const MAX: u8 = 9;

    /// Create a new range, from `min` up to and including `max`
    pub fn new(min: u8, max: u8) -> Result<Self, ColumnRangeError> {
        if min == 0 || max > Self::MAX || min > max {
            return Err(ColumnRangeError { min, max });
        }

        Ok(Self { min, max })
    }

    /// The smallest supported column count
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// The largest supported column count
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Does this range include `count`?
    pub fn contains(&self, count: i32) -> bool {
        (i32::from(self.min)..=i32::from(self.max)).contains(&count)
    }

    /// Iterate over every column count in the range
    pub fn counts(&self) -> impl Iterator<Item = ColumnCount> + use<> {
        (self.min..=self.max).map(ColumnCount)
    }
}

impl Default for ColumnRange {
    /// 3K up to 9K
    fn default() -> Self {
        Self { min: 3, max: 9 }
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}K to {}K", self.min, self.max)
    }
}

/// Errors that might be returned when determining a [`ColumnCount`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnCountError {
    /// There is no (valid) `CircleSize:` line in the chart
    #[error("Could not find CircleSize in file")]
    Missing,

    /// The chart has a column count outside of the configured range
    #[error("Unsupported column count {count}K, only {range} is supported")]
    Unsupported { count: i32, range: ColumnRange },
}

/// Error returned when constructing a [`ColumnRange`] with invalid bounds
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid column range {min} to {max}, bounds must satisfy 1 <= min <= max <= 9")]
pub struct ColumnRangeError {
    pub min: u8,
    pub max: u8,
}
