//! Rewriting the lines of a chart for a new column order
//!
//! Only two things in a chart change when its columns are rearranged: the difficulty name in the
//! `Version:` line gets the order appended, and the x-coordinate of every note in the
//! `[HitObjects]` section is remapped. Every other line is passed through untouched.

use crate::{order::ColumnOrder, remap::remap_x};

/// The metadata key holding the difficulty name
pub const VERSION_KEY: &str = "Version:";

/// The header of the section containing the notes
pub const HIT_OBJECTS_HEADER: &str = "[HitObjects]";

/// The part of a chart a line is in, as far as rewriting is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Anywhere but the hit objects
    #[default]
    Outside,

    /// Between `[HitObjects]` and the next section header
    InsideHitObjects,
}

impl Section {
    /// Classify `line`, and move on to the section it leaves the chart in
    pub fn advance(&mut self, line: &str) -> LineKind {
        if line.starts_with(VERSION_KEY) {
            return LineKind::Version;
        }

        if line.trim() == HIT_OBJECTS_HEADER {
            *self = Self::InsideHitObjects;
            return LineKind::Boundary;
        }

        match self {
            Self::InsideHitObjects if line.starts_with('[') => {
                *self = Self::Outside;
                LineKind::Boundary
            }
            Self::InsideHitObjects if !line.trim().is_empty() => LineKind::HitObject,
            _ => LineKind::Other,
        }
    }
}

/// The role a line plays when rearranging, see [`Section::advance()`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The `Version:` line holding the difficulty name
    Version,

    /// A section header entering or leaving the hit objects
    Boundary,

    /// A (non-blank) line inside the hit objects
    HitObject,

    /// Anything else
    Other,
}

/// Rewrite every line of a chart for `order`
///
/// This is a pure function: lines go in, rearranged lines come out, one for one and in the
/// same order.
pub fn rearrange_lines<I, S>(lines: I, order: &ColumnOrder) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut section = Section::default();
    let mut notes = 0usize;

    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| {
            let line = line.as_ref();

            match section.advance(line) {
                LineKind::Version => rewrite_version(line, order),
                LineKind::HitObject => {
                    notes += 1;
                    rewrite_hit_object(line, order)
                }
                LineKind::Boundary | LineKind::Other => line.to_owned(),
            }
        })
        .collect();

    tracing::debug!(order = order.as_str(), lines = lines.len(), notes, "rearranged chart");

    lines
}

/// Append the order to the difficulty name of a `Version:` line
///
/// `Version:Normal` becomes `Version:Normal [2143]` for order `2143`.
pub fn rewrite_version(line: &str, order: &ColumnOrder) -> String {
    let name = line.strip_prefix(VERSION_KEY).unwrap_or(line).trim();
    format!("{VERSION_KEY}{name} [{order}]")
}

/// Remap the x-coordinate of a single hit object line
///
/// Lines with fewer than two fields, or whose first field isn't an integer, are returned as-is.
pub fn rewrite_hit_object(line: &str, order: &ColumnOrder) -> String {
    let Some((x, rest)) = line.split_once(',') else {
        return line.to_owned();
    };

    match x.trim().parse::<i32>() {
        Ok(x) => format!("{},{rest}", remap_x(x, order)),
        Err(_) => {
            tracing::trace!(line, "passing through hit object without integer x");
            line.to_owned()
        }
    }
}
