//! Column orders, the permutations typed in by users

use crate::columns::ColumnCount;
use std::fmt;
use thiserror::Error;

/// The input that asks to abandon the current chart and pick a new one, instead of an order
pub const NEW_FILE_SENTINEL: &str = "new";

/// A permutation describing where every column of a chart should move to
///
/// Orders are written as one digit per source column, left to right, each digit being the
/// (1-based) destination of that column. `2143` on a 4K chart swaps the two left columns and the
/// two right columns.
///
/// ```
/// # use mania::{columns::{ColumnCount, ColumnRange}, order::ColumnOrder};
/// let columns = ColumnCount::new(4, ColumnRange::default())?;
///
/// // Users may separate digits with slashes or spaces
/// let order = ColumnOrder::parse("21/43", columns)?;
/// assert_eq!(order.as_str(), "2143");
/// assert_eq!(order.destination(0), 1);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrder {
    /// The number of columns in the chart the order applies to
    columns: ColumnCount,

    /// The 1-based destination column for every source column
    mapping: Vec<u8>,

    /// The cleaned up digit string, used for display and in filenames
    digits: String,
}

impl ColumnOrder {
    /// Parse and validate an order for a chart with `columns` columns
    pub fn parse(input: &str, columns: ColumnCount) -> Result<Self, ParseOrderError> {
        let digits: String = input
            .trim()
            .chars()
            .filter(|c| *c != '/' && *c != ' ')
            .collect();

        if digits.is_empty() {
            return Err(ParseOrderError::Empty);
        }

        let expected = columns.get();
        let found = digits.chars().count();
        if found != expected {
            return Err(ParseOrderError::LengthMismatch { expected, found });
        }

        let mapping = digits
            .chars()
            .enumerate()
            .map(|(index, character)| match character.to_digit(10) {
                Some(digit) => Ok(digit as u8),
                None => Err(ParseOrderError::NonDigit { character, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !is_permutation(&mapping) {
            return Err(ParseOrderError::NotAPermutation { columns });
        }

        Ok(Self {
            columns,
            mapping,
            digits,
        })
    }

    /// The order that leaves every column where it is
    pub fn identity(columns: ColumnCount) -> Self {
        Self::from_mapping(columns, (1..=columns.get() as u8).collect())
    }

    /// The order shown to users as an example: the identity, with the first two columns swapped
    pub fn example(columns: ColumnCount) -> Self {
        let mut mapping: Vec<u8> = (1..=columns.get() as u8).collect();
        if mapping.len() >= 2 {
            mapping.swap(0, 1);
        }

        Self::from_mapping(columns, mapping)
    }

    fn from_mapping(columns: ColumnCount, mapping: Vec<u8>) -> Self {
        let digits = mapping.iter().map(|digit| char::from(b'0' + digit)).collect();

        Self {
            columns,
            mapping,
            digits,
        }
    }

    /// The number of columns this order rearranges
    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    /// The 0-based destination of the 0-based source `column`
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds
    pub fn destination(&self, column: usize) -> usize {
        usize::from(self.mapping[column]) - 1
    }

    /// The 1-based destination columns, one per source column
    pub fn mapping(&self) -> &[u8] {
        &self.mapping
    }

    /// The order as a digit string, without separators
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

/// Is every value in `1..=len` present exactly once?
fn is_permutation(mapping: &[u8]) -> bool {
    let mut seen = vec![false; mapping.len()];

    mapping.iter().all(|&digit| {
        let index = usize::from(digit).wrapping_sub(1);
        match seen.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    })
}

/// What a user meant when typing at the order prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderInput {
    /// A valid column order
    Order(ColumnOrder),

    /// The user wants to pick a different chart
    NewFile,
}

impl OrderInput {
    /// Interpret user input, recognizing [`NEW_FILE_SENTINEL`] before attempting to parse an order
    pub fn parse(input: &str, columns: ColumnCount) -> Result<Self, ParseOrderError> {
        if input.trim().eq_ignore_ascii_case(NEW_FILE_SENTINEL) {
            return Ok(Self::NewFile);
        }

        ColumnOrder::parse(input, columns).map(Self::Order)
    }
}

/// Errors that might be returned from [`ColumnOrder::parse()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOrderError {
    /// Nothing but separators was entered
    #[error("Order cannot be empty")]
    Empty,

    /// The order doesn't have a digit for every column
    #[error("Order must have exactly {expected} digits")]
    LengthMismatch { expected: usize, found: usize },

    /// Something other than a digit was found
    #[error("Order must contain only digits, found '{character}' at position {index}")]
    NonDigit { character: char, index: usize },

    /// Digits are repeated or out of range
    #[error("Order must be a valid permutation of digits 1-{}", .columns.get())]
    NotAPermutation { columns: ColumnCount },
}
