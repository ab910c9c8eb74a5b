//! The four placement vectors a word can run along.

use serde::{Deserialize, Serialize};

/// The direction a word's letters run in the grid.
///
/// Each direction is a unit step `(row_delta, col_delta)` applied once per
/// letter. Words never run right-to-left or bottom-to-top; the four catalog
/// directions are the forward-reading ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right: `(0, 1)`.
    Horizontal,
    /// Top to bottom: `(1, 0)`.
    Vertical,
    /// Down and to the right: `(1, 1)`.
    DiagonalDown,
    /// Down and to the left: `(1, -1)`.
    DiagonalUp,
}

impl Direction {
    /// All four placement directions, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Row step applied per letter.
    #[must_use]
    #[inline]
    pub const fn row_delta(self) -> isize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical | Self::DiagonalDown | Self::DiagonalUp => 1,
        }
    }

    /// Column step applied per letter.
    #[must_use]
    #[inline]
    pub const fn col_delta(self) -> isize {
        match self {
            Self::Horizontal | Self::DiagonalDown => 1,
            Self::Vertical => 0,
            Self::DiagonalUp => -1,
        }
    }

    /// Stable name used in stored puzzle documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDown => "diagonal-down",
            Self::DiagonalUp => "diagonal-up",
        }
    }

    /// Cell reached after `i` steps from `(start_row, start_col)`, or `None`
    /// if the step leaves the non-negative coordinate range.
    #[must_use]
    pub fn step(self, start_row: usize, start_col: usize, i: usize) -> Option<(usize, usize)> {
        let row = start_row
            .checked_add_signed(self.row_delta().checked_mul(i.cast_signed())?)?;
        let col = start_col
            .checked_add_signed(self.col_delta().checked_mul(i.cast_signed())?)?;
        Some((row, col))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
