//! The square letter grid puzzles are laid out in.

use crate::Direction;

/// A `size × size` grid of uppercase ASCII letters.
///
/// Cells start out unwritten and are filled in during placement; a grid
/// returned from the placement engine holds a letter in every cell. Rows are
/// exported as strings for storage, one string per row, because the document
/// store does not accept nested arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl LetterGrid {
    /// Creates an empty grid with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns whether `(row, col)` lies inside the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Letter at `(row, col)`, or `None` if the cell is unwritten.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[must_use]
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        assert!(self.contains(row, col));
        self.cells[row * self.size + col]
    }

    /// Writes `letter` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds or `letter` is not an
    /// uppercase ASCII letter.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, letter: u8) {
        assert!(self.contains(row, col));
        assert!(letter.is_ascii_uppercase());
        self.cells[row * self.size + col] = Some(letter);
    }

    /// Returns whether every cell holds a letter.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Coordinates of every unwritten cell, in row-major order.
    pub fn unwritten(&self) -> impl Iterator<Item = (usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
    }

    /// Reads `len` letters starting at `(start_row, start_col)` along
    /// `direction`.
    ///
    /// Returns `None` if the span leaves the grid or touches an unwritten
    /// cell.
    #[must_use]
    pub fn read_span(
        &self,
        start_row: usize,
        start_col: usize,
        direction: Direction,
        len: usize,
    ) -> Option<String> {
        let mut letters = Vec::with_capacity(len);
        for i in 0..len {
            let (row, col) = direction.step(start_row, start_col, i)?;
            if !self.contains(row, col) {
                return None;
            }
            letters.push(self.cell(row, col)?);
        }
        Some(String::from_utf8(letters).expect("cells hold ASCII letters"))
    }

    /// Exports the grid as one string per row.
    ///
    /// Unwritten cells are not representable; call only on a filled grid.
    ///
    /// # Panics
    ///
    /// Panics if any cell is unwritten.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|cell| char::from(cell.expect("grid is fully filled")))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.map_or('.', char::from))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unwritten() {
        let grid = LetterGrid::new(4);
        assert!(!grid.is_filled());
        assert_eq!(grid.unwritten().count(), 16);
        assert_eq!(grid.cell(0, 0), None);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut grid = LetterGrid::new(5);
        grid.set(1, 2, b'C');
        grid.set(1, 3, b'A');
        grid.set(1, 4, b'T');
        assert_eq!(
            grid.read_span(1, 2, Direction::Horizontal, 3).as_deref(),
            Some("CAT")
        );
    }

    #[test]
    fn test_read_span_stops_at_edges_and_gaps() {
        let mut grid = LetterGrid::new(3);
        grid.set(0, 0, b'A');
        // Leaves the grid after two steps.
        assert_eq!(grid.read_span(0, 0, Direction::DiagonalDown, 4), None);
        // Second cell is unwritten.
        assert_eq!(grid.read_span(0, 0, Direction::Horizontal, 2), None);
    }

    #[test]
    fn test_to_rows() {
        let mut grid = LetterGrid::new(2);
        grid.set(0, 0, b'A');
        grid.set(0, 1, b'B');
        grid.set(1, 0, b'C');
        grid.set(1, 1, b'D');
        assert_eq!(grid.to_rows(), ["AB", "CD"]);
    }

    #[test]
    #[should_panic(expected = "grid is fully filled")]
    fn test_to_rows_panics_on_unwritten_cell() {
        let grid = LetterGrid::new(2);
        let _ = grid.to_rows();
    }
}
