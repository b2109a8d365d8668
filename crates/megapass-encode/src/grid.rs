//! Stage 7: column-major layout of the symbol sequence.
//!
//! The grid is a view over the flat sequence, not a copy: cell `(row, column)`
//! is the symbol at flat index `row + rows * column`, so the sequence fills
//! the grid one column at a time, top to bottom.

use core::fmt;

use megapass_common::{PasswordError, Symbol};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Grid<'a> {
    symbols: &'a [Symbol],
    rows: usize,
    columns: usize,
}

impl<'a> Grid<'a> {
    /// Lay out `symbols` as `rows` x `columns`. The shape must cover the
    /// sequence exactly.
    pub fn new(symbols: &'a [Symbol], rows: usize, columns: usize) -> Result<Self, PasswordError> {
        if rows.checked_mul(columns) != Some(symbols.len()) {
            return Err(PasswordError::ShapeMismatch {
                rows,
                columns,
                len: symbols.len(),
            });
        }
        Ok(Self {
            symbols,
            rows,
            columns,
        })
    }

    /// Shape already validated by [`Grid::new`] when the password was built.
    pub(crate) fn checked_at_encode(symbols: &'a [Symbol], rows: usize, columns: usize) -> Self {
        debug_assert_eq!(rows * columns, symbols.len());
        Self {
            symbols,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Symbol> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.symbols.get(row + self.rows * column).copied()
    }

    /// Symbols of one display row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.columns).filter_map(move |column| self.get(row, column))
    }

    /// Every display row rendered as a string.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| self.row(row).map(Symbol::as_char).collect())
            .collect()
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for symbol in self.row(row) {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<Symbol> {
        s.chars().filter_map(Symbol::from_char).collect()
    }

    #[test]
    fn fills_column_by_column() {
        let symbols = parse("RRRREEEEBBBB----RERE-B-B");
        let grid = Grid::new(&symbols, 4, 6).unwrap();
        assert_eq!(grid.lines()[0], "REB-R-");
        assert_eq!(grid.get(3, 0), Some(Symbol::R));
        assert_eq!(grid.get(0, 1), Some(Symbol::E));
        assert_eq!(grid.get(3, 5), Some(Symbol::B));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 6), None);
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let symbols = parse("--T--E-TR--RRR--TEE----T-");
        let grid = Grid::new(&symbols, 5, 5).unwrap();
        assert_eq!(grid.to_string(), "-E---\n--RT-\nTTRE-\n-RRET\n-----");
    }

    #[test]
    fn mismatched_shape_rejected() {
        let symbols = parse("RRRREEEEBBBB----RERE-B-B");
        assert_eq!(
            Grid::new(&symbols, 5, 5),
            Err(PasswordError::ShapeMismatch {
                rows: 5,
                columns: 5,
                len: 24
            })
        );
        assert!(Grid::new(&symbols, usize::MAX, 2).is_err());
    }
}
