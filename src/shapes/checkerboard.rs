//! CheckerBoard - alternating filled cells

use super::geometry::Rect;
use super::path::Path;
use super::traits::Shape;

/// A checkerboard of `rows` x `columns` cells
///
/// Rows and columns are stored as reals so they can be animated; the
/// grid itself always uses the truncated whole numbers. Only the cells
/// where `row + column` is even are part of the path.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckerBoard {
    pub rows: f64,
    pub columns: f64,
}

impl Default for CheckerBoard {
    fn default() -> Self {
        Self {
            rows: 4.0,
            columns: 4.0,
        }
    }
}

impl CheckerBoard {
    pub fn new(rows: f64, columns: f64) -> Self {
        Self { rows, columns }
    }

    /// Whole-number grid dimensions
    pub fn grid(&self) -> (usize, usize) {
        (self.rows.max(0.0) as usize, self.columns.max(0.0) as usize)
    }
}

impl Shape for CheckerBoard {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        let (rows, columns) = self.grid();
        if rows == 0 || columns == 0 {
            return path;
        }

        let row_size = rect.height / rows as f64;
        let column_size = rect.width / columns as f64;

        for row in 0..rows {
            for column in 0..columns {
                if (row + column) % 2 == 0 {
                    path.add_rect(Rect::new(
                        rect.min_x() + column_size * column as f64,
                        rect.min_y() + row_size * row as f64,
                        column_size,
                        row_size,
                    ));
                }
            }
        }

        path
    }

    fn name(&self) -> &str {
        "CheckerBoard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count() {
        let rect = Rect::from_size(100.0, 100.0);
        assert_eq!(CheckerBoard::new(4.0, 4.0).path(rect).subpaths().len(), 8);
        assert_eq!(CheckerBoard::new(3.0, 3.0).path(rect).subpaths().len(), 5);
        assert_eq!(CheckerBoard::new(8.0, 16.0).path(rect).subpaths().len(), 64);
    }

    #[test]
    fn test_fractional_dimensions_truncate() {
        let board = CheckerBoard::new(4.9, 2.2);
        assert_eq!(board.grid(), (4, 2));
    }

    #[test]
    fn test_empty_board() {
        let rect = Rect::from_size(100.0, 100.0);
        assert!(CheckerBoard::new(0.0, 5.0).path(rect).is_empty());
        assert!(CheckerBoard::new(0.5, 5.0).path(rect).is_empty());
    }

    #[test]
    fn test_first_cell_is_top_left() {
        let path = CheckerBoard::new(2.0, 4.0).path(Rect::new(10.0, 10.0, 80.0, 40.0));
        let cell = &path.subpaths()[0];

        let first = cell.points()[0];
        assert_eq!((first.x, first.y), (10.0, 10.0));
        assert!((cell.length() - 2.0 * (20.0 + 20.0)).abs() < 1e-9);
    }
}
