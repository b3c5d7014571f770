//! Horizontal placement within a day column.
//!
//! All values are percentages of the day column's width, so the renderer can
//! apply them directly as CSS-style offsets regardless of the actual pixel
//! width.

use serde::Serialize;

/// Width of a full day column, in percent.
pub const FULL_WIDTH: f32 = 100.0;

/// Tolerance used when comparing percentage edges.
const EDGE_EPSILON: f32 = 1e-3;

/// The horizontal span `[left, left + width)` assigned to one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    left: f32,
    width: f32,
}

impl Position {
    /// Creates a position from raw percentages.
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Position of column `index` when the day column is split into
    /// `columns` equal lanes.
    ///
    /// # Examples
    ///
    /// ```
    /// use daygrid_core::geometry::Position;
    ///
    /// let third = Position::for_column(2, 4);
    /// assert_eq!(third.left(), 50.0);
    /// assert_eq!(third.width(), 25.0);
    /// ```
    pub fn for_column(index: usize, columns: usize) -> Self {
        debug_assert!(index < columns, "column index out of range");
        let width = FULL_WIDTH / columns as f32;
        Self {
            left: index as f32 * width,
            width,
        }
    }

    /// The full-width position used by an event with no concurrent neighbours.
    pub fn full() -> Self {
        Self::new(0.0, FULL_WIDTH)
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Exclusive right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Whether the two spans share any horizontal extent.
    ///
    /// Edges closer than a thousandth of a percent count as touching.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.left + EDGE_EPSILON < other.right() && other.left + EDGE_EPSILON < self.right()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_single_column_is_full_width() {
        let position = Position::for_column(0, 1);
        assert_eq!(position, Position::full());
        assert_approx_eq!(f32, position.right(), FULL_WIDTH);
    }

    #[test]
    fn test_three_columns() {
        let positions: Vec<_> = (0..3).map(|i| Position::for_column(i, 3)).collect();

        assert_approx_eq!(f32, positions[0].left(), 0.0);
        assert_approx_eq!(f32, positions[1].left(), 100.0 / 3.0);
        assert_approx_eq!(f32, positions[2].left(), 200.0 / 3.0);
        assert_approx_eq!(f32, positions[2].right(), 100.0, epsilon = 0.001);
    }

    #[test]
    fn test_adjacent_columns_do_not_overlap() {
        let a = Position::for_column(0, 3);
        let b = Position::for_column(1, 3);
        assert!(!a.overlaps_horizontally(&b));
        assert!(!b.overlaps_horizontally(&a));
        assert!(a.overlaps_horizontally(&a));
    }

    #[test]
    fn test_full_overlaps_any_column() {
        let full = Position::full();
        for i in 0..5 {
            assert!(full.overlaps_horizontally(&Position::for_column(i, 5)));
        }
    }
}
