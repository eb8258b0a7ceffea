//! Common utilities for interpolation algorithms.
//!
//! This module places a query coordinate inside a grid cell and provides the
//! index clamping shared by the stencil-based methods.

use crate::axis::Axis;

/// A query placed inside a grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Row and column of the cell's lower node.
    pub index: [usize; 2],
    /// Query coordinates, after clamping when edge limiting is enabled.
    pub location: [f64; 2],
}

/// Find the cell index along one axis and the coordinate to evaluate at.
///
/// With `edge_limit` enabled a coordinate beyond the first node is pinned to
/// the first node and cell 0, and one beyond the last node is pinned to the
/// last node and cell `size - 2`. Without it the bracketing lookup is used
/// directly, so out-of-range coordinates extrapolate from the boundary cell.
pub fn locate(axis: &Axis, coordinate: f64, edge_limit: bool) -> (usize, f64) {
    if !edge_limit {
        return (axis.find_index(coordinate), coordinate);
    }

    let first = axis.first();
    let last = axis.last();
    let (before_first, after_last) = if axis.is_ascending() {
        (coordinate <= first, coordinate >= last)
    } else {
        (coordinate >= first, coordinate <= last)
    };

    if before_first {
        (0, first)
    } else if after_last {
        (axis.size() - 2, last)
    } else {
        (axis.find_index(coordinate), coordinate)
    }
}

/// Offset of `coordinate` from node `index`, in units of the interval
/// `[index, index + 1]`. Zero at the lower node and one at the upper node.
#[inline]
pub fn cell_fraction(axis: &Axis, index: usize, coordinate: f64) -> f64 {
    let lower = axis.get(index);
    (coordinate - lower) / (axis.get(index + 1) - lower)
}

/// Clamp a possibly negative or oversized index into `[0, size - 1]`.
#[inline]
pub fn clamp_index(index: isize, size: usize) -> usize {
    index.clamp(0, size as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-1, 10), 0);
        assert_eq!(clamp_index(5, 10), 5);
        assert_eq!(clamp_index(15, 10), 9);
        assert_eq!(clamp_index(9, 10), 9);
    }

    #[test]
    fn test_locate_with_edge_limit() {
        let axis = Axis::linear(1.0, 1.0, 9).unwrap();
        assert_eq!(locate(&axis, 0.2, true), (0, 1.0));
        assert_eq!(locate(&axis, 1.0, true), (0, 1.0));
        assert_eq!(locate(&axis, 4.5, true), (3, 4.5));
        assert_eq!(locate(&axis, 9.0, true), (7, 9.0));
        assert_eq!(locate(&axis, 12.0, true), (7, 9.0));
    }

    #[test]
    fn test_locate_without_edge_limit() {
        let axis = Axis::linear(1.0, 1.0, 9).unwrap();
        assert_eq!(locate(&axis, 0.2, false), (0, 0.2));
        assert_eq!(locate(&axis, 4.5, false), (3, 4.5));
        assert_eq!(locate(&axis, 12.0, false), (7, 12.0));
    }

    #[test]
    fn test_locate_descending_axis() {
        let axis = Axis::linear(9.0, -1.0, 9).unwrap();
        assert_eq!(locate(&axis, 10.0, true), (0, 9.0));
        assert_eq!(locate(&axis, 0.0, true), (7, 1.0));
        assert_eq!(locate(&axis, 6.5, true), (2, 6.5));
        assert_eq!(locate(&axis, 0.0, false), (7, 0.0));
    }

    #[test]
    fn test_cell_fraction() {
        let axis = Axis::new(vec![0.0, 2.0, 3.0]).unwrap();
        assert!((cell_fraction(&axis, 0, 0.5) - 0.25).abs() < 1e-12);
        assert!((cell_fraction(&axis, 1, 2.5) - 0.5).abs() < 1e-12);
        assert!((cell_fraction(&axis, 1, 4.0) - 2.0).abs() < 1e-12);

        let axis = Axis::linear(3.0, -1.0, 3).unwrap();
        assert!((cell_fraction(&axis, 0, 2.75) - 0.25).abs() < 1e-12);
    }
}
