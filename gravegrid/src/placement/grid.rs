use std::iter;

use crate::geometry::primitives::{Point, Rect};

/// Candidate cell of the scan grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Bottom left corner of the cell
    pub origin: Point,
}

/// Cell origins along one axis: `min, min + step, ...` as long as `origin + step <= max`.
/// Origins are accumulated by repeated addition.
/// The axis ends early when `step` is too small to move an origin at `f64` precision.
fn axis_origins(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> + Clone {
    debug_assert!(step > 0.0, "grid step must be positive: {step}");
    iter::successors(Some(min), move |o| Some(o + step))
        .take_while(move |o| o + step <= max && o + step > *o)
}

/// All cells of a grid with square cells of size `step` laid over `bbox`,
/// row-major: bottom to top, left to right within a row.
pub fn grid_cells(bbox: Rect, step: f64) -> impl Iterator<Item = GridCell> {
    let xs = axis_origins(bbox.x_min, bbox.x_max, step);
    axis_origins(bbox.y_min, bbox.y_max, step)
        .enumerate()
        .flat_map(move |(row, y)| {
            xs.clone().enumerate().map(move |(col, x)| GridCell {
                row,
                col,
                origin: Point(x, y),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_rows_bottom_to_top() {
        let bbox = Rect::try_new(0.0, 0.0, 3.0, 2.0).unwrap();
        let cells: Vec<_> = grid_cells(bbox, 1.0).map(|c| (c.row, c.col)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn stops_before_exceeding_bounds() {
        let bbox = Rect::try_new(0.0, 0.0, 2.9, 1.5).unwrap();
        assert_eq!(grid_cells(bbox, 1.0).count(), 2);
    }

    #[test]
    fn empty_when_cell_larger_than_bbox() {
        let bbox = Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(grid_cells(bbox, 1.5).count(), 0);
    }

    #[test]
    fn stops_when_step_vanishes_at_large_coordinates() {
        let bbox = Rect::try_new(1e17, 0.0, 1e17 + 1024.0, 1024.0).unwrap();
        //1e17 + 1.0 == 1e17
        assert_eq!(grid_cells(bbox, 1.0).count(), 0);
        //steps of at least one ulp still advance
        assert_eq!(axis_origins(1e17, 1e17 + 1024.0, 16.0).count(), 64);
    }
}
