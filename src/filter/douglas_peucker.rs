//! Douglas-Peucker polyline simplification.
//!
//! Reduces the number of points in a data series before rendering while
//! preserving its visual shape: points that deviate from the line through
//! their retained neighbors by no more than a tolerance are dropped. The
//! first and last point are always retained.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use tracing::debug;

use crate::error::{FilterError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::Point2;

/// Reduces a polyline with the Douglas-Peucker algorithm.
///
/// `tolerance` is the maximum allowed perpendicular deviation of a dropped
/// point from the simplified line, in coordinate units. Larger tolerances
/// drop more points. Inputs of two or fewer points are returned unchanged.
///
/// # Errors
///
/// Returns [`FilterError::NegativeTolerance`] if `tolerance < 0`.
pub fn reduce(points: &[Point2], tolerance: f64) -> Result<Vec<Point2>> {
    let indices = reduce_indices(points, tolerance)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

/// Reduces a polyline and returns the original indices of retained points.
///
/// Useful when per-sample data (timestamps, labels, highlight state) must
/// survive the reduction alongside the coordinates. Indices are strictly
/// increasing; for inputs of two or more points, index `0` and the last
/// index are always present.
///
/// # Errors
///
/// Returns [`FilterError::NegativeTolerance`] if `tolerance < 0`.
pub fn reduce_indices(points: &[Point2], tolerance: f64) -> Result<Vec<usize>> {
    if tolerance < 0.0 {
        return Err(FilterError::NegativeTolerance(tolerance));
    }

    let n = points.len();
    if n <= 2 {
        return Ok((0..n).collect());
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit work list instead of recursion: chart series run to tens of
    // thousands of points, and adversarial inputs shed one point per split.
    // The keep mask makes the result independent of processing order.
    let mut ranges = vec![(0, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }

        // Farthest interior point from the line through the two anchors.
        // Strict `>` over an ascending scan: ties go to the lowest index.
        let mut max_dist = 0.0;
        let mut max_idx = start;
        for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = point_to_line_dist(
                p.x,
                p.y,
                points[start].x,
                points[start].y,
                points[end].x,
                points[end].y,
            );
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            keep[max_idx] = true;
            ranges.push((start, max_idx));
            ranges.push((max_idx, end));
        }
    }

    let kept: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect();

    debug!(input = n, kept = kept.len(), tolerance, "reduced polyline");

    Ok(kept)
}

/// Reduces a flat interleaved coordinate array (`x0,y0,x1,y1,...`).
///
/// This is the boundary the chart-data layer calls: raw coordinates in,
/// a reduced flat array out, pair alignment and order preserved.
///
/// # Errors
///
/// Returns [`FilterError::OddCoordinateCount`] if `points.len()` is odd,
/// or [`FilterError::NegativeTolerance`] if `tolerance < 0`.
pub fn reduce_flat(points: &[f64], tolerance: f64) -> Result<Vec<f64>> {
    if points.len() % 2 != 0 {
        return Err(FilterError::OddCoordinateCount(points.len()));
    }

    let pairs: Vec<Point2> = points
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0], xy[1]))
        .collect();

    let indices = reduce_indices(&pairs, tolerance)?;

    let mut out = Vec::with_capacity(indices.len() * 2);
    for i in indices {
        out.push(pairs[i].x);
        out.push(pairs[i].y);
    }
    Ok(out)
}
