/// Returns the perpendicular distance from point `(px, py)` to the infinite
/// line through `(ax, ay)` and `(bx, by)`.
///
/// If the two anchor points coincide (zero-length segment), falls back to
/// the Euclidean distance from the point to the shared anchor position.
#[must_use]
pub fn point_to_line_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate line (coincident anchors).
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // |cross((b - a), (p - a))| / |b - a|
    (dy * (px - ax) - dx * (py - ay)).abs() / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn line_dist_perpendicular_projection() {
        // Point (1, 1) to line through (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_line_dist(1.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_beyond_anchor() {
        // Point (-3, 2) projects beyond the first anchor, but the line is
        // infinite: distance stays the perpendicular offset, 2.
        let d = point_to_line_dist(-3.0, 2.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 2.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_on_line() {
        // Point on the line itself.
        let d = point_to_line_dist(5.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_diagonal() {
        // Point (0, 2) to line y = x. Distance = 2/√2 = √2.
        let d = point_to_line_dist(0.0, 2.0, 0.0, 0.0, 3.0, 3.0);
        let expected = 2.0_f64.sqrt();
        assert!((d - expected).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_degenerate() {
        // Coincident anchors: distance is point-to-point.
        let d = point_to_line_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }
}
