/// Returns the slope of the line through the origin and `(x, y)`.
///
/// Vertical lines cannot carry a finite slope, so they get direction
/// sentinels instead of a division error: `1` for straight up, `-1` for
/// straight down, `0` for the origin itself. The sentinels only
/// disambiguate direction for [`point_along_line`]; they are not true
/// slopes.
#[must_use]
pub fn radial_slope(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        if y > 0.0 {
            1.0
        } else if y < 0.0 {
            -1.0
        } else {
            0.0
        }
    } else {
        y / x
    }
}

/// Returns the point at `distance` from `(x, m*x)` along the line through
/// the origin with slope `m`.
///
/// Of the two candidate points, `toward_positive_x` selects the one with
/// the larger x coordinate.
#[must_use]
pub fn point_along_line(x: f64, m: f64, distance: f64, toward_positive_x: bool) -> (f64, f64) {
    let step = distance / (1.0 + m * m).sqrt();
    let x2 = if toward_positive_x { x + step } else { x - step };
    (x2, m * x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── radial_slope tests ──

    #[test]
    fn slope_vertical_up() {
        assert!((radial_slope(0.0, 5.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn slope_vertical_down() {
        assert!((radial_slope(0.0, -5.0) + 1.0).abs() < TOL);
    }

    #[test]
    fn slope_at_origin() {
        assert!(radial_slope(0.0, 0.0).abs() < TOL);
    }

    #[test]
    fn slope_general() {
        assert!((radial_slope(2.0, 1.0) - 0.5).abs() < TOL);
        assert!((radial_slope(-2.0, 1.0) + 0.5).abs() < TOL);
    }

    // ── point_along_line tests ──

    #[test]
    fn point_along_horizontal_line() {
        let (x2, y2) = point_along_line(3.0, 0.0, 2.0, true);
        assert!((x2 - 5.0).abs() < TOL, "x2={x2}");
        assert!(y2.abs() < TOL, "y2={y2}");
    }

    #[test]
    fn point_along_line_negative_direction() {
        let (x2, y2) = point_along_line(-3.0, 0.0, 2.0, false);
        assert!((x2 + 5.0).abs() < TOL, "x2={x2}");
        assert!(y2.abs() < TOL, "y2={y2}");
    }

    #[test]
    fn point_along_line_preserves_distance() {
        // Line y = 2x through (1, 2); the new point must be `distance` away.
        let (x2, y2) = point_along_line(1.0, 2.0, 3.0, true);
        let d = ((x2 - 1.0).powi(2) + (y2 - 2.0).powi(2)).sqrt();
        assert!((d - 3.0).abs() < TOL, "d={d}");
        // And still on the line.
        assert!((y2 - 2.0 * x2).abs() < TOL);
    }
}
