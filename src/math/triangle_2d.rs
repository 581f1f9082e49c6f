use super::TOLERANCE;
use crate::error::{GeometryError, Result};

/// Solves for the apex of an isosceles triangle from its base and base angle.
///
/// The base runs from `(x1, y1)` to `(x2, y2)` and carries the angle
/// `base_angle` (radians) at both endpoints, so the apex angle is
/// `pi - 2*base_angle`. Of the two mirror solutions this returns the one on
/// the right-hand side of the directed base (standard two-point-two-angle
/// closed form).
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the base is shorter than
/// [`TOLERANCE`] or the base angle leaves no apex to solve for.
pub fn isosceles_apex(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    base_angle: f64,
) -> Result<(f64, f64)> {
    let u = x2 - x1;
    let v = y2 - y1;
    let base_sq = u * u + v * v;

    if base_sq < TOLERANCE * TOLERANCE {
        return Err(GeometryError::Degenerate("isosceles base has zero length".into()).into());
    }

    let apex_angle = std::f64::consts::PI - 2.0 * base_angle;
    if apex_angle.sin().abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "base angle {base_angle} leaves a flat apex"
        ))
        .into());
    }

    let base = base_sq.sqrt();
    // Law of sines: the legs subtend the base angle, the base the apex angle.
    let leg = base * base_angle.sin() / apex_angle.sin();

    let rhs1 = x1 * u + y1 * v + leg * base * base_angle.cos();
    let rhs2 = y2 * u - x2 * v - leg * base * base_angle.sin();

    Ok(((u * rhs1 - v * rhs2) / base_sq, (v * rhs1 + u * rhs2) / base_sq))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn right_isosceles_apex() {
        // Base (0,0)→(2,0) with 45° base angles: apex at (1, -1) on the
        // right-hand side of the directed base.
        let (x3, y3) = isosceles_apex(0.0, 0.0, 2.0, 0.0, PI / 4.0).unwrap();
        assert!((x3 - 1.0).abs() < TOL, "x3={x3}");
        assert!((y3 + 1.0).abs() < TOL, "y3={y3}");
    }

    #[test]
    fn equilateral_apex() {
        // 60° base angles on a unit base form an equilateral triangle.
        let (x3, y3) = isosceles_apex(0.0, 0.0, 1.0, 0.0, PI / 3.0).unwrap();
        assert!((x3 - 0.5).abs() < TOL, "x3={x3}");
        assert!((y3 + 3.0_f64.sqrt() / 2.0).abs() < TOL, "y3={y3}");
    }

    #[test]
    fn legs_are_equal() {
        let (x1, y1, x2, y2) = (1.0, 2.0, 4.0, 6.0);
        let (x3, y3) = isosceles_apex(x1, y1, x2, y2, 0.6).unwrap();
        let leg1 = ((x3 - x1).powi(2) + (y3 - y1).powi(2)).sqrt();
        let leg2 = ((x3 - x2).powi(2) + (y3 - y2).powi(2)).sqrt();
        assert!((leg1 - leg2).abs() < TOL, "leg1={leg1} leg2={leg2}");
    }

    #[test]
    fn base_angle_is_recovered() {
        // Angle at P1 between the base and the leg must equal the input.
        let base_angle = 0.5404;
        let (x3, y3) = isosceles_apex(0.0, 0.0, 5.0, 0.0, base_angle).unwrap();
        let angle = (y3.abs()).atan2(x3);
        assert!((angle - base_angle).abs() < 1e-9, "angle={angle}");
    }

    #[test]
    fn degenerate_base_rejected() {
        assert!(isosceles_apex(1.0, 1.0, 1.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn flat_apex_rejected() {
        // base_angle = π/2 collapses the apex angle to zero.
        assert!(isosceles_apex(0.0, 0.0, 1.0, 0.0, PI / 2.0).is_err());
    }
}
