use crate::config::LayoutConfig;
use crate::error::Result;
use crate::math::line_2d::{point_along_line, radial_slope};
use crate::math::triangle_2d::isosceles_apex;
use crate::math::Point2;

use super::Quadrant;

/// Solves for the geometric center of a component anchored on the circle.
///
/// Construction:
/// 1. slope of the radius line through the anchor (direction sentinels for
///    a vertical line),
/// 2. auxiliary point one component height along that line, stepping away
///    from the circle center (the quadrant picks the x direction),
/// 3. apex of the isosceles triangle over anchor and auxiliary point with
///    the component's corner half-angle at both base ends.
///
/// The resulting offset from the anchor has a radial component of exactly
/// half the component height and a tangential component of half the width,
/// i.e. the anchor-to-center distance is the component's half-diagonal.
///
/// # Errors
///
/// Propagates `GeometryError::Degenerate` from the triangle solution; with
/// a validated configuration the construction cannot degenerate.
pub fn solve(config: &LayoutConfig, quadrant: Quadrant, anchor: Point2) -> Result<Point2> {
    let slope = radial_slope(anchor.x, anchor.y);
    let (aux_x, aux_y) = point_along_line(
        anchor.x,
        slope,
        config.height(),
        quadrant.steps_toward_positive_x(),
    );
    let (cx, cy) = isosceles_apex(anchor.x, anchor.y, aux_x, aux_y, config.apex_angle())?;
    Ok(Point2::new(cx, cy))
}

/// Reflects the solved center through the anchor.
///
/// Rotating the component about this point by the vertex rotation is
/// visually equivalent to rotating it about its own center: the component's
/// geometric center lands exactly on the anchor.
#[must_use]
pub fn rotation_origin(anchor: Point2, center: Point2) -> Point2 {
    Point2::new(2.0 * anchor.x - center.x, 2.0 * anchor.y - center.y)
}
