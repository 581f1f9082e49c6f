mod angles;
mod center;
mod quadrant;

pub use angles::vertex_angles;
pub use quadrant::Quadrant;

use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::math::Point2;

/// One component placed on a polygon vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexPlacement {
    /// 1-based vertex index.
    pub index: usize,
    /// Raw vertex angle in degrees.
    pub angle: f64,
    /// Quadrant the angle falls in.
    pub quadrant: Quadrant,
    /// Anchor point on the placement circle; the component's geometric
    /// center lands here.
    pub anchor: Point2,
    /// Component rotation in degrees, signed.
    pub rotation: f64,
    /// Solved component center; reflecting it through the anchor yields
    /// `origin`.
    pub center: Point2,
    /// Pivot handed to renderers: rotating the component about this point
    /// centers it on the anchor.
    pub origin: Point2,
}

/// A fully planned placement run.
///
/// Holds `N + 1` placements; the last one closes the outline and is a
/// geometric duplicate of the first, one full turn later. It exists only
/// for the rendering path; the persisted table never contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    placements: Vec<VertexPlacement>,
}

impl RingLayout {
    /// All placements including the closing one.
    #[must_use]
    pub fn placements(&self) -> &[VertexPlacement] {
        &self.placements
    }

    /// The N real component sites, closing placement excluded.
    #[must_use]
    pub fn sites(&self) -> &[VertexPlacement] {
        self.placements
            .split_last()
            .map_or(&[][..], |(_, sites)| sites)
    }

    /// The closed outline through all `N + 1` anchors.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2> {
        self.placements.iter().map(|p| p.anchor).collect()
    }
}

/// Plans all component placements for the given configuration.
///
/// Runs the angle generator, quadrant resolver and center solver per
/// vertex. Deterministic: identical configurations produce identical
/// layouts.
///
/// # Errors
///
/// Propagates geometry errors from the center solver; a validated
/// configuration cannot trigger them.
pub fn plan(config: &LayoutConfig) -> Result<RingLayout> {
    let angles = vertex_angles(config.vertices(), config.flat_bottom());

    let mut placements = Vec::with_capacity(angles.len());
    for (i, &angle) in angles.iter().enumerate() {
        let quadrant = Quadrant::classify(angle);
        let (anchor, rotation) = quadrant.resolve(angle, config.radius());
        let center = center::solve(config, quadrant, anchor)?;
        let origin = center::rotation_origin(anchor, center);
        debug!(
            index = i + 1,
            angle,
            ?quadrant,
            x = anchor.x,
            y = anchor.y,
            rotation,
            "vertex resolved"
        );
        placements.push(VertexPlacement {
            index: i + 1,
            angle,
            quadrant,
            anchor,
            rotation,
            center,
            origin,
        });
    }

    info!(
        vertices = config.vertices(),
        radius = config.radius(),
        flat_bottom = config.flat_bottom(),
        "layout planned"
    );
    Ok(RingLayout { placements })
}
