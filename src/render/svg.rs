use std::path::PathBuf;

use ::svg::node::element::{Circle, Group, Polyline, Rectangle};
use ::svg::Document;
use tracing::info;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::RingLayout;

use super::RenderSink;

/// Renders a layout as an SVG document: one outlined rectangle per
/// component site, the closed polygon outline through all anchors, and a
/// dot marker per anchor.
///
/// The scene is drawn y-up inside a `scale(1, -1)` group, so rotations
/// stay counter-clockwise-positive like the geometry engine produces them.
pub struct SvgRenderer {
    path: PathBuf,
}

impl SvgRenderer {
    /// Creates a renderer that saves to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RenderSink for SvgRenderer {
    fn render(&mut self, config: &LayoutConfig, layout: &RingLayout) -> Result<()> {
        let document = build_document(config, layout);
        ::svg::save(&self.path, &document)?;
        info!(path = %self.path.display(), "scene rendered");
        Ok(())
    }
}

/// Builds the SVG scene for a layout.
#[must_use]
pub fn build_document(config: &LayoutConfig, layout: &RingLayout) -> Document {
    // Every component corner stays within a half-diagonal of its anchor,
    // so this extent never clips a rotated rectangle.
    let extent = (config.radius() + config.width().hypot(config.height()) / 2.0) * 1.1;
    let outline_width = config.diameter() / 250.0;
    let component_width = config.diameter() / 100.0;
    let marker_radius = config.diameter() / 80.0;

    let points = layout
        .outline()
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let outline = Polyline::new()
        .set("points", points)
        .set("fill", "none")
        .set("stroke", "silver")
        .set("stroke-width", outline_width);

    let mut scene = Group::new().set("transform", "scale(1, -1)").add(outline);

    for anchor in layout.outline() {
        scene = scene.add(
            Circle::new()
                .set("cx", anchor.x)
                .set("cy", anchor.y)
                .set("r", marker_radius)
                .set("fill", "gray"),
        );
    }

    for site in layout.sites() {
        scene = scene.add(
            Rectangle::new()
                .set("x", site.origin.x)
                .set("y", site.origin.y)
                .set("width", config.width())
                .set("height", config.height())
                .set("fill", "none")
                .set("stroke", "green")
                .set("stroke-width", component_width)
                .set(
                    "transform",
                    format!(
                        "rotate({:.4} {:.4} {:.4})",
                        site.rotation, site.origin.x, site.origin.y
                    ),
                ),
        );
    }

    Document::new()
        .set("viewBox", (-extent, -extent, 2.0 * extent, 2.0 * extent))
        .add(scene)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout;

    fn test_scene() -> String {
        let config = LayoutConfig::new(8, 3.0, 5.0, 50.0, true).unwrap();
        let layout = layout::plan(&config).unwrap();
        build_document(&config, &layout).to_string()
    }

    #[test]
    fn one_rectangle_per_site() {
        let scene = test_scene();
        assert_eq!(scene.matches("<rect").count(), 8);
    }

    #[test]
    fn outline_closes_through_all_anchors() {
        let scene = test_scene();
        assert_eq!(scene.matches("<polyline").count(), 1);
        // 9 coordinate pairs: 8 vertices plus the closing duplicate.
        let points = scene
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(points.split(' ').count(), 9);
    }

    #[test]
    fn one_marker_per_outline_point() {
        let scene = test_scene();
        assert_eq!(scene.matches("<circle").count(), 9);
    }

    #[test]
    fn scene_is_flipped_to_y_up() {
        assert!(test_scene().contains("scale(1, -1)"));
    }
}
