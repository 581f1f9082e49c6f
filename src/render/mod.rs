mod svg;

pub use self::svg::SvgRenderer;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::RingLayout;

/// A consumer of planned layouts, purely presentational.
///
/// Sinks receive the computed placements (origin, size, rotation per
/// component) and the closed outline; they have no effect on the persisted
/// vertex table.
pub trait RenderSink {
    /// Renders the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to produce its output.
    fn render(&mut self, config: &LayoutConfig, layout: &RingLayout) -> Result<()>;
}
