use crate::error::ConfigError;

/// Validated, immutable description of one placement run.
///
/// Every pipeline stage receives this by reference; nothing reads
/// configuration from ambient state. The two derived constants are computed
/// once at construction:
///
/// - `radius = (diameter - height) / 2`: the circle the component centers
///   sit on, pulled in so the components stay inside the bounding diameter
/// - `apex_angle = atan((width/2) / (height/2))`: the half-angle at a
///   component corner between the diagonal and the height axis, used by the
///   center solver
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    vertices: u32,
    width: f64,
    height: f64,
    diameter: f64,
    flat_bottom: bool,
    radius: f64,
    apex_angle: f64,
}

impl LayoutConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the vertex count is below 3, a dimension
    /// is non-positive, or the diameter does not exceed the component height.
    pub fn new(
        vertices: u32,
        width: f64,
        height: f64,
        diameter: f64,
        flat_bottom: bool,
    ) -> Result<Self, ConfigError> {
        if vertices < 3 {
            return Err(ConfigError::TooFewVertices(vertices));
        }
        if width <= 0.0 || !width.is_finite() {
            return Err(ConfigError::NonPositiveDimension {
                name: "width",
                value: width,
            });
        }
        if height <= 0.0 || !height.is_finite() {
            return Err(ConfigError::NonPositiveDimension {
                name: "height",
                value: height,
            });
        }
        if diameter <= height || !diameter.is_finite() {
            return Err(ConfigError::DiameterTooSmall { diameter, height });
        }

        Ok(Self {
            vertices,
            width,
            height,
            diameter,
            flat_bottom,
            radius: (diameter - height) / 2.0,
            apex_angle: ((width / 2.0) / (height / 2.0)).atan(),
        })
    }

    /// Number of polygon vertices (N).
    #[must_use]
    pub fn vertices(&self) -> u32 {
        self.vertices
    }

    /// Component width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Component height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounding circle diameter.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Whether the polygon is tilted so its lowest edge sits horizontal.
    #[must_use]
    pub fn flat_bottom(&self) -> bool {
        self.flat_bottom
    }

    /// Radius of the circle the component centers are placed on.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Half-angle at a component corner, in radians.
    #[must_use]
    pub fn apex_angle(&self) -> f64 {
        self.apex_angle
    }
}
