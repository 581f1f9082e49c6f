use crate::math::Point2;

/// Quadrant of the bounding circle a vertex angle falls in.
///
/// Resolution of an angle into an anchor point and a component rotation is
/// dispatched per variant: the formulas differ in how they keep the
/// Cartesian signs correct under the degree-based angle convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    One,
    Two,
    Three,
    Four,
}

impl Quadrant {
    /// Classifies an angle in degrees into its quadrant.
    ///
    /// The ranges are applied in a fixed order and are half-open at the
    /// lower end, so the boundary angles 90, 180 and 270 resolve to
    /// quadrants One, Two and Three. Angles below 0 (tilted polygons) fall
    /// into One; angles above 270 (including the 360 closing angle) into
    /// Four. Classification is total: every finite angle maps to exactly
    /// one variant.
    #[must_use]
    pub fn classify(angle_deg: f64) -> Self {
        if angle_deg <= 90.0 {
            Self::One
        } else if angle_deg <= 180.0 {
            Self::Two
        } else if angle_deg <= 270.0 {
            Self::Three
        } else {
            Self::Four
        }
    }

    /// Resolves an angle to its anchor on the circle of `radius` and the
    /// rotation (degrees, signed) that points the component's height axis
    /// radially outward through the anchor.
    ///
    /// Per-variant formulas:
    /// - `One`:   `(R cos θ, R sin θ)`, rotation `θ - 90`
    /// - `Two`:   mirrored sub-angle `φ = 180 - θ`; `(-R cos φ, R sin φ)`,
    ///   rotation `90 - φ`; the reflection keeps x negative and y positive
    /// - `Three`: raw angle like `One`, rotation `-270 + (θ - 180)`
    /// - `Four`:  `(R cos θ, R sin θ)`, rotation `θ - 90`
    #[must_use]
    pub fn resolve(self, angle_deg: f64, radius: f64) -> (Point2, f64) {
        match self {
            Self::One => {
                let rad = angle_deg.to_radians();
                let anchor = Point2::new(radius * rad.cos(), radius * rad.sin());
                (anchor, angle_deg - 90.0)
            },
            Self::Two => {
                let mirrored = 180.0 - angle_deg;
                let rad = mirrored.to_radians();
                let anchor = Point2::new(-radius * rad.cos(), radius * rad.sin());
                (anchor, 90.0 - mirrored)
            },
            Self::Three => {
                let rad = angle_deg.to_radians();
                let anchor = Point2::new(radius * rad.cos(), radius * rad.sin());
                (anchor, -270.0 + (angle_deg - 180.0))
            },
            Self::Four => {
                let rad = angle_deg.to_radians();
                let anchor = Point2::new(radius * rad.cos(), radius * rad.sin());
                (anchor, angle_deg - 90.0)
            },
        }
    }

    /// Whether the auxiliary point of the center solver steps toward
    /// positive x from the anchor (quadrants One and Four) or toward
    /// negative x (Two and Three).
    #[must_use]
    pub fn steps_toward_positive_x(self) -> bool {
        matches!(self, Self::One | Self::Four)
    }
}
