pub use kurbo::{Point, Vec2};

/// Canvas frame in scene units, centered on the origin, y pointing up.
///
/// The nominal frame spans ±`half_width` horizontally and ±`half_height`
/// vertically. The default matches the renderer's 14×8-unit stage.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasFrame {
    /// Horizontal half-extent in scene units.
    pub half_width: f64,
    /// Vertical half-extent in scene units.
    pub half_height: f64,
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self {
            half_width: 7.0,
            half_height: 4.0,
        }
    }
}

impl CanvasFrame {
    /// The usable frame after insetting every side by `margin`.
    pub fn inset(self, margin: f64) -> FrameBounds {
        FrameBounds {
            left: -self.half_width + margin,
            right: self.half_width - margin,
            top: self.half_height - margin,
            bottom: -self.half_height + margin,
        }
    }
}

/// Absolute edge coordinates of a rectangle on the canvas (y up).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameBounds {
    /// Leftmost legal x.
    pub left: f64,
    /// Rightmost legal x.
    pub right: f64,
    /// Topmost legal y.
    pub top: f64,
    /// Bottommost legal y.
    pub bottom: f64,
}

/// Axis-aligned bounding box of a placed element (center + extents, y up).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Center of the box on the canvas.
    pub center: Point,
    /// Full width in scene units.
    pub width: f64,
    /// Full height in scene units.
    pub height: f64,
}

impl BoundingBox {
    /// Build a box from its center and full extents.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Left edge x.
    pub fn left(self) -> f64 {
        self.center.x - self.width * 0.5
    }

    /// Right edge x.
    pub fn right(self) -> f64 {
        self.center.x + self.width * 0.5
    }

    /// Top edge y.
    pub fn top(self) -> f64 {
        self.center.y + self.height * 0.5
    }

    /// Bottom edge y.
    pub fn bottom(self) -> f64 {
        self.center.y - self.height * 0.5
    }

    /// True iff the boxes intersect on both axes simultaneously.
    ///
    /// Touching edges count as intersecting, consistent with the renderer's
    /// overlap policy.
    pub fn intersects(self, other: BoundingBox) -> bool {
        let h = !(self.right() < other.left() || other.right() < self.left());
        let v = !(self.top() < other.bottom() || other.top() < self.bottom());
        h && v
    }
}
