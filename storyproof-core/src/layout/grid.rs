use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::{StoryproofError, StoryproofResult};

// Row/column coordinates of the 3×3 grid in scene units (y up).
const ROW_TOP: f64 = 2.5;
const ROW_MIDDLE: f64 = 0.0;
const ROW_BOTTOM: f64 = -2.5;
const COL_LEFT: f64 = -4.5;
const COL_CENTER: f64 = 0.0;
const COL_RIGHT: f64 = 4.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// One of the 9 canonical anchor positions on the fixed 3×3 grid.
///
/// Elements are placed by anchor name rather than free-form coordinates so
/// generated layouts stay controlled and comparable. Names combine a row
/// (`top`, `middle`, `bottom`) and a column (`left`, `center`, `right`).
pub enum Anchor {
    /// Top row, left column.
    TopLeft,
    /// Top row, center column.
    TopCenter,
    /// Top row, right column.
    TopRight,
    /// Middle row, left column.
    MiddleLeft,
    /// Middle row, center column.
    MiddleCenter,
    /// Middle row, right column.
    MiddleRight,
    /// Bottom row, left column.
    BottomLeft,
    /// Bottom row, center column.
    BottomCenter,
    /// Bottom row, right column.
    BottomRight,
}

impl Anchor {
    /// All 9 anchors in row-major order.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleCenter,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Default placement for elements that do not name an anchor.
    pub const DEFAULT: Anchor = Anchor::MiddleCenter;

    /// Canonical `row-col` name of this anchor.
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::MiddleLeft => "middle-left",
            Anchor::MiddleCenter => "middle-center",
            Anchor::MiddleRight => "middle-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Absolute canvas coordinate of this anchor.
    pub fn position(self) -> Point {
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => ROW_TOP,
            Anchor::MiddleLeft | Anchor::MiddleCenter | Anchor::MiddleRight => ROW_MIDDLE,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => ROW_BOTTOM,
        };
        let x = match self {
            Anchor::TopLeft | Anchor::MiddleLeft | Anchor::BottomLeft => COL_LEFT,
            Anchor::TopCenter | Anchor::MiddleCenter | Anchor::BottomCenter => COL_CENTER,
            Anchor::TopRight | Anchor::MiddleRight | Anchor::BottomRight => COL_RIGHT,
        };
        Point::new(x, y)
    }
}

impl FromStr for Anchor {
    type Err = StoryproofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                StoryproofError::validation(format!(
                    "unknown anchor '{s}' (expected one of top|middle|bottom-left|center|right)"
                ))
            })
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an anchor name to its canvas coordinate.
///
/// Pure lookup in the fixed 9-entry table; fails for any name that is not
/// one of the canonical strings.
pub fn resolve_anchor(name: &str) -> StoryproofResult<Point> {
    name.parse::<Anchor>().map(Anchor::position)
}
