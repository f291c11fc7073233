use crate::document::model::{Element, ElementKind, SizeClass};
use crate::style::StyleConfig;

/// Pixels per scene unit at the renderer's reference resolution (1080 px
/// over an 8-unit-tall frame).
const PX_PER_UNIT: f64 = 135.0;

/// Average glyph advance as a fraction of line height.
const ADVANCE_RATIO: f64 = 0.6;

/// Formula scale factors per size class.
const FORMULA_SCALE_SMALL: f64 = 0.7;
const FORMULA_SCALE_MEDIUM: f64 = 1.0;
const FORMULA_SCALE_LARGE: f64 = 1.3;

/// Intrinsic width/height of an element in scene units, or `None` for
/// elements that are not themselves placed on the grid (arrows span
/// between their endpoints).
///
/// Explicit `width`/`height` fields always win per axis; the remaining
/// axis falls back to the derived value. Text extents are an estimate —
/// average glyph advance against the configured font size — which is what
/// the layout police needs; exact metrics belong to the renderer.
pub fn intrinsic_size(element: &Element, style: &StyleConfig) -> Option<(f64, f64)> {
    let derived = match element.kind {
        ElementKind::Arrow => return None,
        ElementKind::Box => (style.box_width, style.box_height),
        ElementKind::Circle => {
            let d = style.circle_radius * 2.0;
            (d, d)
        }
        ElementKind::Text => {
            text_extent(element.content.as_deref().unwrap_or(""), font_size(element.size, style))
        }
        ElementKind::Formula => {
            let scale = match element.size {
                SizeClass::Small => FORMULA_SCALE_SMALL,
                SizeClass::Medium => FORMULA_SCALE_MEDIUM,
                SizeClass::Large => FORMULA_SCALE_LARGE,
            };
            let (w, h) = text_extent(
                element.content.as_deref().unwrap_or(""),
                style.body_size,
            );
            (w * scale, h * scale)
        }
    };
    Some((
        element.width.unwrap_or(derived.0),
        element.height.unwrap_or(derived.1),
    ))
}

fn font_size(size: SizeClass, style: &StyleConfig) -> f64 {
    match size {
        SizeClass::Small => style.small_size,
        SizeClass::Medium => style.body_size,
        SizeClass::Large => style.title_size,
    }
}

fn text_extent(text: &str, font_px: f64) -> (f64, f64) {
    let line_height = font_px / PX_PER_UNIT;
    let mut lines = 0usize;
    let mut longest = 0usize;
    for line in text.lines() {
        lines += 1;
        longest = longest.max(line.chars().count());
    }
    // An empty string still occupies one line of height.
    let lines = lines.max(1);
    let width = (longest as f64) * line_height * ADVANCE_RATIO;
    (width.max(line_height), line_height * lines as f64)
}
