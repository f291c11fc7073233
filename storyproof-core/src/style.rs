//! Style configuration consumed by the layout engine.
//!
//! Only the measurements the validator needs live here: font sizes per
//! size class and default shape dimensions. Theme catalogs and every other
//! aesthetic decision belong to the rendering stage.

/// Style configuration.
///
/// Colors are named palette roles resolved through [`StyleConfig::resolve_color`];
/// dimension fields feed intrinsic-size derivation during layout checks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Background color.
    pub background: String,
    /// Primary accent color.
    pub primary: String,
    /// Secondary accent color.
    pub secondary: String,
    /// Highlight color.
    pub accent: String,
    /// Default text color.
    pub text_color: String,
    /// Error color.
    pub error: String,
    /// Muted/dim color.
    pub muted: String,

    /// Title font size in points.
    pub title_size: f64,
    /// Body font size in points.
    pub body_size: f64,
    /// Small font size in points.
    pub small_size: f64,

    /// Default box width in scene units.
    pub box_width: f64,
    /// Default box height in scene units.
    pub box_height: f64,
    /// Default circle radius in scene units.
    pub circle_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#1a1a2e".to_string(),
            primary: "#4fc3f7".to_string(),
            secondary: "#81c784".to_string(),
            accent: "#ffb74d".to_string(),
            text_color: "#ffffff".to_string(),
            error: "#ef5350".to_string(),
            muted: "#9e9e9e".to_string(),
            title_size: 48.0,
            body_size: 36.0,
            small_size: 24.0,
            box_width: 2.0,
            box_height: 1.0,
            circle_radius: 1.0,
        }
    }
}

impl StyleConfig {
    /// Resolve a palette role name to its configured color.
    ///
    /// Unrecognized names pass through unchanged, so raw values like
    /// `"#ff0000"` can be used wherever a role name is accepted. This
    /// pass-through fallback is deliberate; callers that need strictness
    /// must check the input against the role names themselves.
    pub fn resolve_color<'a>(&'a self, name: &'a str) -> &'a str {
        match name {
            "primary" => &self.primary,
            "secondary" => &self.secondary,
            "accent" => &self.accent,
            "text" => &self.text_color,
            "error" => &self.error,
            "muted" => &self.muted,
            "background" => &self.background,
            other => other,
        }
    }
}
