use std::collections::BTreeSet;
use std::path::Path;

use crate::foundation::error::{StoryproofError, StoryproofResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete storyboard document.
///
/// A storyboard is a pure data model describing an educational video before
/// any frame is rendered or narration synthesized: ordered scenes, the
/// visual elements each scene shows, and the animation steps that reveal
/// them. The document is owned by one validation run and never mutated.
pub struct StoryboardDocument {
    /// Document-level metadata (title, audience, duration budget).
    #[serde(default)]
    pub meta: Meta,
    /// Ordered scenes of the video.
    pub scenes: Vec<Scene>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Document-level metadata.
pub struct Meta {
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Target audience label (e.g. "beginner").
    #[serde(default)]
    pub audience: String,
    /// Requested total runtime in seconds; scene durations must sum to
    /// within ±10% of this value.
    #[serde(default = "default_duration_target")]
    pub duration_target_s: f64,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            title: String::new(),
            audience: String::new(),
            duration_target_s: default_duration_target(),
        }
    }
}

fn default_duration_target() -> f64 {
    180.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One ordered unit of the storyboard with its own duration budget.
pub struct Scene {
    /// Scene identifier, unique within the document.
    pub id: String,
    /// Scene duration in seconds (non-negative).
    pub duration_s: f64,
    /// Narration text spoken over this scene.
    #[serde(default)]
    pub narration: String,
    /// Visual content of the scene.
    #[serde(default)]
    pub visual: Visual,
    /// Animation timeline of the scene.
    #[serde(default)]
    pub animation: Animation,
    /// Quality checks the scene must satisfy.
    #[serde(default)]
    pub checks: Checks,
}

impl Scene {
    /// The set of element ids declared by this scene.
    ///
    /// All references inside a scene (arrow endpoints, animation targets,
    /// `must_show` entries) are scoped to this set.
    pub fn element_ids(&self) -> BTreeSet<&str> {
        self.visual
            .elements
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Visual content of a scene.
pub struct Visual {
    /// Elements placed on the canvas, in authoring order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Animation timeline of a scene.
pub struct Animation {
    /// Ordered animation steps.
    #[serde(default)]
    pub steps: Vec<AnimationStep>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Per-scene quality checks.
pub struct Checks {
    /// Element ids that must be visible at some point during the scene.
    #[serde(default)]
    pub must_show: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A visual element of a scene.
pub struct Element {
    /// Element identifier, unique within its owning scene only.
    pub id: String,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Text or LaTeX content (text and formula elements).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Label drawn inside the element (box elements).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Anchor name on the 3×3 grid; defaults to `middle-center` when the
    /// element is placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Size class used to derive intrinsic dimensions.
    #[serde(default)]
    pub size: SizeClass,
    /// Explicit width in scene units; overrides the derived width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height in scene units; overrides the derived height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Source element id (arrow elements); scoped to the same scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Destination element id (arrow elements); scoped to the same scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Named palette role or raw color value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of a visual element.
pub enum ElementKind {
    /// Plain text.
    Text,
    /// Rectangle, optionally labeled.
    Box,
    /// Circle.
    Circle,
    /// Arrow between two elements of the same scene.
    Arrow,
    /// LaTeX formula.
    Formula,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Size class of an element; maps to concrete dimensions via the style
/// configuration.
pub enum SizeClass {
    /// Small variant.
    Small,
    /// Medium variant (default).
    #[default]
    Medium,
    /// Large variant.
    Large,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One animation step.
pub struct AnimationStep {
    /// Action name. The literal `"wait"` takes no element target and is
    /// exempt from reference checking.
    pub action: String,
    /// Element id(s) the action applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetSpec>,
    /// Step duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
}

impl AnimationStep {
    /// True for `"wait"` steps, which are exempt from target checking.
    pub fn is_wait(&self) -> bool {
        self.action == "wait"
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Animation step target: a single element id or a list of them.
pub enum TargetSpec {
    /// A single element id.
    One(String),
    /// Several element ids.
    Many(Vec<String>),
}

impl TargetSpec {
    /// The targeted ids, normalizing the single-id form to a one-element
    /// slice.
    pub fn ids(&self) -> &[String] {
        match self {
            TargetSpec::One(id) => std::slice::from_ref(id),
            TargetSpec::Many(ids) => ids,
        }
    }
}

impl StoryboardDocument {
    /// Deserialize a document from an already-parsed JSON tree.
    ///
    /// Intended to run after schema validation; a shape mismatch at this
    /// point is reported as a serialization error.
    pub fn from_tree(tree: &serde_json::Value) -> StoryproofResult<Self> {
        serde_json::from_value(tree.clone()).map_err(|e| StoryproofError::serde(e.to_string()))
    }

    /// Parse a document from JSON text.
    ///
    /// Malformed syntax is a fatal [`StoryproofError::Load`], distinct from
    /// any schema violation a validation run could report.
    pub fn from_json_str(s: &str) -> StoryproofResult<Self> {
        let tree = parse_json_tree(s)?;
        Self::from_tree(&tree)
    }

    /// Load a document from a JSON file on disk.
    pub fn from_path(path: &Path) -> StoryproofResult<Self> {
        let tree = read_json_file(path)?;
        Self::from_tree(&tree)
    }

    /// Sum of scene durations in seconds.
    pub fn total_duration_s(&self) -> f64 {
        self.scenes.iter().map(|s| s.duration_s).sum()
    }

    /// Total element count across all scenes.
    pub fn element_count(&self) -> usize {
        self.scenes.iter().map(|s| s.visual.elements.len()).sum()
    }
}

/// Parse JSON text into a raw tree, mapping syntax errors to fatal
/// [`StoryproofError::Load`] values.
pub fn parse_json_tree(s: &str) -> StoryproofResult<serde_json::Value> {
    serde_json::from_str(s).map_err(|e| StoryproofError::load(format!("invalid JSON: {e}")))
}

/// Read and parse a JSON file, mapping IO and syntax errors to fatal
/// [`StoryproofError::Load`] values.
pub fn read_json_file(path: &Path) -> StoryproofResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| StoryproofError::load(format!("cannot read '{}': {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| StoryproofError::load(format!("invalid JSON in '{}': {e}", path.display())))
}
