//! Storyproof is a storyboard validation engine for programmatic
//! educational video generation.
//!
//! A storyboard (`StoryboardDocument`) describes a short video before any
//! frame is rendered or narration synthesized: ordered scenes, visual
//! elements on a fixed 3×3 anchor grid, and animation steps. Storyproof
//! decides whether such a document is internally consistent enough to
//! hand to a renderer.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON text -> raw tree (malformed input is fatal)
//! 2. **Schema gate**: raw tree vs. JSON Schema -> structural violations
//!    (any violation stops the run here)
//! 3. **Check**: business rules (duration budget, id uniqueness,
//!    referential integrity, must-show) and spatial layout (anchor
//!    resolution, bounds, pairwise overlaps) over the typed document
//! 4. **Report**: ordered diagnostics plus summary statistics
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a validation run is a pure function of
//!   its inputs; per-scene work may be scheduled in parallel but results
//!   merge in scene order, so two runs over the same document produce
//!   identical reports.
//! - **Diagnostics are data**: only unreadable inputs and uncompilable
//!   schemas are errors; everything found *in* the document comes back in
//!   the [`ValidationReport`].
//! - **No IO in the engine**: callers load documents; convenience path
//!   helpers live at the edges.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod layout;
mod narration;
mod style;
mod validate;

pub use document::model::{
    Animation, AnimationStep, Checks, Element, ElementKind, Meta, Scene, SizeClass,
    StoryboardDocument, TargetSpec, Visual, parse_json_tree, read_json_file,
};
pub use foundation::core::{BoundingBox, CanvasFrame, FrameBounds, Point, Vec2};
pub use foundation::error::{StoryproofError, StoryproofResult};
pub use layout::grid::{Anchor, resolve_anchor};
pub use layout::registry::{BoundsViolation, Edge, ElementRegistry, OverlapPair};
pub use layout::sizing::intrinsic_size;
pub use narration::ssml::{
    CostEstimate, Glossary, SsmlOptions, TermPronunciation, estimate_cost, prepare_ssml,
};
pub use narration::token::{IssuedToken, TokenCache};
pub use style::StyleConfig;
pub use validate::pipeline::{
    ValidateOptions, validate_tree, validate_tree_builtin, validate_tree_with,
};
pub use validate::report::{Diagnostic, Severity, Summary, ValidationReport};
pub use validate::rules::{
    DURATION_TOLERANCE_RATIO, check_duration_tolerance, check_must_show, check_scene_id_uniqueness,
    check_scene_references, run_business_rules,
};
pub use validate::schema::{SchemaValidator, SchemaViolation, builtin_schema_tree};
pub use validate::spatial::{
    DEFAULT_MARGIN, DEFAULT_OVERLAP_THRESHOLD, check_scene_layout, check_scene_layout_with,
};
