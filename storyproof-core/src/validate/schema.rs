use serde_json::Value;

use crate::foundation::error::{StoryproofError, StoryproofResult};

/// The storyboard schema shipped with the crate (JSON Schema Draft 7).
const BUILTIN_SCHEMA: &str = include_str!("../../../schemas/storyboard.schema.json");

/// One structural schema violation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SchemaViolation {
    /// Path of the violating node, e.g. `scenes[2].visual.elements[0].type`.
    pub path: String,
    /// The validator's message for this violation.
    pub message: String,
}

/// A compiled schema validator.
///
/// Structural conformance is the gate in front of every other check:
/// business rules and spatial analysis assume a well-formed document and
/// are skipped entirely when any violation is present.
pub struct SchemaValidator {
    compiled: jsonschema::Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile a schema document.
    ///
    /// A schema that cannot be compiled is a fatal
    /// [`StoryproofError::Schema`], reported separately from any
    /// storyboard-content problem.
    pub fn new(schema: &Value) -> StoryproofResult<Self> {
        let compiled = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .build(schema)
            .map_err(|e| StoryproofError::schema(format!("cannot compile schema: {e}")))?;
        Ok(Self { compiled })
    }

    /// The built-in storyboard schema.
    pub fn builtin() -> StoryproofResult<Self> {
        Self::new(&builtin_schema_tree()?)
    }

    /// Ordered structural violations of `tree` against this schema.
    ///
    /// An empty result means the document is structurally valid.
    pub fn validate(&self, tree: &Value) -> Vec<SchemaViolation> {
        self.compiled
            .iter_errors(tree)
            .map(|err| SchemaViolation {
                path: pointer_to_path(&err.instance_path.to_string()),
                message: err.to_string(),
            })
            .collect()
    }
}

/// Parse the schema document shipped with the crate into a raw tree.
pub fn builtin_schema_tree() -> StoryproofResult<Value> {
    serde_json::from_str(BUILTIN_SCHEMA)
        .map_err(|e| StoryproofError::schema(format!("built-in schema is invalid: {e}")))
}

/// Render a JSON Pointer (`/scenes/2/visual/elements/0/type`) in dotted
/// index form (`scenes[2].visual.elements[0].type`). The document root is
/// rendered as `$`.
fn pointer_to_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return "$".to_string();
    }
    let mut path = String::new();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if segment.bytes().all(|b| b.is_ascii_digit()) && !segment.is_empty() {
            path.push('[');
            path.push_str(&segment);
            path.push(']');
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(&segment);
        }
    }
    path
}
