//! Partial updates of recipes via JSON Patch (RFC 6902) and JSON Merge Patch (RFC 7396).
//!
//! Patches are applied to the JSON view of a recipe with the `json-patch`
//! crate. The result is turned back into a [`Recipe`] and re-validated, so a
//! patch can never store a document the create/replace path would reject.
//! The recipe id is immutable: whatever a patch does to `/id`, the original
//! value is restored.

mod error;

pub use error::PatchError;

use serde_json::Value;

use crate::recipe::{validate_recipe, Recipe};

/// Media type for RFC 6902 JSON Patch documents.
pub const JSON_PATCH_MEDIA_TYPE: &str = "application/json-patch+json";

/// Media type for RFC 7396 JSON Merge Patch documents.
pub const MERGE_PATCH_MEDIA_TYPE: &str = "application/merge-patch+json";

/// The kind of patch document carried by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
    JsonPatch,
    MergePatch,
}

impl PatchKind {
    /// Resolves the patch kind from a `Content-Type` value.
    ///
    /// Media type parameters (`; charset=utf-8`) are ignored and the
    /// comparison is case-insensitive. Returns `None` for any other type.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            JSON_PATCH_MEDIA_TYPE => Some(PatchKind::JsonPatch),
            MERGE_PATCH_MEDIA_TYPE => Some(PatchKind::MergePatch),
            _ => None,
        }
    }

    /// Returns the media type for this kind.
    pub fn media_type(&self) -> &'static str {
        match self {
            PatchKind::JsonPatch => JSON_PATCH_MEDIA_TYPE,
            PatchKind::MergePatch => MERGE_PATCH_MEDIA_TYPE,
        }
    }
}

/// A parsed patch document, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipePatch {
    Json(json_patch::Patch),
    Merge(Value),
}

impl RecipePatch {
    /// Parses a request body as a patch document of the given kind.
    pub fn parse(kind: PatchKind, body: &[u8]) -> Result<Self, PatchError> {
        match kind {
            PatchKind::JsonPatch => serde_json::from_slice(body)
                .map(RecipePatch::Json)
                .map_err(|e| PatchError::Malformed(e.to_string())),
            PatchKind::MergePatch => serde_json::from_slice(body)
                .map(RecipePatch::Merge)
                .map_err(|e| PatchError::Malformed(e.to_string())),
        }
    }

    /// Applies this patch to `recipe`, returning the patched copy.
    pub fn apply(&self, recipe: &Recipe) -> Result<Recipe, PatchError> {
        match self {
            RecipePatch::Json(patch) => apply_json_patch(recipe, patch),
            RecipePatch::Merge(patch) => apply_merge_patch(recipe, patch),
        }
    }
}

/// Applies an RFC 6902 JSON Patch to a recipe.
pub fn apply_json_patch(recipe: &Recipe, patch: &json_patch::Patch) -> Result<Recipe, PatchError> {
    let mut document = recipe.to_document()?;
    json_patch::patch(&mut document, &patch.0).map_err(|e| PatchError::Apply(e.to_string()))?;
    finish(recipe, document)
}

/// Applies an RFC 7396 JSON Merge Patch to a recipe.
pub fn apply_merge_patch(recipe: &Recipe, patch: &Value) -> Result<Recipe, PatchError> {
    let mut document = recipe.to_document()?;
    json_patch::merge(&mut document, patch);
    finish(recipe, document)
}

fn finish(original: &Recipe, mut document: Value) -> Result<Recipe, PatchError> {
    if let Value::Object(fields) = &mut document {
        fields.insert("id".to_string(), Value::String(original.id.clone()));
    }
    let mut patched =
        Recipe::from_document(document).map_err(|e| PatchError::Invalid(e.to_string()))?;
    patched.id = original.id.clone();
    validate_recipe(&patched).map_err(|e| PatchError::Invalid(e.to_string()))?;
    Ok(patched)
}
