use serde::{Deserialize, Serialize};

use crate::field::field_model::Field;

// ============================================================================
// Outcome of matching one requirement against the field set
// ============================================================================

/// Result of matching a single requirement. Every requirement yields
/// exactly one of these; `matched_field` is `None` iff nothing accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub requirement_name: String,

    /// The first accepting field in document order, absent when missing.
    pub matched_field: Option<Field>,

    /// 1.0 exact key match, 0.5 substring match, 0.0 unmatched.
    pub confidence: f32,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        self.confidence > 0.0
    }
}
