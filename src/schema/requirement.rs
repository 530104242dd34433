use serde::{Deserialize, Serialize};

// ============================================================================
// Externally defined requirements the target page must support
// ============================================================================

/// One field the consuming application needs the target page to offer.
///
/// Loaded once per matching session from a tabular source; read-only
/// thereafter. `name` is the unique key, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,

    /// Free-form type tag ("text", "date", "boolean", "enum", ...).
    pub value_type: String,

    /// Must exist before a tournament can be built at all.
    pub required_for_build: bool,

    /// May still change after the tournament has started.
    pub editable_after_start: bool,

    /// Free text, may be empty.
    pub notes: String,
}
