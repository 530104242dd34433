use serde::{Deserialize, Serialize};

// ============================================================================
// Normalized representation of one interactive page element
// ============================================================================

/// Kind of interactive element a [`Field`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    TextInput,
    Selection,
    MultiSelection,
    TextArea,
    Checkbox,
    Radio,
    Button,
}

/// One interactive element found on a page.
///
/// Pure value type: malformed source attributes coerce to defaults (empty
/// string, `false`) at construction instead of failing.
///
/// Invariants: `identifier` is never empty; `choices` is only populated
/// for `Selection`, `MultiSelection`, and `Radio` kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Best-available name: `name` attribute, else `id`, else a synthetic
    /// `unnamed_<n>` placeholder unique within one extraction pass.
    pub identifier: String,

    pub kind: FieldKind,

    /// Text of the `<label for=...>` element referencing this field's id.
    /// Empty when no such label exists; never inferred from surrounding
    /// prose.
    pub label: String,

    /// Hint text from the `placeholder` attribute, may be empty.
    pub placeholder: String,

    /// Ordered option texts for choice kinds, duplicates preserved.
    pub choices: Vec<String>,

    /// Whether the source element carried a `required` marker.
    pub required: bool,
}
