use serde::Serialize;

// ============================================================================
// Audit trace events — one JSONL line each
// ============================================================================

/// Machine-readable record of what an audit or probe session did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    PageParsed {
        url: Option<String>,
        title: String,
        fingerprint: String,
        fields: usize,
        skipped: usize,
    },

    RequirementMatched {
        requirement: String,
        field: String,
        confidence: f32,
    },

    RequirementMissing {
        requirement: String,
    },

    EndpointProbed {
        path: String,
        status: Option<u16>,
        is_json: bool,
    },
}
