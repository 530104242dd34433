use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint probe results
// ============================================================================

/// What a single GET against a candidate endpoint revealed.
///
/// Failures are recorded here, never raised: an unreachable endpoint is a
/// finding, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointProbe {
    /// Path relative to the base URL, e.g. `/api/players`.
    pub path: String,

    /// HTTP status, absent when the request itself failed.
    pub status: Option<u16>,

    pub content_type: String,

    pub content_length: usize,

    /// Whether the response declared a JSON content type.
    pub is_json: bool,

    /// First bytes of a successful body, for eyeballing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    /// Transport-level failure message, when the request never completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate of one probing session against a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub base_url: String,
    pub probes: Vec<EndpointProbe>,
}

impl ProbeReport {
    /// Endpoints that answered with a JSON body, the API candidates.
    pub fn json_endpoints(&self) -> Vec<&EndpointProbe> {
        self.probes.iter().filter(|p| p.is_json).collect()
    }

    /// Endpoints that answered 200.
    pub fn reachable_count(&self) -> usize {
        self.probes.iter().filter(|p| p.status == Some(200)).count()
    }
}
