use std::time::Duration;

use crate::probe::probe_model::{EndpointProbe, ProbeReport};

// ============================================================================
// Endpoint prober — plain GETs against candidate API paths
// ============================================================================

/// Candidate paths that ratings sites commonly expose.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "/api",
    "/api/players",
    "/api/search",
    "/player/search",
    "/players",
    "/search",
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const PREVIEW_CHARS: usize = 200;

/// Probe each endpoint with a plain GET, spacing requests by `delay_ms`.
///
/// Per-endpoint failures are recorded in the report, never raised; the
/// session always completes. No retries, no evasion, one plain request
/// per path.
pub fn probe_endpoints(base_url: &str, endpoints: &[String], delay_ms: u64) -> ProbeReport {
    let client = reqwest::blocking::Client::new();
    let base = base_url.trim_end_matches('/');

    let mut probes = Vec::new();
    for (i, path) in endpoints.iter().enumerate() {
        if i > 0 && delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(delay_ms));
        }
        probes.push(probe_one(&client, base, path));
    }

    ProbeReport {
        base_url: base.to_string(),
        probes,
    }
}

fn probe_one(client: &reqwest::blocking::Client, base: &str, path: &str) -> EndpointProbe {
    let url = format!("{}{}", base, path);

    let response = client
        .get(&url)
        .timeout(REQUEST_TIMEOUT)
        .header("Accept", "application/json, text/plain, */*")
        .send();

    let response = match response {
        Ok(r) => r,
        Err(e) => {
            return EndpointProbe {
                path: path.to_string(),
                status: None,
                content_type: String::new(),
                content_length: 0,
                is_json: false,
                preview: None,
                error: Some(e.to_string()),
            };
        }
    };

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let is_json = content_type.contains("application/json");

    let body = response.text().unwrap_or_default();
    let preview = if status == 200 {
        Some(body.chars().take(PREVIEW_CHARS).collect())
    } else {
        None
    };

    EndpointProbe {
        path: path.to_string(),
        status: Some(status),
        content_type,
        content_length: body.len(),
        is_json,
        preview,
        error: None,
    }
}

/// Parse an endpoint override list: one path per line, blank lines and
/// `#` comments ignored. Paths gain a leading slash when missing.
pub fn parse_endpoint_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line.starts_with('/') {
                line.to_string()
            } else {
                format!("/{}", line)
            }
        })
        .collect()
}
