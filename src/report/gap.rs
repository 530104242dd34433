use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::match_model::MatchResult;
use crate::schema::requirement::Requirement;

// ============================================================================
// Gap report — requirements reconciled against discovered fields
// ============================================================================

/// Aggregate outcome of one matching pass.
///
/// Built from a requirement sequence and its match results via
/// [`GapReport::from_results`]. Pure data, no I/O; consumed by the
/// console, JSON, and markdown reporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    /// Requirement name → its accepted match (confidence > 0).
    pub matched: BTreeMap<String, MatchResult>,

    /// Requirements with no accepted match, in schema order.
    pub missing: Vec<Requirement>,

    /// How many of `missing` are required for the initial build.
    pub missing_required_count: usize,
}

impl GapReport {
    /// Partition match results into matched and missing.
    ///
    /// `results` must be the matcher's output for `requirements`: one
    /// result per requirement, same order.
    pub fn from_results(requirements: &[Requirement], results: Vec<MatchResult>) -> Self {
        let mut matched = BTreeMap::new();
        let mut missing = Vec::new();

        for (requirement, result) in requirements.iter().zip(results) {
            if result.is_matched() {
                matched.insert(requirement.name.clone(), result);
            } else {
                missing.push(requirement.clone());
            }
        }

        let missing_required_count = missing.iter().filter(|r| r.required_for_build).count();

        Self {
            matched,
            missing,
            missing_required_count,
        }
    }

    /// Whether every requirement found a field.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Whether the page can support an initial build at all.
    pub fn build_ready(&self) -> bool {
        self.missing_required_count == 0
    }
}
