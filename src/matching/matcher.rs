use crate::field::field_model::Field;
use crate::matching::match_model::MatchResult;
use crate::matching::synonyms::SynonymTable;
use crate::schema::requirement::Requirement;

// ============================================================================
// Matcher — map extracted fields to requirement names
// ============================================================================

/// Produce exactly one [`MatchResult`] per requirement, in requirement
/// order. Deterministic: no randomness, ties broken by document order.
///
/// A field accepts a requirement when any synonym token for the
/// requirement is a substring of any of the field's keys (identifier,
/// label, placeholder; lower-cased, empties dropped). The first accepting
/// field wins. A field may satisfy several requirements; a requirement
/// never matches more than one field.
pub fn match_requirements(
    fields: &[Field],
    requirements: &[Requirement],
    synonyms: &SynonymTable,
) -> Vec<MatchResult> {
    requirements
        .iter()
        .map(|req| match_one(fields, req, synonyms))
        .collect()
}

fn match_one(fields: &[Field], requirement: &Requirement, synonyms: &SynonymTable) -> MatchResult {
    let tokens = synonyms.tokens_for(&requirement.name);

    for field in fields {
        let keys = field_keys(field);

        let mut accepted = false;
        let mut exact = false;
        for key in &keys {
            for token in &tokens {
                if key.contains(token.as_str()) {
                    accepted = true;
                    if key == token {
                        exact = true;
                    }
                }
            }
        }

        if accepted {
            return MatchResult {
                requirement_name: requirement.name.clone(),
                matched_field: Some(field.clone()),
                confidence: if exact { 1.0 } else { 0.5 },
            };
        }
    }

    MatchResult {
        requirement_name: requirement.name.clone(),
        matched_field: None,
        confidence: 0.0,
    }
}

/// The strings a field can be recognized by, lower-cased, empties dropped.
fn field_keys(field: &Field) -> Vec<String> {
    [&field.identifier, &field.label, &field.placeholder]
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
