use crate::field::inventory::{PageInventory, build_inventory};
use crate::matching::matcher::match_requirements;
use crate::matching::synonyms::SynonymTable;
use crate::report::gap::GapReport;
use crate::schema::requirement::Requirement;

pub mod cli;
pub mod field;
pub mod matching;
pub mod probe;
pub mod report;
pub mod schema;
pub mod trace;

/// Run one full audit pass over raw markup: parse, extract fields, match
/// against the requirement schema, build the gap report.
///
/// Pure except for parsing: no I/O, no shared state. Independent passes
/// over separate documents can run concurrently with no coordination.
pub fn audit_document(
    html: &str,
    url: Option<&str>,
    requirements: &[Requirement],
    synonyms: &SynonymTable,
) -> (PageInventory, GapReport) {
    let inventory = build_inventory(html, url);
    let results = match_requirements(&inventory.fields, requirements, synonyms);
    let report = GapReport::from_results(requirements, results);
    (inventory, report)
}
