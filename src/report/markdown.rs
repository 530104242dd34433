use crate::field::inventory::PageInventory;
use crate::report::console::kind_label;
use crate::report::gap::GapReport;

// ============================================================================
// Markdown reporter — audit report for docs and issue trackers
// ============================================================================

/// Generate a markdown audit report.
///
/// Sections:
/// - Header with page title, URL, and fingerprint
/// - Verdict line (build-ready or not)
/// - Matched requirements as a table
/// - Missing requirements as a list with notes
pub fn generate_markdown_report(inventory: &PageInventory, report: &GapReport) -> String {
    let mut out = String::new();

    let title = if inventory.title.is_empty() {
        "Field Audit"
    } else {
        &inventory.title
    };
    out.push_str(&format!("# Field Audit: {}\n\n", title));

    if let Some(ref url) = inventory.url {
        out.push_str(&format!("- **URL**: {}\n", url));
    }
    out.push_str(&format!("- **Page fingerprint**: `{}`\n", inventory.fingerprint));
    out.push_str(&format!(
        "- **Fields discovered**: {} ({} skipped)\n\n",
        inventory.fields.len(),
        inventory.skipped_count
    ));

    let verdict = if report.build_ready() {
        "All required settings are supported."
    } else {
        "Some required settings have no matching field."
    };
    out.push_str(&format!("**Verdict**: {}\n\n", verdict));

    if !report.matched.is_empty() {
        out.push_str("## Matched\n\n");
        out.push_str("| Requirement | Field | Kind | Confidence |\n");
        out.push_str("|---|---|---|---|\n");
        for result in report.matched.values() {
            if let Some(ref field) = result.matched_field {
                out.push_str(&format!(
                    "| {} | `{}` | {} | {:.1} |\n",
                    escape_cell(&result.requirement_name),
                    field.identifier,
                    kind_label(field.kind),
                    result.confidence
                ));
            }
        }
        out.push('\n');
    }

    if !report.missing.is_empty() {
        out.push_str("## Missing\n\n");
        for requirement in &report.missing {
            let required_str = if requirement.required_for_build {
                " **(required for build)**"
            } else {
                ""
            };
            out.push_str(&format!(
                "- {} [{}]{}\n",
                escape_cell(&requirement.name),
                requirement.value_type,
                required_str
            ));
            if !requirement.notes.is_empty() {
                out.push_str(&format!("  - {}\n", requirement.notes));
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "---\n\n{} matched, {} missing ({} required)\n",
        report.matched.len(),
        report.missing.len(),
        report.missing_required_count
    ));

    out
}

/// Keep requirement names from breaking table syntax.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
