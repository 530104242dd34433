use crate::field::field_model::FieldKind;
use crate::field::inventory::PageInventory;
use crate::report::gap::GapReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an audit for terminal output.
///
/// Produces output like:
/// ```text
/// === Field Audit: Tournament Builder ===
///
/// 8 fields discovered (2 skipped)
///
/// ✓ MATCHED  Venue -> venue_search (confidence 1.0)
/// ✗ MISSING  Entry Fee [currency] (required)
///
/// === Results: 7 matched, 1 missing (1 required) ===
/// ```
pub fn format_console_report(inventory: &PageInventory, report: &GapReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Field Audit: {} ===\n\n", page_heading(inventory)));

    out.push_str(&format!(
        "{} fields discovered ({} skipped)\n\n",
        inventory.fields.len(),
        inventory.skipped_count
    ));

    for result in report.matched.values() {
        // matched entries always carry a field
        if let Some(ref field) = result.matched_field {
            out.push_str(&format!(
                "\u{2713} MATCHED  {} -> {} (confidence {:.1})\n",
                result.requirement_name, field.identifier, result.confidence
            ));
        }
    }

    for requirement in &report.missing {
        let required_str = if requirement.required_for_build {
            " (required)"
        } else {
            ""
        };
        out.push_str(&format!(
            "\u{2717} MISSING  {} [{}]{}\n",
            requirement.name, requirement.value_type, required_str
        ));
    }

    out.push_str(&format!(
        "\n=== Results: {} matched, {} missing ({} required) ===\n",
        report.matched.len(),
        report.missing.len(),
        report.missing_required_count
    ));

    out
}

/// Format a raw field inventory for terminal output.
pub fn format_inventory(inventory: &PageInventory) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Field Inventory: {} ===\n", page_heading(inventory)));
    out.push_str(&format!("fingerprint: {}\n\n", inventory.fingerprint));

    for field in &inventory.fields {
        let required_str = if field.required { " (required)" } else { "" };
        out.push_str(&format!(
            "  {} [{}]{}\n",
            field.identifier,
            kind_label(field.kind),
            required_str
        ));
        if !field.label.is_empty() {
            out.push_str(&format!("    label: {}\n", field.label));
        }
        if !field.placeholder.is_empty() {
            out.push_str(&format!("    placeholder: {}\n", field.placeholder));
        }
        if !field.choices.is_empty() {
            out.push_str(&format!("    choices: {}\n", field.choices.join(", ")));
        }
    }

    out.push_str(&format!(
        "\n=== {} fields, {} skipped ===\n",
        inventory.fields.len(),
        inventory.skipped_count
    ));

    out
}

fn page_heading(inventory: &PageInventory) -> &str {
    if inventory.title.is_empty() {
        inventory.url.as_deref().unwrap_or("(untitled page)")
    } else {
        &inventory.title
    }
}

/// Display name for a field kind.
pub fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::TextInput => "text-input",
        FieldKind::Selection => "selection",
        FieldKind::MultiSelection => "multi-selection",
        FieldKind::TextArea => "text-area",
        FieldKind::Checkbox => "checkbox",
        FieldKind::Radio => "radio",
        FieldKind::Button => "button",
    }
}
