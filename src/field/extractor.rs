use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::field::field_model::{Field, FieldKind};

// ============================================================================
// Field extraction — parsed document tree → ordered Field sequence
// ============================================================================

/// Result of one extraction pass over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Fields in document order.
    pub fields: Vec<Field>,

    /// Elements that looked interactive but were not usable as fields
    /// (hidden inputs, file pickers, unrecognized input types).
    pub skipped_count: usize,
}

/// Walk a parsed document and produce one [`Field`] per interactive
/// element, in document order.
///
/// Deterministic: identical markup always yields an element-wise equal
/// field sequence. Malformed fragments never fail the pass; unusable
/// elements are skipped and tallied in `skipped_count`.
///
/// Radio inputs sharing a `name` collapse into a single `Radio` field at
/// the position of the group's first member, each member contributing one
/// choice.
pub fn extract_fields(document: &Html) -> Extraction {
    let field_sel = Selector::parse("input, select, textarea, button").unwrap();
    let option_sel = Selector::parse("option").unwrap();

    let labels = label_index(document);

    let mut fields: Vec<Field> = Vec::new();
    let mut skipped_count = 0;
    let mut unnamed_counter = 0;
    // radio group name → index into `fields`
    let mut radio_groups: HashMap<String, usize> = HashMap::new();

    for el in document.select(&field_sel) {
        match el.value().name() {
            "select" => {
                let kind = if el.value().attr("multiple").is_some() {
                    FieldKind::MultiSelection
                } else {
                    FieldKind::Selection
                };
                let choices = el
                    .select(&option_sel)
                    .map(|opt| element_text(&opt))
                    .collect();
                fields.push(build_field(&el, kind, choices, &labels, &mut unnamed_counter));
            }

            "textarea" => {
                fields.push(build_field(
                    &el,
                    FieldKind::TextArea,
                    Vec::new(),
                    &labels,
                    &mut unnamed_counter,
                ));
            }

            "button" => {
                fields.push(build_field(
                    &el,
                    FieldKind::Button,
                    Vec::new(),
                    &labels,
                    &mut unnamed_counter,
                ));
            }

            "input" => {
                let input_type = el
                    .value()
                    .attr("type")
                    .map(|t| t.trim().to_lowercase())
                    .unwrap_or_else(|| "text".to_string());

                match input_type.as_str() {
                    "radio" => {
                        collect_radio(&el, &labels, &mut fields, &mut radio_groups, &mut unnamed_counter);
                    }

                    "checkbox" => {
                        fields.push(build_field(
                            &el,
                            FieldKind::Checkbox,
                            Vec::new(),
                            &labels,
                            &mut unnamed_counter,
                        ));
                    }

                    "submit" | "button" | "reset" | "image" => {
                        fields.push(build_field(
                            &el,
                            FieldKind::Button,
                            Vec::new(),
                            &labels,
                            &mut unnamed_counter,
                        ));
                    }

                    // Textual inputs
                    "text" | "email" | "password" | "search" | "number" | "tel" | "url"
                    | "date" | "time" | "datetime-local" | "month" | "week" | "range"
                    | "color" => {
                        fields.push(build_field(
                            &el,
                            FieldKind::TextInput,
                            Vec::new(),
                            &labels,
                            &mut unnamed_counter,
                        ));
                    }

                    // Not user-editable, or unknown → be conservative
                    _ => skipped_count += 1,
                }
            }

            _ => skipped_count += 1,
        }
    }

    Extraction {
        fields,
        skipped_count,
    }
}

/// Map of label `for` attribute → normalized label text. First label
/// referencing an id wins.
fn label_index(document: &Html) -> HashMap<String, String> {
    let label_sel = Selector::parse("label").unwrap();

    let mut index = HashMap::new();
    for label in document.select(&label_sel) {
        if let Some(for_id) = label.value().attr("for") {
            let text = element_text(&label);
            index.entry(for_id.to_string()).or_insert(text);
        }
    }
    index
}

fn build_field(
    el: &ElementRef,
    kind: FieldKind,
    choices: Vec<String>,
    labels: &HashMap<String, String>,
    unnamed_counter: &mut usize,
) -> Field {
    Field {
        identifier: resolve_identifier(el, unnamed_counter),
        kind,
        label: label_for(el, labels),
        placeholder: attr_or_empty(el, "placeholder"),
        choices,
        required: el.value().attr("required").is_some(),
    }
}

/// Fold a radio input into its name group, creating the group's field on
/// first sight. Nameless radios stand alone.
fn collect_radio(
    el: &ElementRef,
    labels: &HashMap<String, String>,
    fields: &mut Vec<Field>,
    radio_groups: &mut HashMap<String, usize>,
    unnamed_counter: &mut usize,
) {
    // The member's own label names its choice, not the group
    let choice = label_for(el, labels);
    let choice = if choice.is_empty() {
        attr_or_empty(el, "value")
    } else {
        choice
    };
    let required = el.value().attr("required").is_some();

    if let Some(name) = nonempty_attr(el, "name") {
        if let Some(&idx) = radio_groups.get(&name) {
            if !choice.is_empty() {
                fields[idx].choices.push(choice);
            }
            fields[idx].required |= required;
            return;
        }

        let choices = if choice.is_empty() { Vec::new() } else { vec![choice] };
        radio_groups.insert(name.clone(), fields.len());
        fields.push(Field {
            identifier: name,
            kind: FieldKind::Radio,
            label: String::new(),
            placeholder: String::new(),
            choices,
            required,
        });
        return;
    }

    let choices = if choice.is_empty() { Vec::new() } else { vec![choice] };
    fields.push(Field {
        identifier: nonempty_attr(el, "id")
            .unwrap_or_else(|| synthetic_identifier(unnamed_counter)),
        kind: FieldKind::Radio,
        label: String::new(),
        placeholder: String::new(),
        choices,
        required,
    });
}

/// `name` attribute → `id` attribute → `unnamed_<n>`.
fn resolve_identifier(el: &ElementRef, unnamed_counter: &mut usize) -> String {
    nonempty_attr(el, "name")
        .or_else(|| nonempty_attr(el, "id"))
        .unwrap_or_else(|| synthetic_identifier(unnamed_counter))
}

fn synthetic_identifier(unnamed_counter: &mut usize) -> String {
    let id = format!("unnamed_{}", *unnamed_counter);
    *unnamed_counter += 1;
    id
}

fn label_for(el: &ElementRef, labels: &HashMap<String, String>) -> String {
    nonempty_attr(el, "id")
        .and_then(|id| labels.get(&id).cloned())
        .unwrap_or_default()
}

fn nonempty_attr(el: &ElementRef, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn attr_or_empty(el: &ElementRef, name: &str) -> String {
    el.value().attr(name).unwrap_or("").trim().to_string()
}

/// Collapse an element's text content to single-spaced trimmed form.
fn element_text(el: &ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
