use field_scout::field::extractor::extract_fields;
use field_scout::field::field_model::FieldKind;
use field_scout::field::inventory::{build_inventory, page_fingerprint};
use scraper::Html;

// =========================================================================
// Identifier resolution
// =========================================================================

#[test]
fn identifier_prefers_name_then_id_then_synthetic() {
    let html = r#"
        <form>
            <input type="text" name="venue_search" id="venue-input">
            <input type="text" id="city-input">
            <input type="text">
        </form>
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields.len(), 3);
    assert_eq!(extraction.fields[0].identifier, "venue_search", "name wins over id");
    assert_eq!(extraction.fields[1].identifier, "city-input", "id when name absent");
    assert_eq!(extraction.fields[2].identifier, "unnamed_0", "synthetic fallback");
}

#[test]
fn synthetic_counter_is_zero_based_and_pass_scoped() {
    let html = r#"
        <input type="text">
        <input type="text" name="named">
        <textarea></textarea>
        <button></button>
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    let ids: Vec<&str> = extraction
        .fields
        .iter()
        .map(|f| f.identifier.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["unnamed_0", "named", "unnamed_1", "unnamed_2"],
        "Counter only advances when a synthetic identifier is issued"
    );
}

#[test]
fn whitespace_only_attributes_are_treated_as_missing() {
    let html = r#"<input type="text" name="   " id="real-id">"#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].identifier, "real-id");
}

// =========================================================================
// Labels and placeholders
// =========================================================================

#[test]
fn label_resolves_through_for_attribute_only() {
    let html = r#"
        <p>Enter the tournament name below</p>
        <label for="name-input">Tournament Name</label>
        <input type="text" id="name-input" name="name">
        <input type="text" name="orphan">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].label, "Tournament Name");
    assert_eq!(
        extraction.fields[1].label, "",
        "No label element means empty label, never inferred from prose"
    );
}

#[test]
fn label_text_is_whitespace_collapsed() {
    let html = r#"
        <label for="f">  Start
            Date  </label>
        <input type="date" id="f">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].label, "Start Date");
}

#[test]
fn placeholder_is_captured() {
    let html = r#"<input type="text" name="venue" placeholder="Search venues...">"#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].placeholder, "Search venues...");
}

// =========================================================================
// Kinds and choices
// =========================================================================

#[test]
fn select_produces_ordered_choices_with_duplicates() {
    let html = r#"
        <select name="game_type">
            <option>8-Ball</option>
            <option>9-Ball</option>
            <option>8-Ball</option>
        </select>
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    let field = &extraction.fields[0];
    assert_eq!(field.kind, FieldKind::Selection);
    assert_eq!(
        field.choices,
        vec!["8-Ball", "9-Ball", "8-Ball"],
        "Duplicates preserved in document order"
    );
}

#[test]
fn multiple_attribute_makes_multi_selection() {
    let html = r#"<select name="tables" multiple><option>1</option></select>"#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].kind, FieldKind::MultiSelection);
}

#[test]
fn kinds_cover_textarea_checkbox_and_buttons() {
    let html = r#"
        <textarea name="notes"></textarea>
        <input type="checkbox" name="handicapped">
        <button name="save">Save</button>
        <input type="submit" name="go">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    let kinds: Vec<FieldKind> = extraction.fields.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::TextArea,
            FieldKind::Checkbox,
            FieldKind::Button,
            FieldKind::Button,
        ]
    );
    assert!(
        extraction.fields.iter().all(|f| f.choices.is_empty()),
        "Non-choice kinds carry no choices"
    );
}

#[test]
fn date_and_email_inputs_are_text_inputs() {
    let html = r#"
        <input type="date" name="start_date">
        <input type="email" name="contact">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert!(extraction.fields.iter().all(|f| f.kind == FieldKind::TextInput));
}

// =========================================================================
// Radio grouping
// =========================================================================

#[test]
fn radios_sharing_a_name_collapse_into_one_field() {
    let html = r#"
        <input type="radio" name="player_type" id="pt-s" value="singles">
        <label for="pt-s">Singles</label>
        <input type="radio" name="player_type" id="pt-d" value="doubles">
        <label for="pt-d">Doubles</label>
        <input type="text" name="race">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields.len(), 2, "One group field plus the text input");
    let group = &extraction.fields[0];
    assert_eq!(group.identifier, "player_type");
    assert_eq!(group.kind, FieldKind::Radio);
    assert_eq!(group.choices, vec!["Singles", "Doubles"]);
}

#[test]
fn radio_group_sits_at_first_member_position() {
    let html = r#"
        <input type="radio" name="format" value="single_elim">
        <input type="text" name="race_to">
        <input type="radio" name="format" value="double_elim">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    let ids: Vec<&str> = extraction
        .fields
        .iter()
        .map(|f| f.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["format", "race_to"]);
    assert_eq!(
        extraction.fields[0].choices,
        vec!["single_elim", "double_elim"],
        "Later members still contribute choices to the group"
    );
}

#[test]
fn radio_choice_falls_back_to_value_when_unlabelled() {
    let html = r#"<input type="radio" name="g" value="9ball">"#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields[0].choices, vec!["9ball"]);
}

#[test]
fn radio_group_required_if_any_member_required() {
    let html = r#"
        <input type="radio" name="g" value="a">
        <input type="radio" name="g" value="b" required>
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert!(extraction.fields[0].required);
}

// =========================================================================
// Skip accounting and resilience
// =========================================================================

#[test]
fn hidden_file_and_unknown_inputs_are_skipped_and_counted() {
    let html = r#"
        <input type="hidden" name="csrf">
        <input type="file" name="logo">
        <input type="quantum" name="weird">
        <input type="text" name="kept">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert_eq!(extraction.fields.len(), 1);
    assert_eq!(extraction.fields[0].identifier, "kept");
    assert_eq!(extraction.skipped_count, 3);
}

#[test]
fn required_marker_is_detected() {
    let html = r#"
        <input type="text" name="name" required>
        <input type="text" name="description">
    "#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert!(extraction.fields[0].required);
    assert!(!extraction.fields[1].required);
}

#[test]
fn malformed_markup_never_fails_the_pass() {
    let html = r#"<form><input type="text" name="a"><select name="b"><option>x<input type="text" name="c"#;
    let extraction = extract_fields(&Html::parse_document(html));

    assert!(
        extraction.fields.iter().any(|f| f.identifier == "a"),
        "Well-formed prefix still extracted"
    );
}

#[test]
fn empty_document_yields_empty_extraction() {
    let extraction = extract_fields(&Html::parse_document(""));

    assert!(extraction.fields.is_empty());
    assert_eq!(extraction.skipped_count, 0);
}

#[test]
fn extraction_is_idempotent() {
    let html = r#"
        <label for="v">Venue</label>
        <input type="text" id="v" placeholder="Search venues">
        <select name="game"><option>8-Ball</option><option>9-Ball</option></select>
        <input type="hidden" name="csrf">
        <input type="text">
    "#;
    let first = extract_fields(&Html::parse_document(html));
    let second = extract_fields(&Html::parse_document(html));

    assert_eq!(first, second, "Identical markup yields element-wise equal output");
}

// =========================================================================
// Page inventory
// =========================================================================

#[test]
fn inventory_captures_title_url_and_fingerprint() {
    let html = r#"<html><head><title>Tournament Builder</title></head>
        <body><input type="text" name="name"></body></html>"#;
    let inventory = build_inventory(html, Some("https://example.com/builder"));

    assert_eq!(inventory.title, "Tournament Builder");
    assert_eq!(inventory.url.as_deref(), Some("https://example.com/builder"));
    assert_eq!(inventory.fingerprint, page_fingerprint(html));
    assert_eq!(inventory.fields.len(), 1);
}

#[test]
fn fingerprint_is_stable_and_content_sensitive() {
    assert_eq!(page_fingerprint("<html></html>"), page_fingerprint("<html></html>"));
    assert_ne!(page_fingerprint("<html></html>"), page_fingerprint("<html> </html>"));
}

#[test]
fn missing_title_yields_empty_string() {
    let inventory = build_inventory("<body><input type='text' name='x'></body>", None);

    assert_eq!(inventory.title, "");
    assert!(inventory.url.is_none());
}
