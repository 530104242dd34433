use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::field::extractor::{Extraction, extract_fields};
use crate::field::field_model::Field;

// ============================================================================
// Page inventory — one extraction pass packaged for reporting
// ============================================================================

/// Field inventory of a single already-fetched page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInventory {
    /// Where the markup came from, when the caller knows.
    pub url: Option<String>,

    /// Document `<title>` text, empty when absent.
    pub title: String,

    /// SHA-1 of the raw markup. Identifies re-audits of identical pages.
    pub fingerprint: String,

    /// Fields in document order.
    pub fields: Vec<Field>,

    /// Interactive-looking elements that were skipped during extraction.
    pub skipped_count: usize,
}

/// Parse raw markup and build its inventory. Never fails: malformed
/// markup degrades to whatever fields the parser can still see.
pub fn build_inventory(html: &str, url: Option<&str>) -> PageInventory {
    let document = Html::parse_document(html);
    let title_sel = Selector::parse("title").unwrap();

    let title = document
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let Extraction {
        fields,
        skipped_count,
    } = extract_fields(&document);

    PageInventory {
        url: url.map(str::to_string),
        title,
        fingerprint: page_fingerprint(html),
        fields,
        skipped_count,
    }
}

pub fn page_fingerprint(html: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}
