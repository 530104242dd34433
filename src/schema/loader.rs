use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::schema::requirement::Requirement;

// ============================================================================
// Requirement schema loading — the only fail-fast validation in the core
// ============================================================================

#[derive(Debug)]
pub enum SchemaError {
    /// The schema source could not be read or decoded as CSV
    Csv(csv::Error),

    /// A data row has an empty requirement name (zero-based row index)
    EmptyName { row: usize },

    /// A data row repeats an earlier name, case-insensitively. `row` is
    /// the offending later occurrence.
    DuplicateName { row: usize, name: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Csv(source) => {
                write!(f, "Failed to read requirement schema: {}", source)
            }
            SchemaError::EmptyName { row } => {
                write!(f, "Requirement schema row {} has an empty name", row)
            }
            SchemaError::DuplicateName { row, name } => {
                write!(f, "Requirement schema row {} repeats the name '{}'", row, name)
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Csv(source) => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for SchemaError {
    fn from(source: csv::Error) -> Self {
        SchemaError::Csv(source)
    }
}

/// Raw CSV row: `name,type,required,editable,notes`.
#[derive(Debug, Deserialize)]
struct SchemaRow {
    name: String,

    #[serde(rename = "type", default)]
    value_type: String,

    #[serde(default)]
    required: String,

    #[serde(default)]
    editable: String,

    #[serde(default)]
    notes: String,
}

/// Load requirements from a CSV file, preserving row order.
pub fn load_requirements(path: &Path) -> Result<Vec<Requirement>, SchemaError> {
    let reader = csv::Reader::from_path(path)?;
    collect_requirements(reader)
}

/// Parse requirements from any CSV source, preserving row order.
///
/// Fails with [`SchemaError`] naming the zero-based data row when a name
/// is empty or duplicates an earlier one (case-insensitive).
pub fn parse_requirements<R: Read>(source: R) -> Result<Vec<Requirement>, SchemaError> {
    collect_requirements(csv::Reader::from_reader(source))
}

fn collect_requirements<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Requirement>, SchemaError> {
    let mut requirements = Vec::new();
    // lower-cased name → first row it appeared on
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (row, record) in reader.deserialize::<SchemaRow>().enumerate() {
        let record = record?;
        let name = record.name.trim().to_string();

        if name.is_empty() {
            return Err(SchemaError::EmptyName { row });
        }
        if seen.insert(name.to_lowercase(), row).is_some() {
            return Err(SchemaError::DuplicateName { row, name });
        }

        requirements.push(Requirement {
            name,
            value_type: record.value_type.trim().to_string(),
            required_for_build: truthy(&record.required),
            editable_after_start: truthy(&record.editable),
            notes: record.notes.trim().to_string(),
        });
    }

    Ok(requirements)
}

/// The source spreadsheets say Yes/No; accept the usual spellings.
fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}
