use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Synonym table — matching policy as swappable data, not code
// ============================================================================

/// Maps a canonical requirement name to the alternative tokens a page may
/// use for it. Keys and tokens are held lower-cased; matching is driven
/// entirely by this table, so callers can replace or extend the policy
/// without touching the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Empty table: every requirement falls back to its own name.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse a YAML mapping of canonical name → token list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let raw: HashMap<String, Vec<String>> = serde_yaml::from_str(yaml)?;
        let mut table = Self::empty();
        for (name, tokens) in raw {
            table.insert(&name, &tokens.iter().map(String::as_str).collect::<Vec<_>>());
        }
        Ok(table)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, name: &str, tokens: &[&str]) {
        self.entries.insert(
            name.trim().to_lowercase(),
            tokens.iter().map(|t| t.trim().to_lowercase()).collect(),
        );
    }

    /// Overlay another table onto this one. Entries in `other` replace
    /// same-named entries wholesale.
    pub fn extend(&mut self, other: SynonymTable) {
        self.entries.extend(other.entries);
    }

    /// Lookup set for a requirement name: the table entry when present,
    /// else the lower-cased name itself.
    pub fn tokens_for(&self, name: &str) -> Vec<String> {
        let key = name.trim().to_lowercase();
        match self.entries.get(&key) {
            Some(tokens) => tokens.clone(),
            None => vec![key],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in vocabulary for tournament-builder pages.
impl Default for SynonymTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("name", &["name", "title", "tournament_name"]);
        table.insert("description", &["description", "desc"]);
        table.insert(
            "start date & time",
            &["start_date", "start_time", "date", "start"],
        );
        table.insert("end date & time", &["end_date", "end_time", "finish"]);
        table.insert("venue", &["venue", "location"]);
        table.insert("player type", &["player_type", "format", "type"]);
        table.insert("game type", &["game_type", "game", "discipline"]);
        table.insert("tournament type", &["tournament_type", "type"]);
        table.insert("race", &["race", "race_to"]);
        table.insert("entry fee", &["entry_fee", "fee", "cost"]);
        table.insert("bracket ordering", &["seeding", "seed", "order"]);
        table
    }
}
