use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "field-scout",
    version,
    about = "Form field inventory and requirement gap auditing for tournament sites"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: field-scout.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump the field inventory of saved page sources
    Extract {
        /// HTML file or directory of HTML files
        #[arg(long)]
        page: String,

        /// URL the markup was fetched from (recorded in the inventory)
        #[arg(long)]
        url: Option<String>,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Audit a page against a requirement schema
    Audit {
        /// HTML file to audit
        #[arg(long)]
        page: String,

        /// Requirement schema CSV (name,type,required,editable,notes)
        #[arg(long)]
        schema: String,

        /// YAML synonym overrides (canonical name -> token list)
        #[arg(long)]
        synonyms: Option<String>,

        /// URL the markup was fetched from
        #[arg(long)]
        url: Option<String>,

        /// Output format: console, json, markdown (default: console)
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSONL audit trace to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Probe a site for API-like endpoints
    Probe {
        /// Base URL, e.g. https://fargorate.com
        #[arg(long)]
        base_url: String,

        /// File listing endpoint paths, one per line (default: built-in list)
        #[arg(long)]
        endpoints: Option<String>,

        /// Delay between requests in milliseconds (default: 1000)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output file path for the JSON report (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `field-scout.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_console")]
    pub format: String,

    /// Synonym override file applied to every audit.
    pub synonyms: Option<String>,

    /// Trace file written by every audit.
    pub trace: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            synonyms: None,
            trace: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_delay")]
    pub delay_ms: u64,

    /// Endpoint list file used when the CLI gives none.
    pub endpoints: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            endpoints: None,
        }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_delay() -> u64 { 1000 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("field-scout.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
