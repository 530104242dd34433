use std::path::{Path, PathBuf};

use crate::field::inventory::{PageInventory, build_inventory};
use crate::matching::synonyms::SynonymTable;
use crate::probe::prober::{DEFAULT_ENDPOINTS, parse_endpoint_list, probe_endpoints};
use crate::report::console::{format_console_report, format_inventory};
use crate::report::markdown::generate_markdown_report;
use crate::schema::loader::load_requirements;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::AuditEvent;

// ============================================================================
// extract subcommand
// ============================================================================

pub fn cmd_extract(
    page: &str,
    url: Option<&str>,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(page)?;

    if pages.is_empty() {
        eprintln!("No HTML files found at: {}", page);
        return Ok(());
    }

    if verbose > 0 {
        eprintln!("Extracting fields from {} page(s)...", pages.len());
    }

    // A caller-supplied URL only makes sense for a single page
    let url = if pages.len() == 1 { url } else { None };

    let inventories: Vec<PageInventory> = pages
        .iter()
        .map(|(path, html)| {
            if verbose > 0 {
                eprintln!("  Parsing: {}", path.display());
            }
            build_inventory(html, url)
        })
        .collect();

    let output_content = match format {
        "json" => {
            if inventories.len() == 1 {
                serde_json::to_string_pretty(&inventories[0])?
            } else {
                serde_json::to_string_pretty(&inventories)?
            }
        }
        _ => inventories
            .iter()
            .map(format_inventory)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    write_or_print(output, &output_content)?;
    Ok(())
}

// ============================================================================
// audit subcommand
// ============================================================================

/// Run a full extract → match → gap-report pass. Returns whether every
/// required-for-build requirement found a field.
pub fn cmd_audit(
    page: &str,
    schema: &str,
    synonyms: Option<&str>,
    url: Option<&str>,
    format: &str,
    output: Option<&str>,
    trace: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let requirements = load_requirements(Path::new(schema))?;
    let table = build_synonyms(synonyms)?;

    if verbose > 0 {
        eprintln!(
            "Auditing {} against {} requirements ({} synonym entries)...",
            page,
            requirements.len(),
            table.len()
        );
    }

    let html = std::fs::read_to_string(page)?;

    let tracer = match trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let (inventory, report) = crate::audit_document(&html, url, &requirements, &table);

    tracer.log(&AuditEvent::PageParsed {
        url: inventory.url.clone(),
        title: inventory.title.clone(),
        fingerprint: inventory.fingerprint.clone(),
        fields: inventory.fields.len(),
        skipped: inventory.skipped_count,
    });
    for result in report.matched.values() {
        if let Some(ref field) = result.matched_field {
            tracer.log(&AuditEvent::RequirementMatched {
                requirement: result.requirement_name.clone(),
                field: field.identifier.clone(),
                confidence: result.confidence,
            });
        }
    }
    for requirement in &report.missing {
        tracer.log(&AuditEvent::RequirementMissing {
            requirement: requirement.name.clone(),
        });
    }

    let output_content = match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "inventory": inventory,
            "report": report,
        }))?,
        "markdown" => generate_markdown_report(&inventory, &report),
        _ => format_console_report(&inventory, &report),
    };

    write_or_print(output, &output_content)?;
    Ok(report.build_ready())
}

/// Built-in synonym table, overlaid with an optional YAML override file.
pub fn build_synonyms(path: Option<&str>) -> Result<SynonymTable, Box<dyn std::error::Error>> {
    let mut table = SynonymTable::default();
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)?;
        table.extend(SynonymTable::from_yaml_str(&content)?);
    }
    Ok(table)
}

// ============================================================================
// probe subcommand
// ============================================================================

pub fn cmd_probe(
    base_url: &str,
    endpoints_file: Option<&str>,
    delay_ms: u64,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let endpoints: Vec<String> = match endpoints_file {
        Some(path) => parse_endpoint_list(&std::fs::read_to_string(path)?),
        None => DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    };

    if verbose > 0 {
        eprintln!("Probing {} endpoints at {}...", endpoints.len(), base_url);
    }

    let report = probe_endpoints(base_url, &endpoints, delay_ms);

    if verbose > 0 {
        for probe in &report.probes {
            match probe.status {
                Some(status) => eprintln!("  {} -> {}", probe.path, status),
                None => eprintln!(
                    "  {} -> error: {}",
                    probe.path,
                    probe.error.as_deref().unwrap_or("unknown")
                ),
            }
        }
    }

    let content = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => {
            std::fs::write(path, &content)?;
            println!(
                "Probed {} endpoints: {} reachable, {} JSON (report written to {})",
                report.probes.len(),
                report.reachable_count(),
                report.json_endpoints().len(),
                path
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a single HTML file, or every `.html`/`.htm` file in a directory
/// (sorted by path for deterministic order).
pub fn load_pages(path: &str) -> Result<Vec<(PathBuf, String)>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut pages = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let p = entry.path();
            if p.extension().map_or(false, |e| e == "html" || e == "htm") {
                let content = std::fs::read_to_string(&p)?;
                pages.push((p, content));
            }
        }
        pages.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(pages)
    } else {
        let content = std::fs::read_to_string(path)?;
        Ok(vec![(PathBuf::from(path), content)])
    }
}

fn write_or_print(output: Option<&str>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
