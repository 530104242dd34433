use clap::Parser;
use field_scout::cli::commands::{cmd_audit, cmd_extract, cmd_probe};
use field_scout::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Extract {
            page,
            url,
            format,
            output,
        } => {
            cmd_extract(
                &page,
                url.as_deref(),
                &format,
                output.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Audit {
            page,
            schema,
            synonyms,
            url,
            format,
            output,
            trace,
        } => {
            // Resolve per-run settings: CLI > config > defaults
            let synonyms = synonyms.or(config.audit.synonyms.clone());
            let trace = trace.or(config.audit.trace.clone());
            let format = format.unwrap_or_else(|| config.audit.format.clone());

            let build_ready = cmd_audit(
                &page,
                &schema,
                synonyms.as_deref(),
                url.as_deref(),
                &format,
                output.as_deref(),
                trace.as_deref(),
                cli.verbose,
            )?;
            if !build_ready {
                std::process::exit(1);
            }
        }
        Commands::Probe {
            base_url,
            endpoints,
            delay_ms,
            output,
        } => {
            let endpoints = endpoints.or(config.probe.endpoints.clone());
            let delay_ms = delay_ms.unwrap_or(config.probe.delay_ms);
            cmd_probe(
                &base_url,
                endpoints.as_deref(),
                delay_ms,
                output.as_deref(),
                cli.verbose,
            )?;
        }
    }

    Ok(())
}
