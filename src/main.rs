use clap::Parser;
use tracing::info;

use service_triage::cli::Cli;
use service_triage::io::{read_messages, write_outputs};
use service_triage::pipeline::MessageProcessor;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // File-backed log sink. The guard must live until the end of main so
    // buffered events are flushed.
    if let Some(parent) = cli.log.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log)?;
    let (writer, _guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let messages = match read_messages(&cli.source) {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = MessageProcessor::new().process(&messages);

    if let Err(e) = write_outputs(&cli.outdir, &outcome) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("--- Summary ---");
    println!("total messages: {}", messages.len());
    println!("inspections created: {}", outcome.inspections.len());
    println!("incident reports created: {}", outcome.incident_reports.len());
    println!("unprocessable messages: {}", outcome.unprocessable.len());
    println!("Output written to: {}", cli.outdir.display());
    println!("Log written to: {}", cli.log.display());

    info!(
        total_messages = messages.len(),
        inspections_created = outcome.inspections.len(),
        incident_reports_created = outcome.incident_reports.len(),
        unprocessable_messages = outcome.unprocessable.len(),
        "Summary"
    );

    Ok(())
}
