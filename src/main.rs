use anyhow::Result;
use clap::Parser;
use trigram_scan::{cli::Cli, json_output, trigram};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Reject a negative --max before touching the filesystem
    let max_count = args.validate_max()?;

    init_tracing(args.debug);

    let records = trigram::run(&args.file, max_count)?;
    json_output::write_records(&args.output, &records)?;

    println!(
        "Wrote {} trigrams to {}",
        records.len(),
        args.output.display()
    );

    Ok(())
}
