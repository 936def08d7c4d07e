use std::fs::File;

use anyhow::{Context, Result};
use teller_sim::bin_utils::Service;
use teller_sim::terminal::TerminalError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a session script as the first argument")?;
    let session_kind = args.next().unwrap_or_else(|| "standard".to_owned());
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        session_kind,
        error_printer: Box::new(|line, err| {
            match err {
                TerminalError::Handler(_) => {
                    // refusals were already narrated on the terminal output
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    service.run()
}
