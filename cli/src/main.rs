use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use qrgen_cli::cli::{Cli, Commands};
use qrgen_cli::commands::{generate_completions, report_outcome, run_copy, run_download, run_url};
use qrgen_cli::input::{RealStdinReader, resolve_payload};
use qrgen_cli::output::Output;
use qrgen_cli::timing;
use qrgen_clipboard::SystemClipboard;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = cli.config();
    let payload = resolve_payload(cli.request.text.clone(), &mut RealStdinReader::new())
        .context("Failed to read payload from stdin")?;
    let request = cli.request.to_request(payload);
    info!(endpoint = %config.qr_service_url, "QR request ready");

    match cli.command {
        Commands::Url => {
            let url = run_url(&config, &request)?;
            Output::new().print(url);
            Ok(())
        }
        Commands::Download { .. } => {
            let outcome = run_download(&config, &request).await;
            let out = Output::new();
            report_outcome(&out, &outcome)?;
            if let Ok(qrgen_business::ActionReport::Downloaded(saved)) = &outcome.result
                && let Some(location) = &saved.location
            {
                out.info(format!("Saved to {}", location.display()));
            }
            Ok(())
        }
        Commands::Copy { hold } => {
            let clipboard = if hold == 0 {
                SystemClipboard::new()
            } else {
                SystemClipboard::holding(Duration::from_secs(hold))
            };
            if let Some(hold) = clipboard.hold()
                && !request.payload.trim().is_empty()
            {
                Output::stderr().info(format!(
                    "Holding the clipboard for up to {}s so the URL can be pasted",
                    hold.as_secs()
                ));
            }
            let outcome = run_copy(&config, &request, &clipboard).await;
            report_outcome(&Output::new(), &outcome)
        }
        Commands::Completions { .. } => Ok(()),
    }
}
