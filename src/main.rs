use anyhow::{Context, Result};
use clap::Parser;
use phishscan::client::{ClientConfig, HttpScanClient, ScanClient, DEFAULT_BACKEND};
use phishscan::input::{detect_input, parse_batch, InputType};
use phishscan::output::{OutputFormat, TerminalLabel};
use phishscan::popup::{MemoryLabel, PopupController, StatusLabel, RES_EMAIL, RES_URL};
use phishscan::tab::{FixedTab, NoTab, TabSource};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phishscan")]
#[command(about = "Ask a phishing classification service about a URL or an email")]
struct Args {
    /// URL to scan, email text, or path to a file holding email text
    #[arg(required_unless_present_any = ["batch", "stdin"])]
    input: Option<String>,

    /// Treat INPUT as email text even if it looks like a URL or a path
    #[arg(long)]
    email: bool,

    /// Read email text from stdin
    #[arg(long, conflicts_with = "input")]
    stdin: bool,

    /// File with one URL per line, scanned concurrently
    #[arg(long, conflicts_with_all = ["input", "stdin"])]
    batch: Option<String>,

    /// Base URL of the classification service
    #[arg(long, env = "PHISHSCAN_BACKEND", default_value = DEFAULT_BACKEND)]
    backend: String,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print labels as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting");

    let mut config = ClientConfig::default().with_base_url(args.backend.clone());
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client: Arc<dyn ScanClient> = Arc::new(HttpScanClient::new(config)?);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Pretty
    };

    if let Some(ref batch) = args.batch {
        let contents = std::fs::read_to_string(batch)
            .with_context(|| format!("Failed to read batch file {}", batch))?;
        scan_batch(client, parse_batch(&contents), format).await;
        return Ok(());
    }

    let input = if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read email text from stdin")?;
        InputType::EmailText(text)
    } else {
        let raw = args.input.clone().unwrap_or_default();
        if args.email {
            InputType::EmailText(raw)
        } else {
            detect_input(&raw)
        }
    };

    match input {
        InputType::Url(url) => {
            let controller = controller(client, Arc::new(FixedTab::new(url)), format);
            controller.scan_active_tab_url().await;
        }
        InputType::EmailFile(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read email file {}", path.display()))?;
            scan_email(client, &text, format).await;
        }
        InputType::EmailText(text) => {
            scan_email(client, &text, format).await;
        }
    }

    Ok(())
}

fn controller(
    client: Arc<dyn ScanClient>,
    tabs: Arc<dyn TabSource>,
    format: OutputFormat,
) -> PopupController {
    PopupController::new(
        client,
        tabs,
        Arc::new(TerminalLabel::new(RES_URL).with_format(format)),
        Arc::new(TerminalLabel::new(RES_EMAIL).with_format(format)),
    )
}

async fn scan_email(client: Arc<dyn ScanClient>, text: &str, format: OutputFormat) {
    let controller = controller(client, Arc::new(NoTab), format);
    if controller.scan_email_text(text).await.is_none() {
        tracing::warn!("email text is empty, nothing was sent");
    }
}

async fn scan_batch(client: Arc<dyn ScanClient>, urls: Vec<String>, format: OutputFormat) {
    let controllers: Vec<PopupController> = urls
        .into_iter()
        .map(|url| {
            let label: Arc<dyn StatusLabel> =
                Arc::new(TerminalLabel::new(url.clone()).with_format(format).hide_pending());
            PopupController::new(
                Arc::clone(&client),
                Arc::new(FixedTab::new(url)),
                label,
                Arc::new(MemoryLabel::new(RES_EMAIL)),
            )
        })
        .collect();

    let scans = controllers.iter().map(|c| c.scan_active_tab_url());
    futures::future::join_all(scans).await;
}
