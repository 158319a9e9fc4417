//! Interactive model setup: menu on stderr, results on stdout.

use actionhub_core::labels::{sample_labels, REMAINING_ACTIONS_NOTE};
use actionhub_core::{Config, ModelChoice, ModelFetcher, ModelHub, TfHubClient};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Model fetched and sample printed
    Completed,
    /// Hub load failed; diagnostic printed
    FetchFailed,
    /// Menu input was not a known choice; nothing fetched
    InvalidChoice,
}

impl SetupOutcome {
    /// A failed fetch still exits 0; only a bad menu choice is an error exit.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupOutcome::Completed | SetupOutcome::FetchFailed => 0,
            SetupOutcome::InvalidChoice => 1,
        }
    }
}

pub async fn execute() -> Result<SetupOutcome> {
    let mut input = io::stdin().lock();
    let mut prompt = io::stderr();
    let mut out = io::stdout().lock();
    run(connect, &mut input, &mut prompt, &mut out).await
}

/// Build the production fetcher from the user's config.
pub fn connect() -> Result<ModelFetcher<TfHubClient>> {
    let config = Config::load()?;
    Ok(ModelFetcher::new(TfHubClient::new(&config.hub)?))
}

/// `connect` only runs once a valid choice has been read, so a broken config
/// is reported like any other failed fetch.
pub async fn run<H, C, R, P, W>(
    connect: C,
    input: &mut R,
    prompt: &mut P,
    out: &mut W,
) -> Result<SetupOutcome>
where
    H: ModelHub,
    C: FnOnce() -> Result<ModelFetcher<H>>,
    R: BufRead,
    P: Write,
    W: Write,
{
    print_menu(prompt)?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let Some(choice) = ModelChoice::from_menu_input(&line) else {
        debug!(input = line.trim(), "rejected menu input");
        writeln!(out, "Invalid choice")?;
        return Ok(SetupOutcome::InvalidChoice);
    };

    fetch_and_report(connect, choice, out).await
}

pub async fn fetch_and_report<H, C, W>(
    connect: C,
    choice: ModelChoice,
    out: &mut W,
) -> Result<SetupOutcome>
where
    H: ModelHub,
    C: FnOnce() -> Result<ModelFetcher<H>>,
    W: Write,
{
    let fetcher = match connect() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            warn!(error = %e, "could not set up hub client");
            writeln!(out, "Error downloading model: {:#}", e)?;
            return Ok(SetupOutcome::FetchFailed);
        }
    };

    match fetcher.resolve_and_load(choice, out).await {
        Ok(handle) => {
            debug!(
                path = %handle.path.display(),
                size_bytes = handle.size_bytes,
                from_cache = handle.from_cache,
                "model ready"
            );
            print_sample(out)?;
            Ok(SetupOutcome::Completed)
        }
        Err(e) => {
            writeln!(out, "Error downloading model: {}", e)?;
            Ok(SetupOutcome::FetchFailed)
        }
    }
}

fn print_menu<P: Write>(prompt: &mut P) -> io::Result<()> {
    writeln!(prompt, "{}", "=".repeat(60))?;
    writeln!(prompt, "Pre-trained Action Recognition Model Downloader")?;
    writeln!(prompt, "{}", "=".repeat(60))?;
    writeln!(prompt)?;
    writeln!(prompt, "Available models:")?;
    for choice in ModelChoice::ALL {
        writeln!(
            prompt,
            "{}. {} - {}",
            choice.menu_key(),
            choice.display_name(),
            choice.description()
        )?;
    }
    write!(prompt, "\nSelect model (1 or 2): ")?;
    prompt.flush()
}

fn print_sample<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n✓ Setup complete!")?;
    writeln!(out, "\nSample actions the model can recognize:")?;
    for action in sample_labels() {
        writeln!(out, "  - {}", action)?;
    }
    writeln!(out, "  {}", REMAINING_ACTIONS_NOTE)
}
