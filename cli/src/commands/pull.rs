use actionhub_core::{ModelChoice, ModelFetcher, ModelHub};
use anyhow::Result;
use std::io::{self, Write};

use super::setup::{connect, fetch_and_report, SetupOutcome};

/// Same fetch and report as the interactive setup, with the model given up
/// front.
pub async fn execute(model: ModelChoice) -> Result<SetupOutcome> {
    let mut out = io::stdout().lock();
    run(connect, model, &mut out).await
}

pub async fn run<H, C, W>(connect: C, model: ModelChoice, out: &mut W) -> Result<SetupOutcome>
where
    H: ModelHub,
    C: FnOnce() -> Result<ModelFetcher<H>>,
    W: Write,
{
    writeln!(out, "Pulling model: {}", model)?;
    fetch_and_report(connect, model, out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::MockHub;

    #[tokio::test]
    async fn pull_fetches_named_model_and_prints_sample() {
        let hub = MockHub::default();
        let calls = hub.calls.clone();
        let mut out = Vec::new();

        let outcome = run(move || Ok(ModelFetcher::new(hub)), ModelChoice::I3D, &mut out)
            .await
            .expect("pull");

        assert_eq!(outcome, SetupOutcome::Completed);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["https://tfhub.dev/deepmind/i3d-kinetics-400/1".to_string()]
        );
        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.contains("Setup complete!"));
        assert_eq!(stdout.lines().filter(|l| l.starts_with("  - ")).count(), 10);
    }

    #[tokio::test]
    async fn pull_failure_exits_zero_without_sample() {
        let mut out = Vec::new();

        let outcome = run(
            || Ok(ModelFetcher::new(MockHub::failing("404 from hub"))),
            ModelChoice::MoViNetA0,
            &mut out,
        )
        .await
        .expect("pull");

        assert_eq!(outcome, SetupOutcome::FetchFailed);
        assert_eq!(outcome.exit_code(), 0);
        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.contains("Error downloading model: 404 from hub"));
        assert!(!stdout.contains("590+ more"));
    }
}
