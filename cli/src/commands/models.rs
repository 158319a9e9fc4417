use actionhub_core::{Config, ModelChoice, TfHubClient};
use anyhow::Result;

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let hub = TfHubClient::new(&config.hub)?;

    println!(
        "{:<4} {:<8} {:<12} {:<14} {:<7} {}",
        "KEY", "NAME", "MODEL", "DATASET", "CACHED", "URL"
    );
    println!("{}", "-".repeat(110));

    for choice in ModelChoice::ALL {
        let cached = if hub.is_cached(choice.url()) { "yes" } else { "no" };
        println!(
            "{:<4} {:<8} {:<12} {:<14} {:<7} {}",
            choice.menu_key(),
            choice.cli_name(),
            choice.display_name(),
            choice.dataset(),
            cached,
            choice.url()
        );
    }

    println!("\nCache directory: {}", hub.cache_dir().display());
    println!("Run `actionhub pull <name>` to download a model.");

    Ok(())
}
