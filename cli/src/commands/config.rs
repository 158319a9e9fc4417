use actionhub_core::Config;
use anyhow::Result;

pub fn execute(key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;

    match (key, value) {
        // Show all config
        (None, None) => {
            println!("Configuration file: {:?}\n", Config::config_path()?);
            println!("[hub]");
            println!(
                "  cache_dir = {}",
                config
                    .hub
                    .cache_dir
                    .as_ref()
                    .map(|p| format!("{:?}", p.display().to_string()))
                    .unwrap_or_else(|| format!(
                        "(default: {})",
                        Config::default_cache_dir().display()
                    ))
            );
            println!(
                "  timeout_secs = {}",
                config
                    .hub
                    .timeout_secs
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "(client default)".to_string())
            );
            println!("  user_agent = \"{}\"", config.hub.user_agent);
            println!("  show_progress = {}", config.hub.show_progress);
        }

        // Get a specific key
        (Some(key), None) => {
            println!("{}", config.get(key)?);
        }

        // Set a specific key
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("Set {} = {}", key, value);
        }

        (None, Some(_)) => anyhow::bail!("A config key is required when setting a value"),
    }

    Ok(())
}
