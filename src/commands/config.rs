//! Config subcommands handler

use anyhow::{Context, Result};

use eduaudio::theme::current_theme;
use eduaudio::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("Editor '{}' exited with {}", editor, status);
    }

    // Validate the edited file
    let config = Config::load_from(&config_path)?;
    config.playback_rate()?;
    println!("{}", theme.success_text("Config is valid."));
    Ok(())
}
