use std::env;
use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{API_KEY_ENV, StoredConfig, config_file_path};
use crate::error::AppResult;
use crate::infra::groq::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring herald.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!("The API key is stored in the local config file; protect your filesystem accordingly.");
    println!();

    apply_prompt(
        "Groq API key (free keys at https://console.groq.com)",
        &mut cfg.groq_api_key,
        true,
    )?;
    apply_prompt(
        &format!("Groq model (default: {DEFAULT_MODEL})"),
        &mut cfg.groq_model,
        false,
    )?;
    apply_prompt(
        &format!("API base URL (default: {DEFAULT_BASE_URL})"),
        &mut cfg.api_base_url,
        false,
    )?;

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Groq API key: {}", mask_secret(&cfg.groq_api_key));
    println!(
        "Groq model: {}",
        display_value(&cfg.groq_model, DEFAULT_MODEL)
    );
    println!(
        "API base URL: {}",
        display_value(&cfg.api_base_url, DEFAULT_BASE_URL)
    );
    if env::var(API_KEY_ENV).is_ok_and(|key| !key.trim().is_empty()) {
        println!("Note: {API_KEY_ENV} is set and overrides the stored key.");
    }

    Ok(())
}

fn apply_prompt(field: &str, target: &mut Option<String>, secret: bool) -> AppResult<()> {
    match prompt(field, target.as_deref(), secret)? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn prompt(field: &str, current: Option<&str>, secret: bool) -> AppResult<PromptAction> {
    let mut stdout = io::stdout();

    match (current, secret) {
        (Some(_), true) => write!(stdout, "{field} [****] (Enter to keep, '-' to clear): ")?,
        (Some(value), false) => {
            write!(stdout, "{field} [{value}] (Enter to keep, '-' to clear): ")?
        }
        (None, _) => write!(stdout, "{field} (Enter to skip): ")?,
    }
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("<not set, using {default}>"))
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(key) if key.len() > 6 => {
            let prefix = &key[..3];
            let suffix = &key[key.len() - 3..];
            format!("{prefix}***{suffix}")
        }
        Some(key) if !key.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
