use std::sync::Arc;

use clap::{Parser, Subcommand};
use env_logger::Env;

use herald::cmd::config::{self as config_cmd, ConfigArgs};
use herald::cmd::generate::{self, GenerateArgs};
use herald::config::AppConfig;
use herald::context::AppContext;
use herald::domain::GenerationOutcome;
use herald::error::AppResult;
use herald::infra::GroqClient;

#[derive(Parser)]
#[command(
    name = "herald",
    author,
    version,
    about = "Release announcement drafting CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a release announcement from ticket notes.
    Generate(GenerateArgs),
    /// Print the prompt that would be sent, without calling the API.
    Preview(GenerateArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let dotenv_path = std::env::var("HERALD_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    match dotenv_result {
        Ok(()) => log::info!("loaded env from {dotenv_path}"),
        Err(err) => log::debug!("no env loaded from {dotenv_path}: {err}"),
    }

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Preview(args) => {
            let prompt = generate::preview(args)?;
            println!("{prompt}");
            Ok(())
        }
        Commands::Generate(args) => run_generate(args).await,
    }
}

async fn run_generate(args: GenerateArgs) -> AppResult<()> {
    let config = AppConfig::load()?;

    if config.api_key.is_none() {
        eprintln!("Warning: Groq API key not configured; generation will fail.");
    }

    let generator = Arc::new(GroqClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.api_base_url.clone(),
    ));
    let context = AppContext::new(config, generator);

    match generate::run(&context, args).await? {
        GenerationOutcome::Message(message) => {
            println!("{message}");
            eprintln!();
            eprintln!(
                "Tip: review the generated message and edit as needed before sharing. \
                 Add CC mentions at the end."
            );
            Ok(())
        }
        GenerationOutcome::Failed(reason) => {
            eprintln!("{reason}");
            std::process::exit(1);
        }
    }
}
