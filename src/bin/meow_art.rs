//! One-shot command line invocation of the image tool
//!
//! Usage:
//!   meow-art <prompt...>     generate an image and print the tool output
//!   meow-art --schema        print the tool identity and settings descriptor as JSON

use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, info};

use meow_art::core::Config;
use meow_art::features::settings::RawSettings;
use meow_art::features::tool::manifest;
use meow_art::{ImageGenerator, ImageTool};

fn load_settings(config: &Config) -> Result<RawSettings> {
    let mut settings = RawSettings::from_yaml_file(&config.settings_path)?;

    let key_is_blank = settings
        .api_key
        .as_deref()
        .map_or(true, |key| key.trim().is_empty());
    if key_is_blank {
        if let Some(key) = &config.openai_api_key {
            debug!("Using OPENAI_API_KEY from environment");
            settings.api_key = Some(key.clone());
        }
    }

    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--schema") {
        println!("{}", manifest().to_json()?);
        return Ok(());
    }

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: meow-art <prompt...> | --schema");
        std::process::exit(2);
    }

    let prompt = args.join(" ");
    let settings = load_settings(&config)?;
    info!("Loaded settings from {}", config.settings_path);

    let tool = ImageTool::new(ImageGenerator::openai(&config.openai_base_url));
    println!("{}", tool.invoke(&prompt, &settings).await);

    Ok(())
}
