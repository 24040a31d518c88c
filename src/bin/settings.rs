//! Interactive settings editor
//!
//! Walks through every field of the settings descriptor, validates the
//! result and writes it to the settings YAML file.
//!
//! Usage: cargo run --features scaffold --bin meow-art-settings

use anyhow::Result;
use dialoguer::{Confirm, Password, Select};
use dotenvy::dotenv;
use std::path::Path;

use meow_art::core::Config;
use meow_art::features::settings::{describe, validate, RawSettings};

fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    println!("MeowArt Settings");
    println!("================\n");

    // A corrupt file is replaced rather than blocking the editor
    let current = RawSettings::from_yaml_file_or_default(&config.settings_path);
    let schema = describe();
    let mut edited = RawSettings::default();

    for field in &schema.fields {
        println!("{}: {}", field.title, field.description);

        if field.secret {
            let value = Password::new()
                .with_prompt(format!("{} (leave empty to keep current)", field.title))
                .allow_empty_password(true)
                .interact()?;
            let value = if value.is_empty() {
                current.get(field.key).unwrap_or(field.default).to_string()
            } else {
                value
            };
            edited.set(field.key, value);
            continue;
        }

        let selected = current.get(field.key).unwrap_or(field.default);
        let default_index = field
            .allowed_values
            .iter()
            .position(|v| *v == selected)
            .unwrap_or(0);

        let index = Select::new()
            .with_prompt(field.title)
            .items(&field.allowed_values)
            .default(default_index)
            .interact()?;
        edited.set(field.key, field.allowed_values[index].to_string());
    }

    // Reject incompatible combinations before anything is written
    let validated = match validate(&edited) {
        Ok(validated) => validated,
        Err(e) => {
            eprintln!("\nSettings not saved: {e}");
            std::process::exit(1);
        }
    };

    println!("\nValidation passed:");
    println!("  Model: {}", validated.model().as_str());
    println!("  Size: {}", validated.image_size().as_str());
    if validated.model().supports_quality_and_style() {
        println!("  Quality: {}", validated.quality().as_str());
        println!("  Style: {}", validated.style().as_str());
    }
    if !validated.has_api_key() {
        println!("  Warning: no API key set, image generation will not work yet");
    }

    if Path::new(&config.settings_path).exists()
        && !Confirm::new()
            .with_prompt(format!("Overwrite {}?", config.settings_path))
            .default(true)
            .interact()?
    {
        println!("Aborted.");
        return Ok(());
    }

    std::fs::write(&config.settings_path, edited.to_yaml()?)?;
    println!("\nSaved: {}", config.settings_path);
    Ok(())
}
