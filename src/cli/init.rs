use crate::config::Config;
use dialoguer::{Confirm, theme::ColorfulTheme};
use owo_colors::OwoColorize;
use std::error::Error;

pub fn handle_init() -> Result<(), Box<dyn Error>> {
    if Config::exists()? {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Configuration already exists. Overwrite it with defaults?")
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Keeping existing configuration.");
            return Ok(());
        }
    }

    let config = Config::new();
    config.save()?;

    println!("{} gigtape initialized!", "✓".green().bold());
    println!(
        "Configuration saved to: {}",
        Config::config_path()?.display()
    );
    println!(
        "\nEdit templates with {} or {}",
        "gigtape config edit".cyan(),
        "gigtape config set <key> <value>".cyan()
    );

    Ok(())
}
