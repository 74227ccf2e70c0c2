use crate::config::Config;
use std::error::Error;
use std::process::Command;

pub fn handle_config_view() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    println!("Current gigtape configuration:");
    println!("  default_genre: {}", config.default_genre);
    println!("  default_resolution: {}", config.default_resolution);
    println!("  default_bitrate: {}", config.default_bitrate);
    println!("  default_recording: {}", config.default_recording);
    println!("  long_title: {}", config.long_title);
    println!("  output_dirpath: {}", config.output_dirpath);
    println!("  video_filename: {}", config.video_filename);
    println!("  audio_filename: {}", config.audio_filename);

    Ok(())
}

pub fn handle_config_set(key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;

    config.set_value(key, value)?;
    config.save()?;

    println!("Configuration updated: {key} = {value}");

    Ok(())
}

pub fn handle_config_edit() -> Result<(), Box<dyn Error>> {
    // Ensure config exists
    if !Config::exists()? {
        return Err("gigtape is not initialized. Run 'gigtape init' first.".into());
    }

    let config_path = Config::config_path()?;
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!("Opening {} in {}", config_path.display(), editor);

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                format!("Editor '{editor}' not found. Set $EDITOR to a valid editor path.")
            } else {
                format!("Failed to launch editor '{editor}': {e}")
            }
        })?;

    if !status.success() {
        return Err(format!("Editor '{editor}' exited with error").into());
    }

    // Validate the config after editing
    match Config::load() {
        Ok(_) => println!("Configuration saved successfully"),
        Err(e) => {
            return Err(format!("Configuration validation failed: {e}").into());
        }
    }

    Ok(())
}
