use crate::config::Config;
use crate::performance;
use owo_colors::OwoColorize;
use std::error::Error;

pub fn handle_show(manifest_paths: &[String]) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let combined = super::load_combined(manifest_paths)?;

    let defaults = config.baseline_attributes().overlay(&combined.defaults);
    let mut performances = performance::resolve_all(&defaults, &combined.performances);

    if performances.is_empty() && combined.problems.is_empty() {
        println!("No performances found in the given manifests.");
        return Ok(());
    }

    for (index, p) in performances.iter_mut().enumerate() {
        if index > 0 {
            println!();
        }
        let text = p.verbose();
        let mut lines = text.lines();
        if let Some(header) = lines.next() {
            println!("{}", header.cyan().bold());
        }
        for line in lines {
            println!("{line}");
        }
    }

    if !combined.problems.is_empty() {
        println!();
        for problem in &combined.problems {
            eprintln!("{} {problem}", "PROBLEM:".red().bold());
        }
        return Err(
            format!("{} manifest entries could not be read", combined.problems.len()).into(),
        );
    }

    Ok(())
}
