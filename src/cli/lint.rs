use crate::config::Config;
use crate::manifest::Manifest;
use crate::performance;
use crate::utils::progress::create_progress_spinner;
use crate::utils::validation::validate_manifest_path;
use rayon::prelude::*;
use std::error::Error;
use std::path::PathBuf;

pub fn handle_lint(manifest_paths: &[String]) -> Result<(), Box<dyn Error>> {
    println!("Linting {} manifest file(s)", manifest_paths.len());
    println!();

    let mut file_errors: Vec<(PathBuf, String)> = Vec::new();
    let mut manifests = Vec::new();

    let spinner = create_progress_spinner();
    for raw in manifest_paths {
        let path = PathBuf::from(shellexpand::tilde(raw).to_string());
        spinner.set_message(format!("parsing {}", path.display()));
        spinner.tick();

        if let Err(e) = validate_manifest_path(&path) {
            file_errors.push((path, e.to_string()));
            continue;
        }
        match Manifest::load(&path) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => file_errors.push((path, e.to_string())),
        }
    }
    spinner.finish_and_clear();

    let combined = Manifest::combine(manifests);
    let config = Config::load()?;
    let defaults = config.baseline_attributes().overlay(&combined.defaults);
    let performances = performance::resolve_all(&defaults, &combined.performances);

    // Every performance owns its merged attribute copy; the shared defaults
    // are read-only. Checking them in parallel needs no locking.
    let results: Vec<(String, Vec<String>)> = performances
        .par_iter()
        .map(|p| (p.to_string(), p.problems()))
        .collect();

    let total = results.len();
    let invalid: Vec<&(String, Vec<String>)> =
        results.iter().filter(|(_, problems)| !problems.is_empty()).collect();

    if !file_errors.is_empty() {
        println!("❌ Found {} manifest file error(s):\n", file_errors.len());
        for (path, error) in &file_errors {
            println!("  {}", path.display());
            println!("    Error: {error}\n");
        }
    }

    if !combined.problems.is_empty() {
        println!("❌ Found {} unreadable manifest entries:\n", combined.problems.len());
        for problem in &combined.problems {
            println!("  {problem}");
        }
        println!();
    }

    if !invalid.is_empty() {
        println!("❌ Found {} performance(s) with problems:\n", invalid.len());
        for (label, problems) in &invalid {
            println!("  {label}");
            for problem in problems {
                println!("    {problem}");
            }
            println!();
        }
    }

    println!("Summary:");
    println!("  Manifest files: {}", manifest_paths.len());
    println!("  Total performances: {total}");
    println!("  ✓ Valid: {}", total - invalid.len());
    if !invalid.is_empty() {
        println!("  ✗ Invalid: {}", invalid.len());
    }

    if !file_errors.is_empty() || !combined.problems.is_empty() || !invalid.is_empty() {
        Err("Lint check failed: invalid manifest metadata found".into())
    } else {
        println!("\n✓ All manifest metadata is valid!");
        Ok(())
    }
}
