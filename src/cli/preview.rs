use crate::config::Config;
use crate::performance;
use crate::utils::progress::create_progress_bar;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::error::Error;

pub fn handle_preview(manifest_paths: &[String]) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let combined = super::load_combined(manifest_paths)?;

    let defaults = config.baseline_attributes().overlay(&combined.defaults);
    let mut performances = performance::resolve_all(&defaults, &combined.performances);

    if performances.is_empty() && combined.problems.is_empty() {
        println!("No performances found in the given manifests.");
        return Ok(());
    }

    // Render output names, grouped by directory. A performance whose
    // templates fail is left out of the tree; the failure shows up in the
    // problem report below instead.
    let mut tree: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let pb = create_progress_bar(performances.len() as u64);
    pb.set_message("rendering output names");
    for p in performances.iter_mut() {
        if let (Ok(dir), Ok(video), Ok(audio)) =
            (p.output_dirpath(), p.video_filename(), p.audio_filename())
        {
            let files = tree.entry(dir).or_default();
            files.push(video);
            files.push(audio);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if !tree.is_empty() {
        println!("{}", "Proposed output tree:".yellow().bold());
        for (dir, files) in &tree {
            println!("{}", dir.blue().bold());
            for (index, file) in files.iter().enumerate() {
                let connector = if index == files.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                println!("{}{file}", connector.bright_black());
            }
        }
    }

    let mut problems = combined.problems.clone();
    for p in &performances {
        let label = p.to_string();
        for problem in p.problems() {
            problems.push(format!("{problem} in \"{label}\""));
        }
    }

    if !problems.is_empty() {
        println!();
        for problem in &problems {
            eprintln!("{} {problem}", "PROBLEM:".red().bold());
        }
        return Err(format!("preview found {} problem(s)", problems.len()).into());
    }

    println!(
        "\n{} {} performance(s) ready to organize",
        "✓".green().bold(),
        performances.len()
    );

    Ok(())
}
