use std::path::Path;

use colored::Colorize;
use serde_yaml::Mapping;

/// Sections only present when their legacy source was.
const OPTIONAL_SECTIONS: [&str; 5] = [
    "postgres",
    "imageRegistry",
    "imageBuildTools",
    "smtp",
    "schedulerPlugins",
];

/// Print the post-migration summary to stderr.
///
/// Stdout stays clean; the migrated file is the only data output.
pub fn print_summary(old_path: &Path, new_path: &Path, migrated: &Mapping) {
    eprintln!(
        "{} {} -> {}",
        "migrated".green().bold(),
        old_path.display(),
        new_path.display()
    );
    eprintln!("  {} {}", "top-level keys written:".dimmed(), migrated.len());

    let skipped = skipped_sections(migrated);
    if !skipped.is_empty() {
        eprintln!(
            "  {} {}",
            "sections without a legacy source:".dimmed(),
            skipped.join(", ")
        );
    }
}

fn skipped_sections(migrated: &Mapping) -> Vec<&'static str> {
    let mut skipped = Vec::new();
    for name in OPTIONAL_SECTIONS {
        if !migrated.contains_key(name) {
            skipped.push(name);
        }
    }
    skipped
}
