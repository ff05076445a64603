use std::{fs::read_to_string, path::Path};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, info};

use crate::constants::{CONFIG_FILENAMES, IGNORE_FILE};
use crate::error::Result;

/// Default patterns to always ignore during template processing
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/**",
    ".git",
    ".hg/**",
    ".hg",
    ".svn/**",
    ".svn",
    "**/.DS_Store",
    IGNORE_FILE,
];

/// Reads and processes the .seederignore file to create a set of glob patterns.
///
/// The configuration files themselves are always excluded, along with the
/// default VCS patterns.
pub fn parse_seederignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let template_root = template_root.as_ref();
    let seederignore_path = template_root.join(IGNORE_FILE);

    let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
        .iter()
        .chain(CONFIG_FILENAMES.iter())
        .map(|pattern| template_root.join(pattern).display().to_string())
        .collect();

    if let Ok(contents) = read_to_string(seederignore_path) {
        let ignored_patterns: Vec<String> = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| template_root.join(line).display().to_string())
            .collect();
        patterns.extend(ignored_patterns);
    } else {
        debug!("No {} file found, using default patterns.", IGNORE_FILE);
    }

    for pattern in &patterns {
        debug!("Adding ignore pattern: {} to globset", pattern);
        builder.add(Glob::new(pattern)?);
    }
    info!("Loaded the following ignore patterns: {:?}", patterns);
    Ok(builder.build()?)
}
