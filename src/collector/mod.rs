
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Combine every markdown file under `root` into one document.
///
/// Files are collected recursively, sorted by path for a deterministic
/// result, and each contributes a `# <file stem>` heading followed by its
/// content. The combined text feeds straight into the chunker.
pub fn combine_markdown(root: &Path) -> Result<String> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.context("Failed to walk markdown tree")?;
        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new("md")) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let mut combined = String::new();
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        combined.push_str(&format!("\n# {stem}\n\n{content}\n"));
    }

    Ok(combined)
}
