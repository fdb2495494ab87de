//! Document source — the documentation files of an input directory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One input document and its raw text.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// List the files directly inside `dir` with the given extension, sorted by
/// path so that overload order does not depend on the filesystem.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("input directory not found: {}", dir.display());
    }
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let p = entry
            .with_context(|| format!("failed to read directory: {}", dir.display()))?
            .path();
        if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}

/// Read one document. Text that is not valid UTF-8 is an error.
pub fn read_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Document {
        path: path.to_path_buf(),
        text,
    })
}
