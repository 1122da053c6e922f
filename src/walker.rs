use std::path::{Path, PathBuf};

use crate::error::Result;

/// A file found in the corpus directory.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name, used as the document name.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// List the documents of a corpus directory.
///
/// Only regular files directly inside `root` are returned; subdirectories
/// are not descended into and hidden files (names starting with `.`) are
/// skipped. Symlinks are followed when they resolve to a file. Results are
/// sorted by name.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut results = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type()?;
        let is_file = if file_type.is_symlink() {
            // Broken symlinks are skipped.
            path.is_file()
        } else {
            file_type.is_file()
        };

        if is_file {
            results.push(DiscoveredFile {
                name: name.into_owned(),
                path,
            });
        }
    }

    results.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(results)
}
