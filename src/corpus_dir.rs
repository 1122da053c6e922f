use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable consulted when no `--corpus` flag is given.
pub const CORPUS_ENV: &str = "DOCQUERY_CORPUS";

/// Directory used when neither the flag nor the environment names one.
pub const DEFAULT_CORPUS_DIR: &str = "corpus";

#[derive(Debug, Clone)]
pub struct CorpusDir {
    root: PathBuf,
}

impl CorpusDir {
    /// Resolve the corpus directory from, in order of priority:
    /// 1. An explicit path (from --corpus)
    /// 2. The DOCQUERY_CORPUS environment variable
    /// 3. `./corpus`
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var(CORPUS_ENV) {
            PathBuf::from(val)
        } else {
            PathBuf::from(DEFAULT_CORPUS_DIR)
        };

        Self::open(&root)
    }

    /// Validate that `root` exists and is a directory.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(Error::Config(format!(
                "corpus directory does not exist: {}",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(Error::Config(format!(
                "corpus path is not a directory: {}",
                root.display()
            )));
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
