use std::{collections::BTreeMap, path::Path};

use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    walker::{self, DiscoveredFile},
};

/// Raw corpus contents: document name to full file text.
///
/// A `BTreeMap` so iteration order, and with it every tie-break, follows
/// document names.
pub type RawCorpus = BTreeMap<String, String>;

/// Read every discovered file as UTF-8.
///
/// Files are read in parallel. The first unreadable or undecodable file
/// fails the whole load.
pub fn read_files(files: &[DiscoveredFile]) -> Result<RawCorpus> {
    files
        .par_iter()
        .map(|file| {
            let content =
                std::fs::read_to_string(&file.path).map_err(|source| {
                    Error::Load {
                        path: file.path.clone(),
                        source,
                    }
                })?;
            Ok((file.name.clone(), content))
        })
        .collect()
}

/// Discover and read every document in `root`.
pub fn load_documents(root: &Path) -> Result<RawCorpus> {
    let files = walker::discover_files(root)?;
    tracing::debug!(count = files.len(), root = %root.display(), "discovered corpus files");
    read_files(&files)
}
