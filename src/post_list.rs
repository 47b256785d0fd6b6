use std::{fs, io};
use std::path::{Path, PathBuf};

use spdlog::debug;
use walkdir::WalkDir;

/// Drafts waiting for conversion: `<prefix>*.md` files directly under `root_dir`.
/// Symlinks to files count, like in a shell glob.
pub struct SourceList {
    pub root_dir: PathBuf,
    pub prefix: String,
}

impl SourceList {
    /// Paths with their file names, sorted by name
    pub fn retrieve_files(&self) -> io::Result<Vec<(PathBuf, String)>> {
        let entries = fs::read_dir(self.root_dir.as_path()).map_err(|e| {
            io::Error::new(e.kind(), format!("Error listing source directory {}: {}", self.root_dir.display(), e))
        })?;

        let mut sources = vec![];
        for entry in entries {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                debug!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };
            if file_name.starts_with(&self.prefix) && file_name.ends_with(".md") {
                sources.push((entry.path(), file_name.to_string()));
            }
        }

        // Same order a shell glob would give
        sources.sort();
        Ok(sources)
    }
}

/// Markdown posts anywhere below `root_dir`
pub struct ContentList {
    pub root_dir: PathBuf,
}

impl ContentList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        if !self.root_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Content directory not found: {}", self.root_dir.display()),
            ));
        }

        let mut posts = vec![];
        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                posts.push(entry.into_path());
            }
        }
        Ok(posts)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|ext| ext == "md").unwrap_or(false)
}
