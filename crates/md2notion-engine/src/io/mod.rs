use crate::models::{FileNode, FolderNode};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension (without the dot) that marks a file as Markdown.
pub const MARKDOWN_EXT: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Walks `root` and builds the folder tree of its Markdown files.
///
/// Returns `Ok(None)` when no Markdown file exists anywhere beneath `root`;
/// the root node, when present, is always named `"."`. File paths are
/// tracked relative to `root` during the walk, so a `root` containing `..`
/// segments cannot corrupt later link resolution.
pub fn build_folder_tree(root: &Path) -> Result<Option<FolderNode>, IoError> {
    validate_source_dir(root)?;
    build_folder(root, RelativePathBuf::new(), ".".to_string())
}

fn build_folder(
    dir: &Path,
    base_dir: RelativePathBuf,
    name: String,
) -> Result<Option<FolderNode>, IoError> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    // Deterministic output regardless of readdir order
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    let mut subfolders = Vec::new();

    for entry in entries {
        let path = entry.path();
        let entry_name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            let subtree = build_folder(&path, base_dir.join(&entry_name), entry_name)?;
            // Prune branches without any Markdown in them
            if let Some(folder) = subtree {
                subfolders.push(folder);
            }
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXT
        {
            let file_name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            files.push(FileNode::new(file_name, path, base_dir.clone()));
        }
    }

    if files.is_empty() && subfolders.is_empty() {
        return Ok(None);
    }
    Ok(Some(FolderNode {
        name,
        files,
        subfolders,
    }))
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
