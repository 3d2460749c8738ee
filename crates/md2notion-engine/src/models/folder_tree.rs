use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::PathBuf;

use crate::io::IoError;
use crate::models::Block;
use crate::parsing::{self, LinkMap, LinkResolver};

/// A directory holding Markdown files, directly or through subfolders.
///
/// The tree mirrors the on-disk structure with empty branches pruned; the
/// root is always named `"."`. Nodes own their children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderNode {
    pub name: String,
    pub files: Vec<FileNode>,
    pub subfolders: Vec<FolderNode>,
}

/// A discovered Markdown file whose content is parsed on demand.
///
/// Tree building only records where the file lives; reading and parsing
/// happen in [`FileNode::get_content`], so read errors surface at the call
/// site rather than during the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    file_name: String,
    source_path: PathBuf,
    base_dir: RelativePathBuf,
}

impl FileNode {
    pub(crate) fn new(file_name: String, source_path: PathBuf, base_dir: RelativePathBuf) -> Self {
        Self {
            file_name,
            source_path,
            base_dir,
        }
    }

    /// Basename without the `.md` extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory of the file relative to the tree root.
    pub fn base_dir(&self) -> &RelativePath {
        &self.base_dir
    }

    /// Reads the file and parses it into a block tree with `link_map`.
    ///
    /// Re-reads and re-parses on every call; no caching. The output is a
    /// pure function of the file text and the supplied map, so repeated
    /// calls with the same map yield structurally identical trees.
    pub fn get_content(&self, link_map: &LinkMap) -> Result<Vec<Block>, IoError> {
        if !self.source_path.exists() {
            return Err(IoError::NotFound(self.source_path.clone()));
        }
        let raw = fs::read_to_string(&self.source_path).map_err(IoError::Io)?;
        let resolver = LinkResolver::new(link_map, &self.base_dir);
        Ok(parsing::parse_with_links(&raw, &resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RichTextRun;
    use crate::tests::{create_test_file, create_test_source_dir};

    #[test]
    fn get_content_parses_on_every_call() {
        let dir = create_test_source_dir();
        let path = create_test_file(&dir, "note.md", "first");

        let node = FileNode::new("note".to_string(), path.clone(), RelativePathBuf::new());
        let map = LinkMap::new();
        assert_eq!(
            node.get_content(&map).unwrap(),
            vec![crate::models::Block::paragraph(vec![RichTextRun::plain(
                "first"
            )])]
        );

        // A rewrite between calls is picked up because nothing is cached.
        std::fs::write(&path, "second").unwrap();
        assert_eq!(
            node.get_content(&map).unwrap(),
            vec![crate::models::Block::paragraph(vec![RichTextRun::plain(
                "second"
            )])]
        );
    }

    #[test]
    fn get_content_surfaces_missing_file() {
        let dir = create_test_source_dir();
        let node = FileNode::new(
            "ghost".to_string(),
            dir.path().join("ghost.md"),
            RelativePathBuf::new(),
        );
        let result = node.get_content(&LinkMap::new());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn get_content_resolves_links_from_the_file_directory() {
        let dir = create_test_source_dir();
        let path = create_test_file(&dir, "docs/page.md", "[link](./section)");

        let node = FileNode::new(
            "page".to_string(),
            path,
            RelativePathBuf::from("docs"),
        );
        let map: LinkMap = [(
            "./docs/section".to_string(),
            "https://example.com/docs/section".to_string(),
        )]
        .into_iter()
        .collect();

        let blocks = node.get_content(&map).unwrap();
        assert_eq!(
            blocks,
            vec![crate::models::Block::paragraph(vec![RichTextRun::link(
                "link",
                "https://example.com/docs/section"
            )])]
        );
    }
}
