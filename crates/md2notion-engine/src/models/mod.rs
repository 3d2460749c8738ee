pub mod block;
pub mod folder_tree;

pub use block::{
    Annotations, Block, BulletedListItemContent, InlineLink, ObjectKind, ParagraphContent,
    RichTextKind, RichTextRun, TextContent,
};
pub use folder_tree::{FileNode, FolderNode};
