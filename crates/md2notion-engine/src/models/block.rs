use serde::Serialize;

/// Discriminator for the Notion API's `"object": "block"` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    #[default]
    Block,
}

/// Annotation flags carried by every rich-text run.
///
/// The Notion API expects the full flag set on every run, so all booleans
/// are always present and serialized even when false. Construct via
/// [`Annotations::default`] and override the flags that apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_string(),
        }
    }
}

impl Annotations {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn strikethrough() -> Self {
        Self {
            strikethrough: true,
            ..Self::default()
        }
    }

    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }
}

/// Hyperlink attached to a rich-text run, serialized as
/// `{ "type": "url", "url": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineLink {
    Url { url: String },
}

/// The text payload of a rich-text run. `link` is omitted entirely when the
/// run carries no hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<InlineLink>,
}

/// Discriminator for the rich-text run type; only plain text runs exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextKind {
    #[default]
    Text,
}

/// A single annotated run of text, the atom of Notion rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextRun {
    #[serde(rename = "type")]
    pub kind: RichTextKind,
    pub text: TextContent,
    pub annotations: Annotations,
}

impl RichTextRun {
    /// A run with no formatting and no link.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::default())
    }

    /// A run with the given annotation flags.
    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: TextContent {
                content: content.into(),
                link: None,
            },
            annotations,
        }
    }

    /// A plain run whose text is hyperlinked to `url`.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: TextContent {
                content: label.into(),
                link: Some(InlineLink::Url { url: url.into() }),
            },
            annotations: Annotations::default(),
        }
    }
}

/// Payload of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphContent {
    pub rich_text: Vec<RichTextRun>,
}

/// Payload of a bulleted list item. `children` is present only when the item
/// has nested items beneath it; depth is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletedListItemContent {
    pub rich_text: Vec<RichTextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

/// A Notion block, the unit of upload.
///
/// Field names and nesting mirror the Notion block API exactly; downstream
/// upload code serializes these verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        object: ObjectKind,
        paragraph: ParagraphContent,
    },
    BulletedListItem {
        object: ObjectKind,
        bulleted_list_item: BulletedListItemContent,
    },
}

impl Block {
    pub fn paragraph(rich_text: Vec<RichTextRun>) -> Self {
        Block::Paragraph {
            object: ObjectKind::Block,
            paragraph: ParagraphContent { rich_text },
        }
    }

    /// Builds a bulleted list item; an empty `children` vec is dropped so the
    /// key never appears on leaf items.
    pub fn bulleted_list_item(rich_text: Vec<RichTextRun>, children: Vec<Block>) -> Self {
        Block::BulletedListItem {
            object: ObjectKind::Block,
            bulleted_list_item: BulletedListItemContent {
                rich_text,
                children: if children.is_empty() {
                    None
                } else {
                    Some(children)
                },
            },
        }
    }
}
