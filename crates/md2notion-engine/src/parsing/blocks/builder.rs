use crate::models::{Block, RichTextRun};
use crate::parsing::inline;
use crate::parsing::links::LinkResolver;

use super::classify::{BulletLine, LineClass};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
}

/// A bulleted item whose nested children may still be accumulating.
#[derive(Debug)]
struct OpenItem {
    rich_text: Vec<RichTextRun>,
    children: Vec<Block>,
}

impl OpenItem {
    fn into_block(self) -> Block {
        Block::bulleted_list_item(self.rich_text, self.children)
    }
}

/// One open nesting level of a bulleted list, keyed by indent width.
#[derive(Debug)]
struct ListLevel {
    indent: usize,
    items: Vec<OpenItem>,
}

/// Folds classified lines into a Notion block tree.
///
/// Nested lists are built with an explicit stack of open levels rather than
/// recursion, so nesting depth scales with input and nothing else.
pub struct BlockBuilder<'a> {
    resolver: LinkResolver<'a>,
    levels: Vec<ListLevel>,
    leaf: LeafState,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(resolver: LinkResolver<'a>) -> Self {
        Self {
            resolver,
            levels: vec![],
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let Some(bullet) = &c.bullet {
            self.flush_paragraph();
            self.push_bullet(bullet);
            return;
        }

        // Any non-bullet line ends the open list.
        self.close_levels_deeper_than(None);

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        self.extend_paragraph(&c.text);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.close_levels_deeper_than(None);
        self.out
    }

    fn push_bullet(&mut self, bullet: &BulletLine) {
        self.close_levels_deeper_than(Some(bullet.indent));

        let opens_new_level = match self.levels.last() {
            Some(level) => level.indent < bullet.indent,
            None => true,
        };
        if opens_new_level {
            self.levels.push(ListLevel {
                indent: bullet.indent,
                items: vec![],
            });
        }

        let rich_text = inline::tokenize(&bullet.text, &self.resolver);
        if let Some(level) = self.levels.last_mut() {
            level.items.push(OpenItem {
                rich_text,
                children: vec![],
            });
        }
    }

    /// Closes open list levels strictly deeper than `indent`; `None` closes
    /// them all. Closed items attach as children of the last item one level
    /// up, or emit at top level when nothing remains open.
    fn close_levels_deeper_than(&mut self, indent: Option<usize>) {
        while self
            .levels
            .last()
            .is_some_and(|level| indent.is_none_or(|width| level.indent > width))
        {
            let Some(level) = self.levels.pop() else {
                break;
            };
            let blocks: Vec<Block> = level.items.into_iter().map(OpenItem::into_block).collect();
            match self.levels.last_mut().and_then(|l| l.items.last_mut()) {
                Some(parent) => parent.children.extend(blocks),
                None => self.out.extend(blocks),
            }
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        let text = text.trim().to_string();
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(text),
            LeafState::None => self.leaf = LeafState::Paragraph { lines: vec![text] },
        }
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph { lines } = std::mem::replace(&mut self.leaf, LeafState::None) {
            let text = lines.join("\n");
            self.out
                .push(Block::paragraph(inline::tokenize(&text, &self.resolver)));
        }
    }
}
