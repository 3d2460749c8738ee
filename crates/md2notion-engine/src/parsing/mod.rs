pub mod blocks;
pub mod inline;
pub mod links;

pub use links::{LinkMap, LinkResolver};

use crate::models::Block;
use blocks::{BlockBuilder, classify};

/// Parses raw Markdown into a Notion block tree without rewriting any links.
pub fn parse(raw: &str) -> Vec<Block> {
    let map = LinkMap::new();
    parse_with_links(raw, &LinkResolver::rooted(&map))
}

/// Parses raw Markdown, rewriting relative link targets through `resolver`.
///
/// Pure function of its inputs: the same text and link map always produce a
/// structurally identical block tree.
pub fn parse_with_links(raw: &str, resolver: &LinkResolver<'_>) -> Vec<Block> {
    let mut builder = BlockBuilder::new(*resolver);
    for line in raw.lines() {
        builder.push(&classify(line));
    }
    builder.finish()
}
