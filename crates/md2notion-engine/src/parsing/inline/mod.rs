//! # Inline Parsing
//!
//! Cursor-based tokenizer that turns one span of inline Markdown into
//! Notion rich-text runs. Block parsing hands each paragraph or bullet's
//! text here; link targets are rewritten through the [`LinkResolver`]
//! (see [`super::links`]).
//!
//! [`LinkResolver`]: crate::parsing::links::LinkResolver

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize;
