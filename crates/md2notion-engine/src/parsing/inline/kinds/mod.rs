//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! All delimiter constants live here, not scattered in parser code. The
//! parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::MdLink;
pub use strikethrough::Strikethrough;
