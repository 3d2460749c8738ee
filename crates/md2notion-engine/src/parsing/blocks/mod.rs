//! # Block Parsing
//!
//! Two-phase block parsing: each line is first classified on local facts
//! alone ([`classify`]), then the classified lines are folded through
//! [`BlockBuilder`], which groups paragraph lines and maintains an explicit
//! stack of open bulleted-list levels keyed by indent width.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{BulletLine, LineClass, classify};
