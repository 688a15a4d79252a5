//! markit: block identifiers and canonical formatting for markit documents.
//!
//! A markit document is an optional `---` header followed by blocks separated by blank lines. The
//! first block is the title (`{title}`), the rest are paragraphs (`{#N}`) and footnotes (`{#nN}`).
//! This crate parses that structure, fills in missing identifiers, reformats block text and derives
//! search aids from it. Editors plug in through the [`host::Host`] trait.

pub mod assign;
pub mod block_id;
pub mod block_starts;
pub mod commands;
pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod formatter;
pub mod host;
pub mod input;
pub mod snippet;

pub use error::{Error, Result};
