//! `folio_core` is the document model behind editable portfolio case studies.
//! A case study is stored as one block of heading-delimited, markdown-like
//! text. This crate reads that text as an ordered list of sections, merges it
//! with host-configured media slots for rendering, and applies structural
//! edits that never lose previously saved content.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw text (authoritative copy)
//!   -> Sanitizer (collapses duplicate headings, drops orphaned placeholders)
//!   -> Mutators (cards, sections) returning new raw text for the host to save
//!   -> Parser (top-level sections, sub-sections)
//!   -> Classifier (key features, research insights, ...)
//!   -> Resolver (sections + gallery/card/sidebar slots in render order)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `folio.toml`, currently the slot
//!   positions.
//! - [`heading`]: Heading detection and title matching rules.
//! - [`render`]: Render list types and the slot position resolver.
//!
//! ## Key Types
//!
//! - [`Section`]: A top-level section identified by its title.
//! - [`Subsection`]: A sub-heading block inside a section body.
//! - [`Editor`]: Holds the authoritative copy and applies [`EditOperation`]s.
//! - [`RenderList`]: Ordered items the host renders.
//! - [`FolioConfig`]: Configuration loaded from `folio.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::append_card;
//! use folio_core::cards;
//!
//! let text = "# Overview\nHello\n\n# The solution: A new direction\nIntro text\n";
//! let result = append_card(text);
//!
//! assert_eq!(result.number, Some(1));
//! assert_eq!(cards(&result.text)[0].name, "New Card 1");
//! ```

pub use cards::*;
pub use classify::*;
pub use config::*;
pub use document::Section;
pub use document::parse;
pub use document::serialize;
pub use editor::*;
pub use error::*;
pub use render::*;
pub use sanitize::*;
pub use sections::*;
pub use subsection::*;

mod cards;
mod classify;
pub mod config;
mod document;
mod editor;
#[allow(unused_assignments)]
mod error;
pub mod heading;
pub(crate) mod lines;
pub mod render;
mod sanitize;
mod sections;
mod subsection;

#[cfg(test)]
mod __fixtures;
