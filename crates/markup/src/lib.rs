//! Markup primitives for jobxml
//!
//! A small streaming XML writer on top of `quick_xml`, used by every part of
//! the generator. One [`MarkupBuilder`] holds the document being assembled;
//! emitters borrow it for the duration of a single render call.
//!
//! # Output conventions
//!
//! - Elements without content are written self-closing: `<actions/>`
//! - Elements holding text stay on one line: `<disabled>false</disabled>`
//! - Elements holding children put each child on its own indented line
//! - Inline raw content (CDATA, HTML) is followed by the closing tag on a
//!   fresh line, indented to the element's own depth
//! - Injected subtrees are written as given, with only the first line
//!   indented

pub mod builder;
pub mod error;
pub mod escape;

pub use builder::{Attr, ElementScope, MarkupBuilder};
pub use error::{MarkupError, Result};
pub use escape::escape;
