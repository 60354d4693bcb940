//! Streaming markup builder
//!
//! Writes events into a [`quick_xml::Writer`] while tracking the stack of
//! open elements. An element's start tag is held back until its first piece
//! of content arrives, which is how empty elements end up self-closing.
//! Indentation and line separators are written between events by the
//! builder itself.

use std::fmt::{self, Display};

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesStart, BytesText, Event};

use crate::error::{MarkupError, Result};
use crate::escape::{cdata_sections, is_valid_name};

/// An attribute as a `(name, value)` pair. Values are escaped on output.
pub type Attr<'a> = (&'a str, &'a str);

/// What an open element has received so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Content {
    Empty,
    Text,
    Inline,
    Children,
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    start: BytesStart<'static>,
    content: Content,
}

/// Handle returned by [`MarkupBuilder::begin`], consumed by [`MarkupBuilder::end`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an element scope must be passed back to `end`"]
pub struct ElementScope {
    depth: usize,
}

impl ElementScope {
    /// Nesting depth of the element this scope belongs to (root is 1).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

/// Append-only XML sink shared by every emitter of one document.
///
/// # Example
///
/// ```rust
/// use jobxml_markup::MarkupBuilder;
///
/// let mut out = MarkupBuilder::new("  ", "\n");
/// out.element("project", &[], |out| {
///     out.empty("actions", &[])?;
///     out.leaf("disabled", false)
/// })?;
/// assert_eq!(
///     out.finish()?,
///     "<project>\n  <actions/>\n  <disabled>false</disabled>\n</project>\n"
/// );
/// # Ok::<(), jobxml_markup::MarkupError>(())
/// ```
pub struct MarkupBuilder {
    writer: Writer<Vec<u8>>,
    indent: String,
    line_separator: String,
    stack: Vec<OpenElement>,
}

impl MarkupBuilder {
    /// Create a builder writing with the given indent unit and line separator.
    #[must_use]
    pub fn new(indent: impl Into<String>, line_separator: impl Into<String>) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            indent: indent.into(),
            line_separator: line_separator.into(),
            stack: Vec::new(),
        }
    }

    /// The indent unit
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// The line separator
    #[must_use]
    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// Number of currently open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.writer.get_ref()).unwrap_or_default()
    }

    /// Write the XML declaration.
    ///
    /// # Errors
    /// Returns [`MarkupError::Write`] if the writer fails.
    pub fn declaration(&mut self) -> Result<()> {
        let decl = BytesStart::from_content("xml version='1.0' encoding='UTF-8'", 3);
        self.writer.write_event(Event::Decl(BytesDecl::from_start(decl)))?;
        self.newline();
        Ok(())
    }

    /// Write a comment on its own line at the current depth.
    ///
    /// `--` is not allowed inside comments and is broken up.
    ///
    /// # Errors
    /// Returns [`MarkupError::MixedContent`] if the enclosing element already
    /// holds text.
    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.prepare_child()?;
        self.pad(self.stack.len());
        let mut body = text.to_string();
        while body.contains("--") {
            body = body.replace("--", "- -");
        }
        self.writer
            .write_event(Event::Comment(BytesText::from_escaped(format!(" {body} "))))?;
        self.newline();
        Ok(())
    }

    /// Open an element.
    ///
    /// # Errors
    /// Returns an error if a name is invalid or the parent holds text.
    pub fn begin(&mut self, name: &str, attrs: &[Attr<'_>]) -> Result<ElementScope> {
        validate_name(name)?;
        for (key, _) in attrs {
            validate_name(key)?;
        }
        self.prepare_child()?;
        self.pad(self.stack.len());

        let mut start = BytesStart::new(name.to_string());
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.stack.push(OpenElement {
            name: name.to_string(),
            start,
            content: Content::Empty,
        });
        Ok(ElementScope {
            depth: self.stack.len(),
        })
    }

    /// Close the element belonging to `scope`.
    ///
    /// # Errors
    /// Returns [`MarkupError::UnbalancedEnd`] if `scope` is not the innermost
    /// open element.
    pub fn end(&mut self, scope: ElementScope) -> Result<()> {
        let Some(open) = self.stack.last() else {
            return Err(MarkupError::NoOpenElement);
        };
        if scope.depth != self.stack.len() {
            return Err(MarkupError::UnbalancedEnd {
                depth: scope.depth,
                open: open.name.clone(),
            });
        }
        self.close_innermost()
    }

    /// Write escaped text into the innermost open element.
    ///
    /// # Errors
    /// Returns an error if no element is open or it already holds children.
    pub fn text(&mut self, content: &str) -> Result<()> {
        self.open_inline(Content::Text)?;
        self.writer.write_event(Event::Text(BytesText::new(content)))?;
        Ok(())
    }

    /// Write unescaped content into the innermost open element.
    ///
    /// Used for pre-rendered HTML fragments. The element's closing tag is
    /// written on a fresh line.
    ///
    /// # Errors
    /// Returns an error if no element is open or it already holds children.
    pub fn raw(&mut self, content: &str) -> Result<()> {
        self.open_inline(Content::Inline)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(content)))?;
        Ok(())
    }

    /// Write `content` as CDATA into the innermost open element.
    ///
    /// Closes like [`raw`](Self::raw) content. A `]]>` in the content is
    /// split across two sections.
    ///
    /// # Errors
    /// Returns an error if no element is open or it already holds children.
    pub fn cdata(&mut self, content: &str) -> Result<()> {
        self.open_inline(Content::Inline)?;
        for section in cdata_sections(content) {
            self.writer.write_event(Event::CData(BytesCData::new(section)))?;
        }
        Ok(())
    }

    /// Inject a pre-rendered subtree as children of the innermost element.
    ///
    /// Only the fragment's outer whitespace is replaced: the first line is
    /// indented one level below the enclosing element and a line separator
    /// follows the last one. Everything in between is written as given.
    /// Blank fragments are ignored.
    ///
    /// # Errors
    /// Returns [`MarkupError::MixedContent`] if the enclosing element holds text.
    pub fn inject(&mut self, fragment: &str) -> Result<()> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(());
        }
        self.prepare_child()?;
        self.pad(self.stack.len());
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(fragment)))?;
        self.newline();
        Ok(())
    }

    /// Emit an element whose children are produced by `body`.
    ///
    /// The closing tag is written even when `body` fails, after closing any
    /// element the body left open; the body's error is then returned.
    ///
    /// # Errors
    /// Returns the body's error, or a [`MarkupError`] converted into `E`.
    pub fn element<F, E>(&mut self, name: &str, attrs: &[Attr<'_>], body: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&mut Self) -> std::result::Result<(), E>,
        E: From<MarkupError>,
    {
        let scope = self.begin(name, attrs)?;
        let result = body(self);
        let closed = if result.is_err() {
            self.unwind_to(scope.depth).and_then(|()| self.end(scope))
        } else {
            self.end(scope)
        };
        result?;
        closed?;
        Ok(())
    }

    /// Emit `<name>value</name>`.
    ///
    /// # Errors
    /// Returns an error if the name is invalid or the parent holds text.
    pub fn leaf(&mut self, name: &str, value: impl Display) -> Result<()> {
        self.leaf_with(name, &[], value)
    }

    /// Emit `<name attrs>value</name>`.
    ///
    /// # Errors
    /// Returns an error if a name is invalid or the parent holds text.
    pub fn leaf_with(&mut self, name: &str, attrs: &[Attr<'_>], value: impl Display) -> Result<()> {
        let scope = self.begin(name, attrs)?;
        self.text(&value.to_string())?;
        self.end(scope)
    }

    /// Emit a self-closing `<name attrs/>`.
    ///
    /// # Errors
    /// Returns an error if a name is invalid or the parent holds text.
    pub fn empty(&mut self, name: &str, attrs: &[Attr<'_>]) -> Result<()> {
        let scope = self.begin(name, attrs)?;
        self.end(scope)
    }

    /// Consume the builder and return the finished document.
    ///
    /// # Errors
    /// Returns [`MarkupError::Unclosed`] if any element is still open.
    pub fn finish(self) -> Result<String> {
        if let Some(open) = self.stack.last() {
            return Err(MarkupError::Unclosed {
                element: open.name.clone(),
            });
        }
        let document = String::from_utf8(self.writer.into_inner()).map_err(|error| MarkupError::Write {
            message: error.to_string(),
        })?;
        tracing::trace!(bytes = document.len(), "Markup document finished");
        Ok(document)
    }

    /// Terminate the parent's start tag so a child can follow.
    fn prepare_child(&mut self) -> Result<()> {
        let Some(parent) = self.stack.last_mut() else {
            return Ok(());
        };
        match parent.content {
            Content::Empty => {
                self.writer.write_event(Event::Start(parent.start.borrow()))?;
                self.writer
                    .get_mut()
                    .extend_from_slice(self.line_separator.as_bytes());
                parent.content = Content::Children;
                Ok(())
            }
            Content::Children => Ok(()),
            Content::Text | Content::Inline => Err(MarkupError::MixedContent {
                element: parent.name.clone(),
            }),
        }
    }

    fn open_inline(&mut self, kind: Content) -> Result<()> {
        let Some(open) = self.stack.last_mut() else {
            return Err(MarkupError::NoOpenElement);
        };
        match open.content {
            Content::Empty => {
                self.writer.write_event(Event::Start(open.start.borrow()))?;
                open.content = kind;
            }
            Content::Text | Content::Inline => {
                if kind == Content::Inline {
                    open.content = Content::Inline;
                }
            }
            Content::Children => {
                return Err(MarkupError::MixedContent {
                    element: open.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn close_innermost(&mut self) -> Result<()> {
        let Some(open) = self.stack.pop() else {
            return Err(MarkupError::NoOpenElement);
        };
        let level = self.stack.len();
        match open.content {
            Content::Empty => self.writer.write_event(Event::Empty(open.start))?,
            Content::Text => self.writer.write_event(Event::End(open.start.to_end()))?,
            // Inline raw content leaves the cursor mid-line; realign first
            Content::Inline => {
                self.newline();
                self.pad(level);
                self.writer.write_event(Event::End(open.start.to_end()))?;
            }
            Content::Children => {
                self.pad(level);
                self.writer.write_event(Event::End(open.start.to_end()))?;
            }
        }
        self.newline();
        Ok(())
    }

    /// Close every element nested deeper than `depth`.
    fn unwind_to(&mut self, depth: usize) -> Result<()> {
        while self.stack.len() > depth {
            if let Some(open) = self.stack.last() {
                tracing::trace!(element = %open.name, "Closing element left open by a failed body");
            }
            self.close_innermost()?;
        }
        Ok(())
    }

    fn newline(&mut self) {
        self.writer
            .get_mut()
            .extend_from_slice(self.line_separator.as_bytes());
    }

    fn pad(&mut self, level: usize) {
        let buffer = self.writer.get_mut();
        for _ in 0..level {
            buffer.extend_from_slice(self.indent.as_bytes());
        }
    }
}

impl fmt::Debug for MarkupBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupBuilder")
            .field("indent", &self.indent)
            .field("line_separator", &self.line_separator)
            .field("open", &self.stack.iter().map(|o| o.name.as_str()).collect::<Vec<_>>())
            .field("bytes", &self.writer.get_ref().len())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(MarkupError::InvalidName {
            name: name.to_string(),
        })
    }
}
