//! Escaping and naming rules.

/// Escape a string for use as element text or an attribute value.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their predefined entities and
/// borrows the input when nothing needs escaping.
pub use quick_xml::escape::escape;

/// Split content into pieces that can each sit in one CDATA section.
///
/// A `]]>` inside the content is cut between its `]]` and `>`, so the pieces
/// written back to back as sections read as the original text.
#[must_use]
pub fn cdata_sections(content: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = content;
    while let Some(at) = rest.find("]]>") {
        let (head, tail) = rest.split_at(at + 2);
        sections.push(head);
        rest = tail;
    }
    sections.push(rest);
    sections
}

/// Check whether `name` is usable as an element or attribute name.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
