//! Filtered re-serialization of parsed HTML subtrees.
//!
//! `scraper`'s DOM is immutable, and [`ElementRef::html`] can only
//! reproduce a subtree verbatim. The extractors need small surgical edits
//! instead: drop an attribute here, rename an element there, remove a
//! whole row, while keeping everything else stable. [`serialize_with`]
//! walks a subtree and asks a callback, per element, how that element
//! should be written out; text, comments and untouched elements are
//! emitted the way the parser saw them.
//!
//! Attributes serialize in document order (guaranteed by `scraper`'s
//! deterministic mode), so repeated runs over the same input produce
//! byte-identical fragments.

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Node};
use std::fmt::Write as _;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are written raw, without entity escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Per-element decision returned by the serializer callback.
pub enum Rewrite {
    /// Serialize the element unchanged.
    Keep,
    /// Keep the element name, replace its attribute list.
    SetAttrs(Vec<(String, String)>),
    /// Replace the element name and attribute list; children are kept.
    Rename(&'static str, Vec<(String, String)>),
    /// Skip the element and its whole subtree.
    Drop,
}

/// Serializes the subtree rooted at `root`, consulting `decide` for every
/// element encountered, `root` included.
pub fn serialize_with<F>(root: ElementRef<'_>, decide: &mut F) -> String
where
    F: FnMut(ElementRef<'_>) -> Rewrite,
{
    let mut out = String::new();
    write_element(&mut out, root, decide);
    out
}

/// The element's attributes with the named attributes removed. Removing
/// an attribute the element does not carry is a no-op.
pub fn attrs_without(el: ElementRef<'_>, names: &[&str]) -> Vec<(String, String)> {
    el.value()
        .attrs()
        .filter(|(name, _)| !names.contains(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// The element's attributes with `name` set to `value`: replaced in place
/// when already present, appended at the end when not.
pub fn attrs_replacing(el: ElementRef<'_>, name: &str, value: &str) -> Vec<(String, String)> {
    let mut attrs: Vec<(String, String)> = el
        .value()
        .attrs()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();
    match attrs.iter_mut().find(|(n, _)| n.as_str() == name) {
        Some((_, existing)) => *existing = value.to_string(),
        None => attrs.push((name.to_string(), value.to_string())),
    }
    attrs
}

fn write_element<F>(out: &mut String, el: ElementRef<'_>, decide: &mut F)
where
    F: FnMut(ElementRef<'_>) -> Rewrite,
{
    let (name, attrs): (&str, Vec<(String, String)>) = match decide(el) {
        Rewrite::Keep => (
            el.value().name(),
            el.value()
                .attrs()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        ),
        Rewrite::SetAttrs(attrs) => (el.value().name(), attrs),
        Rewrite::Rename(name, attrs) => (name, attrs),
        Rewrite::Drop => return,
    };

    out.push('<');
    out.push_str(name);
    for (attr, value) in &attrs {
        write!(out, " {}=\"{}\"", attr, encode_double_quoted_attribute(value)).unwrap();
    }

    if VOID_ELEMENTS.contains(&name) {
        out.push_str("/>");
        return;
    }
    out.push('>');

    let raw_text = RAW_TEXT_ELEMENTS.contains(&name);
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let text: &str = &text.text;
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&encode_text(text));
                }
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(&comment.comment);
                out.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    write_element(out, child_el, decide);
                }
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
