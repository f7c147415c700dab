//! HTML serialization of the element tree.
//!
//! Depth-first, no escaping. Every tagged element gets an explicit closing
//! tag, including elements HTML treats as void (`<img ...></img>`).

use crate::node::{Attributes, ElementNode, Node, TextNode};
use crate::{Error, Result};

/// Render a node tree to an HTML string.
///
/// # Example
/// ```
/// use mdsite::node::Node;
///
/// let tree = Node::element("p", vec![Node::leaf("b", "Bold"), Node::text(" text")]);
/// assert_eq!(mdsite::render(&tree).unwrap(), "<p><b>Bold</b> text</p>");
/// ```
pub fn render(node: &Node) -> Result<String> {
    let mut writer = HtmlWriter::new();
    writer.write_node(node)?;
    Ok(writer.into_string())
}

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use mdsite::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.write_str("<p>");
/// writer.write_string("Hello <World>");
/// writer.write_str("</p>");
///
/// let html = writer.into_string();
/// assert_eq!(html, "<p>Hello <World></p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        let capacity = input_len + input_len / 4;
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `<tag attr="value" ...>`.
    pub fn open_tag(&mut self, tag: &str, attrs: &Attributes) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs.iter() {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(value);
            self.out.push('"');
        }
        self.out.push('>');
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Serialize a node and its descendants.
    ///
    /// On error the buffer holds whatever was written before the failure;
    /// callers should discard it.
    pub fn write_node(&mut self, node: &Node) -> Result<()> {
        match node {
            Node::Text(text) => self.write_text(text),
            Node::Element(element) => self.write_element(element),
        }
    }

    fn write_text(&mut self, text: &TextNode) -> Result<()> {
        let value = text.value.as_deref().ok_or(Error::MissingValue)?;
        self.write_string(value);
        Ok(())
    }

    fn write_element(&mut self, element: &ElementNode) -> Result<()> {
        let children = element.children().ok_or_else(|| Error::MissingChildren {
            tag: element.tag().unwrap_or_default().to_owned(),
        })?;

        match element.tag() {
            Some("") => Err(Error::MissingTag),
            Some(tag) => {
                self.open_tag(tag, element.attrs());
                for child in children {
                    self.write_node(child)?;
                }
                self.close_tag(tag);
                Ok(())
            }
            // Attributes need a tag to live on.
            None if !element.attrs().is_empty() => Err(Error::MissingTag),
            None => {
                for child in children {
                    self.write_node(child)?;
                }
                Ok(())
            }
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_unescaped() {
        assert_eq!(render(&Node::text("a < b & c")).unwrap(), "a < b & c");
    }

    #[test]
    fn test_leaf_with_attrs() {
        let node = Node::Element(
            ElementNode::new("a")
                .with_attr("href", "https://www.google.com")
                .with_children(vec![Node::text("Click me!")]),
        );
        assert_eq!(
            render(&node).unwrap(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn test_group_is_transparent() {
        let node = Node::group(vec![Node::leaf("b", "x"), Node::text("y")]);
        assert_eq!(render(&node).unwrap(), "<b>x</b>y");
    }

    #[test]
    fn test_group_with_attrs_needs_tag() {
        let node = Node::Element(
            ElementNode::group()
                .with_attr("class", "c")
                .with_children(Vec::new()),
        );
        assert_eq!(render(&node), Err(Error::MissingTag));
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(render(&Node::element("", Vec::new())), Err(Error::MissingTag));
    }

    #[test]
    fn test_unset_children() {
        let node = Node::Element(ElementNode::new("div"));
        assert_eq!(
            render(&node),
            Err(Error::MissingChildren { tag: "div".to_owned() })
        );
    }

    #[test]
    fn test_unset_value() {
        let node = Node::element("p", vec![Node::Text(TextNode::default())]);
        assert_eq!(render(&node), Err(Error::MissingValue));
    }

    #[test]
    fn test_writer_reuse() {
        let mut writer = HtmlWriter::with_capacity_for(16);
        writer.write_node(&Node::leaf("p", "one")).unwrap();
        assert_eq!(writer.as_str(), "<p>one</p>");
        writer.clear();
        assert!(writer.is_empty());
        writer.write_node(&Node::leaf("p", "two")).unwrap();
        assert_eq!(writer.len(), "<p>two</p>".len());
    }
}
