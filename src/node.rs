//! HTML element tree.
//!
//! A [`Node`] is either a text leaf or an element with a tag, ordered
//! attributes and ordered children. Each node owns its children outright.
//!
//! Unset fields are kept distinct from empty ones: a text node whose value
//! was never set, or an element whose children were never set, is rejected
//! by the renderer rather than treated as empty.

use smallvec::SmallVec;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, rendered verbatim.
    Text(TextNode),
    /// Tagged element (or tagless group) with children.
    Element(ElementNode),
}

impl Node {
    /// Create a text node.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(TextNode::new(value))
    }

    /// Create an element holding a single text child, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Element(ElementNode::new(tag).with_children(vec![Self::text(value)]))
    }

    /// Create an element with the given children.
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(ElementNode::new(tag).with_children(children))
    }

    /// Create a tagless group; renders only its children.
    pub fn group(children: Vec<Node>) -> Self {
        Self::Element(ElementNode::group().with_children(children))
    }

    /// Tag name, if this is a tagged element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Element(el) => el.tag(),
        }
    }

    /// Children, if this is an element whose children were set.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Text(_) => None,
            Self::Element(el) => el.children(),
        }
    }
}

/// A text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    /// `None` when the value was never provided.
    pub value: Option<String>,
}

impl TextNode {
    /// Create a text node with a value.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// An element: tag, attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag: Option<String>,
    attrs: Attributes,
    children: Option<Vec<Node>>,
}

impl ElementNode {
    /// Create an element with a tag and no children collection yet.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Create a tagless element.
    pub fn group() -> Self {
        Self::default()
    }

    /// Add an attribute (builder form).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Set the children collection (builder form).
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    /// Append a child, creating the children collection if needed.
    pub fn push_child(&mut self, child: Node) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Tag name.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Attributes in insertion order.
    #[inline]
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Mutable attributes.
    #[inline]
    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    /// Children, or `None` if never set.
    #[inline]
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }
}

/// Ordered attribute map.
///
/// Most elements carry zero to two attributes, so entries live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: SmallVec<[(String, String); 2]>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. An existing name keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order() {
        let attrs: Attributes = [("href", "a"), ("target", "_blank")].into_iter().collect();
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["href", "target"]);
    }

    #[test]
    fn test_attribute_replace_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.insert("src", "a.png");
        attrs.insert("alt", "A");
        attrs.insert("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.iter().next(), Some(("src", "b.png")));
    }

    #[test]
    fn test_children_unset_vs_empty() {
        let unset = ElementNode::new("div");
        assert_eq!(unset.children(), None);
        let empty = ElementNode::new("div").with_children(Vec::new());
        assert_eq!(empty.children(), Some(&[][..]));
    }

    #[test]
    fn test_push_child_creates_collection() {
        let mut el = ElementNode::new("ul");
        el.push_child(Node::leaf("li", "a"));
        assert_eq!(el.children().map(<[Node]>::len), Some(1));
    }

    #[test]
    fn test_leaf_shape() {
        let node = Node::leaf("b", "x");
        assert_eq!(node.tag(), Some("b"));
        assert_eq!(node.children(), Some(&[Node::text("x")][..]));
        assert_eq!(Node::text("x").tag(), None);
    }
}
