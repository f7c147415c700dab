use mdsite::node::{Attributes, ElementNode, Node, TextNode};
use mdsite::{Error, render};
use pretty_assertions::assert_eq;

#[test]
fn nested_parents() {
    let link = Node::Element(
        ElementNode::new("a")
            .with_attr("href", "https://www.google.com")
            .with_children(vec![Node::text("Link")]),
    );
    let p = Node::element("p", vec![link, Node::text(" and "), Node::leaf("b", "bold")]);
    let div = Node::element("div", vec![p]);
    assert_eq!(
        render(&div).unwrap(),
        r#"<div><p><a href="https://www.google.com">Link</a> and <b>bold</b></p></div>"#
    );
}

#[test]
fn many_children() {
    let children = (0..5).map(|i| Node::leaf("span", format!("Child {i}"))).collect();
    let expected = format!(
        "<div>{}</div>",
        (0..5).map(|i| format!("<span>Child {i}</span>")).collect::<String>()
    );
    assert_eq!(render(&Node::element("div", children)).unwrap(), expected);
}

#[test]
fn parent_with_attrs() {
    let node = Node::Element(
        ElementNode::new("div")
            .with_attr("class", "container")
            .with_children(vec![Node::leaf("span", "child")]),
    );
    assert_eq!(render(&node).unwrap(), r#"<div class="container"><span>child</span></div>"#);
}

#[test]
fn void_elements_still_close() {
    let node = Node::Element(
        ElementNode::new("img")
            .with_attr("src", "image.png")
            .with_attr("alt", "An image")
            .with_children(vec![Node::text("")]),
    );
    assert_eq!(render(&node).unwrap(), r#"<img src="image.png" alt="An image"></img>"#);
}

#[test]
fn empty_children_render_empty_element() {
    assert_eq!(render(&Node::element("section", Vec::new())).unwrap(), "<section></section>");
}

#[test]
fn unset_children_fail() {
    let err = render(&Node::Element(ElementNode::new("div"))).unwrap_err();
    assert_eq!(err, Error::MissingChildren { tag: "div".into() });
}

#[test]
fn unset_children_deep_in_tree_fail() {
    let unset = Node::Element(ElementNode::new("b"));
    let tree = Node::element("div", vec![Node::element("p", vec![unset])]);
    assert!(matches!(render(&tree), Err(Error::MissingChildren { .. })));
}

#[test]
fn unset_text_value_fails() {
    let tree = Node::element("p", vec![Node::Text(TextNode { value: None })]);
    assert_eq!(render(&tree), Err(Error::MissingValue));
}

#[test]
fn no_escaping() {
    let node = Node::Element(
        ElementNode::new("a")
            .with_attr("title", "a \"quoted\" <b>")
            .with_children(vec![Node::text("<script>&</script>")]),
    );
    assert_eq!(
        render(&node).unwrap(),
        r#"<a title="a "quoted" <b>"><script>&</script></a>"#
    );
}

#[test]
fn attributes_collected_in_order() {
    let attrs: Attributes = [("b", "2"), ("a", "1")].into_iter().collect();
    let mut el = ElementNode::new("x").with_children(Vec::new());
    for (name, value) in attrs.iter() {
        el.attrs_mut().insert(name, value);
    }
    assert_eq!(render(&Node::Element(el)).unwrap(), r#"<x b="2" a="1"></x>"#);
}
