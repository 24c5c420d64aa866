use serde::{Deserialize, Serialize};

use crate::icons::IconKey;

/// Virtual DOM node
///
/// Text is always escaped on serialization. `Icon` is the only variant that
/// emits raw markup, and it can only name a compiled-in SVG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        /// Attributes in insertion order
        attributes: Vec<(String, String)>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },

    /// Trusted SVG icon
    Icon { icon: IconKey },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn icon(icon: IconKey) -> Self {
        VNode::Icon { icon }
    }

    /// Set an attribute, replacing any previous value
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let key = key.into();
            let value = value.into();
            match attributes.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => attributes.push((key, value)),
            }
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Set a boolean attribute (`disabled`, `required`) when `on`
    pub fn with_flag(self, key: &str, on: bool) -> Self {
        if on {
            self.with_attr(key, "")
        } else {
            self
        }
    }

    pub fn with_child(mut self, child: impl Into<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child.into());
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(VNode::text(content))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(content),
            VNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            VNode::Icon { .. } => {}
        }
    }

    /// Depth-first search for every node matching `pred`
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&VNode) -> bool) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if pred(node) {
                found.push(node);
            }
        });
        found
    }

    /// Elements carrying `name="value"`
    pub fn find_by_attr<'a>(&'a self, name: &str, value: &str) -> Vec<&'a VNode> {
        self.find_all(&|node| node.attr(name) == Some(value))
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a VNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl From<&str> for VNode {
    fn from(s: &str) -> Self {
        VNode::text(s)
    }
}

impl From<String> for VNode {
    fn from(s: String) -> Self {
        VNode::text(s)
    }
}

/// Shorthand element constructor
pub fn el(tag: &str, attrs: &[(&str, &str)], children: Vec<VNode>) -> VNode {
    attrs
        .iter()
        .fold(VNode::element(tag), |node, (k, v)| node.with_attr(*k, *v))
        .with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_replaces_attributes() {
        let node = VNode::element("div")
            .with_class("a")
            .with_attr("data-index", "1")
            .with_class("b");

        assert_eq!(node.attr("class"), Some("b"));
        assert_eq!(node.attr("data-index"), Some("1"));
        let VNode::Element { attributes, .. } = &node else { unreachable!() };
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_el_shorthand() {
        let node = el("p", &[("class", "x")], vec!["hello ".into(), VNode::element("b").with_text("world")]);
        assert_eq!(node.text_content(), "hello world");
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_find_by_attr() {
        let node = VNode::element("ul").with_children((0..3).map(|i| {
            VNode::element("li").with_attr("data-index", i.to_string())
        }));

        let hits = node.find_by_attr("data-index", "2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag(), Some("li"));
    }

    #[test]
    fn test_flag_attribute() {
        let on = VNode::element("button").with_flag("disabled", true);
        let off = VNode::element("button").with_flag("disabled", false);
        assert_eq!(on.attr("disabled"), Some(""));
        assert_eq!(off.attr("disabled"), None);
    }

    #[test]
    fn test_serialized_shape() {
        let node = VNode::element("span").with_child(VNode::icon(IconKey::Close));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "Element");
        assert_eq!(value["children"][0], serde_json::json!({"type": "Icon", "icon": "CLOSE"}));
    }
}
