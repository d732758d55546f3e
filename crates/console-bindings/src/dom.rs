//! DOM-mutation primitive.
//!
//! [`DomHost`] is what the procedural components need from the host page:
//! insert nodes and activate declarative bindings inside a subtree.
//! [`Document`] is an in-memory implementation backed by a node arena.

use std::collections::BTreeSet;

use console_core::prelude::*;
use console_core::{Element, Markup, Scope};

/// Index of a node in a [`Document`]
pub type NodeId = usize;

/// Attributes [`Document::compile`] activates unless configured otherwise
pub const DEFAULT_BINDING_ATTRIBUTES: &[&str] = &["tooltip"];

/// Node insertion and binding activation
pub trait DomHost {
    /// Append `markup` as the last child of `parent`
    fn append(&mut self, parent: NodeId, markup: Markup) -> Result<NodeId>;

    /// Insert `markup` into `parent` immediately before `reference`
    fn insert_before(&mut self, parent: NodeId, markup: Markup, reference: NodeId)
        -> Result<NodeId>;

    /// Put `markup` where `node` was, detaching `node`
    fn replace_with(&mut self, node: NodeId, markup: Markup) -> Result<NodeId>;

    /// Activate the declarative bindings found in the subtree rooted at `node`
    /// under `scope`. Returns how many bindings became live.
    fn compile(&mut self, node: NodeId, scope: &Scope) -> Result<usize>;
}

/// A declarative attribute that has been compiled into the live graph
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBinding {
    pub node: NodeId,
    pub attribute: String,
    pub expression: String,
    pub scope: Scope,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    binding_attributes: BTreeSet<String>,
    bindings: Vec<ActiveBinding>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("body")
    }
}

impl Document {
    pub fn new(root_tag: impl Into<String>) -> Self {
        let root = Node {
            kind: NodeKind::Element {
                tag: root_tag.into(),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: 0,
            binding_attributes: DEFAULT_BINDING_ATTRIBUTES
                .iter()
                .map(|a| a.to_string())
                .collect(),
            bindings: Vec::new(),
        }
    }

    /// Also treat `attribute` as a declarative binding when compiling
    pub fn with_binding_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.binding_attributes.insert(attribute.into());
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create an empty anchor element under the root, the way a host page
    /// places a component tag
    pub fn create_anchor(&mut self, tag: &str) -> NodeId {
        let id = self.alloc(Element::new(tag).into(), Some(self.root));
        self.nodes[self.root].children.push(id);
        id
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Rebuild the markup tree rooted at `node`
    pub fn to_markup(&self, node: NodeId) -> Option<Markup> {
        let n = self.nodes.get(node)?;
        Some(match &n.kind {
            NodeKind::Text(text) => Markup::Text(text.clone()),
            NodeKind::Element { tag, attrs } => {
                let mut el = Element::new(tag.clone());
                for (name, value) in attrs {
                    el.set_attr(name.clone(), value.clone());
                }
                for child in &n.children {
                    if let Some(markup) = self.to_markup(*child) {
                        el.push(markup);
                    }
                }
                Markup::Element(el)
            }
        })
    }

    /// Serialized HTML of the subtree rooted at `node`, empty if it does not exist
    pub fn html(&self, node: NodeId) -> String {
        self.to_markup(node)
            .map(|m| m.to_html())
            .unwrap_or_default()
    }

    pub fn active_bindings(&self) -> &[ActiveBinding] {
        &self.bindings
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::NodeNotFound(node))
        }
    }

    fn alloc(&mut self, markup: Markup, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let (kind, children) = match markup {
            Markup::Text(text) => (NodeKind::Text(text), Vec::new()),
            Markup::Element(el) => {
                let attrs = el
                    .attrs()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect();
                (
                    NodeKind::Element {
                        tag: el.tag().to_string(),
                        attrs,
                    },
                    el.children().to_vec(),
                )
            }
        };
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        for child in children {
            let child_id = self.alloc(child, Some(id));
            self.nodes[id].children.push(child_id);
        }
        id
    }

    fn collect_subtree(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.push(node);
        for child in &self.nodes[node].children {
            self.collect_subtree(*child, out);
        }
    }
}

impl DomHost for Document {
    fn append(&mut self, parent: NodeId, markup: Markup) -> Result<NodeId> {
        self.check(parent)?;
        let id = self.alloc(markup, Some(parent));
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        markup: Markup,
        reference: NodeId,
    ) -> Result<NodeId> {
        self.check(parent)?;
        let position = self.nodes[parent]
            .children
            .iter()
            .position(|c| *c == reference)
            .ok_or(Error::NodeNotFound(reference))?;
        let id = self.alloc(markup, Some(parent));
        self.nodes[parent].children.insert(position, id);
        Ok(id)
    }

    fn replace_with(&mut self, node: NodeId, markup: Markup) -> Result<NodeId> {
        self.check(node)?;
        let parent = self.nodes[node].parent.ok_or(Error::NodeNotFound(node))?;
        let id = self.insert_before(parent, markup, node)?;
        self.nodes[parent].children.retain(|c| *c != node);
        self.nodes[node].parent = None;
        Ok(id)
    }

    fn compile(&mut self, node: NodeId, scope: &Scope) -> Result<usize> {
        self.check(node)?;
        let mut subtree = Vec::new();
        self.collect_subtree(node, &mut subtree);

        let mut activated = 0;
        for id in subtree {
            let NodeKind::Element { attrs, .. } = &self.nodes[id].kind else {
                continue;
            };
            for (name, value) in attrs {
                if !self.binding_attributes.contains(name) {
                    continue;
                }
                let already_live = self
                    .bindings
                    .iter()
                    .any(|b| b.node == id && b.attribute == *name);
                if already_live {
                    continue;
                }
                self.bindings.push(ActiveBinding {
                    node: id,
                    attribute: name.clone(),
                    expression: value.clone(),
                    scope: scope.clone(),
                });
                activated += 1;
            }
        }

        debug!("Compiled node {}: {} binding(s) activated", node, activated);
        Ok(activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> Markup {
        Element::new("li").text(text).into()
    }

    #[test]
    fn test_append_and_serialize() {
        let mut doc = Document::default();
        let anchor = doc.create_anchor("instance-summary");
        doc.append(anchor, Element::new("ul").child(item("0")).into())
            .unwrap();

        insta::assert_snapshot!(
            doc.html(anchor),
            @"<instance-summary><ul><li>0</li></ul></instance-summary>"
        );
    }

    #[test]
    fn test_insert_before_reference() {
        let mut doc = Document::default();
        let list = doc.create_anchor("ul");
        let second = doc.append(list, item("b")).unwrap();
        doc.insert_before(list, item("a"), second).unwrap();

        assert_eq!(doc.html(list), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_insert_before_unknown_reference() {
        let mut doc = Document::default();
        let list = doc.create_anchor("ul");
        let result = doc.insert_before(list, item("a"), 99);
        assert!(matches!(result, Err(Error::NodeNotFound(99))));
    }

    #[test]
    fn test_append_to_missing_parent() {
        let mut doc = Document::default();
        assert!(matches!(
            doc.append(42, item("x")),
            Err(Error::NodeNotFound(42))
        ));
    }

    #[test]
    fn test_replace_with_keeps_position() {
        let mut doc = Document::default();
        let first = doc.create_anchor("group-summary");
        doc.create_anchor("footer");

        let replacement = doc
            .replace_with(first, Element::new("div").class("group-summary").into())
            .unwrap();

        assert_eq!(doc.children(doc.root())[0], replacement);
        assert_eq!(doc.parent(first), None);
        assert_eq!(
            doc.html(doc.root()),
            "<body><div class=\"group-summary\"></div><footer></footer></body>"
        );
    }

    #[test]
    fn test_compile_activates_known_attributes_once() {
        let mut doc = Document::default();
        let anchor = doc.create_anchor("div");
        let list = doc
            .append(
                anchor,
                Element::new("ul")
                    .child(Element::new("li").attr("tooltip", "INSTANCE 0: RUNNING"))
                    .child(Element::new("li").attr("title", "plain"))
                    .into(),
            )
            .unwrap();
        let scope = Scope::new().bind("size", "big").unwrap();

        assert_eq!(doc.compile(list, &scope).unwrap(), 1);
        assert_eq!(doc.compile(list, &scope).unwrap(), 0);

        let bindings = doc.active_bindings();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].expression, "INSTANCE 0: RUNNING");
        assert_eq!(bindings[0].scope, scope);
    }

    #[test]
    fn test_custom_binding_attribute() {
        let mut doc = Document::default().with_binding_attribute("ng-click");
        let anchor = doc.create_anchor("div");
        doc.append(
            anchor,
            Element::new("button")
                .attr("ng-click", "toggleShowDetails()")
                .into(),
        )
        .unwrap();

        assert_eq!(doc.compile(anchor, &Scope::new()).unwrap(), 1);
    }
}
