//! I define the host page that navigation fragments are injected into.

use ego_tree::{NodeId, NodeRef, Tree};
use scraper::{ElementRef, Html, Node, node::Element};

use crate::error::NavError;
use crate::fragment::NavFragment;
use crate::key::ActiveKey;
use crate::outcome::Injection;

/// An HTML document, owned by the caller and handed to the loader explicitly.
#[derive(Clone, Debug)]
pub struct Page {
    dom: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            dom: Html::parse_document(html),
        }
    }

    pub fn dom(&self) -> &Html {
        &self.dom
    }

    /// Serialize the whole document.
    pub fn html(&self) -> String {
        self.dom.html()
    }

    /// The element whose id is `id`, if any.
    pub fn container(&self, id: &str) -> Option<ElementRef<'_>> {
        self.find(id)
            .and_then(|node_id| self.dom.tree.get(node_id))
            .and_then(ElementRef::wrap)
    }

    /// Replace the whole content of the container `container_id` with `fragment`,
    /// and mark the links designated by `highlight`.
    ///
    /// The page is left untouched if there is no such container.
    pub fn inject(
        &mut self,
        container_id: &str,
        fragment: &NavFragment,
        highlight: &Highlight,
    ) -> Result<Injection, NavError> {
        let container = self
            .find(container_id)
            .ok_or_else(|| NavError::MissingContainer(container_id.to_string()))?;
        let parsed = fragment.parse();
        self.clear(container);
        let mut injection = Injection::default();
        let mut visit = |node: &mut Node| {
            if let Node::Element(element) = node {
                highlight.visit(element, &mut injection);
            }
        };
        for child in parsed.root_element().children() {
            graft(&mut self.dom.tree, container, child, &mut visit);
        }
        self.compact();
        Ok(injection)
    }

    /// Only nodes attached to the document are searched.
    fn find(&self, id: &str) -> Option<NodeId> {
        self.dom
            .tree
            .root()
            .descendants()
            .find(|n| n.value().as_element().and_then(Element::id) == Some(id))
            .map(|n| n.id())
    }

    fn clear(&mut self, node_id: NodeId) {
        let children: Vec<NodeId> = self
            .dom
            .tree
            .get(node_id)
            .map(|n| n.children().map(|c| c.id()).collect())
            .unwrap_or_default();
        for child in children {
            if let Some(mut node) = self.dom.tree.get_mut(child) {
                node.detach();
            }
        }
    }

    /// Rebuild the tree from the nodes still attached to the document.
    ///
    /// Detached nodes stay in the arena of an `ego_tree::Tree`,
    /// so without this every load would grow the page.
    fn compact(&mut self) {
        let root = self.dom.tree.root();
        let mut tree = Tree::new(root.value().clone());
        let root_id = tree.root().id();
        for child in root.children() {
            graft(&mut tree, root_id, child, &mut |_| {});
        }
        self.dom.tree = tree;
    }
}

/// Copy `source` (and its subtree) into `tree`, under `parent`,
/// passing every copied node to `visit` before it is inserted.
fn graft<F: FnMut(&mut Node)>(
    tree: &mut Tree<Node>,
    parent: NodeId,
    source: NodeRef<Node>,
    visit: &mut F,
) {
    let mut value = source.value().clone();
    visit(&mut value);
    let Some(mut parent) = tree.get_mut(parent) else {
        return;
    };
    let id = parent.append(value).id();
    for child in source.children() {
        graft(tree, id, child, visit);
    }
}

/// Which links to highlight, and how.
#[derive(Clone, Copy, Debug)]
pub struct Highlight<'a> {
    /// Attribute of the links holding their key
    pub attr: &'a str,
    /// Class added to the active link
    pub class: &'a str,
    pub key: &'a ActiveKey,
}

impl Highlight<'_> {
    /// Count `element` if it is a keyed link, and mark it if it is the active one.
    fn visit(&self, element: &mut Element, injection: &mut Injection) {
        let Some(key) = self.link_key(element) else {
            return;
        };
        injection.keyed_links += 1;
        if self.key.matches(key) {
            self.mark(element);
            injection.marked += 1;
        }
    }

    /// The key of this element, if it is a link carrying one.
    fn link_key<'e>(&self, element: &'e Element) -> Option<&'e str> {
        if element.name() != "a" {
            return None;
        }
        element.attr(self.attr)
    }

    /// Add the active class to `element`, keeping its other classes.
    ///
    /// # Precondition
    /// `element` must carry the key attribute.
    fn mark(&self, element: &mut Element) {
        let existing = element
            .attrs
            .iter_mut()
            .find(|(name, _)| &*name.local == "class");
        if let Some((_, value)) = existing {
            if !value.split_ascii_whitespace().any(|c| c == self.class) {
                let classes = format!("{} {}", &**value, self.class);
                *value = classes.trim_start().into();
            }
            return;
        }
        let Some(mut name) = element
            .attrs
            .iter()
            .find(|(name, _)| &*name.local == self.attr)
            .map(|(name, _)| name.clone())
        else {
            debug_assert!(false, "marked element has no {} attribute", self.attr);
            return;
        };
        name.local = "class".into();
        element.attrs.insert(name, self.class.into());
    }
}
