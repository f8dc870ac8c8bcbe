use std::collections::HashMap;

use crate::class_list::ClassList;
use crate::error::DomError;
use crate::node::{Node, NodeId, NodeKind};

/// Retained node tree.
///
/// Nodes live in an id keyed arena. Detaching a node never frees it: callers
/// that created a subtree are responsible for calling [`Document::remove`]
/// once it is no longer needed. Text nodes are the exception, they are freed
/// as soon as they are cleared out of their parent.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::element("body"));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// The document root, an element with the `body` tag.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(&id).ok_or(DomError::NodeNotFound(id))
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.insert(Node::element(tag))
    }

    /// Create an element with an initial class string.
    pub fn create_element_with_class(&mut self, tag: &str, class_name: &str) -> NodeId {
        let mut node = Node::element(tag);
        node.class_list = ClassList::parse(class_name);
        self.insert(node)
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.insert(Node::text(text))
    }

    // -------------------------------------------------------------------------
    // Tree structure
    // -------------------------------------------------------------------------

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Append `child` as the last child of `parent`, moving it out of its
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.contains(child) {
            return Err(DomError::NodeNotFound(child));
        }
        let parent_node = self.nodes.get(&parent).ok_or(DomError::NodeNotFound(parent))?;
        if parent_node.is_text() {
            return Err(DomError::TextParent(parent));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    /// Take a node out of its parent. No-op for nodes without a parent.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let parent = self.node_mut(id)?.parent.take();
        if let Some(parent) = parent
            && let Some(parent_node) = self.nodes.get_mut(&parent)
        {
            parent_node.children.retain(|c| *c != id);
        }
        Ok(())
    }

    /// Empty a node. Element children are detached and returned, text
    /// children are freed.
    pub fn clear_children(&mut self, id: NodeId) -> Result<Vec<NodeId>, DomError> {
        let children = std::mem::take(&mut self.node_mut(id)?.children);
        let mut detached = Vec::with_capacity(children.len());
        for child in children {
            let is_text = match self.nodes.get_mut(&child) {
                Some(node) => {
                    node.parent = None;
                    node.is_text()
                }
                None => continue,
            };
            if is_text {
                self.nodes.remove(&child);
            } else {
                detached.push(child);
            }
        }
        Ok(detached)
    }

    /// Detach a node and free it together with its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        if id == self.root {
            return Err(DomError::HierarchyRequest {
                parent: self.root,
                child: id,
            });
        }
        self.detach(id)?;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
        }
        log::trace!("[remove] freed subtree of {id}, {} nodes left", self.nodes.len());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Replace the content of a node with a single text node.
    /// An empty string leaves the node empty.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        if let NodeKind::Text(current) = &mut self.node_mut(id)?.kind {
            *current = text.to_string();
            return Ok(());
        }
        self.clear_children(id)?;
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node)?;
        }
        Ok(())
    }

    /// Concatenated text of the node and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn class_list(&self, id: NodeId) -> Option<&ClassList> {
        self.nodes.get(&id).map(|n| &n.class_list)
    }

    pub fn class_name(&self, id: NodeId) -> String {
        self.class_list(id).map(ToString::to_string).unwrap_or_default()
    }

    /// Replace all classes with the ones in `class_name`.
    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) -> Result<(), DomError> {
        self.node_mut(id)?.class_list = ClassList::parse(class_name);
        Ok(())
    }

    pub fn add_class(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.node_mut(id)?.class_list.add(name))
    }

    pub fn remove_class(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.node_mut(id)?.class_list.remove(name))
    }

    pub fn toggle_class(&mut self, id: NodeId, name: &str, force: bool) -> Result<(), DomError> {
        self.node_mut(id)?.class_list.toggle(name, force);
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, name: &str) -> bool {
        self.class_list(id).is_some_and(|c| c.contains(name))
    }
}
