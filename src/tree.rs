use crate::node::{Node, NodeData};
use crate::state::PositionalState;

/// Handle to a [`Node`] in a [`Tree`].
///
/// Cheap to copy and stable for the lifetime of the tree: the arena is
/// insert-only, so a handle never dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Arena of labeled nodes forming a single tree below an implicit root
/// sentinel.
///
/// The sentinel occupies slot 0, is always considered open, sits at depth `-1`
/// and never appears in flattened output. A document with a single root
/// object is one child of the sentinel; a bare list of sibling roots is
/// several. Parent links are non-owning handles, ownership of children is
/// strictly parent to child.
///
/// # Example
///
/// ```
/// use flattree::{FlattenOptions, NodeData, Tree};
///
/// let mut tree = Tree::new();
/// let bravo = tree.insert(tree.root(), NodeData::new("Bravo").identifier("bravo"));
/// tree.insert(bravo, NodeData::new("Charlie").identifier("charlie"));
///
/// let visible = tree.flatten(&FlattenOptions::new().open_all())?;
/// assert_eq!(visible.len(), 2);
/// # Ok::<(), flattree::CorruptedNode<&str>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree<Identifier> {
    pub(crate) nodes: Vec<Node<Identifier>>,
}

impl<Identifier> Tree<Identifier> {
    /// Create an empty tree holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                identifier: None,
                label: String::new(),
                parent: None,
                children: Vec::new(),
                state: PositionalState::root(),
            }],
        }
    }

    /// Handle of the root sentinel.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of real nodes (the sentinel does not count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new node as the last child of `parent` and return its handle.
    pub fn insert(&mut self, parent: NodeId, data: NodeData<Identifier>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            identifier: data.identifier,
            label: data.label,
            parent: Some(parent),
            children: Vec::new(),
            state: PositionalState::default(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<Identifier>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<Identifier> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<Identifier> {
        &mut self.nodes[id.0]
    }

    /// Get the child of `id` at the given index.
    #[must_use]
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// Child handles of `id` in traversal order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The sibling directly after `id` in its parent's children.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent?;
        let siblings = &self.node(parent).children;
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index + 1).copied()
    }

    /// The sibling directly before `id` in its parent's children.
    #[must_use]
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent?;
        let siblings = &self.node(parent).children;
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index.checked_sub(1)?).copied()
    }

    #[must_use]
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.node(id).children.is_empty()
    }

    /// Whether no next sibling exists.
    #[must_use]
    pub fn is_last_child(&self, id: NodeId) -> bool {
        self.next_sibling(id).is_none()
    }

    /// Whether `descendant` is a strict descendant of `ancestor`.
    ///
    /// Walks the parent chain of `descendant`; a node does not contain itself.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        if ancestor == descendant {
            return false;
        }
        let mut current = self.node(descendant).parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }
}

impl<Identifier> Default for Tree<Identifier> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Tree<&'static str> {
    /// Fixture: `<root>` → alpha, bravo{charlie{delta{echo, foxtrot}, golf},
    /// hotel{india{juliet}}, kilo}.
    pub(crate) fn example() -> Self {
        let mut tree = Self::new();
        let root = tree.insert(tree.root(), NodeData::new("<root>").identifier("<root>"));
        tree.insert(root, NodeData::new("Alpha").identifier("alpha"));
        let bravo = tree.insert(root, NodeData::new("Bravo").identifier("bravo"));
        let charlie = tree.insert(bravo, NodeData::new("Charlie").identifier("charlie"));
        let delta = tree.insert(charlie, NodeData::new("Delta").identifier("delta"));
        tree.insert(delta, NodeData::new("Echo").identifier("echo"));
        tree.insert(delta, NodeData::new("Foxtrot").identifier("foxtrot"));
        tree.insert(charlie, NodeData::new("Golf").identifier("golf"));
        let hotel = tree.insert(bravo, NodeData::new("Hotel").identifier("hotel"));
        let india = tree.insert(hotel, NodeData::new("India").identifier("india"));
        tree.insert(india, NodeData::new("Juliet").identifier("juliet"));
        tree.insert(bravo, NodeData::new("Kilo").identifier("kilo"));
        tree
    }

    /// Same nodes as [`example`](Self::example) but without the `<root>`
    /// wrapper, so alpha and bravo are sibling roots below the sentinel.
    pub(crate) fn example_forest() -> Self {
        let mut tree = Self::new();
        tree.insert(tree.root(), NodeData::new("Alpha").identifier("alpha"));
        let bravo = tree.insert(tree.root(), NodeData::new("Bravo").identifier("bravo"));
        let charlie = tree.insert(bravo, NodeData::new("Charlie").identifier("charlie"));
        let delta = tree.insert(charlie, NodeData::new("Delta").identifier("delta"));
        tree.insert(delta, NodeData::new("Echo").identifier("echo"));
        tree.insert(delta, NodeData::new("Foxtrot").identifier("foxtrot"));
        tree.insert(charlie, NodeData::new("Golf").identifier("golf"));
        let hotel = tree.insert(bravo, NodeData::new("Hotel").identifier("hotel"));
        let india = tree.insert(hotel, NodeData::new("India").identifier("india"));
        tree.insert(india, NodeData::new("Juliet").identifier("juliet"));
        tree.insert(bravo, NodeData::new("Kilo").identifier("kilo"));
        tree
    }

    pub(crate) fn find(&self, identifier: &str) -> NodeId {
        NodeId(
            self.nodes
                .iter()
                .position(|node| node.identifier == Some(identifier))
                .expect("identifier exists in the example tree"),
        )
    }
}
