use crate::state::PositionalState;
use crate::tree::NodeId;

/// One node in a [`Tree`](crate::Tree).
///
/// # Identifier
///
/// The generic argument `Identifier` is an optional opaque key used to match a
/// node against the open set of [`FlattenOptions`](crate::FlattenOptions) by
/// value. Nodes without an identifier can still be opened through their
/// [`NodeId`] handle.
///
/// The identifier does not need to be a `String` and is therefore generic.
/// Indices, interned symbols or filenames all work as long as the type is
/// hashable and comparable.
///
/// Children are owned by their parent; the `parent` link is a non-owning
/// arena handle.
#[derive(Debug, Clone)]
pub struct Node<Identifier> {
    pub(crate) identifier: Option<Identifier>,
    pub(crate) label: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) state: PositionalState,
}

impl<Identifier> Node<Identifier> {
    #[must_use]
    pub const fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle of the parent node. Only the root sentinel has none.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in traversal order. Insertion order is semantically
    /// meaningful: it determines `path` and sibling order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The positional descriptor written by the last flatten pass that
    /// touched this node.
    #[must_use]
    pub const fn state(&self) -> &PositionalState {
        &self.state
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Raw payload for a to-be-inserted [`Node`], with explicit defaults.
///
/// Missing label or identifier are defaults, never errors.
///
/// # Example
///
/// ```
/// # use flattree::NodeData;
/// let data = NodeData::new("Bravo").identifier("bravo");
/// ```
#[derive(Debug, Clone)]
pub struct NodeData<Identifier> {
    pub(crate) identifier: Option<Identifier>,
    pub(crate) label: String,
}

impl<Identifier> NodeData<Identifier> {
    /// Create a payload with the given display label and no identifier.
    #[must_use]
    pub fn new<T>(label: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            identifier: None,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }
}

impl<Identifier> Default for NodeData<Identifier> {
    fn default() -> Self {
        Self {
            identifier: None,
            label: String::new(),
        }
    }
}
