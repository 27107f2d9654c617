/// Positional descriptor of a node within the flattened view.
///
/// Computed and overwritten as a whole record by every flatten pass that
/// touches the node. Callers must not treat it as durable across structural
/// tree edits without re-flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalState {
    /// Dot-segment encoded chain of child indices from the traversal root,
    /// e.g. `.0.1.2`. Equals the parent's path plus `.` plus the node's index
    /// in its parent's children.
    pub path: String,

    /// Zero based depth. `-1` is reserved for the root sentinel, so the first
    /// real level is depth 0.
    pub depth: i64,

    /// Whether the node's children are eligible for the flattened output.
    /// A node without children is never open.
    pub open: bool,

    /// Whether the node had no next sibling at flatten time.
    pub last_child: bool,

    /// Whether the node has children which are currently shown ("more").
    pub has_visible_children: bool,

    /// One `'0'`/`'1'` character per path segment, read root to node.
    /// `'0'` means the ancestor at that level was the last child of its parent
    /// (draw a blank when rendering), `'1'` means a vertical continuation line
    /// passes through that level.
    pub prefix_mask: String,

    /// Number of nodes from this subtree currently included in the flattened
    /// output. Never negative in a healthy tree; a negative value is only
    /// observable after the diagnostic (non-failing) corruption path.
    pub total: i64,
}

impl PositionalState {
    /// State of the root sentinel: pre-root depth, always open, empty path.
    pub(crate) const fn root() -> Self {
        Self {
            path: String::new(),
            depth: -1,
            open: true,
            last_child: false,
            has_visible_children: false,
            prefix_mask: String::new(),
            total: 0,
        }
    }
}

impl Default for PositionalState {
    fn default() -> Self {
        Self {
            path: String::new(),
            depth: 0,
            open: false,
            last_child: false,
            has_visible_children: false,
            prefix_mask: String::new(),
            total: 0,
        }
    }
}
