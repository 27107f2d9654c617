use std::collections::HashSet;

use crate::reconcile::{reconcile, CorruptedNode};
use crate::state::PositionalState;
use crate::tree::{NodeId, Tree};

/// Criteria for which nodes count as open, plus the corruption policy.
///
/// A node is open iff it has children and either `open_all` is set, its
/// handle is in `open_nodes`, or its identifier is in `open_identifiers`.
/// A leaf is never open. Descendants of a closed node are never emitted,
/// even when they are individually marked open.
///
/// # Example
///
/// ```
/// # use flattree::FlattenOptions;
/// let options = FlattenOptions::new().open_identifiers(["bravo", "charlie"]);
/// ```
#[derive(Debug, Clone)]
pub struct FlattenOptions<Identifier> {
    pub(crate) open_all: bool,
    pub(crate) open_identifiers: HashSet<Identifier>,
    pub(crate) open_nodes: HashSet<NodeId>,
    pub(crate) fail_on_corruption: bool,
}

impl<Identifier> FlattenOptions<Identifier>
where
    Identifier: Clone + PartialEq + Eq + core::hash::Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every node with children open.
    #[must_use]
    pub const fn open_all(mut self) -> Self {
        self.open_all = true;
        self
    }

    /// Mark a node as open by identifier.
    #[must_use]
    pub fn open_identifier(mut self, identifier: Identifier) -> Self {
        self.open_identifiers.insert(identifier);
        self
    }

    /// Mark several nodes as open by identifier.
    #[must_use]
    pub fn open_identifiers<I>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = Identifier>,
    {
        self.open_identifiers.extend(identifiers);
        self
    }

    /// Mark a node as open by its handle, regardless of its identifier.
    #[must_use]
    pub fn open_node(mut self, node: NodeId) -> Self {
        self.open_nodes.insert(node);
        self
    }

    /// Fail a flatten call on detected state corruption instead of reporting
    /// the anomaly and continuing.
    #[must_use]
    pub const fn fail_on_corruption(mut self) -> Self {
        self.fail_on_corruption = true;
        self
    }
}

impl<Identifier> Default for FlattenOptions<Identifier> {
    fn default() -> Self {
        Self {
            open_all: false,
            open_identifiers: HashSet::new(),
            open_nodes: HashSet::new(),
            fail_on_corruption: false,
        }
    }
}

impl<Identifier> Tree<Identifier>
where
    Identifier: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug,
{
    /// Flatten the whole tree into the ordered sequence of visible nodes.
    ///
    /// Every visited node gets a fresh [`PositionalState`] written in place;
    /// the returned handles reference the arena, they are not copies. Calling
    /// this twice with an unchanged tree and identical options yields
    /// structurally identical output.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptedNode`] when ancestor reconciliation detects an
    /// inconsistent state tree and `fail_on_corruption` is set.
    pub fn flatten(
        &mut self,
        options: &FlattenOptions<Identifier>,
    ) -> Result<Vec<NodeId>, CorruptedNode<Identifier>> {
        flatten_from(self, self.root(), options)
    }

    /// Partially re-flatten: recompute the visible descendants of `node`'s
    /// parent and return them as a fresh sequence.
    ///
    /// The traversal is rooted at the parent so the whole sibling list of
    /// `node` is recomputed while ancestor context (paths, open states,
    /// last-child facts) is reused. Ancestor visible-descendant totals are
    /// reconciled before the walk, so they stay consistent with a
    /// from-scratch flatten.
    ///
    /// The caller is responsible for splicing the returned subsequence into a
    /// previously held full list: replace the `total` entries the parent had
    /// recorded before this call, starting directly after the parent's
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptedNode`] when ancestor reconciliation detects an
    /// inconsistent state tree and `fail_on_corruption` is set.
    pub fn reflatten(
        &mut self,
        node: NodeId,
        options: &FlattenOptions<Identifier>,
    ) -> Result<Vec<NodeId>, CorruptedNode<Identifier>> {
        let traversal_root = self.parent(node).unwrap_or_else(|| self.root());
        flatten_from(self, traversal_root, options)
    }
}

/// Iterative pre-order walk below `traversal_root`.
///
/// An explicit stack of `(node, depth, next child index)` resume frames keeps
/// the walk stack-safe on deep trees; descending pushes the suspended parent
/// frame back first. Closed nodes are still descended into so hidden
/// descendants carry fresh state, they are just never appended to the output.
fn flatten_from<Identifier>(
    tree: &mut Tree<Identifier>,
    traversal_root: NodeId,
    options: &FlattenOptions<Identifier>,
) -> Result<Vec<NodeId>, CorruptedNode<Identifier>>
where
    Identifier: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug,
{
    let mut visible = Vec::new();

    // Last-child lookup per call, primed with ancestor facts on partial calls.
    let mut last_child_paths = HashSet::new();
    reconcile(
        tree,
        traversal_root,
        &mut last_child_paths,
        options.fail_on_corruption,
    )?;

    let mut stack: Vec<(NodeId, i64, usize)> = Vec::new();
    stack.push((traversal_root, tree.node(traversal_root).state.depth, 0));

    while let Some((mut current, mut depth, mut index)) = stack.pop() {
        while index < tree.node(current).children.len() {
            let node = tree.node(current).children[index];

            let path = format!("{}.{index}", tree.node(current).state.path);
            let has_children = tree.has_children(node);
            let open = has_children
                && (options.open_all
                    || options.open_nodes.contains(&node)
                    || tree
                        .node(node)
                        .identifier
                        .as_ref()
                        .is_some_and(|identifier| options.open_identifiers.contains(identifier)));
            let last_child = index == tree.node(current).children.len() - 1;
            let prefix_mask = prefix_mask(&last_child_paths, &path);
            if last_child {
                last_child_paths.insert(path.clone());
            }

            tree.node_mut(node).state = PositionalState {
                depth: depth + 1,
                open,
                last_child,
                has_visible_children: has_children && open,
                prefix_mask,
                path,
                total: 0,
            };

            // Append only when the node and all its ancestors are open.
            if ancestors_open(tree, node) {
                visible.push(node);

                let mut ancestor = tree.node(node).parent;
                while let Some(id) = ancestor {
                    tree.node_mut(id).state.total += 1;
                    ancestor = tree.node(id).parent;
                }
            }

            index += 1;

            if has_children {
                // Suspend the sibling loop; this frame resumes once the
                // subtree below `node` has been completely explored.
                stack.push((current, depth, index));

                current = node;
                depth += 1;
                index = 0;
            }
        }
    }

    Ok(visible)
}

fn ancestors_open<Identifier>(tree: &Tree<Identifier>, node: NodeId) -> bool {
    let mut current = tree.node(node).parent;
    while let Some(id) = current {
        if !tree.node(id).state.open {
            return false;
        }
        current = tree.node(id).parent;
    }
    true
}

/// Connector mask for `path`, read root to node.
///
/// Strips trailing `.N` segments one by one; each stripped prefix is an
/// ancestor path and contributes `'0'` when it is empty or recorded as a last
/// child, `'1'` otherwise.
fn prefix_mask(last_child_paths: &HashSet<String>, path: &str) -> String {
    let mut levels = Vec::new();
    let mut prefix = path;
    while !prefix.is_empty() {
        prefix = prefix.rfind('.').map_or("", |dot| &prefix[..dot]);
        if prefix.is_empty() || last_child_paths.contains(prefix) {
            levels.push('0');
        } else {
            levels.push('1');
        }
    }
    levels.iter().rev().collect()
}
