use std::collections::HashSet;

use crate::state::PositionalState;
use crate::tree::{NodeId, Tree};

/// An ancestor's visible-descendant total would have gone negative while
/// undoing a previous subtree contribution.
///
/// This means the state tree was mutated inconsistently between flatten calls,
/// for example totals edited externally or a node moved without re-flattening.
/// The whole flatten result of the failing call must be treated as invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("node might have been corrupted: identifier={identifier:?}, state={state:?}")]
pub struct CorruptedNode<Identifier> {
    /// Handle of the offending ancestor.
    pub node: NodeId,
    /// Its identifier, when it has one.
    pub identifier: Option<Identifier>,
    /// Snapshot of its positional state at detection time.
    pub state: PositionalState,
}

/// Prepare the ancestors of `traversal_root` for a re-flatten.
///
/// Subtracts the traversal root's previous visible-descendant total from
/// itself and every ancestor, undoing the old subtree contribution before the
/// traversal re-adds fresh totals. Along the same walk the last-child path
/// table is primed with already-established ancestor facts, which keeps
/// prefix-mask computation correct for partial calls.
///
/// For a full flatten the walk degenerates to zeroing the sentinel.
///
/// A total that would go negative signals corruption: with
/// `fail_on_corruption` this returns the error, otherwise it reports the
/// anomaly through `tracing` and leaves the negative total as computed. This
/// is a diagnostic path, not a repair.
pub(crate) fn reconcile<Identifier>(
    tree: &mut Tree<Identifier>,
    traversal_root: NodeId,
    last_child_paths: &mut HashSet<String>,
    fail_on_corruption: bool,
) -> Result<(), CorruptedNode<Identifier>>
where
    Identifier: Clone + core::fmt::Debug,
{
    let subtotal = tree.node(traversal_root).state.total;

    let mut current = Some(traversal_root);
    while let Some(id) = current {
        if tree.is_last_child(id) && !tree.node(id).state.path.is_empty() {
            last_child_paths.insert(tree.node(id).state.path.clone());
        }

        let total = tree.node(id).state.total - subtotal;
        tree.node_mut(id).state.total = total;
        if total < 0 {
            let node = tree.node(id);
            let error = CorruptedNode {
                node: id,
                identifier: node.identifier.clone(),
                state: node.state.clone(),
            };
            if fail_on_corruption {
                return Err(error);
            }
            tracing::warn!(
                identifier = ?error.identifier,
                parent = ?node.parent,
                children = node.children.len(),
                state = ?error.state,
                "node might have been corrupted"
            );
        }

        current = tree.node(id).parent;
    }

    Ok(())
}
