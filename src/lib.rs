#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
Flatten nested tree structures into an ordered list of visible nodes.

A [`Tree`] is an arena of labeled nodes below an implicit root sentinel.
[`Tree::flatten`] walks it iteratively (stack-safe on deep trees) and returns
the handles of all currently visible nodes in traversal order, writing a
[`PositionalState`] into every visited node: its dot-segment `path`, `depth`,
last-sibling flag, the connector `prefix_mask` used to draw vertical lines in
tree views, and the visible-descendant `total`.

Which nodes count as open is decided by [`FlattenOptions`]: all of them, a set
of identifiers, or a set of [`NodeId`] handles. A node is only emitted when it
and all of its ancestors are open.

After toggling a single node there is no need to re-flatten everything:
[`Tree::reflatten`] recomputes just the affected sibling list and reconciles
the ancestor totals so the result can be spliced into a previously computed
full list. Inconsistent edits between calls are detected during that
reconciliation and either reported through `tracing` or returned as a
[`CorruptedNode`] error, depending on the options.

# Example

```
use flattree::{FlattenOptions, NodeData, Tree};

let mut tree = Tree::new();
let root = tree.insert(tree.root(), NodeData::new("Root").identifier("root"));
tree.insert(root, NodeData::new("Leaf").identifier("leaf"));

let visible = tree.flatten(&FlattenOptions::new().open_identifier("root"))?;
assert_eq!(visible.len(), 2);

let leaf = visible[1];
assert_eq!(tree.get(leaf).unwrap().state().path, ".0.0");
assert_eq!(tree.get(leaf).unwrap().state().depth, 1);
# Ok::<(), flattree::CorruptedNode<&str>>(())
```

The flattened sequence holds handles to (not copies of) the traversed nodes,
so stale state is overwritten in place on the next flatten pass.
*/

mod flatten;
#[cfg(feature = "json")]
mod json;
mod node;
mod reconcile;
mod state;
mod tree;

pub use crate::flatten::FlattenOptions;
pub use crate::node::{Node, NodeData};
pub use crate::reconcile::CorruptedNode;
pub use crate::state::PositionalState;
pub use crate::tree::{NodeId, Tree};
