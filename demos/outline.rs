//! Indented `+`/`-` outline plus the partial re-flatten and splice protocol:
//! after closing two nodes only the affected sibling list is recomputed and
//! spliced into the previously held flat list.

use flattree::{FlattenOptions, NodeData, NodeId, Tree};

fn example_tree() -> Tree<&'static str> {
    let mut tree = Tree::new();
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

fn print_outline(tree: &Tree<&'static str>, visible: &[NodeId]) {
    for &id in visible {
        let node = tree.get(id).expect("handle comes from this tree");
        let state = node.state();
        let depth = usize::try_from(state.depth).expect("real nodes sit below the sentinel");

        let marker = if state.open {
            "- "
        } else if node.has_children() {
            "+ "
        } else {
            "  "
        };
        println!(
            "{}{marker}{} ({})",
            "  ".repeat(depth),
            node.label(),
            state.path
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = example_tree();
    let options = FlattenOptions::new()
        .open_identifiers(["<root>", "bravo", "charlie", "delta", "hotel", "india"]);
    let mut nodes = tree
        .flatten(&options)
        .expect("freshly built tree is not corrupted");

    println!("full flatten:");
    print_outline(&tree, &nodes);

    // Close delta and india. Instead of re-flattening the whole tree, rebuild
    // the sibling list below charlie's parent and splice it into place.
    let charlie = nodes
        .iter()
        .copied()
        .find(|&id| tree.get(id).and_then(|node| node.identifier().copied()) == Some("charlie"))
        .expect("charlie is visible");
    let parent = tree.parent(charlie).expect("charlie is not a root");
    let parent_position = nodes
        .iter()
        .position(|&id| id == parent)
        .expect("parent is visible");
    let previous_total = usize::try_from(tree.get(parent).expect("valid handle").state().total)
        .expect("healthy totals are not negative");

    let reduced = FlattenOptions::new().open_identifiers(["<root>", "bravo", "charlie", "hotel"]);
    let siblings = tree
        .reflatten(charlie, &reduced)
        .expect("tree was not edited between calls");
    drop(nodes.splice(
        parent_position + 1..=parent_position + previous_total,
        siblings,
    ));

    println!();
    println!("after closing delta and india (spliced, not re-flattened):");
    print_outline(&tree, &nodes);
}
