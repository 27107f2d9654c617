use flattree::{FlattenOptions, NodeData, NodeId, Tree};
use unicode_width::UnicodeWidthStr;

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

/// Left part of one rendered line: connectors derived from the prefix mask,
/// then the label.
fn line(tree: &Tree<&'static str>, id: NodeId) -> String {
    let node = tree.get(id).expect("handle comes from this tree");
    let state = node.state();

    if state.depth == 0 {
        return node.label().to_owned();
    }

    // The leading mask character is the sentinel level and draws nothing.
    let mut rendered = String::new();
    for level in state.prefix_mask.chars().skip(1) {
        rendered.push_str(if level == '0' { "  " } else { "\u{2502} " });
    }
    rendered.push(if state.last_child { '\u{2514}' } else { '\u{251c}' });
    rendered.push('\u{2500}');
    rendered.push(if state.has_visible_children { '\u{252c}' } else { '\u{2500}' });
    rendered.push(' ');
    rendered.push_str(node.label());
    rendered
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = example_tree();
    let visible = tree
        .flatten(&FlattenOptions::new().open_all())
        .expect("freshly built tree is not corrupted");

    let lines = visible
        .iter()
        .map(|&id| line(&tree, id))
        .collect::<Vec<_>>();
    let column = lines.iter().map(|line| line.width()).max().unwrap_or(0);

    for (&id, line) in visible.iter().zip(&lines) {
        let state = tree.get(id).expect("handle comes from this tree").state();
        let padding = " ".repeat(column - line.width());
        println!("{line}{padding}  {} total={}", state.path, state.total);
    }
}
