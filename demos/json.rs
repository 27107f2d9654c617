//! Load a JSON document of `{label, id, children}` objects and print the
//! flattened view. Requires the `json` feature:
//! `cargo run --example json --features json`

use flattree::{FlattenOptions, Tree};

const DOCUMENT: &str = r#"{
    "id": "<root>",
    "label": "<root>",
    "children": [
        {"id": "alpha", "label": "Alpha"},
        {
            "id": "bravo",
            "label": "Bravo",
            "children": [
                {
                    "id": "charlie",
                    "label": "Charlie",
                    "children": [
                        {"id": "delta", "label": "Delta", "children": [
                            {"id": "echo", "label": "Echo"},
                            {"id": "foxtrot", "label": "Foxtrot"}
                        ]},
                        {"id": "golf", "label": "Golf"}
                    ]
                },
                {"id": "hotel", "label": "Hotel", "children": [
                    {"id": "india", "label": "India", "children": [
                        {"id": "juliet", "label": "Juliet"}
                    ]}
                ]},
                {"id": "kilo", "label": "Kilo"}
            ]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let document = serde_json::from_str(DOCUMENT)?;
    let mut tree = Tree::from_json(&document);

    let options = FlattenOptions::new()
        .open_identifiers(["<root>", "bravo", "charlie", "hotel"].map(str::to_owned));
    let visible = tree.flatten(&options)?;

    for &id in &visible {
        let node = tree.get(id).expect("handle comes from this tree");
        let state = node.state();
        let depth = usize::try_from(state.depth)?;
        println!(
            "{}{} ({}) total={}",
            "  ".repeat(depth),
            node.label(),
            state.path,
            state.total
        );
    }

    Ok(())
}
