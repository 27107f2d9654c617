use serde_json::Value;

use crate::node::NodeData;
use crate::tree::{NodeId, Tree};

impl Tree<String> {
    /// Build a tree from a JSON document of nested `{label, id, children}`
    /// objects.
    ///
    /// A single object becomes one root below the sentinel; an array becomes
    /// several sibling roots. Missing `label`, `id` or `children` fields are
    /// defaults, never errors. Scalar values load as leaf nodes with their
    /// display text as label. Non-string `id` values are matched through
    /// their JSON text representation.
    ///
    /// # Example
    ///
    /// ```
    /// use flattree::{FlattenOptions, Tree};
    ///
    /// let document = serde_json::json!({
    ///     "id": "root",
    ///     "label": "Root",
    ///     "children": [{"label": "Leaf"}],
    /// });
    /// let mut tree = Tree::from_json(&document);
    /// let visible = tree.flatten(&FlattenOptions::new().open_all())?;
    /// assert_eq!(visible.len(), 2);
    /// # Ok::<(), flattree::CorruptedNode<String>>(())
    /// ```
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let mut tree = Self::new();
        let root = tree.root();

        let mut stack: Vec<(NodeId, &Value)> = Vec::new();
        match value {
            Value::Array(values) => stack.extend(values.iter().rev().map(|child| (root, child))),
            other => stack.push((root, other)),
        }

        while let Some((parent, value)) = stack.pop() {
            let node = tree.insert(parent, node_data(value));
            if let Some(children) = value.get("children").and_then(Value::as_array) {
                stack.extend(children.iter().rev().map(|child| (node, child)));
            }
        }

        tree
    }
}

fn node_data(value: &Value) -> NodeData<String> {
    let Value::Object(object) = value else {
        return NodeData::new(scalar_label(value));
    };

    let label = object
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let identifier = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    };

    let mut data = NodeData::new(label);
    if let Some(identifier) = identifier {
        data = data.identifier(identifier);
    }
    data
}

fn scalar_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::flatten::FlattenOptions;

    fn fixture() -> Value {
        json!({
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
                                {
                                    "id": "delta",
                                    "label": "Delta",
                                    "children": [
                                        {"id": "echo", "label": "Echo"},
                                        {"id": "foxtrot", "label": "Foxtrot"},
                                    ],
                                },
                                {"id": "golf", "label": "Golf"},
                            ],
                        },
                        {
                            "id": "hotel",
                            "label": "Hotel",
                            "children": [
                                {
                                    "id": "india",
                                    "label": "India",
                                    "children": [{"id": "juliet", "label": "Juliet"}],
                                },
                            ],
                        },
                        {"id": "kilo", "label": "Kilo"},
                    ],
                },
            ],
        })
    }

    #[test]
    fn object_document_loads_as_single_root() {
        let mut tree = Tree::from_json(&fixture());
        let visible = tree.flatten(&FlattenOptions::new().open_all()).unwrap();
        let found = visible
            .iter()
            .map(|&id| {
                let node = tree.get(id).unwrap();
                (node.label().to_owned(), node.state().path.clone())
            })
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            [
                ("<root>".to_owned(), ".0".to_owned()),
                ("Alpha".to_owned(), ".0.0".to_owned()),
                ("Bravo".to_owned(), ".0.1".to_owned()),
                ("Charlie".to_owned(), ".0.1.0".to_owned()),
                ("Delta".to_owned(), ".0.1.0.0".to_owned()),
                ("Echo".to_owned(), ".0.1.0.0.0".to_owned()),
                ("Foxtrot".to_owned(), ".0.1.0.0.1".to_owned()),
                ("Golf".to_owned(), ".0.1.0.1".to_owned()),
                ("Hotel".to_owned(), ".0.1.1".to_owned()),
                ("India".to_owned(), ".0.1.1.0".to_owned()),
                ("Juliet".to_owned(), ".0.1.1.0.0".to_owned()),
                ("Kilo".to_owned(), ".0.1.2".to_owned()),
            ]
        );
    }

    #[test]
    fn array_document_loads_as_sibling_roots() {
        let document = fixture();
        let roots = document.get("children").unwrap();
        let mut tree = Tree::from_json(roots);

        let options = FlattenOptions::new()
            .open_identifiers(["bravo", "charlie", "hotel", "india"].map(str::to_owned));
        let visible = tree.flatten(&options).unwrap();
        let found = visible
            .iter()
            .map(|&id| {
                let node = tree.get(id).unwrap();
                (node.label().to_owned(), node.state().path.clone())
            })
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            [
                ("Alpha".to_owned(), ".0".to_owned()),
                ("Bravo".to_owned(), ".1".to_owned()),
                ("Charlie".to_owned(), ".1.0".to_owned()),
                ("Delta".to_owned(), ".1.0.0".to_owned()),
                ("Golf".to_owned(), ".1.0.1".to_owned()),
                ("Hotel".to_owned(), ".1.1".to_owned()),
                ("India".to_owned(), ".1.1.0".to_owned()),
                ("Juliet".to_owned(), ".1.1.0.0".to_owned()),
                ("Kilo".to_owned(), ".1.2".to_owned()),
            ]
        );
    }

    #[test]
    fn permissive_payload_shapes() {
        let document = json!([
            {"label": "no identifier"},
            {"id": 42, "label": "numeric identifier"},
            "bare string",
            7,
        ]);
        let mut tree = Tree::from_json(&document);
        let visible = tree.flatten(&FlattenOptions::new()).unwrap();

        let labels = visible
            .iter()
            .map(|&id| tree.get(id).unwrap().label().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["no identifier", "numeric identifier", "bare string", "7"]
        );

        assert_eq!(tree.get(visible[0]).unwrap().identifier(), None);
        assert_eq!(
            tree.get(visible[1]).unwrap().identifier(),
            Some(&"42".to_owned())
        );
    }
}
