use louvre_tree::{NodeKind, parse};
use proptest::prelude::*;

/// Collapse whitespace runs the way text blocks do.
fn normalize(text: &str) -> String {
    text.split([' ', '\n'])
        .map(|word| word.replace('\t', ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn only_text(source: &str) -> Option<String> {
    let tree = parse(source).expect("text should parse");
    let root = tree.root();
    assert!(root.child_count() <= 1, "{}", tree);
    root.child(0).map(|child| {
        assert_eq!(child.kind(), &NodeKind::Text);
        child.text().unwrap_or_default().to_string()
    })
}

proptest! {
    #[test]
    fn escaped_hashes_halve(prefix in "[a-z]{0,5}", n in 1usize..6, suffix in "[a-z]{0,5}") {
        let source = format!("{}{}{}", prefix, "#".repeat(2 * n), suffix);
        let expected = format!("{}{}{}", prefix, "#".repeat(n), suffix);
        prop_assert_eq!(only_text(&source), Some(expected));
    }

    #[test]
    fn whitespace_collapses(
        words in prop::collection::vec("[a-z]{1,8}", 1..8),
        separators in prop::collection::vec("[ \t\n]*[ \n][ \t\n]*", 8),
        lead in "[ \t\n]*",
        trail in "[ \t\n]*",
    ) {
        let mut source = lead.clone();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                source.push_str(&separators[i - 1]);
            }
            source.push_str(word);
        }
        source.push_str(&trail);
        prop_assert_eq!(only_text(&source), Some(words.join(" ")));
    }

    #[test]
    fn plain_text_is_one_node(text in "[a-zA-Z0-9àèìòùáéíóú ]{0,200}") {
        let expected = normalize(&text);
        let actual = only_text(&text);
        if expected.is_empty() {
            prop_assert_eq!(actual, None);
        } else {
            prop_assert_eq!(actual, Some(expected));
        }
    }

    #[test]
    fn balanced_input_returns_root(ops in prop::collection::vec(0u8..3, 0..40)) {
        let mut source = String::new();
        let mut depth = 0usize;
        let mut opens = 0usize;
        let mut breaks = 0usize;
        for op in ops {
            match op {
                0 => {
                    source.push_str("#item ");
                    depth += 1;
                    opens += 1;
                }
                1 => {
                    source.push_str("# ");
                    breaks += 1;
                }
                _ if depth > 0 => {
                    source.push_str("#end ");
                    depth -= 1;
                }
                _ => {}
            }
        }
        for _ in 0..depth {
            source.push_str("#end\n");
        }

        let tree = parse(&source).expect("balanced input should parse");
        prop_assert!(tree.is_balanced());
        prop_assert!(tree.head().is_root());
        prop_assert_eq!(tree.head().kind(), &NodeKind::Root);
        prop_assert_eq!(tree.node_count(), 1 + opens + breaks);
        for node in tree.iter() {
            for (position, child) in node.children().enumerate() {
                prop_assert_eq!(child.sibling_index(), position);
            }
        }
    }
}
