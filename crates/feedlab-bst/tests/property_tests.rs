//! Property tests for feedlab-bst
//!
//! Ordering invariants and substring-search semantics.

use feedlab_bst::{IntBst, MAX_DEPTH, StringBst};
use proptest::prelude::*;

/// Preorder walk of the same insertion rule, on a plain vector model.
fn model_preorder(keys: &[String]) -> Vec<String> {
    // Index-based tree built with the same rule: strictly less goes left.
    let mut nodes: Vec<(String, Option<usize>, Option<usize>)> = Vec::new();
    for key in keys {
        let index = nodes.len();
        nodes.push((key.clone(), None, None));
        if index == 0 {
            continue;
        }
        let mut at = 0;
        loop {
            let go_left = key.as_bytes() < nodes[at].0.as_bytes();
            let next = if go_left { nodes[at].1 } else { nodes[at].2 };
            match next {
                Some(n) => at = n,
                None => {
                    if go_left {
                        nodes[at].1 = Some(index);
                    } else {
                        nodes[at].2 = Some(index);
                    }
                    break;
                }
            }
        }
    }

    let mut out = Vec::new();
    let mut pending: Vec<usize> = if nodes.is_empty() { vec![] } else { vec![0] };
    while let Some(i) = pending.pop() {
        out.push(nodes[i].0.clone());
        if let Some(r) = nodes[i].2 {
            pending.push(r);
        }
        if let Some(l) = nodes[i].1 {
            pending.push(l);
        }
    }
    out
}

proptest! {
    // Every left descendant < node, every right descendant >= node.
    #[test]
    fn prop_string_bst_ordered(keys in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..80)) {
        let bst: StringBst = keys.iter().map(String::as_str).collect();
        prop_assert!(bst.is_ordered());
        prop_assert_eq!(bst.len(), keys.len());
    }

    // search(q) returns exactly the keys containing q (case-insensitively), in preorder.
    #[test]
    fn prop_search_matches_filtered_preorder(
        keys in proptest::collection::vec("[a-cA-C]{0,6}", 0..60),
        query in "[a-cA-C]{1,2}"
    ) {
        let bst: StringBst = keys.iter().map(String::as_str).collect();
        let needle = query.to_lowercase();
        let expected: Vec<String> = model_preorder(&keys)
            .into_iter()
            .filter(|k| k.to_lowercase().contains(&needle))
            .collect();
        prop_assert_eq!(bst.search(&query), expected);
    }

    // In-order traversal of the int tree is the sorted input.
    #[test]
    fn prop_int_bst_in_order_sorted(values in proptest::collection::vec(-1000i64..1000, 0..150)) {
        let mut bst = IntBst::new();
        for v in &values {
            bst.insert(*v);
        }
        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(bst.in_order(), sorted);
        prop_assert_eq!(bst.len(), values.len());
    }

    // Rejected input never changes the tree.
    #[test]
    fn prop_int_bst_rejects_text(
        values in proptest::collection::vec(any::<i32>(), 0..30),
        junk in "[a-z]{1,10}"
    ) {
        let mut bst = IntBst::new();
        for v in &values {
            bst.insert(i64::from(*v));
        }
        let before = serde_json::to_value(&bst).unwrap();
        prop_assert!(bst.insert_raw(&serde_json::Value::String(junk)).is_err());
        prop_assert_eq!(serde_json::to_value(&bst).unwrap(), before);
    }

    // Sorted runs of any length keep the tree within the depth limit.
    #[test]
    fn prop_int_bst_height_is_bounded(start in -1000i64..1000, extra in 0usize..400, descending in any::<bool>()) {
        let mut bst = IntBst::new();
        let mut values: Vec<i64> = (start..start + (MAX_DEPTH + extra) as i64).collect();
        if descending {
            values.reverse();
        }
        let added = values.iter().filter(|v| bst.insert(**v)).count();
        prop_assert_eq!(added, MAX_DEPTH);
        prop_assert!(bst.height() <= MAX_DEPTH);
        prop_assert!(serde_json::to_value(&bst).is_ok());
    }
}
