//! Fuzz harness for the title BST
//!
//! The first line is the query; every other line is inserted as a raw key,
//! valid UTF-8 or not.

#![no_main]

use feedlab_bst::StringBst;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut parts = data.split(|b| *b == b'\n');
    let query = match parts.next().map(std::str::from_utf8) {
        Some(Ok(q)) => q,
        _ => return,
    };

    let mut bst = StringBst::new();
    for key in parts {
        bst.insert_bytes(key);
    }
    assert!(bst.is_ordered());

    let report = bst.search_with_report(query);
    assert!(report.matches.len() + report.skipped <= bst.len());
    let needle = query.to_lowercase();
    for hit in &report.matches {
        assert!(hit.to_lowercase().contains(&needle));
    }
});
