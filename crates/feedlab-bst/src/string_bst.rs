use feedlab_node::{Link, Node, dismantle};
use std::borrow::Cow;

/// Result of a substring search, including how many stored keys could not be
/// read as text and were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub matches: Vec<String>,
    pub skipped: usize,
}

/// Binary search tree over byte-string keys.
///
/// Keys are compared bytewise, which for valid UTF-8 is the same as
/// comparing code points. Keys normally come from `&str`, but raw bytes from
/// the store are accepted as-is so a single bad row cannot block insertion.
#[derive(Debug, Default)]
pub struct StringBst {
    root: Link<Vec<u8>>,
    size: usize,
}

impl StringBst {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    pub fn insert(&mut self, key: &str) {
        self.insert_bytes(key.as_bytes());
    }

    pub fn insert_bytes(&mut self, key: &[u8]) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.value.as_slice() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(key.to_vec()));
        self.size += 1;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Keys whose lowercase form contains the lowercase query, in preorder.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_with_report(query).matches
    }

    /// Like [`search`](Self::search), but also counts keys that are not text.
    ///
    /// An empty query matches nothing.
    pub fn search_with_report(&self, query: &str) -> SearchReport {
        let mut report = SearchReport::default();
        if query.is_empty() {
            return report;
        }
        let needle = query.to_lowercase();

        for key in self.preorder() {
            match std::str::from_utf8(key) {
                Ok(text) => {
                    if text.to_lowercase().contains(&needle) {
                        report.matches.push(text.to_string());
                    }
                }
                Err(_) => report.skipped += 1,
            }
        }
        report
    }

    /// Keys in preorder: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&[u8]> {
        let mut out = Vec::with_capacity(self.size);
        let mut pending: Vec<&Node<Vec<u8>>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            out.push(node.value.as_slice());
            // Right first so the left subtree is visited next.
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        out
    }

    /// Keys in sorted order, lossily decoded.
    pub fn in_order(&self) -> Vec<Cow<'_, str>> {
        let mut out = Vec::with_capacity(self.size);
        let mut pending: Vec<&Node<Vec<u8>>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            out.push(String::from_utf8_lossy(&node.value));
            current = node.right.as_deref();
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<Vec<u8>>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// True when every left descendant is strictly less than its ancestor and
    /// every right descendant is greater or equal.
    pub fn is_ordered(&self) -> bool {
        let mut pending: Vec<(&Node<Vec<u8>>, Option<&[u8]>, Option<&[u8]>)> = self
            .root
            .as_deref()
            .map(|n| (n, None, None))
            .into_iter()
            .collect();

        while let Some((node, lower, upper)) = pending.pop() {
            let key = node.value.as_slice();
            if lower.is_some_and(|lo| key < lo) || upper.is_some_and(|hi| key >= hi) {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, lower, Some(key)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(key), upper));
            }
        }
        true
    }
}

impl Drop for StringBst {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<'a> FromIterator<&'a str> for StringBst {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut bst = StringBst::new();
        for key in iter {
            bst.insert(key);
        }
        bst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_places_smaller_keys_left() {
        let bst: StringBst = ["m", "c", "x", "a"].into_iter().collect();
        let root = bst.root.as_deref().unwrap();
        assert_eq!(root.value, b"m");
        assert_eq!(root.left.as_deref().unwrap().value, b"c");
        assert_eq!(root.right.as_deref().unwrap().value, b"x");
        assert_eq!(bst.len(), 4);
    }

    #[test]
    fn duplicates_go_right() {
        let bst: StringBst = ["b", "b", "b"].into_iter().collect();
        let root = bst.root.as_deref().unwrap();
        assert!(root.left.is_none());
        let second = root.right.as_deref().unwrap();
        assert!(second.left.is_none());
        assert!(second.right.is_some());
        assert_eq!(bst.height(), 3);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        // 'Z' (0x5a) sorts before 'a' (0x61).
        let bst: StringBst = ["a", "Z"].into_iter().collect();
        let root = bst.root.as_deref().unwrap();
        assert_eq!(root.left.as_deref().unwrap().value, b"Z");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let bst: StringBst = ["Intro to Stacks", "Queue Basics", "STACK traces"]
            .into_iter()
            .collect();
        assert_eq!(bst.search("stack"), vec!["Intro to Stacks", "STACK traces"]);
        assert!(bst.search("heap").is_empty());
    }

    #[test]
    fn search_follows_preorder_not_sorted_order() {
        // Tree: m -> (c -> (a, e), x)
        let bst: StringBst = ["m_key", "c_key", "x_key", "a_key", "e_key"]
            .into_iter()
            .collect();
        assert_eq!(
            bst.search("key"),
            vec!["m_key", "c_key", "a_key", "e_key", "x_key"]
        );
        let sorted: Vec<String> = bst.in_order().into_iter().map(Cow::into_owned).collect();
        assert_eq!(sorted, vec!["a_key", "c_key", "e_key", "m_key", "x_key"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let bst: StringBst = ["anything"].into_iter().collect();
        assert!(bst.search("").is_empty());
    }

    #[test]
    fn empty_titles_are_kept_as_keys() {
        let bst: StringBst = ["", "Queue"].into_iter().collect();
        assert_eq!(bst.len(), 2);
        assert_eq!(bst.search("q"), vec!["Queue"]);
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let mut bst = StringBst::new();
        bst.insert("Stack basics");
        bst.insert_bytes(&[0xff, 0xfe, b's', b't']);
        bst.insert("stacks again");

        let report = bst.search_with_report("stack");
        assert_eq!(report.matches, vec!["Stack basics", "stacks again"]);
        assert_eq!(report.skipped, 1);
        assert!(bst.is_ordered());
    }

    #[test]
    fn unicode_lowercasing() {
        let bst: StringBst = ["ÜBER Queues"].into_iter().collect();
        assert_eq!(bst.search("über"), vec!["ÜBER Queues"]);
    }

    #[test]
    fn deep_degenerate_tree_does_not_overflow() {
        let mut bst = StringBst::new();
        for i in 0..5_000u32 {
            bst.insert(&format!("{i:08}"));
        }
        assert_eq!(bst.height(), 5_000);
        assert_eq!(bst.search("00004999"), vec!["00004999"]);
        assert!(bst.is_ordered());
    }
}
