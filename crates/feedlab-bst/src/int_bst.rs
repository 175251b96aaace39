use feedlab_error::{FeedlabError, validation_error};
use feedlab_node::{Link, Node, count, dismantle};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Message reported when demo input cannot be read as an integer.
pub const INTEGER_REQUIRED: &str = "value must be integer";

/// Deepest level (root = 1) the demo tree may reach. Snapshots serialize
/// recursively, so a sorted run of inserts must not grow an unbounded chain.
pub const MAX_DEPTH: usize = 256;

/// Coerce a raw JSON value to an integer.
///
/// Accepts integers, finite floats (truncated toward zero), booleans and
/// strings holding a signed decimal integer with optional surrounding
/// whitespace. Digits in a string may be grouped with single underscores
/// (`"1_000"`). Everything else is a validation error.
pub fn coerce_int(raw: &Value) -> Result<i64, FeedlabError> {
    let reject = || validation_error(INTEGER_REQUIRED).with_context("value", raw.to_string());
    match raw {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64().map(f64::trunc) {
                Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(reject()),
            }
        }
        Value::String(s) => parse_decimal(s.trim()).ok_or_else(reject),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(reject()),
    }
}

fn parse_decimal(text: &str) -> Option<i64> {
    if !text.contains('_') {
        return text.parse().ok();
    }
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let grouped = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !grouped {
        return None;
    }
    text.replace('_', "").parse().ok()
}

/// Integer binary search tree for the interactive demo.
///
/// Serializes as its root node, `{value, left, right}`, or `null` when empty.
#[derive(Debug, Default)]
pub struct IntBst {
    root: Link<i64>,
}

impl IntBst {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Validate `raw` and insert it. On failure the tree is untouched.
    ///
    /// Returns the coerced value and whether a node was added.
    pub fn insert_raw(&mut self, raw: &Value) -> Result<(i64, bool), FeedlabError> {
        let value = coerce_int(raw)?;
        Ok((value, self.insert(value)))
    }

    /// Insert along the search path; only the terminal empty slot gains a node.
    ///
    /// Returns `false` and leaves the tree unchanged when the new node would
    /// land below [`MAX_DEPTH`].
    pub fn insert(&mut self, value: i64) -> bool {
        let mut slot = &mut self.root;
        let mut depth = 1;
        while let Some(node) = slot {
            if depth == MAX_DEPTH {
                return false;
            }
            depth += 1;
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(value));
        true
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn root(&self) -> Option<&Node<i64>> {
        self.root.as_deref()
    }

    pub fn reset(&mut self) {
        dismantle(self.root.take());
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        count(&self.root)
    }

    /// Number of levels, 0 when empty.
    pub fn height(&self) -> usize {
        let mut pending: Vec<(&Node<i64>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        let mut deepest = 0;
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut pending: Vec<&Node<i64>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            out.push(node.value);
            current = node.right.as_deref();
        }
        out
    }
}

impl Drop for IntBst {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl Serialize for IntBst {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
