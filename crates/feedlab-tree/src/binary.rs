use crate::MAX_DEPTH;
use feedlab_ids::NodeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryNode<T> {
    pub id: NodeId,
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    fn fresh(value: T) -> Box<Self> {
        Box::new(Self {
            id: NodeId::fresh(),
            value,
            left: None,
            right: None,
        })
    }

    fn child(&self, side: Side) -> Option<&BinaryNode<T>> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Box<BinaryNode<T>>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// What an insertion into a [`BinaryTree`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attach {
    /// The tree was empty; the value became the root and the parent id was ignored.
    Root(NodeId),
    Attached(NodeId),
    /// The parent already has a child on that side; nothing changed.
    SlotOccupied,
    /// No node has the parent id; nothing changed.
    ParentMissing,
    /// The parent sits at the depth limit; nothing changed.
    DepthLimit,
}

impl Attach {
    pub fn changed(&self) -> bool {
        matches!(self, Attach::Root(_) | Attach::Attached(_))
    }
}

/// Binary tree grown by hand: callers pick the parent and the side.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryTree<T> {
    root: Option<Box<BinaryNode<T>>>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    pub fn add_left(&mut self, parent: &str, value: T) -> Attach {
        self.add(Side::Left, parent, value)
    }

    pub fn add_right(&mut self, parent: &str, value: T) -> Attach {
        self.add(Side::Right, parent, value)
    }

    /// Attach `value` on `side` of the node with id `parent`.
    ///
    /// The first insertion into an empty tree always becomes the root,
    /// whatever parent and side were asked for.
    pub fn add(&mut self, side: Side, parent: &str, value: T) -> Attach {
        if self.root.is_none() {
            let node = BinaryNode::fresh(value);
            let id = node.id.clone();
            self.root = Some(node);
            return Attach::Root(id);
        }

        let Some(path) = self.path_to(parent) else {
            return Attach::ParentMissing;
        };
        if path.len() + 1 >= MAX_DEPTH {
            return Attach::DepthLimit;
        }
        let Some(node) = self.node_at_mut(&path) else {
            return Attach::ParentMissing;
        };
        let slot = node.slot_mut(side);
        if slot.is_some() {
            return Attach::SlotOccupied;
        }
        let child = BinaryNode::fresh(value);
        let id = child.id.clone();
        *slot = Some(child);
        Attach::Attached(id)
    }

    pub fn find(&self, id: &str) -> Option<&BinaryNode<T>> {
        let path = self.path_to(id)?;
        let mut node = self.root.as_deref()?;
        for &side in &path {
            node = node.child(side)?;
        }
        Some(node)
    }

    pub fn reset(&mut self) {
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        let mut pending: Vec<&BinaryNode<T>> = self.root.as_deref().into_iter().collect();
        let mut seen = 0;
        while let Some(node) = pending.pop() {
            seen += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        seen
    }

    /// Sides leading from the root to the first preorder match.
    fn path_to(&self, id: &str) -> Option<Vec<Side>> {
        let root = self.root.as_deref()?;
        let mut pending: Vec<(&BinaryNode<T>, Vec<Side>)> = vec![(root, Vec::new())];
        while let Some((node, path)) = pending.pop() {
            if node.id == *id {
                return Some(path);
            }
            for side in [Side::Right, Side::Left] {
                if let Some(child) = node.child(side) {
                    let mut child_path = path.clone();
                    child_path.push(side);
                    pending.push((child, child_path));
                }
            }
        }
        None
    }

    fn node_at_mut(&mut self, path: &[Side]) -> Option<&mut BinaryNode<T>> {
        let mut node = self.root.as_deref_mut()?;
        for &side in path {
            node = node.slot_mut(side).as_deref_mut()?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(outcome: Attach) -> NodeId {
        match outcome {
            Attach::Root(id) | Attach::Attached(id) => id,
            other => panic!("expected attach, got {other:?}"),
        }
    }

    #[test]
    fn first_insert_becomes_root_ignoring_parent() {
        let mut tree = BinaryTree::new();
        let outcome = tree.add_left("no-such-parent", "root");
        assert!(matches!(outcome, Attach::Root(_)));
        let root = tree.root().unwrap();
        assert_eq!(root.value, "root");
        assert!(root.left.is_none() && root.right.is_none());
    }

    #[test]
    fn first_add_right_also_becomes_root() {
        let mut tree = BinaryTree::new();
        assert!(matches!(tree.add_right("", 1), Attach::Root(_)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn attaches_on_requested_side() {
        let mut tree = BinaryTree::new();
        let root = id_of(tree.add_left("", "r"));
        let l = id_of(tree.add_left(root.as_str(), "l"));
        let r = id_of(tree.add_right(root.as_str(), "r2"));

        let node = tree.root().unwrap();
        assert_eq!(node.left.as_ref().unwrap().id, l);
        assert_eq!(node.right.as_ref().unwrap().id, r);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn occupied_slot_is_a_no_op() {
        let mut tree = BinaryTree::new();
        let root = id_of(tree.add_left("", "r"));
        tree.add_left(root.as_str(), "first");
        let before = tree.clone();

        assert_eq!(tree.add_left(root.as_str(), "second"), Attach::SlotOccupied);
        assert_eq!(tree, before);
    }

    #[test]
    fn missing_parent_is_a_no_op() {
        let mut tree = BinaryTree::new();
        tree.add_left("", "r");
        let before = tree.clone();

        assert_eq!(tree.add_right("ghost", "x"), Attach::ParentMissing);
        assert_eq!(tree, before);
    }

    #[test]
    fn finds_nodes_in_right_subtree_of_left_child() {
        let mut tree = BinaryTree::new();
        let root = id_of(tree.add_left("", 0));
        let l = id_of(tree.add_left(root.as_str(), 1));
        let lr = id_of(tree.add_right(l.as_str(), 2));
        let deep = id_of(tree.add_left(lr.as_str(), 3));

        assert_eq!(tree.find(deep.as_str()).unwrap().value, 3);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn reset_empties_tree() {
        let mut tree = BinaryTree::new();
        tree.add_left("", 1);
        tree.reset();
        assert!(tree.is_empty());
        // After reset the next insert is a root again.
        assert!(matches!(tree.add_right("whatever", 2), Attach::Root(_)));
    }

    #[test]
    fn snapshot_shape() {
        let mut tree = BinaryTree::new();
        let root = id_of(tree.add_left("", "r"));
        tree.add_right(root.as_str(), "c");

        let json = serde_json::to_value(tree.root()).unwrap();
        assert_eq!(json["value"], "r");
        assert_eq!(json["left"], serde_json::Value::Null);
        assert_eq!(json["right"]["value"], "c");
        assert_eq!(json["right"]["left"], serde_json::Value::Null);
    }
}
