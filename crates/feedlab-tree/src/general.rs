use crate::MAX_DEPTH;
use feedlab_ids::NodeId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralNode<T> {
    pub id: NodeId,
    pub value: T,
    pub children: Vec<GeneralNode<T>>,
}

impl<T> GeneralNode<T> {
    fn fresh(value: T) -> Self {
        Self {
            id: NodeId::fresh(),
            value,
            children: Vec::new(),
        }
    }
}

/// What [`GeneralTree::add_child`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddChild {
    Attached(NodeId),
    /// No node has the target id (or the tree is empty); nothing changed.
    TargetMissing,
    /// The target sits at the depth limit; nothing changed.
    DepthLimit,
}

impl AddChild {
    pub fn is_attached(&self) -> bool {
        matches!(self, AddChild::Attached(_))
    }
}

/// Tree with an ordered, unbounded list of children per node.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralTree<T> {
    root: Option<GeneralNode<T>>,
}

impl<T> Default for GeneralTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> GeneralTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&GeneralNode<T>> {
        self.root.as_ref()
    }

    /// Replace the whole tree with a single fresh root.
    pub fn add_root(&mut self, value: T) -> &GeneralNode<T> {
        self.root.insert(GeneralNode::fresh(value))
    }

    /// Append a child under the first node (preorder) whose id is `target`.
    pub fn add_child(&mut self, target: &str, value: T) -> AddChild {
        let Some(path) = self.path_to(target) else {
            return AddChild::TargetMissing;
        };
        if path.len() + 1 >= MAX_DEPTH {
            return AddChild::DepthLimit;
        }
        let Some(parent) = self.node_at_mut(&path) else {
            return AddChild::TargetMissing;
        };
        let child = GeneralNode::fresh(value);
        let id = child.id.clone();
        parent.children.push(child);
        AddChild::Attached(id)
    }

    pub fn find(&self, id: &str) -> Option<&GeneralNode<T>> {
        let path = self.path_to(id)?;
        let mut node = self.root.as_ref()?;
        for &i in &path {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        let mut pending: Vec<&GeneralNode<T>> = self.root.iter().collect();
        let mut seen = 0;
        while let Some(node) = pending.pop() {
            seen += 1;
            pending.extend(node.children.iter());
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Child indices leading from the root to the first preorder match.
    fn path_to(&self, id: &str) -> Option<Vec<usize>> {
        let root = self.root.as_ref()?;
        let mut pending: Vec<(&GeneralNode<T>, Vec<usize>)> = vec![(root, Vec::new())];
        while let Some((node, path)) = pending.pop() {
            if node.id == *id {
                return Some(path);
            }
            // Reverse so the first child is popped next.
            for (i, child) in node.children.iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(i);
                pending.push((child, child_path));
            }
        }
        None
    }

    fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut GeneralNode<T>> {
        let mut node = self.root.as_mut()?;
        for &i in path {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }
}
