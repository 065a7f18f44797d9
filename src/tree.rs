//! Arena-backed tree recording the configurations discovered by a search.
//!
//! Nodes are addressed by [`NodeId`] indices into the arena. The parent
//! link is a plain back index, so ownership flows strictly from root to
//! leaves while path reconstruction can still walk upward.

use std::fmt;

use smallvec::SmallVec;

use crate::puzzle::Puzzle;

/// Index of a node within its [`SearchTree`] arena.
pub type NodeId = usize;

/// Children lists are small (one per legal move); keep them inline.
type Children = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone)]
struct Node<P> {
    state: P,
    children: Children,
    parent: Option<NodeId>,
}

/// A puzzle configuration together with the configurations that extend
/// it, one child per legal move, in discovery order.
///
/// A successful search returns a tree in which every node has exactly
/// one child on the way to the solved leaf: the root-to-leaf chain is
/// the solution path.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<Node<P>>,
    root: NodeId,
}

impl<P: Puzzle> SearchTree<P> {
    /// Create a tree holding a single root configuration.
    pub fn new(state: P) -> Self {
        Self {
            nodes: vec![Node {
                state,
                children: Children::new(),
                parent: None,
            }],
            root: 0,
        }
    }

    /// Create a tree whose root carries copies of the given subtrees as
    /// children. The new tree does not alias the caller's storage.
    pub fn with_children(state: P, children: &[SearchTree<P>]) -> Self {
        let mut tree = Self::new(state);
        let root = tree.root;
        for child in children {
            tree.graft(root, child, child.root);
        }
        tree
    }

    /// Copy the subtree of `source` rooted at `node` under `parent`.
    /// Iterative pre-order walk: subtrees can be arbitrarily deep chains.
    fn graft(&mut self, parent: NodeId, source: &SearchTree<P>, node: NodeId) {
        let mut stack: Vec<(NodeId, NodeId)> = vec![(node, parent)];
        while let Some((src, dst_parent)) = stack.pop() {
            let id = self.push_child(dst_parent, source.nodes[src].state.clone());
            for &child in source.nodes[src].children.iter().rev() {
                stack.push((child, id));
            }
        }
    }

    /// Append a child configuration under `parent`, returning its id.
    pub fn push_child(&mut self, parent: NodeId, state: P) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            state,
            children: Children::new(),
            parent: Some(parent),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The configuration a node represents.
    pub fn state(&self, id: NodeId) -> &P {
        &self.nodes[id].state
    }

    /// A node's children, in discovery order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// A node's parent, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root-to-leaf node sequence of a linear tree.
    ///
    /// Follows the first child at every level. For a tree returned by a
    /// search that child is the only one, so the result is the solution
    /// path.
    pub fn chain(&self) -> Vec<NodeId> {
        let mut path = vec![self.root];
        let mut cur = self.root;
        while let Some(&next) = self.nodes[cur].children.first() {
            path.push(next);
            cur = next;
        }
        path
    }

    /// Order-independent node equality: equal signatures and mutually
    /// contained children sets. Single-child chains are walked in a
    /// loop so long solution paths compare without deep recursion.
    fn node_eq(&self, mut a: NodeId, other: &Self, mut b: NodeId) -> bool {
        loop {
            if self.nodes[a].state.signature() != other.nodes[b].state.signature() {
                return false;
            }
            let ours = &self.nodes[a].children;
            let theirs = &other.nodes[b].children;
            if ours.len() == 1 && theirs.len() == 1 {
                a = ours[0];
                b = theirs[0];
                continue;
            }
            return ours
                .iter()
                .all(|&x| theirs.iter().any(|&y| self.node_eq(x, other, y)))
                && theirs
                    .iter()
                    .all(|&y| ours.iter().any(|&x| self.node_eq(x, other, y)));
        }
    }
}

impl<P: Puzzle> PartialEq for SearchTree<P> {
    fn eq(&self, other: &Self) -> bool {
        self.node_eq(self.root, other, other.root)
    }
}

impl<P: Puzzle> Eq for SearchTree<P> {}

impl<P: Puzzle> fmt::Display for SearchTree<P> {
    /// Render the configuration followed by the renderings of all its
    /// children. Runs on an explicit work stack: solution chains can be
    /// arbitrarily long.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Item {
            Node(NodeId),
            Separator,
        }

        let mut stack = vec![Item::Node(self.root)];
        while let Some(item) = stack.pop() {
            match item {
                Item::Separator => writeln!(f)?,
                Item::Node(id) => {
                    write!(f, "{}\n\n", self.nodes[id].state.signature())?;
                    // children in order, separated by a newline; each
                    // child's whole subtree renders before the separator
                    // that follows it
                    for (i, &child) in self.nodes[id].children.iter().enumerate().rev() {
                        stack.push(Item::Node(child));
                        if i > 0 {
                            stack.push(Item::Separator);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Tag(&'static str);

    impl Puzzle for Tag {
        fn is_solved(&self) -> bool {
            false
        }

        fn fail_fast(&self) -> bool {
            false
        }

        fn extensions(&self) -> Vec<Option<Self>> {
            Vec::new()
        }

        fn signature(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_equality_ignores_child_order() {
        let ab = SearchTree::with_children(Tag("r"), &[SearchTree::new(Tag("a")), SearchTree::new(Tag("b"))]);
        let ba = SearchTree::with_children(Tag("r"), &[SearchTree::new(Tag("b")), SearchTree::new(Tag("a"))]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_equality_rejects_mismatches() {
        let ab = SearchTree::with_children(Tag("r"), &[SearchTree::new(Tag("a")), SearchTree::new(Tag("b"))]);
        let ac = SearchTree::with_children(Tag("r"), &[SearchTree::new(Tag("a")), SearchTree::new(Tag("c"))]);
        let other_root = SearchTree::with_children(Tag("s"), &[SearchTree::new(Tag("a")), SearchTree::new(Tag("b"))]);
        assert_ne!(ab, ac);
        assert_ne!(ab, other_root);
    }

    #[test]
    fn test_equality_is_recursive() {
        let deep_a = SearchTree::with_children(
            Tag("r"),
            &[SearchTree::with_children(Tag("m"), &[SearchTree::new(Tag("x"))])],
        );
        let deep_b = SearchTree::with_children(
            Tag("r"),
            &[SearchTree::with_children(Tag("m"), &[SearchTree::new(Tag("x"))])],
        );
        let deep_c = SearchTree::with_children(
            Tag("r"),
            &[SearchTree::with_children(Tag("m"), &[SearchTree::new(Tag("y"))])],
        );
        assert_eq!(deep_a, deep_b);
        assert_ne!(deep_a, deep_c);
    }

    #[test]
    fn test_with_children_copies_subtrees() {
        let child = SearchTree::new(Tag("a"));
        let tree = SearchTree::with_children(Tag("r"), &[child.clone()]);
        assert_eq!(tree.node_count(), 2);
        // the original subtree is untouched
        assert_eq!(child.node_count(), 1);
    }

    #[test]
    fn test_parent_links() {
        let mut tree = SearchTree::new(Tag("r"));
        let a = tree.push_child(tree.root(), Tag("a"));
        let b = tree.push_child(a, Tag("b"));
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.parent(a), Some(tree.root()));
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.children(tree.root()), &[a]);
    }

    #[test]
    fn test_chain_walks_the_spine() {
        let mut tree = SearchTree::new(Tag("r"));
        let a = tree.push_child(tree.root(), Tag("a"));
        let b = tree.push_child(a, Tag("b"));
        assert_eq!(tree.chain(), vec![tree.root(), a, b]);
    }

    #[test]
    fn test_display_chain() {
        let mut tree = SearchTree::new(Tag("r"));
        let a = tree.push_child(tree.root(), Tag("a"));
        tree.push_child(a, Tag("b"));
        assert_eq!(tree.to_string(), "r\n\na\n\nb\n\n");
    }

    #[test]
    fn test_display_branches() {
        let mut tree = SearchTree::new(Tag("r"));
        tree.push_child(tree.root(), Tag("a"));
        tree.push_child(tree.root(), Tag("b"));
        assert_eq!(tree.to_string(), "r\n\na\n\n\nb\n\n");
    }
}
