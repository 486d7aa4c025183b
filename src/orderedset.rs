use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::Iter;
use crate::node::{Color, Node};
use std::cmp::Ordering;

/// An ordered set of `i64` keys, which supports insertion, removal and lookup
/// in O(logN) time.
///
/// The set is a red-black tree stored in an arena of nodes. Slot 0 holds the
/// tree's sentinel, so every structural slot (child or parent) is always a
/// valid index and the balancing code never checks for a missing reference.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedSet<Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of keys in the set
    pub(crate) len: usize,
}

impl<Ix> OrderedSet<Ix>
where
    Ix: IndexType,
{
    /// Creates a new `OrderedSet` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Self::new_sentinel()];
        nodes.reserve(capacity);
        OrderedSet {
            nodes,
            root: Self::sentinel(),
            len: 0,
        }
    }

    /// Insert a key into the set and return the index of its node.
    ///
    /// Inserting a key that is already present is a no-op: the index of the
    /// existing node is returned and the tree is left untouched. A returned
    /// index stays valid until the next successful [`remove`](Self::remove),
    /// which may relocate one node inside the arena.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for
    /// its index type.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// let first = set.insert(7);
    /// assert_eq!(set.insert(7), first);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: i64) -> NodeIndex<Ix> {
        let mut y = Self::sentinel();
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            y = x;
            match key.cmp(&self.node_ref(x, Node::key)) {
                Ordering::Equal => return x,
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }

        let z = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != z,
            "Reached maximum number of nodes"
        );
        self.nodes.push(Self::new_node(key));
        self.node_mut(z, Node::set_parent(y));
        if self.node_ref(y, Node::is_sentinel) {
            self.root = z;
        } else if key < self.node_ref(y, Node::key) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }

        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
        z
    }

    /// Remove a key from the set, returning whether the key was present.
    /// Removing an absent key is a no-op.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.remove(3));
    /// assert_eq!(set.len(), 2);
    /// assert!(set.remove(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: i64) -> bool {
        if let Some(node_idx) = self.get(key) {
            let freed = self.remove_inner(node_idx);
            // Swap the freed node with the last node stored in the vector and update indices
            let _node = self.nodes.swap_remove(freed.index());
            let old = NodeIndex::<Ix>::new(self.nodes.len());
            self.update_idx(old, freed);
            // The transplant may have written the sentinel's parent slot;
            // clear it so no state leaks into the next operation.
            self.node_mut(Self::sentinel(), Node::reset_links);
            return true;
        }
        false
    }

    /// Return the index of the node holding the given key, if present.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// let idx = set.insert(3);
    /// assert_eq!(set.get(3), Some(idx));
    /// assert_eq!(set.get(4), None);
    /// ```
    #[inline]
    pub fn get(&self, key: i64) -> Option<NodeIndex<Ix>> {
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            match key.cmp(&self.node_ref(x, Node::key)) {
                Ordering::Equal => return Some(x),
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }
        None
    }

    /// Check if the set contains the given key.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(11);
    /// assert!(set.contains(11));
    /// assert!(!set.contains(12));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Return the key stored at the given node index, or `None` when the index
    /// refers to the sentinel or lies outside the arena.
    #[inline]
    #[must_use]
    pub fn key(&self, node: NodeIndex<Ix>) -> Option<i64> {
        self.nodes.get(node.index()).and_then(|n| n.key)
    }

    /// Return the smallest key in the set.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(5);
    /// set.insert(3);
    /// assert_eq!(set.first(), Some(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<i64> {
        if self.node_ref(self.root, Node::is_sentinel) {
            return None;
        }
        let min = self.tree_minimum(self.root);
        Some(self.node_ref(min, Node::key))
    }

    /// Return the largest key in the set.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(5);
    /// set.insert(9);
    /// assert_eq!(set.last(), Some(9));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        if self.node_ref(self.root, Node::is_sentinel) {
            return None;
        }
        let max = self.tree_maximum(self.root);
        Some(self.node_ref(max, Node::key))
    }

    /// Get an iterator over the keys of the set, in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, Ix> {
        Iter::new(self)
    }

    /// Remove all keys from the set.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Self::new_sentinel());
        self.root = Self::sentinel();
        self.len = 0;
    }

    /// Return the number of keys in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the set contains no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderedSet {
    /// Create an empty `OrderedSet`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::new_sentinel()],
            root: Self::sentinel(),
            len: 0,
        }
    }
}

impl Default for OrderedSet {
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<Ix> OrderedSet<Ix>
where
    Ix: IndexType,
{
    /// Create a new sentinel node
    fn new_sentinel() -> Node<Ix> {
        Node {
            key: None,
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
        }
    }

    /// Create a new tree node
    fn new_node(key: i64) -> Node<Ix> {
        Node {
            key: Some(key),
            left: Some(Self::sentinel()),
            right: Some(Self::sentinel()),
            parent: Some(Self::sentinel()),
            color: Color::Red,
        }
    }

    /// Get the sentinel node index
    fn sentinel() -> NodeIndex<Ix> {
        NodeIndex::new(0)
    }
}

impl<Ix> OrderedSet<Ix>
where
    Ix: IndexType,
{
    /// Remove a node from the tree and return the arena slot that was vacated.
    ///
    /// When the node has two live children its key is overwritten with the
    /// in-order successor's key and the successor's slot is what gets spliced
    /// out. The node keeps its identity and color; only its key changes.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let mut y = z;
        if !self.left_ref(z, Node::is_sentinel) && !self.right_ref(z, Node::is_sentinel) {
            y = self.tree_minimum(self.node_ref(z, Node::right));
            let successor_key = self.node_ref(y, Node::key);
            self.node_mut(z, Node::set_key(successor_key));
        }
        // y now has at most one live child
        debug_assert!(
            self.left_ref(y, Node::is_sentinel) || self.right_ref(y, Node::is_sentinel)
        );
        let x = if self.left_ref(y, Node::is_sentinel) {
            self.node_ref(y, Node::right)
        } else {
            self.node_ref(y, Node::left)
        };
        let y_orig_color = self.node_ref(y, Node::color);
        self.transplant(y, x);

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x);
        }

        self.len = self.len.wrapping_sub(1);
        y
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            if self.grand_parent_ref(z, Node::is_sentinel) {
                break;
            }
            if self.is_left_child(self.node_ref(z, Node::parent)) {
                let y = self.grand_parent_ref(z, Node::right);
                if self.node_ref(y, Node::is_red) {
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_right_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.left_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.right_rotate(self.parent_ref(z, Node::parent));
                }
            } else {
                let y = self.grand_parent_ref(z, Node::left);
                if self.node_ref(y, Node::is_red) {
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_left_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.right_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.left_rotate(self.parent_ref(z, Node::parent));
                }
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Restore red-black tree properties after a remove.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let mut w;
            if self.is_left_child(x) {
                w = self.parent_ref(x, Node::right);
                if self.node_ref(w, Node::is_red) {
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::right);
                }
                if self.node_ref(w, Node::is_sentinel) {
                    break;
                }
                if self.left_ref(w, Node::is_black) && self.right_ref(w, Node::is_black) {
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.right_ref(w, Node::is_black) {
                        self.left_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.right_rotate(w);
                        w = self.parent_ref(x, Node::right);
                    }
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    // x is a loop terminator from here on, never dereferenced
                    x = self.root;
                }
            } else {
                w = self.parent_ref(x, Node::left);
                if self.node_ref(w, Node::is_red) {
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::left);
                }
                if self.node_ref(w, Node::is_sentinel) {
                    break;
                }
                if self.right_ref(w, Node::is_black) && self.left_ref(w, Node::is_black) {
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.left_ref(w, Node::is_black) {
                        self.right_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.left_rotate(w);
                        w = self.parent_ref(x, Node::left);
                    }
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    x = self.root;
                }
            }
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.right_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.left_ref(y, Node::is_sentinel) {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.left_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.right_ref(y, Node::is_sentinel) {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Find the node with the minimum key in the subtree rooted at `x`.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.left_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Find the node with the maximum key in the subtree rooted at `x`.
    fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.right_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// Replace one subtree as a child of its parent with another subtree.
    ///
    /// `v` may be the sentinel, in which case its parent slot is transiently
    /// written; the caller resets it once the enclosing removal is done.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.parent_ref(u, Node::is_sentinel) {
            self.root = v;
        } else if self.is_left_child(u) {
            self.parent_mut(u, Node::set_left(v));
        } else {
            self.parent_mut(u, Node::set_right(v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Check if a node is a right child of its parent.
    fn is_right_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::right) == node
    }

    /// Update node indices after the arena slot `old` was moved to `new` by
    /// `swap_remove`.
    fn update_idx(&mut self, old: NodeIndex<Ix>, new: NodeIndex<Ix>) {
        if self.root == old {
            self.root = new;
        }
        if self.nodes.get(new.index()).is_some() {
            if !self.parent_ref(new, Node::is_sentinel) {
                if self.parent_ref(new, Node::left) == old {
                    self.parent_mut(new, Node::set_left(new));
                } else {
                    self.parent_mut(new, Node::set_right(new));
                }
            }
            self.left_mut(new, Node::set_parent(new));
            self.right_mut(new, Node::set_parent(new));
        }
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, Ix> OrderedSet<Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}
