use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::orderedset::OrderedSet;

/// Pushes a link of nodes on the left to stack.
fn left_link<Ix>(set_ref: &OrderedSet<Ix>, mut x: NodeIndex<Ix>) -> Vec<NodeIndex<Ix>>
where
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !set_ref.node_ref(x, Node::is_sentinel) {
        nodes.push(x);
        x = set_ref.node_ref(x, Node::left);
    }
    nodes
}

/// An iterator over the keys of an `OrderedSet`, in ascending order.
#[derive(Debug)]
pub struct Iter<'a, Ix> {
    /// Reference to the set
    set_ref: &'a OrderedSet<Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<'a, Ix> Iter<'a, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(set_ref: &'a OrderedSet<Ix>) -> Self {
        Iter {
            set_ref,
            stack: left_link(set_ref, set_ref.root),
        }
    }
}

impl<Ix> Iterator for Iter<'_, Ix>
where
    Ix: IndexType,
{
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            self.set_ref,
            self.set_ref.node_ref(x, Node::right),
        ));
        Some(self.set_ref.node_ref(x, Node::key))
    }
}

/// An owning iterator over the keys of an `OrderedSet`, in ascending order.
#[derive(Debug)]
pub struct IntoIter<Ix> {
    /// The set being consumed
    set: OrderedSet<Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<Ix> IntoIter<Ix>
where
    Ix: IndexType,
{
    fn new(set: OrderedSet<Ix>) -> Self {
        let stack = left_link(&set, set.root);
        IntoIter { set, stack }
    }
}

impl<Ix> Iterator for IntoIter<Ix>
where
    Ix: IndexType,
{
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack
            .extend(left_link(&self.set, self.set.node_ref(x, Node::right)));
        Some(self.set.node_ref(x, Node::key))
    }
}

impl<Ix> IntoIterator for OrderedSet<Ix>
where
    Ix: IndexType,
{
    type Item = i64;
    type IntoIter = IntoIter<Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, Ix> IntoIterator for &'a OrderedSet<Ix>
where
    Ix: IndexType,
{
    type Item = i64;
    type IntoIter = Iter<'a, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Ix> Extend<i64> for OrderedSet<Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            let _ignore = self.insert(key);
        }
    }
}

impl FromIterator<i64> for OrderedSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}
