use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree.
///
/// A `None` key marks the sentinel: the single always-black node stored at
/// slot 0 of the arena that stands in for every absent child or parent.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<Ix> {
    /// Left child
    pub left: Option<NodeIndex<Ix>>,
    /// Right child
    pub right: Option<NodeIndex<Ix>>,
    /// Parent
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Key of the node
    pub key: Option<i64>,
}

// Convenient getter/setter methods
impl<Ix> Node<Ix>
where
    Ix: IndexType,
{
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn key(&self) -> i64 {
        self.key.unwrap()
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left.unwrap()
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right.unwrap()
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent.unwrap()
    }

    pub fn is_sentinel(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    /// Clear all link slots. Used to restore the sentinel after a removal
    /// transiently wrote its parent.
    pub fn reset_links(node: &mut Node<Ix>) {
        node.left = None;
        node.right = None;
        node.parent = None;
    }

    pub fn set_key(key: i64) -> impl FnOnce(&mut Node<Ix>) {
        move |node: &mut Node<Ix>| {
            let _ignore = node.key.replace(key);
        }
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<Ix>) {
        move |node: &mut Node<Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<Ix>) {
        move |node: &mut Node<Ix>| {
            let _ignore = node.left.replace(left);
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<Ix>) {
        move |node: &mut Node<Ix>| {
            let _ignore = node.right.replace(right);
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<Ix>) {
        move |node: &mut Node<Ix>| {
            let _ignore = node.parent.replace(parent);
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
