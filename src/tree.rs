//! Static menu tree storage and field access.

use crate::action::NodeCallback;

/// Stable index of a node within its backing storage.
///
/// Node identity is index equality; links between nodes of the same
/// tree are expressed as ids and `None` stands for the absent link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId(u16);

impl NodeId {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Relation slots stored per node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkField {
    Next,
    Previous,
    Parent,
    Child,
}

/// One immutable entry of the menu tree.
///
/// Sibling lists are doubly linked through `next`/`previous`; a node
/// with a child is a submenu. Records are laid out once by the host and
/// never change afterwards.
#[derive(Clone, Copy, Debug)]
pub struct MenuNode<'a> {
    pub label: &'a str,
    pub next: Option<NodeId>,
    pub previous: Option<NodeId>,
    pub parent: Option<NodeId>,
    pub child: Option<NodeId>,
    pub callback: Option<NodeCallback>,
}

impl<'a> MenuNode<'a> {
    /// Entry with no relations; links are filled in with `with_*`.
    pub const fn leaf(label: &'a str) -> Self {
        Self {
            label,
            next: None,
            previous: None,
            parent: None,
            child: None,
            callback: None,
        }
    }

    pub const fn with_next(mut self, next: NodeId) -> Self {
        self.next = Some(next);
        self
    }

    pub const fn with_previous(mut self, previous: NodeId) -> Self {
        self.previous = Some(previous);
        self
    }

    pub const fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub const fn with_child(mut self, child: NodeId) -> Self {
        self.child = Some(child);
        self
    }

    pub const fn with_callback(mut self, callback: NodeCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    const fn link(&self, field: LinkField) -> Option<NodeId> {
        match field {
            LinkField::Next => self.next,
            LinkField::Previous => self.previous,
            LinkField::Parent => self.parent,
            LinkField::Child => self.child,
        }
    }
}

/// Field-reader capability over one storage regime.
///
/// Every method is a pure read; for a given node and regime the result
/// never changes. Ids must come from the same tree the reader serves.
pub trait NodeReader {
    /// Follow one relation slot of `node`.
    fn link(&self, node: NodeId, field: LinkField) -> Option<NodeId>;

    /// Label text of `node`.
    fn label(&self, node: NodeId) -> &str;

    /// Registered handler of `node`, if any.
    fn callback(&self, node: NodeId) -> Option<NodeCallback>;
}

/// Tree kept in ordinary addressable memory.
#[derive(Clone, Copy, Debug)]
pub struct RamTree<'a> {
    nodes: &'a [MenuNode<'a>],
}

impl<'a> RamTree<'a> {
    pub const fn new(nodes: &'a [MenuNode<'a>]) -> Self {
        Self { nodes }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeReader for RamTree<'_> {
    fn link(&self, node: NodeId, field: LinkField) -> Option<NodeId> {
        self.nodes[node.index()].link(field)
    }

    fn label(&self, node: NodeId) -> &str {
        self.nodes[node.index()].label
    }

    fn callback(&self, node: NodeId) -> Option<NodeCallback> {
        self.nodes[node.index()].callback
    }
}

/// Read primitive for node records kept in a restricted read-only
/// region.
///
/// Parts that store the menu table outside ordinary address space
/// implement this with whatever indirect read instruction they provide;
/// `fetch` copies one whole record out. Memory-mapped storage uses
/// [`RamTree`] directly instead.
pub trait RegionAccess {
    /// Copy the record for `node` out of the region.
    fn fetch(&self, node: NodeId) -> MenuNode<'static>;
}

/// Tree resolved through a [`RegionAccess`] primitive.
#[derive(Clone, Copy, Debug)]
pub struct RegionTree<A> {
    access: A,
}

impl<A: RegionAccess> RegionTree<A> {
    pub const fn new(access: A) -> Self {
        Self { access }
    }
}

impl<A: RegionAccess> NodeReader for RegionTree<A> {
    fn link(&self, node: NodeId, field: LinkField) -> Option<NodeId> {
        self.access.fetch(node).link(field)
    }

    fn label(&self, node: NodeId) -> &str {
        self.access.fetch(node).label
    }

    fn callback(&self, node: NodeId) -> Option<NodeCallback> {
        self.access.fetch(node).callback
    }
}
