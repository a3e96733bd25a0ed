//! Path representations.

use crate::registry::ItemId;

/// How a node came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The start of every enumeration. Carries only the sentinel.
    Root,
    /// Created by appending `item` to the node at `parent`.
    Extended { parent: usize, item: ItemId },
}

/// Arena entry for one enumerated path.
///
/// Only the appended item is stored; the rest of the sequence lives in
/// the ancestors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub origin: Origin,
    /// Last identifier of the sequence (the sentinel for the root).
    pub last: ItemId,
    pub total_cost: f64,
    /// Number of items appended after the sentinel.
    pub depth: usize,
}

impl PathNode {
    pub(crate) fn root(sentinel: ItemId) -> Self {
        Self {
            origin: Origin::Root,
            last: sentinel,
            total_cost: 0.0,
            depth: 0,
        }
    }

    pub(crate) fn extend(parent_index: usize, parent: &PathNode, item: ItemId, cost: f64) -> Self {
        Self {
            origin: Origin::Extended {
                parent: parent_index,
                item,
            },
            last: item,
            total_cost: parent.total_cost + cost,
            depth: parent.depth + 1,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.origin, Origin::Root)
    }

    /// The item this node appended, `None` for the root.
    pub fn item(&self) -> Option<ItemId> {
        match self.origin {
            Origin::Root => None,
            Origin::Extended { item, .. } => Some(item),
        }
    }

    /// Index of the parent node, `None` for the root.
    pub fn parent(&self) -> Option<usize> {
        match self.origin {
            Origin::Root => None,
            Origin::Extended { parent, .. } => Some(parent),
        }
    }
}

/// Borrowed view of one node inside an [`Enumeration`](super::Enumeration).
#[derive(Debug, Clone, Copy)]
pub struct PathView<'a> {
    pub(crate) nodes: &'a [PathNode],
    pub(crate) sentinel: ItemId,
    pub(crate) index: usize,
}

impl<'a> PathView<'a> {
    /// Position in discovery order (0 is the root).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn node(&self) -> &'a PathNode {
        &self.nodes[self.index]
    }

    pub fn total_cost(&self) -> f64 {
        self.node().total_cost
    }

    pub fn depth(&self) -> usize {
        self.node().depth
    }

    pub fn last(&self) -> ItemId {
        self.node().last
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    /// The parent path, `None` for the root.
    pub fn parent(&self) -> Option<PathView<'a>> {
        self.node().parent().map(|index| PathView {
            nodes: self.nodes,
            sentinel: self.sentinel,
            index,
        })
    }

    /// Appended items in order, excluding the sentinel.
    pub fn items(&self) -> Vec<ItemId> {
        let mut items = Vec::with_capacity(self.depth());
        let mut cursor = Some(self.index);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if let Some(item) = node.item() {
                items.push(item);
            }
            cursor = node.parent();
        }
        items.reverse();
        items
    }

    /// Full sequence: the sentinel followed by the appended items.
    pub fn sequence(&self) -> Vec<ItemId> {
        let mut sequence = Vec::with_capacity(self.depth() + 1);
        sequence.push(self.sentinel);
        sequence.extend(self.items());
        sequence
    }

    /// Owned snapshot of this path.
    pub fn to_path(&self) -> Path {
        Path {
            total_cost: self.total_cost(),
            sequence: self.sequence(),
        }
    }
}

/// Owned path: accumulated cost plus the full identifier sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub total_cost: f64,
    /// Sentinel first, then appended items. Never empty.
    pub sequence: Vec<ItemId>,
}

impl Path {
    pub fn last(&self) -> ItemId {
        self.sequence[self.sequence.len() - 1]
    }

    /// Appended items, excluding the sentinel.
    pub fn items(&self) -> &[ItemId] {
        &self.sequence[1..]
    }

    pub fn is_root(&self) -> bool {
        self.sequence.len() == 1
    }
}
