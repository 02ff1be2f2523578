/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Nodes of the adaptive tree and their arena indices.

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The index of a node in the arena of a [`HuffmanTree`](super::HuffmanTree).
///
/// Indices are stable: nodes are never deleted or moved, and what the
/// update algorithm exchanges is the content of two positions, not the
/// positions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum NodeKind {
    /// A leaf holding a symbol that has been seen.
    Leaf(u32),
    /// The leaf standing for all symbols not yet seen.
    Nyt,
    /// A node with two children.
    Internal,
}

impl NodeKind {
    #[inline(always)]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }

    #[inline(always)]
    pub fn symbol(&self) -> Option<u32> {
        match self {
            Self::Leaf(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Leaf(symbol) => write!(f, "[{}]", symbol),
            Self::Nyt => f.write_str("NYT"),
            Self::Internal => f.write_str("*"),
        }
    }
}

/// A weighted node.
///
/// `num` and `weight` belong to the position in the tree: an exchange moves
/// `kind` and the children, and leaves `num`, `weight` and `parent` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Node {
    pub(crate) weight: u64,
    pub(crate) num: u64,
    pub(crate) kind: NodeKind,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn leaf(kind: NodeKind, weight: u64, num: u64, parent: Option<NodeId>) -> Self {
        Self {
            weight,
            num,
            kind,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    #[inline(always)]
    pub fn num(&self) -> u64 {
        self.num
    }

    #[inline(always)]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline(always)]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline(always)]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

impl core::fmt::Display for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}({}) {}", self.num, self.weight, self.kind)
    }
}
