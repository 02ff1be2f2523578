/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Arena-backed adaptive Huffman trees.

use alloc::vec;
use alloc::vec::Vec;

use super::{Code, Node, NodeId, NodeKind};
use crate::codes::Alphabet;
use crate::error::{InvariantError, LookupError};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The stage of the life of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeState {
    /// No symbol has been seen: the tree is a single NYT root.
    Initial,
    /// Some, but not all, symbols have been seen.
    Growing,
    /// All symbols have been seen, and the tree has no NYT node.
    Saturated,
}

/// The result of [`HuffmanTree::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    /// Whether the symbol has no leaf yet, in which case
    /// [`code`](Search::code) is the path to the NYT node.
    pub first_appearance: bool,
    pub code: Code,
}

/// An entry of the registry mapping symbols to their current leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
struct LeafEntry {
    symbol: u32,
    node: NodeId,
}

/// A binary tree of weighted nodes satisfying the sibling property.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. The node at
/// index `i` has number `2S - 1 - i`, where `S` is the size of the alphabet,
/// so listing the arena in order lists nodes by decreasing number. The root
/// is always at index 0.
///
/// The tree offers code lookup, navigation for decoders, and the primitives
/// used by [`update`](HuffmanTree::update). After every update the sibling
/// property holds, which can be checked with [`validate`](HuffmanTree::validate).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct HuffmanTree {
    alphabet: Alphabet,
    nodes: Vec<Node>,
    nyt: Option<NodeId>,
    /// Sorted by symbol.
    leaves: Vec<LeafEntry>,
}

impl HuffmanTree {
    /// Create a tree made of a single NYT root of weight zero.
    pub fn new(alphabet: Alphabet) -> Self {
        let max_num = 2 * alphabet.size() - 1;
        Self {
            alphabet,
            nodes: vec![Node::leaf(NodeKind::Nyt, 0, max_num, None)],
            nyt: Some(NodeId::ROOT),
            leaves: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The number of the root, `2S - 1`.
    #[inline(always)]
    pub fn max_num(&self) -> u64 {
        2 * self.alphabet.size() - 1
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The current NYT node, if the tree is not saturated.
    #[inline(always)]
    pub fn nyt(&self) -> Option<NodeId> {
        self.nyt
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes, by decreasing number.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of symbols that have a leaf.
    #[inline(always)]
    pub fn num_seen(&self) -> usize {
        self.leaves.len()
    }

    #[inline(always)]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    /// Return the right child if `bit` is true, the left child otherwise.
    #[inline(always)]
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        if bit { node.right } else { node.left }
    }

    pub fn state(&self) -> TreeState {
        match (self.leaves.is_empty(), self.nyt) {
            (true, _) => TreeState::Initial,
            (false, Some(_)) => TreeState::Growing,
            (false, None) => TreeState::Saturated,
        }
    }

    /// Return the leaf holding `symbol`, if any.
    pub fn leaf(&self, symbol: u32) -> Option<NodeId> {
        self.leaves
            .binary_search_by_key(&symbol, |entry| entry.symbol)
            .ok()
            .map(|pos| self.leaves[pos].node)
    }

    /// Whether the next first appearance will turn the NYT node itself into
    /// a leaf.
    #[inline(always)]
    pub fn is_last_unseen(&self) -> bool {
        self.leaves.len() as u64 + 1 == self.alphabet.size()
    }

    /// Return the path from the root to `id`.
    pub fn path(&self, id: NodeId) -> Code {
        let mut code = Code::default();
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            code.push_front(self.nodes[parent.0].right == Some(current));
            current = parent;
        }
        code
    }

    /// Return the code of the leaf of `target` or, if `target` has not been
    /// seen, the code of the NYT node.
    pub fn search(&self, target: u32) -> Result<Search, LookupError> {
        if let Some(leaf) = self.leaf(target) {
            return Ok(Search {
                first_appearance: false,
                code: self.path(leaf),
            });
        }
        let nyt = self.nyt.ok_or(LookupError::MissingNyt { symbol: target })?;
        Ok(Search {
            first_appearance: true,
            code: self.path(nyt),
        })
    }

    fn register(&mut self, symbol: u32, node: NodeId) {
        match self
            .leaves
            .binary_search_by_key(&symbol, |entry| entry.symbol)
        {
            Ok(pos) => self.leaves[pos].node = node,
            Err(pos) => self.leaves.insert(pos, LeafEntry { symbol, node }),
        }
    }

    fn push(&mut self, kind: NodeKind, weight: u64, parent: NodeId) -> NodeId {
        debug_assert!((self.nodes.len() as u64) < self.max_num());
        let num = self.max_num() - self.nodes.len() as u64;
        self.nodes.push(Node::leaf(kind, weight, num, Some(parent)));
        NodeId(self.nodes.len() - 1)
    }

    /// Turn the NYT node into an internal node whose right child is a new
    /// leaf of weight one for `symbol` and whose left child is a new NYT
    /// node. Return the former NYT node.
    pub(crate) fn split_nyt(&mut self, symbol: u32) -> Result<NodeId, LookupError> {
        let nyt = self.nyt.ok_or(LookupError::MissingNyt { symbol })?;
        let leaf = self.push(NodeKind::Leaf(symbol), 1, nyt);
        let new_nyt = self.push(NodeKind::Nyt, 0, nyt);
        let node = &mut self.nodes[nyt.0];
        node.kind = NodeKind::Internal;
        node.right = Some(leaf);
        node.left = Some(new_nyt);
        self.nyt = Some(new_nyt);
        self.register(symbol, leaf);
        Ok(nyt)
    }

    /// Turn the NYT node into the leaf of `symbol`, and return it.
    pub(crate) fn convert_nyt(&mut self, symbol: u32) -> Result<NodeId, LookupError> {
        let nyt = self.nyt.take().ok_or(LookupError::MissingNyt { symbol })?;
        self.nodes[nyt.0].kind = NodeKind::Leaf(symbol);
        self.register(symbol, nyt);
        Ok(nyt)
    }

    #[inline(always)]
    pub(crate) fn increment(&mut self, id: NodeId) {
        self.nodes[id.0].weight += 1;
    }

    /// Return the node with the highest number among those with the same
    /// weight as `id`.
    ///
    /// Weights are non-increasing along the arena, so the nodes of a block
    /// are contiguous and the leader is its first node.
    pub(crate) fn block_leader(&self, id: NodeId) -> NodeId {
        let weight = self.nodes[id.0].weight;
        let mut leader = id.0;
        while leader > 0 && self.nodes[leader - 1].weight == weight {
            leader -= 1;
        }
        debug_assert_eq!(
            Some(leader),
            self.nodes
                .iter()
                .enumerate()
                .filter(|(_, node)| node.weight == weight)
                .max_by_key(|(_, node)| node.num)
                .map(|(index, _)| index),
            "block of weight {} is not contiguous",
            weight
        );
        NodeId(leader)
    }

    /// Swap the kinds and the children of `a` and `b`, keeping their
    /// numbers, weights and parents.
    pub(crate) fn exchange(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (kind, left, right) = {
            let node = &self.nodes[a.0];
            (node.kind, node.left, node.right)
        };
        let (other_kind, other_left, other_right) = {
            let node = &self.nodes[b.0];
            (node.kind, node.left, node.right)
        };
        let node = &mut self.nodes[a.0];
        node.kind = other_kind;
        node.left = other_left;
        node.right = other_right;
        let node = &mut self.nodes[b.0];
        node.kind = kind;
        node.left = left;
        node.right = right;
        self.adopt(a);
        self.adopt(b);
    }

    /// Point the children of `id`, and the registry entry of its content,
    /// back to `id`.
    fn adopt(&mut self, id: NodeId) {
        let node = &self.nodes[id.0];
        let (kind, left, right) = (node.kind, node.left, node.right);
        for child in [left, right].into_iter().flatten() {
            self.nodes[child.0].parent = Some(id);
        }
        match kind {
            NodeKind::Leaf(symbol) => self.register(symbol, id),
            NodeKind::Nyt => self.nyt = Some(id),
            NodeKind::Internal => {}
        }
    }

    /// Check the structural invariants of the tree, returning the first
    /// violation found.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let max_num = self.max_num();

        // numbers are consecutive from the root numbers downwards
        for (index, node) in self.nodes.iter().enumerate() {
            if node.num != max_num - index as u64 {
                return Err(InvariantError::Nums {
                    num: node.num,
                    max_num,
                });
            }
        }

        // weights are non-increasing by decreasing number
        for pair in self.nodes.windows(2) {
            if pair[1].weight > pair[0].weight {
                return Err(InvariantError::WeightOrder {
                    num: pair[0].num,
                    weight: pair[0].weight,
                    lower_weight: pair[1].weight,
                });
            }
        }

        let mut reached = vec![false; self.nodes.len()];
        let mut stack = vec![NodeId::ROOT];
        let mut nyt_count = 0;
        let mut leaf_count = 0;
        while let Some(id) = stack.pop() {
            reached[id.0] = true;
            let node = &self.nodes[id.0];
            match (node.kind, node.left, node.right) {
                (NodeKind::Internal, Some(left), Some(right)) => {
                    let (l, r) = (&self.nodes[left.0], &self.nodes[right.0]);
                    if l.parent != Some(id) || r.parent != Some(id) {
                        return Err(InvariantError::ParentLink { num: node.num });
                    }
                    if r.num != l.num + 1 {
                        return Err(InvariantError::SiblingNums { num: node.num });
                    }
                    if node.weight != l.weight + r.weight {
                        return Err(InvariantError::WeightSum { num: node.num });
                    }
                    stack.push(right);
                    stack.push(left);
                }
                (NodeKind::Nyt, None, None) => {
                    nyt_count += 1;
                    if self.nyt != Some(id) {
                        return Err(InvariantError::NytCount {
                            expected: 1,
                            found: nyt_count,
                        });
                    }
                }
                (NodeKind::Leaf(symbol), None, None) => {
                    leaf_count += 1;
                    if self.leaf(symbol) != Some(id) {
                        return Err(InvariantError::LeafRegistry { symbol });
                    }
                }
                _ => return Err(InvariantError::Shape { num: node.num }),
            }
        }

        if let Some(index) = reached.iter().position(|&r| !r) {
            return Err(InvariantError::Unreachable { index });
        }

        let expected = if self.num_seen() as u64 == self.alphabet.size() {
            0
        } else {
            1
        };
        if nyt_count != expected || self.nyt.is_some() != (expected == 1) {
            return Err(InvariantError::NytCount {
                expected,
                found: nyt_count,
            });
        }
        for entry in &self.leaves {
            if self.nodes[entry.node.0].kind != NodeKind::Leaf(entry.symbol) {
                return Err(InvariantError::LeafRegistry {
                    symbol: entry.symbol,
                });
            }
        }
        debug_assert_eq!(leaf_count, self.leaves.len());
        if expected == 0 && self.nodes.len() as u64 != max_num {
            return Err(InvariantError::Nums {
                num: self.nodes.last().map_or(max_num, |node| node.num),
                max_num,
            });
        }
        Ok(())
    }
}

impl core::fmt::Display for HuffmanTree {
    /// Print one node per line, children indented below their parent, left
    /// child first.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut stack = vec![(NodeId::ROOT, 0)];
        while let Some((id, level)) = stack.pop() {
            let node = &self.nodes[id.0];
            writeln!(f, "{:indent$}{}", "", node, indent = 2 * level)?;
            if let (Some(left), Some(right)) = (node.left, node.right) {
                stack.push((right, level + 1));
                stack.push((left, level + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_new() {
        let tree = HuffmanTree::new(Alphabet::BYTES);
        assert_eq!(tree.state(), TreeState::Initial);
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.nyt(), Some(tree.root()));
        assert_eq!(tree.node(tree.root()).num(), 511);
        assert_eq!(tree.node(tree.root()).weight(), 0);
        let search = tree.search(42).unwrap();
        assert!(search.first_appearance);
        assert_eq!(search.code.len, 0);
        tree.validate().unwrap();
    }

    #[test]
    fn test_split_nyt() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        let old = tree.split_nyt(65).unwrap();
        tree.increment(old);
        assert_eq!(old, tree.root());
        assert_eq!(tree.kind(old), NodeKind::Internal);
        let leaf = tree.child(old, true).unwrap();
        let nyt = tree.child(old, false).unwrap();
        assert_eq!(tree.kind(leaf), NodeKind::Leaf(65));
        assert_eq!(tree.node(leaf).num(), 510);
        assert_eq!(tree.node(leaf).weight(), 1);
        assert_eq!(tree.kind(nyt), NodeKind::Nyt);
        assert_eq!(tree.node(nyt).num(), 509);
        assert_eq!(tree.nyt(), Some(nyt));
        assert_eq!(tree.state(), TreeState::Growing);
        tree.validate().unwrap();

        let search = tree.search(65).unwrap();
        assert!(!search.first_appearance);
        assert_eq!((search.code.bits, search.code.len), (1, 1));
        let search = tree.search(66).unwrap();
        assert!(search.first_appearance);
        assert_eq!((search.code.bits, search.code.len), (0, 1));
    }

    #[test]
    fn test_convert_nyt() {
        let mut tree = HuffmanTree::new(Alphabet::new(0, 1).unwrap());
        let old = tree.split_nyt(1).unwrap();
        tree.increment(old);
        assert!(tree.is_last_unseen());
        let leaf = tree.convert_nyt(0).unwrap();
        tree.increment(leaf);
        tree.increment(tree.root());
        assert_eq!(tree.state(), TreeState::Saturated);
        assert_eq!(tree.num_nodes(), 3);
        assert_eq!(tree.nyt(), None);
        assert_eq!(
            tree.search(7),
            Err(LookupError::MissingNyt { symbol: 7 })
        );
        tree.validate().unwrap();
    }

    #[test]
    fn test_exchange() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        let root = tree.split_nyt(65).unwrap();
        tree.increment(root);
        let inner = tree.split_nyt(66).unwrap();
        tree.increment(inner);
        tree.increment(root);
        // #511(2) [#509(1) [#507 NYT, #508 B], #510 A]
        let a = tree.leaf(65).unwrap();
        let b = tree.leaf(66).unwrap();
        assert_eq!(tree.block_leader(b), a);
        tree.exchange(a, b);
        assert_eq!(tree.leaf(65), Some(b));
        assert_eq!(tree.leaf(66), Some(a));
        assert_eq!(tree.node(a).num(), 510);
        assert_eq!(tree.node(a).parent(), Some(root));
        tree.validate().unwrap();

        // exchanging an internal node moves its subtree
        tree.exchange(inner, a);
        assert_eq!(tree.kind(a), NodeKind::Internal);
        assert_eq!(tree.node(tree.nyt().unwrap()).parent(), Some(a));
        assert_eq!(tree.path(tree.nyt().unwrap()).to_string(), "10");
        tree.validate().unwrap();
    }

    #[test]
    fn test_validate_detects_corruption() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        let root = tree.split_nyt(65).unwrap();
        tree.increment(root);
        tree.validate().unwrap();
        tree.increment(root);
        assert_eq!(
            tree.validate(),
            Err(InvariantError::WeightSum { num: 511 })
        );
        let leaf = tree.leaf(65).unwrap();
        tree.increment(leaf);
        tree.increment(leaf);
        assert!(matches!(
            tree.validate(),
            Err(InvariantError::WeightOrder { num: 511, .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        let root = tree.split_nyt(65).unwrap();
        tree.increment(root);
        assert_eq!(
            tree.to_string(),
            "#511(1) *\n  #509(0) NYT\n  #510(1) [65]\n"
        );
    }
}
