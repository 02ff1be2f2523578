/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The FGK update algorithm.

use super::HuffmanTree;
use crate::error::LookupError;

impl HuffmanTree {
    /// Account for an occurrence of `symbol`, restoring the sibling
    /// property.
    ///
    /// `first_appearance` must be the value returned by
    /// [`search`](HuffmanTree::search) for `symbol` before the update. A first
    /// appearance gives `symbol` a leaf by splitting the NYT node or, if
    /// `symbol` is the last unseen one, by turning the NYT node into its leaf.
    ///
    /// Then, walking up to the root, every node is swapped with the leader of
    /// its block (unless the leader is its parent) and its weight is
    /// incremented; the walk continues from the position the node has been
    /// swapped to.
    ///
    /// Errors are never caused by the input: they mean that the tree has been
    /// corrupted.
    pub fn update(&mut self, symbol: u32, first_appearance: bool) -> Result<(), LookupError> {
        let mut current = if first_appearance {
            debug_assert!(self.leaf(symbol).is_none(), "symbol {} already has a leaf", symbol);
            let node = if self.is_last_unseen() {
                self.convert_nyt(symbol)?
            } else {
                self.split_nyt(symbol)?
            };
            self.increment(node);
            match self.node(node).parent() {
                Some(parent) => parent,
                None => return Ok(()),
            }
        } else {
            self.leaf(symbol).ok_or(LookupError::MissingLeaf { symbol })?
        };

        loop {
            let leader = self.block_leader(current);
            if leader != current && Some(leader) != self.node(current).parent() {
                log::trace!(
                    "exchanging #{} and #{}",
                    self.node(current).num(),
                    self.node(leader).num()
                );
                self.exchange(current, leader);
                current = leader;
            }
            self.increment(current);
            match self.node(current).parent() {
                Some(parent) => current = parent,
                None => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::codes::Alphabet;
    use crate::error::LookupError;
    use crate::tree::{HuffmanTree, NodeKind, TreeState};
    use alloc::string::ToString;

    fn feed(tree: &mut HuffmanTree, symbols: &[u32]) {
        for &symbol in symbols {
            let search = tree.search(symbol).unwrap();
            tree.update(symbol, search.first_appearance).unwrap();
            tree.validate().unwrap();
        }
    }

    #[test]
    fn test_abac() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        feed(&mut tree, &[65, 66, 65, 67]);
        assert_eq!(
            tree.to_string(),
            "#511(4) *\n  \
               #509(2) *\n    \
                 #507(1) *\n      \
                   #505(0) NYT\n      \
                   #506(1) [67]\n    \
                 #508(1) [66]\n  \
               #510(2) [65]\n"
        );
        assert_eq!(tree.search(65).unwrap().code.to_string(), "1");
        assert_eq!(tree.search(66).unwrap().code.to_string(), "01");
        assert_eq!(tree.search(67).unwrap().code.to_string(), "001");
        assert_eq!(tree.search(68).unwrap().code.to_string(), "000");
    }

    #[test]
    fn test_swap_with_leader() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        feed(&mut tree, &[65, 66, 66]);
        // B moved to the highest position of weight 1 before growing
        let b = tree.leaf(66).unwrap();
        assert_eq!(tree.node(b).num(), 510);
        assert_eq!(tree.node(b).weight(), 2);
        assert_eq!(tree.search(65).unwrap().code.to_string(), "01");
    }

    #[test]
    fn test_saturation() {
        let alphabet = Alphabet::new(0, 2).unwrap();
        let mut tree = HuffmanTree::new(alphabet);
        feed(&mut tree, &[2, 0]);
        assert_eq!(tree.state(), TreeState::Growing);
        feed(&mut tree, &[1]);
        assert_eq!(tree.state(), TreeState::Saturated);
        assert_eq!(tree.num_nodes(), 5);
        assert!(tree.nodes().iter().all(|node| node.kind() != NodeKind::Nyt));
        let mut nums: alloc::vec::Vec<u64> = tree.nodes().iter().map(|node| node.num()).collect();
        nums.sort_unstable();
        assert_eq!(nums, [1, 2, 3, 4, 5]);
        feed(&mut tree, &[1, 1, 0, 2, 2, 2, 2]);
        assert_eq!(tree.node(tree.root()).weight(), 10);
    }

    #[test]
    fn test_missing_leaf() {
        let mut tree = HuffmanTree::new(Alphabet::BYTES);
        assert_eq!(
            tree.update(65, false),
            Err(LookupError::MissingLeaf { symbol: 65 })
        );
    }
}
