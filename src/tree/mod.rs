/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Adaptive Huffman trees.

A [`HuffmanTree`] starts as a single NYT ("not yet transmitted") node and
grows a leaf for each new symbol. After every occurrence,
[`update`](HuffmanTree::update) restores the *sibling property*: listing
the nodes by decreasing number gives non-increasing weights, siblings have
consecutive numbers, and the weight of an internal node is the sum of the
weights of its children. Under the sibling property the tree is a Huffman
tree for the frequencies seen so far.

The code of a symbol is the path from the root to its leaf, as a [`Code`];
[`CodeWrite`] writes it on a bit stream in the order a decoder walking down
the tree meets its steps.

*/

mod node;
pub use node::{Node, NodeId, NodeKind};

mod code;
pub use code::{Code, CodeWrite};

pub mod huffman_tree;
pub use huffman_tree::{HuffmanTree, Search, TreeState};

mod update;
