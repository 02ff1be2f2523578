/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit and word (seekable) streams.

To read or write words directly from memory, use [`MemWordReader`] and
[`MemWordWriterVec`]. You must specify a word type, which must match the type
of the elements of the slice or vector; the framed adaptive-Huffman format
uses `u8`.

Once you have a way to access words, you can use [`BitReader`] and
[`BufBitWriter`] to read or write bits from a word stream. Both have a
statically selectable endianness. [`BufBitWriter`] stores bits that are not
yet written in an internal bit buffer; [`BitReader`] reads memory directly,
seeking to the word containing the current bit at each read.

*/

mod mem_word_reader;
pub use mem_word_reader::*;

mod mem_word_writer;
pub use mem_word_writer::*;

mod bit_reader;
pub use bit_reader::BitReader;

mod buf_bit_writer;
pub use buf_bit_writer::BufBitWriter;
