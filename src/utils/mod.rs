/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers around coding.

[`CountBitWrite`] keeps track of the number of bits written to a
[`BitWrite`](crate::traits::BitWrite), optionally logging the operations
performed on the stream.

[`Progress`] reports the advancement of a coding run; [`NoProgress`] is the
no-op default and [`LogProgress`] logs every tenth of the work.

[`encode_dpcm`] and [`decode_dpcm`] implement the delta transform applied
by the byte-level API on request, and `entropy` (with the `std` feature)
computes the empirical entropy that the byte-level API logs.

*/

mod count;
pub use count::*;

mod dpcm;
pub use dpcm::*;

#[cfg(feature = "std")]
mod entropy;
#[cfg(feature = "std")]
pub use entropy::*;

mod progress;
pub use progress::*;
