/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Whole-file compression and extraction.

use std::path::Path;

use crate::coder::{compress, decompress, CoderConfig};
use crate::error::Result;

/// Compress the content of `input` into `output`, returning the size of
/// the result.
pub fn compress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CoderConfig,
) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let data = std::fs::read(input)?;
    let compressed = compress(&data, config)?;
    std::fs::write(output, &compressed)?;
    log::info!(
        "{} ({} bytes) compressed into {} ({} bytes, {:.2}%)",
        input.display(),
        data.len(),
        output.display(),
        compressed.len(),
        ratio(compressed.len(), data.len())
    );
    Ok(compressed.len())
}

/// Extract the content of `input`, written by [`compress_file`] with the
/// same configuration, into `output`, returning the size of the result.
pub fn extract_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CoderConfig,
) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let compressed = std::fs::read(input)?;
    let data = decompress(&compressed, config)?;
    std::fs::write(output, &data)?;
    log::info!(
        "{} ({} bytes) extracted into {} ({} bytes)",
        input.display(),
        compressed.len(),
        output.display(),
        data.len()
    );
    Ok(data.len())
}

fn ratio(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        100.0 * compressed as f64 / original as f64
    }
}
