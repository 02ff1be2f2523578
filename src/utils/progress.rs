/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Progress reporting for long coding runs.
///
/// Encoders count symbols and decoders count bits. Implementations must not
/// affect the result of the coding.
pub trait Progress {
    /// Called once, before coding `total` items.
    fn start(&mut self, _total: u64) {}

    /// Called with the number of items coded so far.
    fn update(&mut self, _done: u64) {}

    /// Called once, after coding the last item.
    fn done(&mut self) {}
}

/// A [`Progress`] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// A [`Progress`] logging at info level every tenth of the work.
#[derive(Debug, Clone)]
pub struct LogProgress {
    name: &'static str,
    total: u64,
    next_tenth: u64,
}

impl LogProgress {
    /// Create a new logger whose messages start with `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            next_tenth: 1,
        }
    }

    #[inline(always)]
    fn threshold(&self) -> u64 {
        (self.total as u128 * self.next_tenth as u128 / 10) as u64
    }
}

impl Progress for LogProgress {
    fn start(&mut self, total: u64) {
        self.total = total;
        self.next_tenth = 1;
        log::info!("{}: started, {} items", self.name, total);
    }

    fn update(&mut self, done: u64) {
        while self.next_tenth < 10 && done >= self.threshold() && self.total > 0 {
            log::info!("{}: {}0%", self.name, self.next_tenth);
            self.next_tenth += 1;
        }
    }

    fn done(&mut self) {
        log::info!("{}: done", self.name);
    }
}
