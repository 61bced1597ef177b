// Tilfa: Quantifying the Label-Stack Depth of TI-LFA Fast Reroute
// Copyright (C) 2022  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Statistics Aggregator
//!
//! Two small accumulators, owned by the failure-scan driver (one pair per pass). Both support
//! merging, so a parallel scan can keep a private aggregator per worker and combine them at the
//! end.

/// Number of histogram bins: label depths 0 through 4, and "5 or more".
pub const NR_OF_BINS: usize = 6;

/// # Label depth histogram
///
/// Counts, over all diverging pairs of a scan, how many required 0, 1, 2, 3, 4, or 5+ labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelHistogram {
    bins: [usize; NR_OF_BINS],
    total: usize,
}

impl LabelHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all bins and the total to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one diverging pair that required `labels` labels.
    pub fn record(&mut self, labels: usize) {
        self.total += 1;
        if labels >= NR_OF_BINS - 1 {
            self.bins[NR_OF_BINS - 1] += 1;
        } else {
            self.bins[labels] += 1;
        }
    }

    /// Add the counts of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (bin, count) in self.bins.iter_mut().zip(other.bins.iter()) {
            *bin += count;
        }
        self.total += other.total;
    }

    /// Number of pairs recorded in the given bin. **Panics** if `bin >= NR_OF_BINS`.
    pub fn bin(&self, bin: usize) -> usize {
        self.bins[bin]
    }

    /// Percentage of recorded pairs in the given bin, `0.0` if nothing was recorded.
    pub fn percentage(&self, bin: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.bins[bin] as f64 / self.total as f64 * 100.0
        }
    }

    /// Total number of recorded pairs (times rerouting was needed).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if and only if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// # Binary event counter
///
/// Counts events of interest out of a total, e.g. how many pairs remained connected across all
/// failure scenarios of a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatioCounter {
    hits: usize,
    total: usize,
}

impl RatioCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event; `hit` tells whether it was an event of interest.
    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }

    /// Add the counts of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.hits += other.hits;
        self.total += other.total;
    }

    /// Number of events of interest.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Total number of events.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Hits as a percentage of the total, `0.0` if nothing was recorded.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hits as f64 / self.total as f64 * 100.0
        }
    }
}
