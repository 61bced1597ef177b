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

//! # TI-LFA Label Counter
//!
//! Fast reroute happens before the network has converged: the point of local repair already
//! forwards along the post-convergence path, but every other router still holds its pre-failure
//! forwarding state. The label stack imposed at the repair point must therefore pin down exactly
//! those stretches of the repair path on which the *old* forwarding state would wander off.
//!
//! The counter walks the repair path backward from the destination and keeps the current label
//! destination. Wherever the pre-failure successor toward that destination differs from the hop
//! the repair path takes, a node segment targeting the next node of the repair path is emitted
//! and becomes the new label destination. Two degenerate divergences need no label at all:
//!
//! - a divergence at the repair point itself (index 0): the repairing router steers its own
//!   first hop, no label can be required for it, and
//! - a divergence whose target *is* the current label destination, which is only possible on the
//!   final hop: pushing a label for the node the packet is already addressed to changes nothing.
//!
//! Both are recorded as a *null segment* event, counted as zero labels.

use crate::apsp::Apsp;
use crate::types::NodeId;

/// # Label stack of one repaired pair
///
/// The node segments (in the order they are traversed along the repair path) that the point of
/// local repair must impose, plus whether a null segment was encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStack {
    /// Segment targets in path order; the stack depth is the length of this vector.
    pub targets: Vec<NodeId>,
    /// True if a degenerate divergence was steered without a label.
    pub null_segment: bool,
}

impl LabelStack {
    /// Number of labels required beyond the base destination label.
    pub fn depth(&self) -> usize {
        self.targets.len()
    }
}

/// Compute the label stack for one repair path. `repair` is the post-convergence path of a
/// diverging pair (at least two nodes); `before` is the APSP result of the intact topology,
/// whose successor table the surviving routers still forward by.
pub fn label_stack(repair: &[NodeId], before: &Apsp) -> LabelStack {
    debug_assert!(repair.len() >= 2, "a repair path has at least two nodes");

    let mut targets = Vec::new();
    let mut null_segment = false;
    let mut label_destination = repair[repair.len() - 1];

    for k in (0..repair.len() - 1).rev() {
        let current = repair[k];
        let want = repair[k + 1];
        if before.next_hop(current, label_destination) == Some(want) {
            continue;
        }
        if k == 0 || want == label_destination {
            null_segment = true;
        } else {
            targets.push(want);
            label_destination = want;
        }
    }

    // the walk found the targets back to front
    targets.reverse();
    LabelStack { targets, null_segment }
}
