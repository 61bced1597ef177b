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

//! # Path Reconstructor
//!
//! Paths are never stored; they are materialized on demand by walking a next-hop matrix, which
//! keeps the memory footprint of an APSP result at `O(n^2)`. Two walks exist:
//!
//! - [`primary`] follows the primary successor table alone. It either reaches the target or hits
//!   an absent successor (unreachable, the empty path).
//! - [`guided`] simulates fast-reroute forwarding around a failed element: the primary table is
//!   consulted first, but entries whose hop would traverse the failure are unusable, and the walk
//!   falls back to the secondary table. A secondary hop must not immediately backtrack to the
//!   previous node; secondary tables form exactly this kind of 2-cycle at detour endpoints.

use crate::alternates::AlternateNextHops;
use crate::apsp::Apsp;
use crate::types::{Failure, NodeId};
use std::collections::HashSet;

/// Reconstruct the primary path from `source` to `target`, or the empty path if the target is
/// unreachable. **Panics** if the successor table walk does not terminate within `n` steps,
/// which would mean the APSP engine produced a cyclic successor table.
pub fn primary(apsp: &Apsp, source: NodeId, target: NodeId) -> Vec<NodeId> {
    let n = apsp.nr_of_nodes();
    let mut path = Vec::new();
    let mut current = source;
    loop {
        path.push(current);
        if current == target {
            return path;
        }
        current = match apsp.next_hop(current, target) {
            Some(hop) => hop,
            None => return Vec::new(),
        };
        if path.len() > n {
            panic!(
                "next-hop walk from {} to {} did not terminate within {} steps",
                source, target, n
            );
        }
    }
}

/// Reconstruct the path a packet takes from `source` to `target` when the given element has
/// failed and forwarding falls back from the primary to the secondary next-hop table. Returns
/// the empty path when guidance fails: the target is cut off, the walk dead-ends at the
/// no-backtrack rule, or the tables send the packet in a loop.
pub fn guided(
    apsp: &Apsp,
    alternates: &AlternateNextHops,
    failure: Failure,
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    if failure.removes(source) || failure.removes(target) {
        return Vec::new();
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut path = Vec::new();
    let mut previous: Option<NodeId> = None;
    let mut current = source;
    loop {
        path.push(current);
        if current == target {
            return path;
        }
        if !visited.insert(current) {
            // the two tables sent the packet in a circle
            return Vec::new();
        }
        let primary_hop = apsp
            .next_hop(current, target)
            .filter(|&hop| !failure.blocks(current, hop));
        let hop = match primary_hop {
            Some(hop) => hop,
            None => match alternates
                .next_hop(current, target)
                .filter(|&hop| !failure.blocks(current, hop))
            {
                Some(hop) if previous != Some(hop) => hop,
                _ => return Vec::new(),
            },
        };
        previous = Some(current);
        current = hop;
    }
}
