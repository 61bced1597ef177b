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

//! # Secondary Next-Hop Builder
//!
//! For every ordered pair `(i, j)` the builder looks for an alternate next hop that avoids the
//! primary out-link of the pair: on a fresh clone of the topology the single directed link from
//! `i` to its primary successor is punctured, and a single-source Dijkstra from `i` recovers the
//! detour to `j`. Every hop `(u, v)` along the detour on which the primary table already differs
//! is installed into the secondary table, first writer wins. The result is a table that, for
//! every pair with an edge-disjoint alternative, offers at least one node-adjacent fallback at
//! the point where the primary fails.

use crate::apsp::Apsp;
use crate::topology::Topology;
use crate::types::{NextHop, NodeId, SquareMatrix, Weight};
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// # Secondary next-hop table
///
/// An `n x n` matrix of alternate successors, sparse by nature: an entry only exists where the
/// detour of some pair actually deviates from the primary forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateNextHops {
    next: SquareMatrix<NextHop>,
}

impl AlternateNextHops {
    /// Build the secondary next-hop table for a topology and its APSP result.
    pub fn build(topo: &Topology, apsp: &Apsp) -> Self {
        let n = topo.nr_of_nodes();
        let mut next: SquareMatrix<NextHop> = SquareMatrix::new(n, None);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let primary_hop = match apsp.next_hop(i, j) {
                    Some(hop) => hop,
                    None => continue,
                };
                let mut punctured = topo.clone();
                punctured.remove_link_directed(i, primary_hop);
                let detour = shortest_path(&punctured, i, j);
                if detour.len() < 2 {
                    continue;
                }
                for (u, v) in detour.iter().copied().tuple_windows() {
                    if apsp.next_hop(u, j) != Some(v) && next.get(u, j).is_none() {
                        next.set(u, j, Some(v));
                    }
                }
            }
        }

        Self { next }
    }

    /// Secondary successor of `i` toward `j`, or `None` if no alternate was installed.
    pub fn next_hop(&self, i: NodeId, j: NodeId) -> NextHop {
        self.next.get(i, j)
    }

    /// Number of nodes of the underlying topology.
    pub fn nr_of_nodes(&self) -> usize {
        self.next.dim()
    }
}

/// Single-source Dijkstra over the (possibly asymmetric) weight matrix. Returns the distance and
/// parent vector; unreached nodes keep `None` in both. Ties are broken by the lowest node index:
/// the heap pops equal distances in index order, and a relaxation only applies on strict
/// improvement, so the first (lowest-index) parent survives.
pub(crate) fn dijkstra(
    topo: &Topology,
    source: NodeId,
) -> (Vec<Option<Weight>>, Vec<NextHop>) {
    let n = topo.nr_of_nodes();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<NextHop> = vec![None; n];
    let mut heap: BinaryHeap<Reverse<(Weight, NodeId)>> = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0, source)));
    while let Some(Reverse((d, u))) = heap.pop() {
        if dist[u] != Some(d) {
            // stale entry, u was already settled with a smaller distance
            continue;
        }
        for (v, w) in topo.neighbors(u) {
            let candidate = d + w;
            match dist[v] {
                Some(settled) if settled <= candidate => {}
                _ => {
                    dist[v] = Some(candidate);
                    parent[v] = Some(u);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }
    }

    (dist, parent)
}

/// Shortest path from `source` to `target` via Dijkstra parent pointers, or the empty path if
/// the target is unreachable.
pub(crate) fn shortest_path(topo: &Topology, source: NodeId, target: NodeId) -> Vec<NodeId> {
    if source == target {
        return vec![source];
    }
    let (dist, parent) = dijkstra(topo, source);
    if dist[target].is_none() {
        return Vec::new();
    }
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
        if current == source {
            break;
        }
    }
    path.reverse();
    path
}
