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

//! # APSP Engine
//!
//! All-pairs shortest paths via a modified Floyd-Warshall that maintains, next to the distance
//! matrix, the *primary successor* of every pair: the first hop of the shortest path from `i`
//! to `j`. Successors are threaded through the relaxation (`H[i][j] = H[i][k]` rather than `k`
//! itself), so a path is reconstructed by repeated successor lookup instead of recursion over
//! intermediate nodes.
//!
//! Tie-breaking is deterministic: a relaxation only applies on *strict* improvement, with the
//! intermediate node `k` iterating in ascending order. Two runs on equal input always produce
//! identical successor tables, which is what makes path comparison across failure scenarios
//! meaningful.

use crate::topology::Topology;
use crate::types::{NextHop, NodeId, SquareMatrix, Weight};

/// # APSP result
///
/// The distance matrix and the primary next-hop matrix of a topology, as computed by
/// [`Apsp::compute`]. The matrices are derived artifacts: after any mutation of the underlying
/// topology they must be recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apsp {
    dist: SquareMatrix<Weight>,
    next: SquareMatrix<NextHop>,
}

impl Apsp {
    /// Run the modified Floyd-Warshall algorithm on the given topology.
    pub fn compute(topo: &Topology) -> Self {
        let n = topo.nr_of_nodes();

        // D starts as the weight matrix, H points along every existing link
        let mut dist: SquareMatrix<Weight> = SquareMatrix::new(n, 0);
        let mut next: SquareMatrix<NextHop> = SquareMatrix::new(n, None);
        for i in 0..n {
            for j in 0..n {
                let w = topo.weight(i, j);
                dist.set(i, j, w);
                if i == j || w > 0 {
                    next.set(i, j, Some(j));
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let ik = dist.get(i, k);
                    let kj = dist.get(k, j);
                    if ik == 0 || kj == 0 {
                        continue;
                    }
                    let through = ik + kj;
                    let current = dist.get(i, j);
                    if current == 0 || through < current {
                        dist.set(i, j, through);
                        next.set(i, j, next.get(i, k));
                    }
                }
            }
        }

        Self { dist, next }
    }

    /// Number of nodes of the underlying topology.
    pub fn nr_of_nodes(&self) -> usize {
        self.dist.dim()
    }

    /// Shortest-path distance from `i` to `j`. For `i != j`, `0` means unreachable.
    pub fn dist(&self, i: NodeId, j: NodeId) -> Weight {
        self.dist.get(i, j)
    }

    /// Primary successor of `i` toward `j`, or `None` if `j` is unreachable from `i`.
    pub fn next_hop(&self, i: NodeId, j: NodeId) -> NextHop {
        self.next.get(i, j)
    }

    /// Returns true if and only if `j` is reachable from `i`.
    pub fn reachable(&self, i: NodeId, j: NodeId) -> bool {
        self.next.get(i, j).is_some()
    }
}
