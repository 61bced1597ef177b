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

//! # Example Topologies
//!
//! A collection of small prepared networks covering the interesting reroute situations: direct
//! fallbacks, disconnecting cuts, equal-cost tie-breaks, and detours that need a mid-path
//! segment. They are used heavily by the test suite and are handy for experimenting on the
//! command line (write them to a file with [`super::report`]-style 1-indexed numbering in mind:
//! in code, nodes are 0-indexed).

use crate::topology::Topology;

/// # Triangle
///
/// ```text
///       5
///   0 ------ 2
///    \      /
///   1 \    / 1
///      \  /
///       1
/// ```
///
/// The shortest path from 0 to 2 runs via node 1 (cost 2); the direct link (cost 5) only takes
/// over when node 1 fails.
pub fn triangle() -> Topology {
    let mut topo = Topology::with_nodes(3);
    topo.add_link(0, 1, 1).unwrap();
    topo.add_link(1, 2, 1).unwrap();
    topo.add_link(0, 2, 5).unwrap();
    topo
}

/// # Line
///
/// ```text
///   0 --1-- 1 --1-- 2 --1-- 3
/// ```
///
/// Removing any link cuts the network in two.
pub fn line() -> Topology {
    let mut topo = Topology::with_nodes(4);
    topo.add_link(0, 1, 1).unwrap();
    topo.add_link(1, 2, 1).unwrap();
    topo.add_link(2, 3, 1).unwrap();
    topo
}

/// # Square with diagonal
///
/// ```text
///   0 --1-- 1
///   |  .10  |
///   1  diag 1
///   | (0-2) |
///   3 --1-- 2
/// ```
///
/// Unit-weight ring 0-1-2-3-0 plus an expensive diagonal 0-2 of weight 10. Removing the link
/// 0-3 reroutes the pair (0, 3) the long way around the ring.
pub fn square_with_diagonal() -> Topology {
    let mut topo = Topology::with_nodes(4);
    topo.add_link(0, 1, 1).unwrap();
    topo.add_link(1, 2, 1).unwrap();
    topo.add_link(2, 3, 1).unwrap();
    topo.add_link(0, 3, 1).unwrap();
    topo.add_link(0, 2, 10).unwrap();
    topo
}

/// # Diamond with asymmetric detour
///
/// ```text
///   0 --1-- 1 --1-- 2
///   |               |
///   2               1
///   |               |
///   3 -----2------- 4
/// ```
///
/// The cheap branch runs 0-1-2-4 (cost 3), the expensive one 0-3-4 (cost 4). Removing node 2
/// forces the pair (0, 4) onto the expensive branch, which the repair point can steer without
/// any label.
pub fn diamond() -> Topology {
    let mut topo = Topology::with_nodes(5);
    topo.add_link(0, 1, 1).unwrap();
    topo.add_link(1, 2, 1).unwrap();
    topo.add_link(2, 4, 1).unwrap();
    topo.add_link(0, 3, 2).unwrap();
    topo.add_link(3, 4, 2).unwrap();
    topo
}

/// # Bypass needing a mid-path segment
///
/// ```text
///   0 --1-- 1 --2-- 2 --1-- 3
///           |       |
///           1       2
///           |       |
///           4 --1-- 5
/// ```
///
/// The primary path from 0 to 3 is 0-1-2-3. When the link 1-2 fails, the only repair runs
/// 0-1-4-5-2-3, but the pre-failure shortest path from node 4 toward 3 leads back through
/// node 1, so the repair point must impose one segment targeting node 5 to keep the packet on
/// the detour.
pub fn bypass() -> Topology {
    let mut topo = Topology::with_nodes(6);
    topo.add_link(0, 1, 1).unwrap();
    topo.add_link(1, 2, 2).unwrap();
    topo.add_link(2, 3, 1).unwrap();
    topo.add_link(1, 4, 1).unwrap();
    topo.add_link(4, 5, 1).unwrap();
    topo.add_link(5, 2, 2).unwrap();
    topo
}

/// # Full mesh
///
/// Every pair of nodes is connected with a unit-weight link. Any single link failure reroutes
/// only the pair that lost its link, onto a two-hop path that needs no label.
pub fn full_mesh(nr_of_nodes: usize) -> Topology {
    let mut topo = Topology::with_nodes(nr_of_nodes);
    for a in 0..nr_of_nodes {
        for b in (a + 1)..nr_of_nodes {
            topo.add_link(a, b, 1).unwrap();
        }
    }
    topo
}
