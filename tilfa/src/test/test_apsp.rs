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

//! Test the APSP engine: distances, successor tables, tie-breaking and its invariants.

use crate::apsp::Apsp;
use crate::example_topologies::*;
use crate::paths;
use crate::topology::Topology;

/// Check that every reconstructed path sums up to the distance matrix entry, and that the
/// distance matrix satisfies the triangle inequality.
fn check_consistency(topo: &Topology, apsp: &Apsp) {
    let n = topo.nr_of_nodes();
    for i in 0..n {
        for j in 0..n {
            let path = paths::primary(apsp, i, j);
            if path.is_empty() {
                assert_eq!(apsp.dist(i, j), 0);
                assert!(!apsp.reachable(i, j));
                continue;
            }
            let mut sum = 0;
            for w in path.windows(2) {
                assert!(topo.has_link(w[0], w[1]));
                sum += topo.weight(w[0], w[1]);
            }
            assert_eq!(sum, apsp.dist(i, j));
            for k in 0..n {
                if apsp.reachable(i, k) && apsp.reachable(k, j) {
                    assert!(apsp.dist(i, j) <= apsp.dist(i, k) + apsp.dist(k, j));
                }
            }
        }
    }
}

#[test]
fn test_triangle() {
    let topo = triangle();
    let apsp = Apsp::compute(&topo);
    assert_eq!(apsp.dist(0, 1), 1);
    assert_eq!(apsp.dist(1, 2), 1);
    // the direct link of weight 5 is beaten by the two-hop path
    assert_eq!(apsp.dist(0, 2), 2);
    assert_eq!(apsp.next_hop(0, 2), Some(1));
    assert_eq!(apsp.next_hop(2, 0), Some(1));
    check_consistency(&topo, &apsp);
}

#[test]
fn test_line() {
    let topo = line();
    let apsp = Apsp::compute(&topo);
    assert_eq!(apsp.dist(0, 3), 3);
    assert_eq!(apsp.next_hop(0, 3), Some(1));
    assert_eq!(apsp.next_hop(1, 3), Some(2));
    assert_eq!(apsp.dist(3, 0), 3);
    check_consistency(&topo, &apsp);
}

#[test]
fn test_self_successor() {
    let apsp = Apsp::compute(&square_with_diagonal());
    for i in 0..4 {
        assert_eq!(apsp.next_hop(i, i), Some(i));
        assert_eq!(apsp.dist(i, i), 0);
    }
}

#[test]
fn test_tie_breaking() {
    // from node 1 to node 3 both 1-0-3 and 1-2-3 cost 2; the relaxation through the lower
    // intermediate node wins and later equal-cost candidates never overwrite it
    let apsp = Apsp::compute(&square_with_diagonal());
    assert_eq!(apsp.dist(1, 3), 2);
    assert_eq!(apsp.next_hop(1, 3), Some(0));
    assert_eq!(apsp.next_hop(3, 1), Some(0));
    // the expensive diagonal is never used
    assert_eq!(apsp.dist(0, 2), 2);
    assert_eq!(apsp.next_hop(0, 2), Some(1));
}

#[test]
fn test_unreachable() {
    let mut topo = line();
    topo.remove_link(1, 2).unwrap();
    let apsp = Apsp::compute(&topo);
    assert_eq!(apsp.dist(0, 3), 0);
    assert_eq!(apsp.next_hop(0, 3), None);
    assert!(!apsp.reachable(0, 2));
    assert!(apsp.reachable(0, 1));
    assert!(apsp.reachable(2, 3));
}

#[test]
fn test_isolated_node() {
    let mut topo = triangle();
    topo.remove_node(1).unwrap();
    let apsp = Apsp::compute(&topo);
    assert!(!apsp.reachable(0, 1));
    assert!(!apsp.reachable(1, 2));
    // the expensive direct link remains
    assert_eq!(apsp.dist(0, 2), 5);
    assert_eq!(apsp.next_hop(0, 2), Some(2));
}

#[test]
fn test_clone_roundtrip() {
    let topo = bypass();
    let copy = topo.clone();
    assert_eq!(Apsp::compute(&topo), Apsp::compute(&copy));
}

#[test]
fn test_symmetric_distances() {
    for topo in &[triangle(), line(), square_with_diagonal(), diamond(), bypass(), full_mesh(4)]
    {
        let apsp = Apsp::compute(topo);
        let n = topo.nr_of_nodes();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(apsp.dist(i, j), apsp.dist(j, i));
            }
        }
        check_consistency(topo, &apsp);
    }
}
