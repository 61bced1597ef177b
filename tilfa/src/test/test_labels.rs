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

//! Test the TI-LFA label counter on the prepared reroute situations.

use crate::apsp::Apsp;
use crate::example_topologies::*;
use crate::labels::label_stack;
use crate::paths::primary;
use crate::topology::Topology;
use crate::types::Failure;
use lazy_static::lazy_static;

lazy_static! {
    static ref BYPASS: Topology = bypass();
    static ref BYPASS_APSP: Apsp = Apsp::compute(&BYPASS);
}

/// Apply the failure to a clone and return the post-convergence path of the pair.
fn repair_path(topo: &Topology, failure: Failure, source: usize, target: usize) -> Vec<usize> {
    let mut scenario = topo.clone();
    match failure {
        Failure::Node(v) => scenario.remove_node(v).unwrap(),
        Failure::Link(a, b) => scenario.remove_link(a, b).unwrap(),
    }
    primary(&Apsp::compute(&scenario), source, target)
}

#[test]
fn test_direct_fallback_is_null_segment() {
    // when node 1 dies, the pair (0, 2) falls back to its direct link; the repair point steers
    // onto it without any label
    let topo = triangle();
    let before = Apsp::compute(&topo);
    let repair = repair_path(&topo, Failure::Node(1), 0, 2);
    assert_eq!(repair, vec![0, 2]);
    let stack = label_stack(&repair, &before);
    assert_eq!(stack.depth(), 0);
    assert!(stack.targets.is_empty());
    assert!(stack.null_segment);
}

#[test]
fn test_ring_detour_needs_one_label() {
    // losing the link 0-3 pushes (0, 3) the long way around the ring; node 1 would forward a
    // packet addressed to 3 back over node 0, so a segment for node 2 is required
    let topo = square_with_diagonal();
    let before = Apsp::compute(&topo);
    let repair = repair_path(&topo, Failure::Link(0, 3), 0, 3);
    assert_eq!(repair, vec![0, 1, 2, 3]);
    let stack = label_stack(&repair, &before);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.targets, vec![2]);
    assert!(!stack.null_segment);
}

#[test]
fn test_ring_detour_reverse_direction() {
    // the reverse pair (3, 0) diverges only at the repair point itself
    let topo = square_with_diagonal();
    let before = Apsp::compute(&topo);
    let repair = repair_path(&topo, Failure::Link(0, 3), 3, 0);
    assert_eq!(repair, vec![3, 2, 1, 0]);
    let stack = label_stack(&repair, &before);
    assert_eq!(stack.depth(), 0);
    assert!(stack.null_segment);
}

#[test]
fn test_diamond_node_failure() {
    // the post-convergence path from 0 to 4 starts on the expensive branch, which the repair
    // point reaches with its own forwarding decision
    let topo = diamond();
    let before = Apsp::compute(&topo);
    let repair = repair_path(&topo, Failure::Node(2), 0, 4);
    assert_eq!(repair, vec![0, 3, 4]);
    let stack = label_stack(&repair, &before);
    assert_eq!(stack.depth(), 0);
    assert!(stack.null_segment);
}

#[test]
fn test_bypass_needs_mid_path_segment() {
    // from node 4 the pre-failure shortest path toward 3 runs back through node 1 and the dead
    // link, so the detour must carry a segment for node 5
    let repair = repair_path(&BYPASS, Failure::Link(1, 2), 0, 3);
    assert_eq!(repair, vec![0, 1, 4, 5, 2, 3]);
    let stack = label_stack(&repair, &BYPASS_APSP);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.targets, vec![5]);
    assert!(!stack.null_segment);
}

#[test]
fn test_full_mesh_never_needs_labels() {
    let topo = full_mesh(4);
    let before = Apsp::compute(&topo);
    for (a, b, _) in topo.links() {
        let repair = repair_path(&topo, Failure::Link(a, b), a, b);
        assert_eq!(repair.len(), 3);
        let stack = label_stack(&repair, &before);
        assert_eq!(stack.depth(), 0);
        assert!(stack.null_segment);
    }
}

#[test]
fn test_unchanged_path_counts_zero() {
    // a repair path that is the primary path itself never diverges from the old state
    for topo in &[triangle(), line(), square_with_diagonal(), diamond(), bypass()] {
        let before = Apsp::compute(topo);
        let n = topo.nr_of_nodes();
        for i in 0..n {
            for j in 0..n {
                if i == j || !before.reachable(i, j) {
                    continue;
                }
                let stack = label_stack(&primary(&before, i, j), &before);
                assert_eq!(stack.depth(), 0);
                assert!(!stack.null_segment);
            }
        }
    }
}

#[test]
fn test_depth_bounded_by_path_length() {
    for &failure in &[Failure::Link(1, 2), Failure::Node(2), Failure::Link(2, 3)] {
        let n = BYPASS.nr_of_nodes();
        for i in 0..n {
            for j in 0..n {
                if i == j || failure.removes(i) || failure.removes(j) {
                    continue;
                }
                let repair = repair_path(&BYPASS, failure, i, j);
                if repair.len() < 2 {
                    continue;
                }
                let stack = label_stack(&repair, &BYPASS_APSP);
                assert!(stack.depth() <= repair.len() - 1);
            }
        }
    }
}
