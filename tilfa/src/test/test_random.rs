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

//! Randomized cross-checks of the Floyd-Warshall engine against the Dijkstra helper, over
//! seeded random topologies.

use crate::alternates::dijkstra;
use crate::apsp::Apsp;
use crate::labels::label_stack;
use crate::paths::primary;
use crate::topology::Topology;
use rand::prelude::*;

fn random_topology(rng: &mut StdRng) -> Topology {
    let n = rng.gen_range(2, 13);
    let mut topo = Topology::with_nodes(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(0.5) {
                topo.add_link(a, b, rng.gen_range(1, 10)).unwrap();
            }
        }
    }
    topo
}

#[test]
fn test_floyd_warshall_matches_dijkstra() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..30 {
        let topo = random_topology(&mut rng);
        let apsp = Apsp::compute(&topo);
        let n = topo.nr_of_nodes();
        for i in 0..n {
            let (dist, _) = dijkstra(&topo, i);
            for j in 0..n {
                if i == j {
                    continue;
                }
                match dist[j] {
                    Some(d) => assert_eq!(apsp.dist(i, j), d),
                    None => assert!(!apsp.reachable(i, j)),
                }
            }
        }
    }
}

#[test]
fn test_path_weights_match_distances() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..30 {
        let topo = random_topology(&mut rng);
        let apsp = Apsp::compute(&topo);
        let n = topo.nr_of_nodes();
        for i in 0..n {
            for j in 0..n {
                let path = primary(&apsp, i, j);
                if path.is_empty() {
                    assert!(!apsp.reachable(i, j));
                    continue;
                }
                let sum: u64 = path.windows(2).map(|w| topo.weight(w[0], w[1])).sum();
                assert_eq!(sum, apsp.dist(i, j));
                assert_eq!(apsp.dist(i, j), apsp.dist(j, i));
            }
        }
    }
}

#[test]
fn test_label_depth_bounds_hold() {
    let mut rng = StdRng::seed_from_u64(44);
    for _ in 0..20 {
        let topo = random_topology(&mut rng);
        let before = Apsp::compute(&topo);
        let links: Vec<_> = topo.links().collect();
        if links.is_empty() {
            continue;
        }
        let (a, b, _) = links[rng.gen_range(0, links.len())];
        let mut scenario = topo.clone();
        scenario.remove_link(a, b).unwrap();
        let after = Apsp::compute(&scenario);

        let n = topo.nr_of_nodes();
        for i in 0..n {
            for j in 0..n {
                if i == j || !before.reachable(i, j) || !after.reachable(i, j) {
                    continue;
                }
                let repair = primary(&after, i, j);
                let stack = label_stack(&repair, &before);
                assert!(stack.depth() <= repair.len() - 1);
            }
        }
    }
}
