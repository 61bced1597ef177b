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

//! # Topology drawing (feature `draw`)
//!
//! Exports a topology in Graphviz dot format; rendering to PNG is left to the external `dot`
//! tool (e.g. `dot -Tpng topology.dot -o topology.png`). Node names are 1-indexed and edges
//! carry their weight as label.

use crate::topology::Topology;
use crate::types::Weight;
use petgraph::dot::Dot;
use petgraph::graph::UnGraph;
use std::io::{self, Write};

/// Convert a topology into a [`petgraph`] graph with 1-indexed node names and weighted edges.
pub fn to_graph(topo: &Topology) -> UnGraph<String, Weight> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> =
        (0..topo.nr_of_nodes()).map(|i| graph.add_node(format!("{}", i + 1))).collect();
    for (a, b, w) in topo.links() {
        graph.add_edge(nodes[a], nodes[b], w);
    }
    graph
}

/// Write the topology in Graphviz dot format to the given sink.
pub fn write_dot<W: Write>(topo: &Topology, sink: &mut W) -> io::Result<()> {
    let graph = to_graph(topo);
    writeln!(sink, "{}", Dot::new(&graph))
}
