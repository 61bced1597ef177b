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

//! # Topology Store
//!
//! The [`Topology`] is an immutable-by-convention weight matrix over `n` nodes. The failure-scan
//! driver never mutates the topology it loaded; every failure scenario operates on its own value
//! clone, mutated exactly once with [`Topology::remove_node`] or [`Topology::remove_link`].

use crate::error::{Error, IndexError, InputError};
use crate::types::{NodeId, SquareMatrix, Weight};
use itertools::Itertools;
use log::*;
use std::path::Path;
use std::str::FromStr;

/// # Weighted network topology
///
/// A symmetric `n x n` matrix of link weights, with weight `0` encoding the absence of a link and
/// a zero diagonal. Cloning yields a deep, value-independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    nr_of_nodes: usize,
    weights: SquareMatrix<Weight>,
}

impl Topology {
    /// Create a topology of `nr_of_nodes` nodes without any links. **Panics** if `nr_of_nodes`
    /// is zero.
    pub fn with_nodes(nr_of_nodes: usize) -> Self {
        assert!(nr_of_nodes >= 1, "a topology must contain at least one node");
        Self { nr_of_nodes, weights: SquareMatrix::new(nr_of_nodes, 0) }
    }

    /// Read a topology from a file. The expected format is a whitespace-separated token stream:
    /// the node count `n`, followed by `n * n` non-negative integer weights in row-major order.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(InputError::Read)?;
        content.parse()
    }

    /// Number of nodes in the topology.
    pub fn nr_of_nodes(&self) -> usize {
        self.nr_of_nodes
    }

    /// Weight of the link from `a` to `b` (`0` if there is no link). **Panics** if either index
    /// is out of range.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Weight {
        self.weights.get(a, b)
    }

    /// Returns true if and only if there is a link from `a` to `b`.
    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.weights.get(a, b) > 0
    }

    /// Insert the link `a -- b` with the given weight, in both directions. Intended for building
    /// topologies programmatically (tests and prepared examples); parsed topologies come with
    /// their links already in place.
    pub fn add_link(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), Error> {
        self.check_node(a)?;
        self.check_node(b)?;
        assert!(a != b, "cannot add a self-loop");
        assert!(weight > 0, "links must have a positive weight");
        self.weights.set(a, b, weight);
        self.weights.set(b, a, weight);
        Ok(())
    }

    /// Remove the node `v` by removing all links adjacent to it. The node keeps its index; it
    /// simply becomes unreachable.
    pub fn remove_node(&mut self, v: NodeId) -> Result<(), Error> {
        self.check_node(v)?;
        for u in 0..self.nr_of_nodes {
            self.weights.set(u, v, 0);
            self.weights.set(v, u, 0);
        }
        Ok(())
    }

    /// Remove the link between `a` and `b`, in both directions. Removing a link that does not
    /// exist is a no-op.
    pub fn remove_link(&mut self, a: NodeId, b: NodeId) -> Result<(), Error> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.weights.set(a, b, 0);
        self.weights.set(b, a, 0);
        Ok(())
    }

    /// Remove only the direction `a -> b` of a link. This deliberately breaks the symmetry
    /// invariant, which is why it is not public: the secondary next-hop builder punctures the
    /// primary out-link of a pair on its own clone, without disturbing the reverse direction.
    pub(crate) fn remove_link_directed(&mut self, a: NodeId, b: NodeId) {
        self.weights.set(a, b, 0);
    }

    /// Iterate over all links as `(a, b, weight)` with `a < b`.
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        (0..self.nr_of_nodes)
            .tuple_combinations()
            .filter_map(move |(a, b)| match self.weights.get(a, b) {
                0 => None,
                w => Some((a, b, w)),
            })
    }

    /// Iterate over the neighbors of `u` as `(neighbor, weight)`, in ascending index order.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        (0..self.nr_of_nodes).filter_map(move |v| match self.weights.get(u, v) {
            0 => None,
            w => Some((v, w)),
        })
    }

    fn check_node(&self, node: NodeId) -> Result<(), IndexError> {
        if node < self.nr_of_nodes {
            Ok(())
        } else {
            Err(IndexError::NodeOutOfRange { node, nr_of_nodes: self.nr_of_nodes })
        }
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let header = tokens.next().ok_or(InputError::Empty)?;
        let n: i64 = header
            .parse()
            .map_err(|_| InputError::InvalidToken(header.to_string()))?;
        if n < 1 {
            return Err(InputError::NoNodes(n).into());
        }
        let n = n as usize;

        let mut topo = Topology::with_nodes(n);
        let mut found = 0usize;
        for i in 0..n {
            for j in 0..n {
                let token = tokens.next().ok_or(InputError::TruncatedMatrix {
                    expected: n * n,
                    found,
                })?;
                if token.starts_with('-') {
                    return Err(InputError::NegativeWeight(token.to_string()).into());
                }
                let w: Weight = token
                    .parse()
                    .map_err(|_| InputError::InvalidToken(token.to_string()))?;
                if i == j && w != 0 {
                    return Err(InputError::SelfLoop(i).into());
                }
                topo.weights.set(i, j, w);
                found += 1;
            }
        }

        // the engine never relies on symmetry, but undirected input should provide it
        for (a, b) in (0..n).tuple_combinations() {
            if topo.weights.get(a, b) != topo.weights.get(b, a) {
                warn!(
                    "asymmetric input: weight {}->{} is {}, but {}->{} is {}",
                    a + 1,
                    b + 1,
                    topo.weights.get(a, b),
                    b + 1,
                    a + 1,
                    topo.weights.get(b, a)
                );
            }
        }

        Ok(topo)
    }
}
