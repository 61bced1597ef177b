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

//! Module containing all type definitions
//!
//! The conventions used by every matrix in this crate:
//! - A [`Weight`] of `0` encodes the absence of a link. The graph never contains true zero-cost
//!   links, and the diagonal of the weight matrix is always zero. In the distance matrix produced
//!   by the APSP engine, `0` for a pair `(i, j)` with `i != j` means that `j` is unreachable
//!   from `i`.
//! - A [`NextHop`] of `None` means that no successor is known. The original formulation uses `-1`
//!   for this; an `Option` makes the absent case impossible to confuse with a node index.

use std::fmt;

/// Node identifier, an index into the weight matrix.
pub type NodeId = usize;

/// Link weight. The value `0` encodes "no link".
pub type Weight = u64;

/// Successor entry of a next-hop matrix. `None` means no successor is known.
pub type NextHop = Option<NodeId>;

/// A square matrix, stored as a flattened row-major vector. All state tables of this crate (link
/// weights, distances, next-hops) are instances of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create a new `dim x dim` matrix with every cell set to `value`.
    pub fn new(dim: usize, value: T) -> Self {
        Self { dim, data: vec![value; dim * dim] }
    }
}

impl<T> SquareMatrix<T> {
    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Set the cell at `(row, col)`. **Panics** if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.idx(row, col);
        self.data[idx] = value;
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(row < self.dim && col < self.dim, "matrix index out of range");
        row * self.dim + col
    }
}

impl<T: Copy> SquareMatrix<T> {
    /// Get the cell at `(row, col)`. **Panics** if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.idx(row, col)]
    }
}

/// A single failure scenario: one removed node or one removed link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// All links adjacent to the node are removed.
    Node(NodeId),
    /// The link between the two nodes is removed (in both directions).
    Link(NodeId, NodeId),
}

impl Failure {
    /// Returns true if and only if the failure removes the given node from the topology.
    pub fn removes(&self, node: NodeId) -> bool {
        match *self {
            Self::Node(v) => v == node,
            Self::Link(_, _) => false,
        }
    }

    /// Returns true if and only if forwarding from `from` to `to` would traverse the failed
    /// element.
    pub fn blocks(&self, from: NodeId, to: NodeId) -> bool {
        match *self {
            Self::Node(v) => v == from || v == to,
            Self::Link(a, b) => (from, to) == (a, b) || (from, to) == (b, a),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // node numbers are 1-indexed for display
        match *self {
            Self::Node(v) => write!(f, "node {}", v + 1),
            Self::Link(a, b) => write!(f, "link {}-{}", a + 1, b + 1),
        }
    }
}
