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

//! Module containing all error types
//!
//! Broken internal contracts (like a primary next-hop walk that does not terminate within `n`
//! steps) are not represented here; they panic immediately, since they can only be caused by a
//! bug in this crate.

use crate::types::NodeId;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error while reading or parsing a topology file
    #[error("Input Error: {0}")]
    Input(#[from] InputError),
    /// Out-of-range node index in a topology operation
    #[error("Index Error: {0}")]
    Index(#[from] IndexError),
    /// Error while writing to the report sink
    #[error("Sink Error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Errors raised while reading or parsing a topology file
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read
    #[error("Cannot read the topology file: {0}")]
    Read(#[from] std::io::Error),
    /// The file contains no node count
    #[error("The topology file is empty!")]
    Empty,
    /// The topology must contain at least one node
    #[error("The topology must contain at least one node (got {0})")]
    NoNodes(i64),
    /// The weight matrix ended before `n * n` entries were read
    #[error("The weight matrix is truncated: expected {expected} entries, found {found}")]
    TruncatedMatrix {
        /// Number of entries the header promised (`n * n`)
        expected: usize,
        /// Number of entries actually present
        found: usize,
    },
    /// A token could not be parsed as a non-negative integer
    #[error("Invalid token in the topology file: {0:?}")]
    InvalidToken(String),
    /// A link weight was negative
    #[error("Link weights must be non-negative, found {0:?}")]
    NegativeWeight(String),
    /// A diagonal entry was non-zero
    #[error("Node {} has a non-zero self-loop weight", .0 + 1)]
    SelfLoop(NodeId),
}

/// Errors raised by topology operations with out-of-range node indices
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// The node index is not part of the topology
    #[error("Node {node} does not exist, the topology has {nr_of_nodes} nodes")]
    NodeOutOfRange {
        /// The offending node index
        node: NodeId,
        /// Number of nodes in the topology
        nr_of_nodes: usize,
    },
}
