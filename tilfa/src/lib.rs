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

#![deny(missing_docs)]

//! # Tilfa: Quantifying the Label-Stack Depth of TI-LFA Fast Reroute
//!
//! This is a library for analyzing how well a weighted, undirected network copes with single
//! element failures when Topology-Independent Loop-Free Alternate (TI-LFA) fast reroute is used:
//! for every possible failure of one node or one link, it determines which source-destination
//! pairs are rerouted, and how many MPLS labels (node segments) the point of local repair must
//! impose so that the packet follows the post-convergence shortest path while the rest of the
//! network still forwards with its pre-failure state.
//!
//! ## Structure
//!
//! - **[`Topology`](topology::Topology)**: the weight-matrix store. Loaded once from a file,
//!   then cloned per failure scenario; clones are mutated with
//!   [`remove_node`](topology::Topology::remove_node) or
//!   [`remove_link`](topology::Topology::remove_link).
//!
//! - **[`Apsp`](apsp::Apsp)**: all-pairs shortest paths via a modified Floyd-Warshall that also
//!   produces the primary next-hop matrix, with deterministic tie-breaking.
//!
//! - **[`paths`]**: on-demand path reconstruction from next-hop matrices, both primary-only and
//!   guided by the secondary table around a failed element.
//!
//! - **[`AlternateNextHops`](alternates::AlternateNextHops)**: the secondary next-hop table,
//!   built by puncturing the primary out-link of every pair and re-running a single-source
//!   Dijkstra on a fresh clone.
//!
//! - **[`labels`]**: the TI-LFA label counter, walking a repair path backward against the
//!   pre-failure forwarding state.
//!
//! - **[`scan`]**: the failure-scan driver enumerating all single-node and single-link
//!   failures, sequentially or fanned out over worker threads.
//!
//! - **[`stats`]** and **[`report`]**: the label-depth histogram and connectivity counters, and
//!   the formatting helpers that write them to a caller-provided sink.
//!
//! - **[`example_topologies`]**: small prepared networks for tests and experiments.
//!
//! ## Features
//!
//! - *`draw`*: enables the [`draw`] module, which exports a topology in Graphviz dot format for
//!   external rendering.
//!
//! ## Usage
//!
//! ```
//! use tilfa::alternates::AlternateNextHops;
//! use tilfa::apsp::Apsp;
//! use tilfa::example_topologies::triangle;
//! use tilfa::scan::{link_failures, node_failures, scan};
//! use tilfa::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let topo = triangle();
//!     let before = Apsp::compute(&topo);
//!     let alternates = AlternateNextHops::build(&topo, &before);
//!
//!     let mut sink: Vec<u8> = Vec::new();
//!     let nodes = scan(&topo, &before, &alternates, &node_failures(&topo), Some(&mut sink))?;
//!     let links = scan(&topo, &before, &alternates, &link_failures(&topo), Some(&mut sink))?;
//!
//!     // every reroute in the triangle is a direct fallback, no labels needed
//!     assert_eq!(nodes.labels.bin(0), nodes.labels.total());
//!     assert_eq!(links.labels.bin(0), links.labels.total());
//!     Ok(())
//! }
//! ```

pub mod alternates;
pub mod apsp;
#[cfg(feature = "draw")]
pub mod draw;
mod error;
pub mod example_topologies;
pub mod labels;
pub mod paths;
pub mod report;
pub mod scan;
pub mod stats;
pub mod topology;
pub mod types;

mod test;

pub use error::{Error, IndexError, InputError};
pub use types::{Failure, NextHop, NodeId, Weight};
