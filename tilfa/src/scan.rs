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

//! # Failure-Scan Driver
//!
//! Enumerates all single-node and single-link failures of a topology. Every scenario gets its
//! own clone, mutated exactly once, with APSP recomputed from scratch; the pre-failure APSP is
//! computed once by the caller and shared read-only. For every ordered pair that was connected
//! before the failure, the driver compares the pre- and post-convergence paths, feeds diverging
//! pairs through the label counter, and accumulates the statistics.
//!
//! Scenarios are independent of each other, so [`scan_parallel`] fans them out over worker
//! threads, each with a private [`ScanOutcome`] merged at the end. The parallel variant is quiet
//! by design; per-pair reporting needs a stable order and stays sequential.

use crate::alternates::AlternateNextHops;
use crate::apsp::Apsp;
use crate::error::Error;
use crate::labels::label_stack;
use crate::paths;
use crate::report;
use crate::stats::{LabelHistogram, RatioCounter};
use crate::topology::Topology;
use crate::types::Failure;
use log::*;
use std::io::Write;
use std::thread;

/// # Aggregated outcome of a scan pass
///
/// The label depth histogram over all diverging pairs, and the connectivity counter over all
/// pairs that were connected before the failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Label depths of all diverging pairs.
    pub labels: LabelHistogram,
    /// Pairs that survived the failure, out of all pairs connected before it.
    pub connectivity: RatioCounter,
}

impl ScanOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counts of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.labels.merge(&other.labels);
        self.connectivity.merge(&other.connectivity);
    }
}

/// All single-node failure scenarios of a topology.
pub fn node_failures(topo: &Topology) -> Vec<Failure> {
    (0..topo.nr_of_nodes()).map(Failure::Node).collect()
}

/// All single-link failure scenarios of a topology, one per existing link `{a, b}` with
/// `a < b`. Non-existent links are not enumerated; removing one would be a no-op scenario.
pub fn link_failures(topo: &Topology) -> Vec<Failure> {
    topo.links().map(|(a, b, _)| Failure::Link(a, b)).collect()
}

/// Run the given failure scenarios sequentially. With a sink, every scenario is reported in
/// enumeration order: lost pairs, and for each diverging pair the old, new and fast-reroute
/// path together with the required label stack.
pub fn scan<W: Write>(
    topo: &Topology,
    before: &Apsp,
    alternates: &AlternateNextHops,
    failures: &[Failure],
    mut sink: Option<&mut W>,
) -> Result<ScanOutcome, Error> {
    let mut outcome = ScanOutcome::new();
    for failure in failures {
        scan_one(
            topo,
            before,
            *failure,
            sink.as_deref_mut().map(|s| (s, alternates)),
            &mut outcome,
        )?;
    }
    Ok(outcome)
}

/// Run the given failure scenarios distributed over `nr_of_threads` worker threads. Workers own
/// a clone of the topology and the pre-failure APSP and a private outcome; the outcomes are
/// merged once all workers are done.
pub fn scan_parallel(
    topo: &Topology,
    before: &Apsp,
    failures: &[Failure],
    nr_of_threads: usize,
) -> ScanOutcome {
    let nr_of_threads = nr_of_threads.max(1).min(failures.len().max(1));
    debug!("spawning {} scan workers for {} scenarios", nr_of_threads, failures.len());

    let handles = (0..nr_of_threads)
        .map(|worker| {
            let topo = topo.clone();
            let before = before.clone();
            let chunk: Vec<Failure> =
                failures.iter().copied().skip(worker).step_by(nr_of_threads).collect();
            thread::spawn(move || {
                let mut outcome = ScanOutcome::new();
                for failure in chunk {
                    scan_one::<std::io::Sink>(&topo, &before, failure, None, &mut outcome)
                        .expect("quiet scan cannot fail");
                }
                outcome
            })
        })
        .collect::<Vec<_>>();

    let mut outcome = ScanOutcome::new();
    for handle in handles {
        outcome.merge(&handle.join().expect("scan worker panicked"));
    }
    outcome
}

/// Process a single failure scenario: clone, mutate, recompute APSP, compare all pairs. An
/// out-of-range scenario is reported and skipped without aborting the scan.
fn scan_one<W: Write>(
    topo: &Topology,
    before: &Apsp,
    failure: Failure,
    mut detail: Option<(&mut W, &AlternateNextHops)>,
    outcome: &mut ScanOutcome,
) -> Result<(), Error> {
    let mut scenario = topo.clone();
    let applied = match failure {
        Failure::Node(v) => scenario.remove_node(v),
        Failure::Link(a, b) => scenario.remove_link(a, b),
    };
    if let Err(e) = applied {
        warn!("skipping failure scenario ({}): {}", failure, e);
        return Ok(());
    }

    let after = Apsp::compute(&scenario);
    if let Some((sink, _)) = detail.as_mut() {
        report::write_scenario_header(&mut **sink, failure)?;
    }

    let n = topo.nr_of_nodes();
    for i in 0..n {
        for j in 0..n {
            if i == j || failure.removes(i) || failure.removes(j) {
                continue;
            }
            let old_path = paths::primary(before, i, j);
            if old_path.is_empty() {
                // the pair was not connected to begin with
                continue;
            }
            let new_path = paths::primary(&after, i, j);
            outcome.connectivity.record(!new_path.is_empty());
            if new_path.is_empty() {
                if let Some((sink, _)) = detail.as_mut() {
                    report::write_lost_pair(&mut **sink, i, j, &old_path)?;
                }
                continue;
            }
            if new_path == old_path {
                continue;
            }

            let stack = label_stack(&new_path, before);
            outcome.labels.record(stack.depth());
            if let Some((sink, alternates)) = detail.as_mut() {
                let frr_path = paths::guided(before, alternates, failure, i, j);
                report::write_pair(&mut **sink, i, j, &old_path, &new_path, &frr_path, &stack)?;
            }
        }
    }
    Ok(())
}
