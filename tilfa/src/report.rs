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

//! # Helper (report) functions for the analysis output
//!
//! All emission goes through a sink handle passed in by the caller; nothing in this crate ever
//! writes to a process-wide stream on its own. Node numbers are stored 0-indexed but displayed
//! 1-indexed throughout.

use crate::alternates::AlternateNextHops;
use crate::apsp::Apsp;
use crate::labels::LabelStack;
use crate::stats::{LabelHistogram, RatioCounter, NR_OF_BINS};
use crate::types::{Failure, NodeId};
use itertools::Itertools;
use std::io::{self, Write};

/// Format a path for display, 1-indexed. The empty path renders as `(unreachable)`.
pub fn path(path: &[NodeId]) -> String {
    if path.is_empty() {
        String::from("(unreachable)")
    } else {
        path.iter().map(|node| node + 1).join(" ")
    }
}

/// Format a label stack for display: the depth, followed by the 1-indexed segment targets in
/// traversal order, and a marker for the null segment event.
pub fn labels(stack: &LabelStack) -> String {
    let mut result = format!("{}", stack.depth());
    if !stack.targets.is_empty() {
        result.push_str(&format!(
            " (via {})",
            stack.targets.iter().map(|node| node + 1).join(", ")
        ));
    }
    if stack.null_segment {
        result.push_str(" [null segment]");
    }
    result
}

/// Write the header line of a failure scenario.
pub fn write_scenario_header<W: Write>(sink: &mut W, failure: Failure) -> io::Result<()> {
    writeln!(sink, "\n{} removed:", capitalized(failure))
}

/// Write the reroute description of one diverging pair: the old and new path, the path that
/// secondary-table forwarding takes around the failure, and the required label stack.
pub fn write_pair<W: Write>(
    sink: &mut W,
    source: NodeId,
    target: NodeId,
    old_path: &[NodeId],
    new_path: &[NodeId],
    guided_path: &[NodeId],
    stack: &LabelStack,
) -> io::Result<()> {
    writeln!(sink, "{} -> {}:", source + 1, target + 1)?;
    writeln!(sink, "    old:    {}", path(old_path))?;
    writeln!(sink, "    new:    {}", path(new_path))?;
    writeln!(sink, "    frr:    {}", path(guided_path))?;
    writeln!(sink, "    labels: {}", labels(stack))
}

/// Write a pair that lost connectivity through the failure.
pub fn write_lost_pair<W: Write>(
    sink: &mut W,
    source: NodeId,
    target: NodeId,
    old_path: &[NodeId],
) -> io::Result<()> {
    writeln!(sink, "{} -> {}:", source + 1, target + 1)?;
    writeln!(sink, "    old:    {}", path(old_path))?;
    writeln!(sink, "    new:    (unreachable)")
}

/// Write the label statistics block of one pass.
pub fn write_label_stats<W: Write>(
    sink: &mut W,
    title: &str,
    hist: &LabelHistogram,
) -> io::Result<()> {
    writeln!(sink, "\n{}", title)?;
    writeln!(sink, "Total times rerouting was needed: {}", hist.total())?;
    write!(sink, "Number of labels required:     ")?;
    for bin in 0..NR_OF_BINS - 1 {
        write!(sink, "{:>8}", bin)?;
    }
    writeln!(sink, "{:>8}", "4<")?;
    write!(sink, "Times this many were required: ")?;
    for bin in 0..NR_OF_BINS {
        write!(sink, "{:>8}", hist.bin(bin))?;
    }
    writeln!(sink)?;
    write!(sink, "Percentage required:           ")?;
    for bin in 0..NR_OF_BINS {
        write!(sink, "{:>7.2}%", hist.percentage(bin))?;
    }
    writeln!(sink)
}

/// Write the connectivity summary of one pass.
pub fn write_connectivity<W: Write>(sink: &mut W, ratio: &RatioCounter) -> io::Result<()> {
    writeln!(
        sink,
        "Pairs that survived the failure: {} of {} ({:.2}%)",
        ratio.hits(),
        ratio.total(),
        ratio.percentage()
    )
}

/// Write the primary and secondary next-hop tables, 1-indexed, with `-` for absent entries.
pub fn write_next_hop_tables<W: Write>(
    sink: &mut W,
    apsp: &Apsp,
    alternates: &AlternateNextHops,
) -> io::Result<()> {
    let n = apsp.nr_of_nodes();
    writeln!(sink, "Primary next hops:")?;
    for i in 0..n {
        let row = (0..n).map(|j| entry(apsp.next_hop(i, j))).join(" ");
        writeln!(sink, "    {}", row)?;
    }
    writeln!(sink, "Secondary next hops:")?;
    for i in 0..n {
        let row = (0..n).map(|j| entry(alternates.next_hop(i, j))).join(" ");
        writeln!(sink, "    {}", row)?;
    }
    Ok(())
}

fn entry(hop: Option<NodeId>) -> String {
    match hop {
        Some(node) => format!("{}", node + 1),
        None => String::from("-"),
    }
}

fn capitalized(failure: Failure) -> String {
    let s = failure.to_string();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s,
    }
}
