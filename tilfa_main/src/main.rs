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

use tilfa::alternates::AlternateNextHops;
use tilfa::apsp::Apsp;
use tilfa::report;
use tilfa::scan::{link_failures, node_failures, scan, scan_parallel, ScanOutcome};
use tilfa::topology::Topology;

use clap::Parser;
use log::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "tilfa_main", author = "Tibor Schneider", version)]
struct CommandLineArguments {
    /// Topology file: the node count, then the row-major weight matrix (0 = no link)
    input_file: PathBuf,

    /// Only print aggregate statistics; use --quiet=false for per-pair reroute descriptions
    #[clap(long, default_value = "true", parse(try_from_str))]
    quiet: bool,

    /// Number of worker threads for the quiet scan (defaults to the number of cores)
    #[clap(short, long)]
    threads: Option<usize>,

    /// Write the report to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Write the topology as a Graphviz dot file (render with `dot -Tpng`)
    #[cfg(feature = "draw")]
    #[clap(long)]
    dot: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // run clap
    let args = CommandLineArguments::parse();

    // initialize the env logger
    pretty_env_logger::init();

    let topo = Topology::from_file(&args.input_file)?;
    info!(
        "Loaded a topology with {} nodes and {} links",
        topo.nr_of_nodes(),
        topo.links().count()
    );

    #[cfg(feature = "draw")]
    {
        if let Some(path) = &args.dot {
            let mut file = File::create(path)?;
            tilfa::draw::write_dot(&topo, &mut file)?;
            info!("Wrote the topology drawing to {}", path.display());
        }
    }

    info!("Computing the pre-failure forwarding state");
    let before = Apsp::compute(&topo);
    let alternates = AlternateNextHops::build(&topo, &before);

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    if !args.quiet {
        report::write_next_hop_tables(&mut sink, &before, &alternates)?;
    }

    let node_scenarios = node_failures(&topo);
    let link_scenarios = link_failures(&topo);
    info!(
        "Scanning {} node and {} link failure scenarios",
        node_scenarios.len(),
        link_scenarios.len()
    );

    let (node_outcome, link_outcome): (ScanOutcome, ScanOutcome) = if args.quiet {
        let threads = args.threads.unwrap_or_else(num_cpus::get);
        (
            scan_parallel(&topo, &before, &node_scenarios, threads),
            scan_parallel(&topo, &before, &link_scenarios, threads),
        )
    } else {
        (
            scan(&topo, &before, &alternates, &node_scenarios, Some(&mut sink))?,
            scan(&topo, &before, &alternates, &link_scenarios, Some(&mut sink))?,
        )
    };

    report::write_label_stats(&mut sink, "Node protection:", &node_outcome.labels)?;
    report::write_connectivity(&mut sink, &node_outcome.connectivity)?;
    report::write_label_stats(&mut sink, "Link protection:", &link_outcome.labels)?;
    report::write_connectivity(&mut sink, &link_outcome.connectivity)?;

    Ok(())
}
