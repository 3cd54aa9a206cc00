// MeshRoute: default route computation for wireless mesh networks
// Copyright (C) 2024 MeshRoute Developers
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

//! # Route Computer
//!
//! This module contains the classification pipeline that turns raw candidate paths from the
//! routing layer into [`RoutesForNode`] results: ethernet-hop elision, minimal-hop filtering,
//! path deduplication, ECMP marking and P2MP counting.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;

use crate::routes::{Hop, RouteToPop, RoutesForNode};
use crate::source::PathSource;
use crate::topology::{LinkType, Topology};
use crate::types::RouteError;

/// # Route Computer
///
/// Computes, for every requested node of a topology, the set of shortest wireless paths to the
/// reachable POPs. The path fetches are independent per (origin, POP) pair and are fanned out on
/// the rayon thread pool; the gather preserves the request order, so the output order never
/// depends on fetch completion order.
///
/// The topology snapshot is borrowed shared for the duration of a call, and the computer holds
/// no mutable state, so concurrent calls (e.g. for different networks) are safe.
#[derive(Debug, Clone)]
pub struct RouteComputer<S> {
    source: S,
}

impl<S: PathSource> RouteComputer<S> {
    /// Create a new route computer around a path source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The path source this computer queries.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Compute the routes for every node of the topology (POPs included, trivially), in topology
    /// order. Fails if any single path fetch fails.
    pub fn compute_routes(&self, topology: &Topology) -> Result<Vec<RoutesForNode>, RouteError> {
        let names = topology.nodes().map(|n| n.name.as_str()).collect::<Vec<_>>();
        self.compute(topology, &names)
    }

    /// Compute the routes for the named nodes, in the given order. Names unknown to the topology
    /// are silently skipped, so the output contains exactly one entry per known requested node.
    pub fn compute_routes_for<N: AsRef<str> + Sync>(
        &self,
        topology: &Topology,
        node_names: &[N],
    ) -> Result<Vec<RoutesForNode>, RouteError> {
        let names = node_names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| {
                let known = topology.node_id(name).is_some();
                if !known {
                    debug!("skipping unknown node {name}");
                }
                known
            })
            .collect::<Vec<_>>();
        self.compute(topology, &names)
    }

    /// Scatter one task per requested node and gather index-preserving, failing fast on the
    /// first fetch error.
    fn compute(
        &self,
        topology: &Topology,
        names: &[&str],
    ) -> Result<Vec<RoutesForNode>, RouteError> {
        names
            .par_iter()
            .map(|name| self.routes_for_node(topology, name))
            .collect()
    }

    fn routes_for_node(
        &self,
        topology: &Topology,
        name: &str,
    ) -> Result<RoutesForNode, RouteError> {
        // POPs are their own closest gateway; no fetch needed.
        if topology.is_pop(name) {
            return Ok(RoutesForNode::pop(name));
        }

        let pops = topology.pops().map(|n| n.name.as_str()).collect::<Vec<_>>();

        // One fetch per (origin, POP) pair, fanned out.
        let raw = pops
            .par_iter()
            .map(|pop| self.source.fetch_candidate_paths(name, pop))
            .collect::<Result<Vec<_>, _>>()?;

        let candidates = pops
            .iter()
            .zip(raw)
            .flat_map(|(pop, paths)| {
                paths
                    .into_iter()
                    .filter_map(|path| wireless_hops(topology, &path).map(|hops| (*pop, hops)))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let Some(num_hops) = candidates.iter().map(|(_, hops)| hops.len()).min() else {
            debug!("{name} has no wireless route to any POP");
            return Ok(RoutesForNode::unreachable(name));
        };

        // Keep only the globally shortest candidates, deduplicated by their exact ordered hop
        // sequence per POP. Surviving paths may span multiple equidistant POPs.
        let mut shortest: HashMap<&str, HashSet<Vec<Hop>>> = HashMap::new();
        for (pop, hops) in candidates {
            if hops.len() == num_hops {
                shortest.entry(pop).or_default().insert(hops);
            }
        }

        let routes = shortest
            .into_iter()
            .flat_map(|(pop, paths)| {
                let ecmp = paths.len() > 1;
                paths.into_iter().map(move |path| (pop, ecmp, path))
            })
            .map(|(pop, ecmp, path)| RouteToPop {
                pop_name: pop.to_string(),
                num_p2mp_hops: path
                    .iter()
                    .filter(|hop| topology.wireless_degree(&hop.from) > 1)
                    .count(),
                ecmp,
                path,
            });

        let result = RoutesForNode::new(name, Some(num_hops), routes);
        debug!("computed {result}");
        Ok(result)
    }
}

/// Reduce a raw candidate path to its wireless hop sequence.
///
/// Ethernet hops are elided (same-site wiring is free), so the surviving hops need not share
/// endpoints. Hops over links unknown to the snapshot are kept, as the routing layer may know
/// links the snapshot does not. A candidate is rejected entirely if it transits another POP
/// before its destination, or if nothing remains after elision.
fn wireless_hops(topology: &Topology, path: &[String]) -> Option<Vec<Hop>> {
    let (_, transit) = path.split_last()?;
    if transit.iter().any(|node| topology.is_pop(node)) {
        trace!("discarding candidate through intermediate POP: {path:?}");
        return None;
    }

    let hops = path
        .iter()
        .tuple_windows()
        .filter(|(a, b)| topology.link_type(a, b) != Some(LinkType::Ethernet))
        .map(|(a, b)| Hop::new(a, b))
        .collect::<Vec<_>>();

    if hops.is_empty() {
        trace!("discarding candidate with no wireless hop: {path:?}");
        return None;
    }
    Some(hops)
}
