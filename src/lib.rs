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

#![deny(missing_docs, missing_debug_implementations)]

//! # MeshRoute
//!
//! This is a library for computing the default routes of a wireless mesh network towards its
//! gateway (POP) nodes.
//!
//! A mesh network consists of nodes connected by wireless links (radio sectors) and ethernet
//! links (same-site wiring). A subset of the nodes are POPs: gateways that provide uplink
//! connectivity to the wider network. For every other node, the routing layer knows a set of
//! candidate paths towards each POP. This crate takes a [`topology::Topology`] snapshot together
//! with a [`source::PathSource`] (the collaborator that answers path queries, typically backed by
//! a routing daemon), and classifies the candidates: ethernet hops are elided, only the shortest
//! wireless paths survive, equal-cost multi-path (ECMP) groups are detected, and every hop
//! through a point-to-multipoint radio sector is counted.
//!
//! The result is one [`routes::RoutesForNode`] per queried node, containing a duplicate-free set
//! of [`routes::RouteToPop`] values. All result types are immutable, comparable, and
//! serializable, so downstream tooling (test schedulers, analytics pipelines) can consume them
//! directly.
//!
//! Path fetches are independent per (origin, POP) pair and are fanned out on the rayon thread
//! pool. The output order always matches the request order, and any fetch failure aborts the
//! whole call (callers retry at call granularity, see [`types::RouteError`]).
//!
//! ## Example usage
//!
//! The following example builds a three-node topology where `A` and `B` share a site (ethernet
//! link) and `B` reaches the POP `P` over a wireless link. The recorded path from `A` crosses the
//! ethernet link, which is elided from the resulting route.
//!
//! ```
//! use meshroute::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut topo = Topology::new();
//!     let a = topo.add_node("A", false)?;
//!     let b = topo.add_node("B", false)?;
//!     let p = topo.add_node("P", true)?;
//!     topo.add_link(a, b, LinkType::Ethernet)?;
//!     topo.add_link(b, p, LinkType::Wireless)?;
//!
//!     let mut source = StaticPathSource::new();
//!     source.insert("A", "P", [vec!["A", "B", "P"]]);
//!     source.insert("B", "P", [vec!["B", "P"]]);
//!
//!     let computer = RouteComputer::new(source);
//!     let routes = computer.compute_routes(&topo)?;
//!
//!     assert_eq!(routes.len(), 3);
//!     // "A" is one wireless hop away from "P": the ethernet hop does not count.
//!     assert_eq!(routes[0].num_hops, Some(1));
//!     assert_eq!(routes[0].routes.first().unwrap().path, vec![Hop::new("B", "P")]);
//!     // POPs are their own closest gateway.
//!     assert_eq!(routes[2].num_hops, Some(0));
//!     assert!(routes[2].routes.is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod compute;
pub mod prelude;
pub mod routes;
pub mod source;
pub mod topology;
pub mod types;

#[cfg(test)]
mod test;
