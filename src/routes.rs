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

//! The result value types of a route computation. All types are immutable once constructed, and
//! are freshly built per computation run.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One traversed wireless link along a route, from the transmitting node to the receiving node.
/// The order of hops within a path is semantically significant: the same links in a different
/// order represent a different physical path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hop {
    /// The transmitting node.
    pub from: String,
    /// The receiving node.
    pub to: String,
}

impl Hop {
    /// Create a new hop.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<S: Into<String>> From<(S, S)> for Hop {
    fn from((from, to): (S, S)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One shortest wireless path from an origin node to a POP.
///
/// The derived total order (by `pop_name`, then `num_p2mp_hops`, then `ecmp`, then `path`) is
/// primarily lexicographic on the POP name; the remaining fields only break ties
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteToPop {
    /// Name of the destination POP.
    pub pop_name: String,
    /// Number of hops along the path whose transmitting node has more than one wireless
    /// neighbor (a point-to-multipoint sector).
    pub num_p2mp_hops: usize,
    /// Whether more than one distinct shortest path to this POP survives for the origin node.
    pub ecmp: bool,
    /// The wireless hops of the path, ordered from the origin towards the POP. Ethernet hops are
    /// elided, so consecutive hops need not share an endpoint.
    pub path: Vec<Hop>,
}

impl fmt::Display for RouteToPop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via [{}]{}",
            self.pop_name,
            self.path.iter().join(", "),
            if self.ecmp { " (ecmp)" } else { "" }
        )
    }
}

/// The computed routes for a single origin node: all routes tied for the minimal wireless hop
/// count towards any reachable POP. Routes to multiple equidistant POPs are expected and valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesForNode {
    /// Name of the origin node.
    pub name: String,
    /// Minimal wireless hop count to the nearest POP. `Some(0)` if the node itself is a POP,
    /// `None` if no POP is reachable over wireless links.
    pub num_hops: Option<usize>,
    /// The duplicate-free set of shortest routes. Empty for POPs and unreachable nodes.
    pub routes: BTreeSet<RouteToPop>,
}

impl RoutesForNode {
    /// Create a result from a set of routes, deduplicating as necessary.
    pub fn new(
        name: impl Into<String>,
        num_hops: Option<usize>,
        routes: impl IntoIterator<Item = RouteToPop>,
    ) -> Self {
        Self {
            name: name.into(),
            num_hops,
            routes: routes.into_iter().collect(),
        }
    }

    /// The trivial result for a POP node: zero hops, no routes.
    pub fn pop(name: impl Into<String>) -> Self {
        Self::new(name, Some(0), [])
    }

    /// The result for a non-POP node that cannot reach any POP over wireless links.
    pub fn unreachable(name: impl Into<String>) -> Self {
        Self::new(name, None, [])
    }

    /// Whether the node has no wireless route to any POP.
    pub fn is_unreachable(&self) -> bool {
        self.num_hops.is_none()
    }

    /// The subset of routes that are not part of an ECMP group, i.e. the POPs reachable over
    /// exactly one shortest path. Pure and re-derivable from [`RoutesForNode::routes`].
    pub fn get_non_ecmp_routes(&self) -> Vec<&RouteToPop> {
        self.routes.iter().filter(|r| !r.ecmp).collect()
    }
}

impl fmt::Display for RoutesForNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.num_hops {
            None => write!(f, "{}: unreachable", self.name),
            Some(0) if self.routes.is_empty() => write!(f, "{}: POP", self.name),
            Some(n) => write!(
                f,
                "{}: {} hops, {}",
                self.name,
                n,
                self.routes.iter().join("; ")
            ),
        }
    }
}
