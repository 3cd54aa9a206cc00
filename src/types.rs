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

//! Shared identifiers and the error taxonomy of the crate.

use petgraph::stable_graph::NodeIndex;
use thiserror::Error;

pub(crate) type IndexType = u32;

/// Node identification (and index into the topology graph).
pub type NodeId = NodeIndex<IndexType>;

/// Error while building or deserializing a [`crate::topology::Topology`].
#[derive(Debug, Error)]
pub enum TopologyError {
    /// A node with the same name is already present in the topology.
    #[error("Node was already added to the topology: {0}")]
    DuplicateNode(String),
    /// A link references a node name that is not present in the topology.
    #[error("Node name was not found in topology: {0}")]
    NodeNotFound(String),
    /// A link references a node id that was not minted by this topology.
    #[error("Node id was not found in topology: {0:?}")]
    NodeIdNotFound(NodeId),
    /// The link type is neither WIRELESS (1) nor ETHERNET (2).
    #[error("Invalid link type: {0}")]
    InvalidLinkType(String),
    /// Json error
    #[error("{0}")]
    Json(Box<serde_json::Error>),
}

impl From<serde_json::Error> for TopologyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(Box::new(e))
    }
}

/// Error raised by a [`crate::source::PathSource`] while fetching candidate paths for a single
/// (origin, POP) pair.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport towards the routing layer failed.
    #[error("Transport failure while fetching routes: {0}")]
    Transport(String),
    /// The routing layer did not answer in time.
    #[error("Timeout while fetching routes")]
    Timeout,
}

/// Error raised by [`crate::compute::RouteComputer::compute_routes`]. The computation is
/// all-or-nothing per invocation; callers retry the whole call if desired.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The path source failed for some (origin, POP) pair.
    #[error("Route fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
