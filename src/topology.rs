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

//! The mesh topology snapshot: nodes (with their POP flag) and wireless/ethernet links, backed
//! by a petgraph [`StableGraph`]. The topology is read-only for the duration of a route
//! computation.

use std::collections::HashMap;

use log::debug;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

use crate::types::{IndexType, NodeId, TopologyError};

/// The mesh network graph: nodes as weights, link types as edge weights.
pub type MeshGraph = StableGraph<Node, LinkType, Undirected, IndexType>;

/// The type of a link between two mesh nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LinkTypeRepr", into = "u8")]
pub enum LinkType {
    /// A radio link; the unit of distance for route computation.
    Wireless,
    /// Same-site wiring; never counted as a hop and never part of a route.
    Ethernet,
}

impl From<LinkType> for u8 {
    fn from(ty: LinkType) -> u8 {
        match ty {
            LinkType::Wireless => 1,
            LinkType::Ethernet => 2,
        }
    }
}

/// Accepted wire representations of a link type: the numeric thrift value or its name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkTypeRepr {
    Num(u8),
    Name(String),
}

impl TryFrom<LinkTypeRepr> for LinkType {
    type Error = TopologyError;

    fn try_from(repr: LinkTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            LinkTypeRepr::Num(1) => Ok(Self::Wireless),
            LinkTypeRepr::Num(2) => Ok(Self::Ethernet),
            LinkTypeRepr::Num(x) => Err(TopologyError::InvalidLinkType(x.to_string())),
            LinkTypeRepr::Name(s) => match s.to_ascii_uppercase().as_str() {
                "WIRELESS" => Ok(Self::Wireless),
                "ETHERNET" => Ok(Self::Ethernet),
                _ => Err(TopologyError::InvalidLinkType(s)),
            },
        }
    }
}

/// A single mesh node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique name of the node.
    pub name: String,
    /// Whether the node is a POP (gateway towards the wider network).
    #[serde(default)]
    pub pop_node: bool,
}

/// A link as it appears in a topology document, referencing its endpoints by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    /// Name of the first endpoint.
    pub a_node_name: String,
    /// Name of the second endpoint.
    pub z_node_name: String,
    /// The type of the link.
    pub link_type: LinkType,
}

/// The serde mirror of a [`Topology`]: the shape of the topology documents produced by the mesh
/// controller (`{"nodes": [...], "links": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyData {
    /// Name of the network.
    #[serde(default)]
    pub name: String,
    /// All nodes of the network.
    pub nodes: Vec<Node>,
    /// All links of the network.
    pub links: Vec<LinkData>,
}

/// # Mesh Topology
///
/// An immutable-per-computation snapshot of the mesh: the node set (with POP flags) and the link
/// set. Nodes are resolved by name; internally every node carries a stable [`NodeId`] into the
/// graph. Since nodes are never removed, iteration order over [`Topology::nodes`] is insertion
/// order, which is also the order of the underlying topology document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "TopologyData", into = "TopologyData")]
pub struct Topology {
    name: String,
    graph: MeshGraph,
    ids: HashMap<String, NodeId>,
}

impl Topology {
    /// Create a new, empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty topology with a network name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The name of the network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a new node to the topology, returning its id. Fails if a node with the same name
    /// already exists.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        pop_node: bool,
    ) -> Result<NodeId, TopologyError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(TopologyError::DuplicateNode(name));
        }
        let id = self.graph.add_node(Node {
            name: name.clone(),
            pop_node,
        });
        self.ids.insert(name, id);
        Ok(id)
    }

    /// Add a link between two nodes of the topology. Fails if either id does not belong to this
    /// topology.
    pub fn add_link(
        &mut self,
        a: NodeId,
        z: NodeId,
        link_type: LinkType,
    ) -> Result<(), TopologyError> {
        for id in [a, z] {
            if !self.graph.contains_node(id) {
                return Err(TopologyError::NodeIdNotFound(id));
            }
        }
        self.graph.add_edge(a, z, link_type);
        Ok(())
    }

    /// Get the id of a node by name.
    pub fn node_id(&self, name: impl AsRef<str>) -> Option<NodeId> {
        self.ids.get(name.as_ref()).copied()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node_weight(id)
    }

    /// Get the name of a node by id.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// Whether the named node is a POP. Unknown names are not POPs.
    pub fn is_pop(&self, name: impl AsRef<str>) -> bool {
        self.node_id(name)
            .and_then(|id| self.node(id))
            .map(|n| n.pop_node)
            .unwrap_or(false)
    }

    /// Iterate over all nodes in insertion (topology document) order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph
            .node_indices()
            .filter_map(|id| self.graph.node_weight(id))
    }

    /// Iterate over all POP nodes in insertion order.
    pub fn pops(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.pop_node)
    }

    /// The number of nodes in the topology.
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// The type of the link between two named nodes, in either orientation. `None` if the nodes
    /// or the link are unknown.
    pub fn link_type(&self, a: impl AsRef<str>, z: impl AsRef<str>) -> Option<LinkType> {
        let a = self.node_id(a)?;
        let z = self.node_id(z)?;
        self.graph
            .find_edge(a, z)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// The number of wireless links incident to the named node. A node with more than one
    /// wireless neighbor transmits on a point-to-multipoint sector.
    pub fn wireless_degree(&self, name: impl AsRef<str>) -> usize {
        match self.node_id(name) {
            Some(id) => self
                .graph
                .edges(id)
                .filter(|e| *e.weight() == LinkType::Wireless)
                .count(),
            None => 0,
        }
    }

    /// Build a topology from its document representation, validating node references.
    pub fn from_data(data: TopologyData) -> Result<Self, TopologyError> {
        let mut topo = Topology::with_name(data.name);
        for node in data.nodes {
            topo.add_node(node.name, node.pop_node)?;
        }
        for link in data.links {
            let a = topo
                .node_id(&link.a_node_name)
                .ok_or(TopologyError::NodeNotFound(link.a_node_name))?;
            let z = topo
                .node_id(&link.z_node_name)
                .ok_or(TopologyError::NodeNotFound(link.z_node_name))?;
            topo.add_link(a, z, link.link_type)?;
        }
        debug!(
            "loaded topology {:?} with {} nodes and {} links",
            topo.name,
            topo.graph.node_count(),
            topo.graph.edge_count()
        );
        Ok(topo)
    }

    /// Extract the document representation of the topology.
    pub fn to_data(&self) -> TopologyData {
        TopologyData {
            name: self.name.clone(),
            nodes: self.nodes().cloned().collect(),
            links: self
                .graph
                .edge_references()
                .filter_map(|e| {
                    Some(LinkData {
                        a_node_name: self.node_name(e.source())?.to_string(),
                        z_node_name: self.node_name(e.target())?.to_string(),
                        link_type: *e.weight(),
                    })
                })
                .collect(),
        }
    }

    /// Parse a topology from a JSON document as produced by the mesh controller.
    pub fn from_json_str(s: &str) -> Result<Self, TopologyError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize the topology to a JSON document.
    pub fn to_json_string(&self) -> Result<String, TopologyError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl TryFrom<TopologyData> for Topology {
    type Error = TopologyError;

    fn try_from(data: TopologyData) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

impl From<Topology> for TopologyData {
    fn from(topo: Topology) -> Self {
        topo.to_data()
    }
}
