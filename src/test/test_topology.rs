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

use pretty_assertions::assert_eq;

use super::fixture::{sample_mesh, NON_POPS, POPS};
use crate::topology::{LinkType, Topology};
use crate::types::{NodeId, TopologyError};

#[test]
fn node_lookups() {
    let topo = sample_mesh();

    assert_eq!(topo.num_nodes(), 16);
    assert_eq!(topo.name(), "sample");

    let a1 = topo.node_id("A1").unwrap();
    assert_eq!(topo.node_name(a1), Some("A1"));
    assert!(!topo.node(a1).unwrap().pop_node);

    assert!(topo.is_pop("P2"));
    assert!(!topo.is_pop("C2"));
    assert!(!topo.is_pop("does-not-exist"));
    assert_eq!(topo.node_id("does-not-exist"), None);
}

#[test]
fn nodes_iterate_in_insertion_order() {
    let topo = sample_mesh();
    let names: Vec<&str> = topo.nodes().map(|n| n.name.as_str()).collect();
    let expected: Vec<&str> = NON_POPS.into_iter().chain(POPS).collect();
    assert_eq!(names, expected);

    let pops: Vec<&str> = topo.pops().map(|n| n.name.as_str()).collect();
    assert_eq!(pops, POPS.to_vec());
}

#[test]
fn duplicate_node_is_rejected() {
    let mut topo = Topology::new();
    topo.add_node("A", false).unwrap();
    assert!(matches!(
        topo.add_node("A", true),
        Err(TopologyError::DuplicateNode(name)) if name == "A"
    ));
}

#[test]
fn link_with_foreign_node_id_is_rejected() {
    let mut topo = Topology::new();
    let a = topo.add_node("A", false).unwrap();
    let bogus = NodeId::new(99);

    assert!(matches!(
        topo.add_link(a, bogus, LinkType::Wireless),
        Err(TopologyError::NodeIdNotFound(id)) if id == bogus
    ));
    // the topology is unchanged
    assert_eq!(topo.link_type("A", "A"), None);
}

#[test]
fn link_type_ignores_orientation() {
    let topo = sample_mesh();

    assert_eq!(topo.link_type("A1", "C1"), Some(LinkType::Wireless));
    assert_eq!(topo.link_type("C1", "A1"), Some(LinkType::Wireless));
    assert_eq!(topo.link_type("C1", "C2"), Some(LinkType::Ethernet));
    assert_eq!(topo.link_type("C2", "C1"), Some(LinkType::Ethernet));

    // not linked, and unknown endpoints
    assert_eq!(topo.link_type("A1", "P1"), None);
    assert_eq!(topo.link_type("A1", "nope"), None);
}

#[test]
fn wireless_degree_counts_only_radio_links() {
    let topo = sample_mesh();

    // A1 has four links in total, but only B1 and C1 are wireless neighbors.
    assert_eq!(topo.wireless_degree("A1"), 2);
    assert_eq!(topo.wireless_degree("P2"), 2);
    assert_eq!(topo.wireless_degree("C2"), 1);
    assert_eq!(topo.wireless_degree("nope"), 0);
}

#[test]
fn from_data_rejects_dangling_links() {
    let data = serde_json::from_str::<crate::topology::TopologyData>(
        r#"{"nodes": [{"name": "X"}],
            "links": [{"a_node_name": "X", "z_node_name": "Y", "link_type": 1}]}"#,
    )
    .unwrap();
    assert!(matches!(
        Topology::from_data(data),
        Err(TopologyError::NodeNotFound(name)) if name == "Y"
    ));
}

#[test]
fn parse_controller_json() {
    let topo = Topology::from_json_str(
        r#"{
            "name": "tg-net",
            "nodes": [
                {"name": "X", "pop_node": false},
                {"name": "Y"},
                {"name": "P", "pop_node": true}
            ],
            "links": [
                {"a_node_name": "X", "z_node_name": "Y", "link_type": 2},
                {"a_node_name": "Y", "z_node_name": "P", "link_type": "WIRELESS"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(topo.name(), "tg-net");
    assert_eq!(topo.num_nodes(), 3);
    assert!(!topo.is_pop("Y"));
    assert!(topo.is_pop("P"));
    assert_eq!(topo.link_type("X", "Y"), Some(LinkType::Ethernet));
    assert_eq!(topo.link_type("P", "Y"), Some(LinkType::Wireless));
}

#[test]
fn invalid_link_type_is_rejected() {
    let result = Topology::from_json_str(
        r#"{"nodes": [{"name": "X"}, {"name": "Y"}],
            "links": [{"a_node_name": "X", "z_node_name": "Y", "link_type": 7}]}"#,
    );
    assert!(matches!(result, Err(TopologyError::Json(_))));
}

#[test]
fn json_round_trip() {
    let topo = sample_mesh();
    let restored = Topology::from_json_str(&topo.to_json_string().unwrap()).unwrap();
    assert_eq!(topo.to_data(), restored.to_data());
}
