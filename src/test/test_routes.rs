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

use crate::routes::{Hop, RouteToPop, RoutesForNode};

fn r2p(pop: &str, num_p2mp_hops: usize, ecmp: bool, path: &[(&str, &str)]) -> RouteToPop {
    RouteToPop {
        pop_name: pop.to_string(),
        num_p2mp_hops,
        ecmp,
        path: path.iter().map(|&(a, b)| Hop::new(a, b)).collect(),
    }
}

#[test]
fn route_ordering_is_by_pop_name_first() {
    let to_p1 = r2p("P1", 5, true, &[("X", "Y"), ("Y", "P1")]);
    let to_p2 = r2p("P2", 0, false, &[("X", "P2")]);
    assert!(to_p1 < to_p2);

    // same POP: the remaining fields break the tie deterministically
    let a = r2p("P1", 0, false, &[("X", "P1")]);
    let b = r2p("P1", 1, false, &[("X", "P1")]);
    assert!(a < b);
}

#[test]
fn routes_compare_as_sets() {
    let first = r2p("P1", 0, true, &[("X", "P1")]);
    let second = r2p("P2", 1, false, &[("Y", "Z"), ("Z", "P2")]);

    let forward = RoutesForNode::new("X", Some(1), [first.clone(), second.clone()]);
    let backward = RoutesForNode::new("X", Some(1), [second, first.clone()]);
    assert_eq!(forward, backward);

    // duplicates collapse
    let duped = RoutesForNode::new("X", Some(1), [first.clone(), first.clone(), first]);
    assert_eq!(duped.routes.len(), 1);
}

#[test]
fn path_order_is_significant() {
    let a = r2p("P1", 0, false, &[("X", "Y"), ("Z", "P1")]);
    let b = r2p("P1", 0, false, &[("Z", "P1"), ("X", "Y")]);
    assert_ne!(a, b);
}

#[test]
fn non_ecmp_routes_partition() {
    let routes = RoutesForNode::new(
        "X",
        Some(2),
        [
            r2p("P1", 0, true, &[("X", "A"), ("A", "P1")]),
            r2p("P1", 1, true, &[("X", "B"), ("B", "P1")]),
            r2p("P2", 0, false, &[("X", "C"), ("C", "P2")]),
        ],
    );

    let non_ecmp = routes.get_non_ecmp_routes();
    assert_eq!(non_ecmp.len(), 1);
    assert_eq!(non_ecmp[0].pop_name, "P2");

    let num_ecmp = routes.routes.iter().filter(|r| r.ecmp).count();
    assert_eq!(non_ecmp.len() + num_ecmp, routes.routes.len());
}

#[test]
fn constructors() {
    let pop = RoutesForNode::pop("P1");
    assert_eq!(pop.num_hops, Some(0));
    assert!(pop.routes.is_empty());
    assert!(!pop.is_unreachable());

    let lost = RoutesForNode::unreachable("X");
    assert_eq!(lost.num_hops, None);
    assert!(lost.routes.is_empty());
    assert!(lost.is_unreachable());
}

#[test]
fn display() {
    assert_eq!(Hop::new("A1", "C1").to_string(), "A1 -> C1");
    assert_eq!(
        r2p("P2", 1, true, &[("A1", "C1"), ("C2", "P2")]).to_string(),
        "P2 via [A1 -> C1, C2 -> P2] (ecmp)"
    );
    assert_eq!(RoutesForNode::pop("P1").to_string(), "P1: POP");
    assert_eq!(RoutesForNode::unreachable("X").to_string(), "X: unreachable");
}
