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

//! Module re-exporting the most important structures of the crate.

pub use crate::compute::RouteComputer;
pub use crate::routes::{Hop, RouteToPop, RoutesForNode};
pub use crate::source::{PathSource, StaticPathSource};
pub use crate::topology::{LinkData, LinkType, Node, Topology, TopologyData};
pub use crate::types::{FetchError, NodeId, RouteError, TopologyError};
