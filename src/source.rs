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

//! The collaborator interface towards the routing layer, plus a map-backed implementation for
//! replaying recorded answers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::FetchError;

/// A source of candidate routing paths, typically backed by a live routing-daemon query (e.g. an
/// Open/R KV-store lookup). Implementations are queried once per (origin, POP) pair and may be
/// called from multiple rayon worker threads concurrently.
///
/// Returned paths are ordered node-name sequences starting at `origin` and ending at `pop`. They
/// may contain ethernet hops; the route computation elides those. A transport failure aborts the
/// whole computation, the core never retries.
pub trait PathSource: Sync {
    /// Fetch the candidate paths currently known by the routing layer from `origin` to `pop`.
    fn fetch_candidate_paths(
        &self,
        origin: &str,
        pop: &str,
    ) -> Result<Vec<Vec<String>>, FetchError>;
}

impl<S: PathSource + ?Sized> PathSource for &S {
    fn fetch_candidate_paths(
        &self,
        origin: &str,
        pop: &str,
    ) -> Result<Vec<Vec<String>>, FetchError> {
        (**self).fetch_candidate_paths(origin, pop)
    }
}

/// A [`PathSource`] replaying recorded answers from memory, keyed by origin and POP name. Pairs
/// without a recorded answer yield no candidate paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPathSource {
    paths: HashMap<String, HashMap<String, Vec<Vec<String>>>>,
}

impl StaticPathSource {
    /// Create a new, empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the candidate paths for one (origin, POP) pair, replacing any previous answer.
    pub fn insert<P, N, S>(&mut self, origin: impl Into<String>, pop: impl Into<String>, paths: P)
    where
        P: IntoIterator<Item = N>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths = paths
            .into_iter()
            .map(|p| p.into_iter().map(Into::into).collect())
            .collect();
        self.paths
            .entry(origin.into())
            .or_default()
            .insert(pop.into(), paths);
    }
}

impl PathSource for StaticPathSource {
    fn fetch_candidate_paths(
        &self,
        origin: &str,
        pop: &str,
    ) -> Result<Vec<Vec<String>>, FetchError> {
        Ok(self
            .paths
            .get(origin)
            .and_then(|by_pop| by_pop.get(pop))
            .cloned()
            .unwrap_or_default())
    }
}
