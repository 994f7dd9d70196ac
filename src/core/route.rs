//! Bellman-Ford distance-vector routing over an undirected edge list.
//!
//! Mirrors the classroom presentation: synchronous relaxation passes with a
//! snapshot recorded after every pass, plus the standard extra-pass
//! negative-cycle probe.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::CoreError;

/// An undirected weighted edge, written `FROM:TO:WEIGHT` on the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl FromStr for EdgeSpec {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidEdge {
            raw: s.to_string(),
            reason: reason.into(),
        };

        let mut parts = s.splitn(3, ':');
        let from = parts.next().unwrap_or("").trim();
        let to = parts.next().unwrap_or("").trim();
        let weight = parts.next().ok_or_else(|| invalid("expected FROM:TO:WEIGHT"))?;

        if from.is_empty() || to.is_empty() {
            return Err(invalid("endpoint names cannot be empty"));
        }
        let weight: i64 = weight
            .trim()
            .parse()
            .map_err(|_| invalid("weight must be an integer"))?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.from, self.to, self.weight)
    }
}

/// Best-known route to a node: distance from the source and the previous
/// hop. `dist: None` means unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub dist: Option<i64>,
    pub parent: Option<String>,
}

/// Distance table after one full relaxation pass.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub iteration: usize,
    pub dists: BTreeMap<String, Hop>,
}

/// Full routing result: final table, per-pass history, cycle flag.
#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    pub source: String,
    pub nodes: Vec<String>,
    pub distances: BTreeMap<String, Hop>,
    pub snapshots: Vec<Snapshot>,
    pub has_negative_cycle: bool,
}

impl RouteTable {
    /// Reconstruct the source-to-`node` path by walking parent pointers.
    /// `None` when the node is unknown or unreachable.
    pub fn path_to(&self, node: &str) -> Option<Vec<String>> {
        let hop = self.distances.get(node)?;
        hop.dist?;

        let mut path = vec![node.to_string()];
        let mut cursor = hop.parent.clone();
        while let Some(prev) = cursor {
            cursor = self.distances.get(&prev).and_then(|h| h.parent.clone());
            path.push(prev);
        }
        path.reverse();
        Some(path)
    }
}

/// Run Bellman-Ford from `source` over `edges`, treated as undirected.
pub fn bellman_ford(edges: &[EdgeSpec], source: &str) -> RouteTable {
    // Double each edge: the simulation routes in both directions.
    let mut directed: Vec<(&str, &str, i64)> = Vec::with_capacity(edges.len() * 2);
    for e in edges {
        directed.push((&e.from, &e.to, e.weight));
        directed.push((&e.to, &e.from, e.weight));
    }

    let mut nodes: Vec<String> = directed
        .iter()
        .flat_map(|(f, t, _)| [f.to_string(), t.to_string()])
        .collect();
    if !nodes.iter().any(|n| n == source) {
        nodes.push(source.to_string());
    }
    nodes.sort();
    nodes.dedup();

    let mut distances: BTreeMap<String, Hop> = nodes
        .iter()
        .map(|n| {
            (
                n.clone(),
                Hop {
                    dist: if n == source { Some(0) } else { None },
                    parent: None,
                },
            )
        })
        .collect();

    let mut snapshots = vec![Snapshot {
        iteration: 0,
        dists: distances.clone(),
    }];

    for iteration in 1..nodes.len() {
        let mut changed = false;
        // Relax from the previous pass's distances into a fresh copy so all
        // updates within a pass are synchronous.
        let mut next = distances.clone();

        for &(from, to, weight) in &directed {
            let Some(dist_from) = distances[from].dist else {
                continue;
            };
            let candidate = dist_from + weight;
            if next[to].dist.is_none_or(|d| candidate < d) {
                next.insert(
                    to.to_string(),
                    Hop {
                        dist: Some(candidate),
                        parent: Some(from.to_string()),
                    },
                );
                changed = true;
            }
        }

        distances = next;
        snapshots.push(Snapshot {
            iteration,
            dists: distances.clone(),
        });

        if !changed {
            break;
        }
    }

    let has_negative_cycle = directed.iter().any(|&(from, to, weight)| {
        match (distances[from].dist, distances[to].dist) {
            (Some(df), Some(dt)) => df + weight < dt,
            (Some(_), None) => true,
            _ => false,
        }
    });

    RouteTable {
        source: source.to_string(),
        nodes,
        distances,
        snapshots,
        has_negative_cycle,
    }
}
