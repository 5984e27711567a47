use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::ops::Add;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeLabel, Graph, NodeKey};

/// Labels that the shortest-path search can accumulate. `Default` supplies
/// the zero cost of the empty path.
pub trait PathWeight: EdgeLabel + Default + Add<Output = Self> {}

impl<T: EdgeLabel + Default + Add<Output = T>> PathWeight for T {}

/// Find the cheapest sequence of edges leading from `source` to `destination`.
///
/// The queue holds whole candidate paths rather than per-node distances. It
/// always yields the path with the lowest total weight next, preferring the
/// path whose last node has the smaller key when totals tie, so the first
/// time a node is dequeued its path is minimal and the result is
/// deterministic.
///
/// Returns `Ok(None)` when the destination is unreachable and an empty list
/// when `source == destination`. Fails when either endpoint is not registered.
pub fn shortest_path<K, L>(
    graph: &Graph<K, L>,
    source: &K,
    destination: &K,
) -> Result<Option<Vec<Edge<K, L>>>>
where
    K: NodeKey,
    L: PathWeight,
{
    for key in [source, destination] {
        if !graph.contains(key) {
            return Err(Error::UnknownNode {
                node: key.to_string(),
            });
        }
    }

    let mut finished: BTreeSet<K> = BTreeSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    let mut discarded = 0usize;

    // Zero-weight self edge so every candidate path has a last node.
    queue.push(CandidatePath {
        cost: L::default(),
        edges: vec![Edge::new(L::default(), source.clone())],
        sequence,
    });

    while let Some(candidate) = queue.pop() {
        let current = candidate.destination().clone();

        if current == *destination {
            let mut edges = candidate.edges;
            edges.remove(0);
            debug!(
                settled = finished.len(),
                discarded,
                hops = edges.len(),
                "shortest path found"
            );
            return Ok(Some(edges));
        }

        if !finished.insert(current.clone()) {
            discarded += 1;
            continue;
        }

        let Some(node) = graph.node(&current) else {
            continue;
        };

        for child in node.children() {
            if finished.contains(child) {
                continue;
            }
            for edge in node.edges_to(child).unwrap_or_default() {
                sequence += 1;
                let mut edges = candidate.edges.clone();
                edges.push(edge.clone());
                queue.push(CandidatePath {
                    cost: candidate.cost.clone() + edge.weight().clone(),
                    edges,
                    sequence,
                });
            }
        }
    }

    debug!(settled = finished.len(), discarded, "destination unreachable");
    Ok(None)
}

/// Sum the weights along `edges`.
pub fn path_cost<K, L: PathWeight>(edges: &[Edge<K, L>]) -> L {
    edges
        .iter()
        .fold(L::default(), |total, edge| total + edge.weight().clone())
}

#[derive(Debug)]
struct CandidatePath<K, L> {
    cost: L,
    edges: Vec<Edge<K, L>>,
    sequence: u64,
}

impl<K, L> CandidatePath<K, L> {
    fn destination(&self) -> &K {
        // Seeded with the sentinel edge and only ever extended.
        self.edges[self.edges.len() - 1].target()
    }
}

impl<K: Ord, L: Ord> PartialEq for CandidatePath<K, L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, L: Ord> Eq for CandidatePath<K, L> {}

impl<K: Ord, L: Ord> PartialOrd for CandidatePath<K, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, L: Ord> Ord for CandidatePath<K, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // destination key, then by insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.destination().cmp(self.destination()))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
