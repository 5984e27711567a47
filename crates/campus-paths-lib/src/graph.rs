//! Generic directed multigraph keyed by node identity.
//!
//! Nodes are owned by the [`Graph`] in a single ordered store. Edges and the
//! derived child sets refer to other nodes by key only, so removing a node
//! never leaves a live dangling reference: a lookup of a removed key simply
//! comes back empty.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};

/// Requirements for a node key: a total order for deterministic iteration and
/// a display form for rendering and error messages.
pub trait NodeKey: Ord + Clone + fmt::Display {}

impl<T: Ord + Clone + fmt::Display> NodeKey for T {}

/// Requirements for an edge label.
pub trait EdgeLabel: Ord + Clone + fmt::Display {}

impl<T: Ord + Clone + fmt::Display> EdgeLabel for T {}

/// Directed, immutable edge pointing at the node registered under `target`.
///
/// Edges order by weight first and then by the key of their target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<K, L> {
    weight: L,
    target: K,
}

impl<K, L> Edge<K, L> {
    pub fn new(weight: L, target: K) -> Self {
        Self { weight, target }
    }

    pub fn weight(&self) -> &L {
        &self.weight
    }

    pub fn target(&self) -> &K {
        &self.target
    }
}

/// Vertex holding a key, its outgoing edges, and the distinct keys those
/// edges point at.
#[derive(Debug, Clone)]
pub struct Node<K, L> {
    key: K,
    outgoing: BTreeSet<Edge<K, L>>,
    children: BTreeSet<K>,
}

impl<K: NodeKey, L: EdgeLabel> Node<K, L> {
    /// Create a node without any outgoing edges.
    pub fn new(key: K) -> Self {
        Self {
            key,
            outgoing: BTreeSet::new(),
            children: BTreeSet::new(),
        }
    }

    /// Create a node pre-seeded with edges. Repeated `(label, target)` pairs
    /// collapse into a single edge.
    pub fn with_edges(key: K, edges: impl IntoIterator<Item = Edge<K, L>>) -> Self {
        let outgoing: BTreeSet<Edge<K, L>> = edges.into_iter().collect();
        let children = outgoing.iter().map(|edge| edge.target.clone()).collect();
        Self {
            key,
            outgoing,
            children,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Replace the key in place.
    ///
    /// A node that is already registered in a [`Graph`] stays registered under
    /// its previous key; re-add it to move the registration.
    pub fn set_key(&mut self, key: K) {
        self.key = key;
    }

    /// Outgoing edges ordered by weight, then target key.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<K, L>> {
        self.outgoing.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn has_edge(&self, edge: &Edge<K, L>) -> bool {
        self.outgoing.contains(edge)
    }

    /// Attach an outgoing edge.
    pub fn add_edge(&mut self, edge: Edge<K, L>) -> Result<()> {
        if self.outgoing.contains(&edge) {
            return Err(Error::DuplicateEdge {
                from: self.key.to_string(),
                to: edge.target.to_string(),
                label: edge.weight.to_string(),
            });
        }

        self.children.insert(edge.target.clone());
        self.outgoing.insert(edge);
        Ok(())
    }

    /// Detach an outgoing edge. The target stays a child while any other
    /// edge still points at it.
    pub fn remove_edge(&mut self, edge: &Edge<K, L>) -> Result<()> {
        if !self.outgoing.remove(edge) {
            return Err(Error::MissingEdge {
                from: self.key.to_string(),
                to: edge.target.to_string(),
                label: edge.weight.to_string(),
            });
        }

        let still_child = self
            .outgoing
            .iter()
            .any(|remaining| remaining.target == edge.target);
        if !still_child {
            self.children.remove(&edge.target);
        }
        Ok(())
    }

    /// Edges from this node to `target`, ordered by weight.
    ///
    /// Returns `None` when `target` is not a child, which is distinct from an
    /// empty edge list.
    pub fn edges_to(&self, target: &K) -> Option<Vec<&Edge<K, L>>> {
        if !self.children.contains(target) {
            return None;
        }

        Some(
            self.outgoing
                .iter()
                .filter(|edge| edge.target == *target)
                .collect(),
        )
    }

    /// Distinct destination keys ordered by key.
    pub fn children(&self) -> impl Iterator<Item = &K> {
        self.children.iter()
    }

    pub fn is_child(&self, key: &K) -> bool {
        self.children.contains(key)
    }
}

impl<K: Ord, L> PartialEq for Node<K, L> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, L> Eq for Node<K, L> {}

impl<K: Ord, L> PartialOrd for Node<K, L> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, L> Ord for Node<K, L> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: NodeKey, L: EdgeLabel> fmt::Display for Node<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outgoing.is_empty() {
            return write!(f, "({}, , {})", self.key, self.key);
        }

        let mut first = true;
        for child in &self.children {
            for edge in self.outgoing.iter().filter(|edge| edge.target == *child) {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "({}, {}, {})", self.key, edge.weight, child)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Mutable directed multigraph owning all of its nodes.
#[derive(Debug, Clone)]
pub struct Graph<K, L> {
    nodes: BTreeMap<K, Node<K, L>>,
}

impl<K, L> Default for Graph<K, L> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<K: NodeKey, L: EdgeLabel> Graph<K, L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a collection of nodes. Later nodes replace earlier
    /// ones that share a key.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node<K, L>>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Register `node` under its key, returning the node it replaced.
    pub fn add_node(&mut self, node: Node<K, L>) -> Option<Node<K, L>> {
        self.nodes.insert(node.key.clone(), node)
    }

    /// Add a directed edge `start -> end` carrying `weight`.
    ///
    /// `end` is registered as a fresh node when missing. Fails when `start` is
    /// not registered or when the identical edge already exists.
    pub fn add_edge(&mut self, start: &K, end: K, weight: L) -> Result<()> {
        if !self.nodes.contains_key(start) {
            return Err(unknown_node(start));
        }

        self.nodes
            .entry(end.clone())
            .or_insert_with(|| Node::new(end.clone()));

        let node = self.nodes.get_mut(start).ok_or_else(|| unknown_node(start))?;
        node.add_edge(Edge::new(weight, end))
    }

    /// Splice `mid` between `start` and `end`.
    ///
    /// When `start -> end` exists, the lightest such edge is removed and its
    /// weight is reused for both new edges; otherwise `L::default()` is used.
    /// A failed splice leaves the graph as it was.
    pub fn insert(&mut self, start: &K, end: &K, mid: K) -> Result<()>
    where
        L: Default,
    {
        let saved_start = self.nodes.get(start).cloned().ok_or_else(|| unknown_node(start))?;
        if !self.nodes.contains_key(end) {
            return Err(unknown_node(end));
        }
        let saved_mid = self.nodes.get(&mid).cloned();

        let result = self.splice(start, end, mid.clone());
        if result.is_err() {
            match saved_mid {
                Some(node) => {
                    self.nodes.insert(mid, node);
                }
                None => {
                    self.nodes.remove(&mid);
                }
            }
            self.nodes.insert(start.clone(), saved_start);
        }
        result
    }

    fn splice(&mut self, start: &K, end: &K, mid: K) -> Result<()>
    where
        L: Default,
    {
        let existing = self.nodes.get(start).and_then(|node| {
            node.edges_to(end)
                .and_then(|edges| edges.first().map(|edge| (*edge).clone()))
        });

        let label = match existing {
            Some(edge) => {
                let node = self.nodes.get_mut(start).ok_or_else(|| unknown_node(start))?;
                node.remove_edge(&edge)?;
                edge.weight
            }
            None => L::default(),
        };

        self.nodes
            .entry(mid.clone())
            .or_insert_with(|| Node::new(mid.clone()));

        let start_node = self.nodes.get_mut(start).ok_or_else(|| unknown_node(start))?;
        start_node.add_edge(Edge::new(label.clone(), mid.clone()))?;

        let mid_node = self.nodes.get_mut(&mid).ok_or_else(|| unknown_node(&mid))?;
        mid_node.add_edge(Edge::new(label, end.clone()))
    }

    /// Unregister the node stored under `key`.
    ///
    /// Edges held by other nodes that still point at `key` are left in place
    /// and resolve to nothing afterwards.
    pub fn remove_node(&mut self, key: &K) -> Option<Node<K, L>> {
        self.nodes.remove(key)
    }

    /// Follow `edges` from `start`, returning the node reached.
    ///
    /// Returns `None` as soon as an edge is not an outgoing edge of the current
    /// node or the walk reaches a key that is no longer registered.
    pub fn traverse(&self, start: &K, edges: &[Edge<K, L>]) -> Option<&Node<K, L>> {
        let mut current = self.nodes.get(start)?;
        for edge in edges {
            if !current.has_edge(edge) {
                return None;
            }
            current = self.nodes.get(&edge.target)?;
        }
        Some(current)
    }

    pub fn node(&self, key: &K) -> Option<&Node<K, L>> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all registered nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K, L>> {
        self.nodes.values()
    }

    /// Snapshot of all registered nodes ordered by key.
    pub fn sorted_nodes(&self) -> Vec<&Node<K, L>> {
        self.nodes.values().collect()
    }

    /// Total number of edges across every node.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::edge_count).sum()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<K: NodeKey, L: EdgeLabel> fmt::Display for Graph<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.nodes.values().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

fn unknown_node<K: fmt::Display>(key: &K) -> Error {
    Error::UnknownNode {
        node: key.to_string(),
    }
}
