//! Heterogeneous network index.
//!
//! Nodes are interned to integer handles on first sight; the string label
//! and its type character (the label's first character) live in side tables.
//! Adjacency is kept per node, per edge type, where an edge's type is the
//! type of its target node. The index is built once from the full edge list
//! and is read-only afterwards, so walk workers share it by reference
//! without any locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{Error, Result};

/// Interned handle for a node. The label lives in the index's string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in discovery order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable typed-adjacency index over a heterogeneous network.
///
/// # Example
///
/// ```rust
/// use mpwalk_core::NetworkIndex;
///
/// let mut index = NetworkIndex::new();
/// index.ingest_line("v1 a1 a2 p1").unwrap();
///
/// let v1 = index.starting_nodes('v')[0];
/// assert_eq!(index.neighbors(v1, 'a').len(), 2);
/// assert_eq!(index.neighbors(v1, 'p').len(), 1);
/// assert!(index.neighbors(v1, 'x').is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetworkIndex {
    /// Node labels, in discovery order.
    labels: Vec<String>,
    /// Node type characters, parallel to `labels`.
    types: Vec<char>,
    /// Map from label to interned handle.
    label_index: HashMap<String, NodeId>,
    /// Per-node adjacency lists keyed by edge type, parallel to `labels`.
    adjacency: Vec<HashMap<char, Vec<NodeId>>>,
    /// Total number of directed edges.
    edge_count: usize,
}

/// Summary of one ingest pass.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Lines read, including blank and malformed ones.
    pub lines: usize,
    /// 1-based numbers of lines skipped as malformed.
    pub skipped: Vec<usize>,
}

impl NetworkIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an adjacency list from a file.
    ///
    /// Malformed records are skipped and reported through the returned
    /// [`IngestReport`]; they never abort the load.
    pub fn from_file(path: impl AsRef<Path>) -> Result<(Self, IngestReport)> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read an adjacency list from any buffered reader.
    ///
    /// Same skip-and-report policy as [`NetworkIndex::from_file`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<(Self, IngestReport)> {
        let mut index = Self::new();
        let mut report = IngestReport::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            report.lines += 1;
            if index.ingest_line(&line).is_err() {
                report.skipped.push(line_no + 1);
            }
        }

        Ok((index, report))
    }

    /// Ingest one adjacency record: `source neighbor neighbor ...`.
    ///
    /// Each neighbor contributes one directed edge from the source, filed
    /// under the neighbor's type. Appearance order is preserved per type.
    /// Blank lines are ignored; an empty token (doubled separator) is a
    /// malformed record and leaves the index unchanged.
    pub fn ingest_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        // Validate every token before interning anything, so a malformed
        // record leaves no partial edges behind.
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(Error::MalformedRecord {
                record: line.to_string(),
            });
        }

        let source = self.intern(tokens[0]);
        for token in &tokens[1..] {
            let target = self.intern(token);
            let target_type = self.types[target.index()];
            self.adjacency[source.index()]
                .entry(target_type)
                .or_default()
                .push(target);
            self.edge_count += 1;
        }

        Ok(())
    }

    /// Intern a label, returning its handle. Callers guarantee the label is
    /// non-empty, so the type character is always present.
    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.label_index.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len() as u32);
        let node_type = label.chars().next().unwrap_or_default();
        self.label_index.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        self.types.push(node_type);
        self.adjacency.push(HashMap::new());
        id
    }

    /// Neighbors of `node` reachable over edges of the given type, in
    /// appearance order. Empty when the node has no such edges.
    pub fn neighbors(&self, node: NodeId, edge_type: char) -> &[NodeId] {
        self.adjacency[node.index()]
            .get(&edge_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All nodes of the given type, in discovery order.
    pub fn starting_nodes(&self, node_type: char) -> Vec<NodeId> {
        (0..self.labels.len() as u32)
            .map(NodeId)
            .filter(|n| self.types[n.index()] == node_type)
            .collect()
    }

    /// Look up a node's handle by label.
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    /// A node's label.
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    /// A node's type character.
    pub fn node_type(&self, node: NodeId) -> char {
        self.types[node.index()]
    }

    /// Number of distinct nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed edges seen so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Statistics about the indexed network.
    pub fn stats(&self) -> NetworkStats {
        let mut nodes_by_type: HashMap<char, usize> = HashMap::new();
        for &t in &self.types {
            *nodes_by_type.entry(t).or_default() += 1;
        }
        NetworkStats {
            node_count: self.node_count(),
            edge_count: self.edge_count,
            nodes_by_type,
        }
    }
}

/// Statistics for an indexed network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Distinct nodes.
    pub node_count: usize,
    /// Directed edges.
    pub edge_count: usize,
    /// Node counts per type character.
    pub nodes_by_type: HashMap<char, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_basic() {
        let mut index = NetworkIndex::new();
        index.ingest_line("v1 a1 a2 p1").unwrap();

        let v1 = index.get("v1").unwrap();
        let a1 = index.get("a1").unwrap();
        let a2 = index.get("a2").unwrap();
        let p1 = index.get("p1").unwrap();

        assert_eq!(index.node_count(), 4);
        assert_eq!(index.edge_count(), 3);
        assert_eq!(index.neighbors(v1, 'a'), &[a1, a2]);
        assert_eq!(index.neighbors(v1, 'p'), &[p1]);
        assert!(index.neighbors(v1, 'x').is_empty());
        assert!(index.neighbors(a1, 'v').is_empty());
    }

    #[test]
    fn test_intern_is_stable() {
        let mut index = NetworkIndex::new();
        index.ingest_line("v1 a1").unwrap();
        index.ingest_line("a1 v1").unwrap();

        assert_eq!(index.node_count(), 2);
        let v1 = index.get("v1").unwrap();
        assert_eq!(index.label(v1), "v1");
        assert_eq!(index.node_type(v1), 'v');
    }

    #[test]
    fn test_neighbor_order_preserved() {
        let mut index = NetworkIndex::new();
        index.ingest_line("v1 a3 a1 a2").unwrap();
        index.ingest_line("v1 a1").unwrap();

        let v1 = index.get("v1").unwrap();
        let labels: Vec<_> = index
            .neighbors(v1, 'a')
            .iter()
            .map(|&n| index.label(n))
            .collect();
        assert_eq!(labels, ["a3", "a1", "a2", "a1"]);
    }

    #[test]
    fn test_starting_nodes_discovery_order() {
        let mut index = NetworkIndex::new();
        index.ingest_line("v2 a1 v1").unwrap();
        index.ingest_line("v1 a1").unwrap();

        let starts: Vec<_> = index
            .starting_nodes('v')
            .iter()
            .map(|&n| index.label(n))
            .collect();
        assert_eq!(starts, ["v2", "v1"]);
        assert!(index.starting_nodes('x').is_empty());
    }

    #[test]
    fn test_malformed_record_rejected_atomically() {
        let mut index = NetworkIndex::new();
        let err = index.ingest_line("v1  a1").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
        // Nothing from the bad record was interned
        assert_eq!(index.node_count(), 0);
        assert_eq!(index.edge_count(), 0);
    }

    #[test]
    fn test_from_reader_skips_and_reports() {
        let input = "v1 a1\n\nv2  a1\na1 v1 v2\n";
        let (index, report) = NetworkIndex::from_reader(input.as_bytes()).unwrap();

        assert_eq!(report.lines, 4);
        assert_eq!(report.skipped, [3]);
        assert_eq!(index.node_count(), 3); // v1, a1, v2
        let a1 = index.get("a1").unwrap();
        assert_eq!(index.neighbors(a1, 'v').len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut index = NetworkIndex::new();
        index.ingest_line("v1 a1 a2").unwrap();
        index.ingest_line("v2 a1").unwrap();

        let stats = index.stats();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.nodes_by_type[&'v'], 2);
        assert_eq!(stats.nodes_by_type[&'a'], 2);
    }
}
