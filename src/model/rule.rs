// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use crate::matcher::{Matcher, MatcherIssue};

use super::ids::{EdgeId, NodeId};

/// A vertex in a rule's graph.
///
/// Outgoing edges are not stored on the node; they are derived by scanning the owning
/// rule's edge arena ([`Rule::outgoing`]), so there are no back-pointers to keep in
/// sync during editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    label: Option<String>,
}

impl Node {
    pub fn new() -> Self {
        Self { label: None }
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }
}

/// What an edge consumes: a single-character matcher or a named sub-rule.
///
/// The two are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeContent {
    Matcher(Matcher),
    SubRule(SmolStr),
}

impl EdgeContent {
    pub fn matcher(&self) -> Option<&Matcher> {
        match self {
            Self::Matcher(matcher) => Some(matcher),
            Self::SubRule(_) => None,
        }
    }

    pub fn sub_rule(&self) -> Option<&str> {
        match self {
            Self::Matcher(_) => None,
            Self::SubRule(name) => Some(name.as_str()),
        }
    }
}

/// A directed arc between two nodes of the same rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from_node_id: NodeId,
    to_node_id: NodeId,
    content: EdgeContent,
    display_last: bool,
}

impl Edge {
    pub fn new(from_node_id: NodeId, to_node_id: NodeId, content: EdgeContent) -> Self {
        Self {
            from_node_id,
            to_node_id,
            content,
            display_last: false,
        }
    }

    pub fn from_node_id(&self) -> NodeId {
        self.from_node_id
    }

    pub fn to_node_id(&self) -> NodeId {
        self.to_node_id
    }

    pub fn content(&self) -> &EdgeContent {
        &self.content
    }

    pub fn set_content(&mut self, content: EdgeContent) {
        self.content = content;
    }

    /// Display hint for tree-style listings. No effect on matching or traversal.
    pub fn display_last(&self) -> bool {
        self.display_last
    }

    pub fn set_display_last(&mut self, display_last: bool) {
        self.display_last = display_last;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    UnknownNode { node_id: NodeId },
    Matcher { issue: MatcherIssue },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node_id } => {
                write!(f, "no node {node_id} in this rule")
            }
            Self::Matcher { issue } => write!(f, "malformed matcher: {issue}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// A named automaton: a node/edge graph with a designated entry node.
///
/// Nodes and edges live in id-keyed arenas so iteration is deterministic and the
/// persistence document can address them directly. The arenas are open
/// (`nodes_mut`/`edges_mut`) for bulk construction; `Syntax::validate` checks the
/// invariants the open surface cannot enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: SmolStr,
    entry_node_id: NodeId,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Rule {
    /// Creates a rule with a single entry node (id 0) and no edges.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        let entry_node_id = NodeId::new(0);
        let mut nodes = BTreeMap::new();
        nodes.insert(entry_node_id, Node::new());
        Self {
            name: name.into(),
            entry_node_id,
            nodes,
            edges: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn entry_node_id(&self) -> NodeId {
        self.entry_node_id
    }

    pub fn set_entry_node_id(&mut self, node_id: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&node_id) {
            return Err(GraphError::UnknownNode { node_id });
        }
        self.entry_node_id = node_id;
        Ok(())
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, Edge> {
        &mut self.edges
    }

    pub fn next_node_id(&self) -> NodeId {
        self.nodes
            .keys()
            .next_back()
            .map(|id| NodeId::new(id.value().saturating_add(1)))
            .unwrap_or_else(|| NodeId::new(0))
    }

    pub fn next_edge_id(&self) -> EdgeId {
        self.edges
            .keys()
            .next_back()
            .map(|id| EdgeId::new(id.value().saturating_add(1)))
            .unwrap_or_else(|| EdgeId::new(0))
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let node_id = self.next_node_id();
        self.nodes.insert(node_id, node);
        node_id
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&node_id)?;
        self.edges
            .retain(|_, edge| edge.from_node_id() != node_id && edge.to_node_id() != node_id);
        Some(node)
    }

    /// Adds an edge, validating that both endpoints exist and a carried matcher is
    /// well-formed.
    pub fn add_edge(
        &mut self,
        from_node_id: NodeId,
        to_node_id: NodeId,
        content: EdgeContent,
    ) -> Result<EdgeId, GraphError> {
        if !self.nodes.contains_key(&from_node_id) {
            return Err(GraphError::UnknownNode {
                node_id: from_node_id,
            });
        }
        if !self.nodes.contains_key(&to_node_id) {
            return Err(GraphError::UnknownNode {
                node_id: to_node_id,
            });
        }
        if let EdgeContent::Matcher(matcher) = &content {
            matcher
                .validate()
                .map_err(|issue| GraphError::Matcher { issue })?;
        }

        let edge_id = self.next_edge_id();
        self.edges
            .insert(edge_id, Edge::new(from_node_id, to_node_id, content));
        Ok(edge_id)
    }

    pub fn remove_edge(&mut self, edge_id: EdgeId) -> Option<Edge> {
        self.edges.remove(&edge_id)
    }

    /// Outgoing edges of a node, in edge-id order.
    pub fn outgoing(&self, node_id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .filter(move |(_, edge)| edge.from_node_id() == node_id)
            .map(|(edge_id, edge)| (*edge_id, edge))
    }

    /// Incoming edges of a node, in edge-id order.
    pub fn incoming(&self, node_id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .filter(move |(_, edge)| edge.to_node_id() == node_id)
            .map(|(edge_id, edge)| (*edge_id, edge))
    }

    /// Whether any edge of this rule references `name` as a sub-rule.
    pub fn references(&self, name: &str) -> bool {
        self.edges
            .values()
            .any(|edge| edge.content().sub_rule() == Some(name))
    }
}
