// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{EdgeId, NodeId, Rule};

/// Which way the resolver travels from the queried node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDirection {
    /// Follow outgoing edges; routes lead out of the node.
    Forward,
    /// Follow incoming edges; routes lead into the node.
    Backward,
}

/// Where a route ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// The route reached a node with no further arcs in the travelled direction.
    Terminal { node_id: NodeId },
    /// The route closed back onto a node already on the path. The closing edge is
    /// included, so the route's final edge points at this node.
    Cycle { node_id: NodeId },
}

/// An ordered edge sequence from the queried node to a target or a detected cycle.
///
/// Edges are always reported in forward arc order, also for backward queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    edges: SmallVec<[EdgeId; 8]>,
    kind: RouteKind,
}

impl Route {
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self.kind, RouteKind::Cycle { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReachabilityError {
    UnknownNode {
        rule: SmolStr,
        node_id: NodeId,
    },
    NoRoutes {
        rule: SmolStr,
        node_id: NodeId,
        direction: RouteDirection,
    },
}

impl fmt::Display for ReachabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { rule, node_id } => {
                write!(f, "rule '{rule}' has no node {node_id}")
            }
            Self::NoRoutes {
                rule,
                node_id,
                direction: RouteDirection::Forward,
            } => write!(f, "no routes lead out of node {node_id} in rule '{rule}'"),
            Self::NoRoutes {
                rule,
                node_id,
                direction: RouteDirection::Backward,
            } => write!(f, "no routes lead into node {node_id} in rule '{rule}'"),
        }
    }
}

impl std::error::Error for ReachabilityError {}

/// Depth-first accumulation of the edge sequences leading out of (or into) `node_id`.
///
/// A node revisited within the current path closes the route as a cycle instead of
/// being recursed into. Fails when the node is unknown or has no arcs in the
/// travelled direction at all.
pub fn routes(
    rule: &Rule,
    node_id: NodeId,
    direction: RouteDirection,
) -> Result<Vec<Route>, ReachabilityError> {
    if !rule.nodes().contains_key(&node_id) {
        return Err(ReachabilityError::UnknownNode {
            rule: rule.name().clone(),
            node_id,
        });
    }

    let mut routes = Vec::new();
    let mut path_edges: Vec<EdgeId> = Vec::new();
    let mut path_nodes: Vec<NodeId> = vec![node_id];
    collect(
        rule,
        direction,
        node_id,
        &mut path_edges,
        &mut path_nodes,
        &mut routes,
    );

    if routes.is_empty() {
        return Err(ReachabilityError::NoRoutes {
            rule: rule.name().clone(),
            node_id,
            direction,
        });
    }
    Ok(routes)
}

fn arcs(rule: &Rule, direction: RouteDirection, node_id: NodeId) -> Vec<(EdgeId, NodeId)> {
    match direction {
        RouteDirection::Forward => rule
            .outgoing(node_id)
            .map(|(edge_id, edge)| (edge_id, edge.to_node_id()))
            .collect(),
        RouteDirection::Backward => rule
            .incoming(node_id)
            .map(|(edge_id, edge)| (edge_id, edge.from_node_id()))
            .collect(),
    }
}

fn collect(
    rule: &Rule,
    direction: RouteDirection,
    node_id: NodeId,
    path_edges: &mut Vec<EdgeId>,
    path_nodes: &mut Vec<NodeId>,
    routes: &mut Vec<Route>,
) {
    for (edge_id, next_node_id) in arcs(rule, direction, node_id) {
        path_edges.push(edge_id);

        if path_nodes.contains(&next_node_id) {
            routes.push(close_route(
                path_edges,
                RouteKind::Cycle {
                    node_id: next_node_id,
                },
                direction,
            ));
        } else if arcs(rule, direction, next_node_id).is_empty() {
            routes.push(close_route(
                path_edges,
                RouteKind::Terminal {
                    node_id: next_node_id,
                },
                direction,
            ));
        } else {
            path_nodes.push(next_node_id);
            collect(rule, direction, next_node_id, path_edges, path_nodes, routes);
            path_nodes.pop();
        }

        path_edges.pop();
    }
}

fn close_route(path_edges: &[EdgeId], kind: RouteKind, direction: RouteDirection) -> Route {
    let mut edges: SmallVec<[EdgeId; 8]> = SmallVec::from_slice(path_edges);
    if direction == RouteDirection::Backward {
        edges.reverse();
    }
    Route { edges, kind }
}
