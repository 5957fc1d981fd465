// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matcher::Matcher;
use crate::model::{Edge, EdgeContent, EdgeId, Node, NodeId, Rule, Syntax, ValidationError};

/// Root of the persistence document: rules in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxDoc {
    pub rules: Vec<RuleDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDoc {
    pub name: String,
    pub entry: u32,
    pub nodes: Vec<NodeDoc>,
    pub edges: Vec<EdgeDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDoc {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDoc {
    pub id: u32,
    pub from: u32,
    pub to: u32,
    pub content: EdgeContentDoc,
    #[serde(default, skip_serializing_if = "is_false")]
    pub last: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Exactly one of a serialized matcher subtree or a named sub-rule reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeContentDoc {
    Matcher(MatcherDoc),
    SubRule(String),
}

/// Lossless structured record of a matcher tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatcherDoc {
    Literal { ch: char },
    Range { lo: char, hi: char },
    Any { chars: String },
    Not { inner: Box<MatcherDoc> },
    Or { operands: Vec<MatcherDoc> },
    Minus { base: Box<MatcherDoc>, excluded: Box<MatcherDoc> },
}

impl MatcherDoc {
    pub fn from_matcher(matcher: &Matcher) -> Self {
        match matcher {
            Matcher::Literal(ch) => Self::Literal { ch: *ch },
            Matcher::Range(lo, hi) => Self::Range { lo: *lo, hi: *hi },
            Matcher::Any(chars) => Self::Any {
                chars: chars.iter().collect(),
            },
            Matcher::Not(inner) => Self::Not {
                inner: Box::new(Self::from_matcher(inner)),
            },
            Matcher::Or(operands) => Self::Or {
                operands: operands.iter().map(Self::from_matcher).collect(),
            },
            Matcher::Minus(base, excluded) => Self::Minus {
                base: Box::new(Self::from_matcher(base)),
                excluded: Box::new(Self::from_matcher(excluded)),
            },
        }
    }

    pub fn into_matcher(self) -> Matcher {
        match self {
            Self::Literal { ch } => Matcher::Literal(ch),
            Self::Range { lo, hi } => Matcher::Range(lo, hi),
            Self::Any { chars } => Matcher::any(&chars),
            Self::Not { inner } => Matcher::Not(Box::new(inner.into_matcher())),
            Self::Or { operands } => Matcher::Or(
                operands
                    .into_iter()
                    .map(MatcherDoc::into_matcher)
                    .collect(),
            ),
            Self::Minus { base, excluded } => Matcher::Minus(
                Box::new(base.into_matcher()),
                Box::new(excluded.into_matcher()),
            ),
        }
    }
}

impl EdgeContentDoc {
    fn from_content(content: &EdgeContent) -> Self {
        match content {
            EdgeContent::Matcher(matcher) => Self::Matcher(MatcherDoc::from_matcher(matcher)),
            EdgeContent::SubRule(name) => Self::SubRule(name.to_string()),
        }
    }

    fn into_content(self) -> EdgeContent {
        match self {
            Self::Matcher(doc) => EdgeContent::Matcher(doc.into_matcher()),
            Self::SubRule(name) => EdgeContent::SubRule(name.into()),
        }
    }
}

#[derive(Debug)]
pub enum DeserializationError {
    /// The document is not valid JSON, or does not match the document shape.
    Json { source: serde_json::Error },
    /// The document parsed but violates a model invariant.
    Invalid { source: ValidationError },
    DuplicateNodeId { rule: String, id: u32 },
    DuplicateEdgeId { rule: String, id: u32 },
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "malformed syntax document: {source}"),
            Self::Invalid { source } => write!(f, "invalid syntax document: {source}"),
            Self::DuplicateNodeId { rule, id } => {
                write!(f, "rule '{rule}' declares node id {id} twice")
            }
            Self::DuplicateEdgeId { rule, id } => {
                write!(f, "rule '{rule}' declares edge id {id} twice")
            }
        }
    }
}

impl std::error::Error for DeserializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Invalid { source } => Some(source),
            Self::DuplicateNodeId { .. } | Self::DuplicateEdgeId { .. } => None,
        }
    }
}

impl SyntaxDoc {
    pub fn from_syntax(syntax: &Syntax) -> Self {
        Self {
            rules: syntax
                .rules()
                .iter()
                .map(|rule| RuleDoc {
                    name: rule.name().to_string(),
                    entry: rule.entry_node_id().value(),
                    nodes: rule
                        .nodes()
                        .iter()
                        .map(|(node_id, node)| NodeDoc {
                            id: node_id.value(),
                            label: node.label().map(ToOwned::to_owned),
                        })
                        .collect(),
                    edges: rule
                        .edges()
                        .iter()
                        .map(|(edge_id, edge)| EdgeDoc {
                            id: edge_id.value(),
                            from: edge.from_node_id().value(),
                            to: edge.to_node_id().value(),
                            content: EdgeContentDoc::from_content(edge.content()),
                            last: edge.display_last(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuilds the model, validating wholesale: either the full syntax loads or the
    /// first violation is reported and nothing is returned.
    pub fn into_syntax(self) -> Result<Syntax, DeserializationError> {
        let mut syntax = Syntax::new();

        for rule_doc in self.rules {
            let mut rule = Rule::new(rule_doc.name.as_str());
            rule.nodes_mut().clear();

            for node_doc in &rule_doc.nodes {
                let node_id = NodeId::new(node_doc.id);
                let mut node = Node::new();
                node.set_label(node_doc.label.clone());
                if rule.nodes_mut().insert(node_id, node).is_some() {
                    return Err(DeserializationError::DuplicateNodeId {
                        rule: rule_doc.name,
                        id: node_doc.id,
                    });
                }
            }

            for edge_doc in &rule_doc.edges {
                let edge_id = EdgeId::new(edge_doc.id);
                let mut edge = Edge::new(
                    NodeId::new(edge_doc.from),
                    NodeId::new(edge_doc.to),
                    edge_doc.content.clone().into_content(),
                );
                edge.set_display_last(edge_doc.last);
                if rule.edges_mut().insert(edge_id, edge).is_some() {
                    return Err(DeserializationError::DuplicateEdgeId {
                        rule: rule_doc.name,
                        id: edge_doc.id,
                    });
                }
            }

            rule.set_entry_node_id(NodeId::new(rule_doc.entry))
                .map_err(|_| DeserializationError::Invalid {
                    source: ValidationError::UnknownNode {
                        rule: rule_doc.name.as_str().into(),
                        node_id: NodeId::new(rule_doc.entry),
                    },
                })?;

            syntax
                .add_rule(rule)
                .map_err(|source| DeserializationError::Invalid { source })?;
        }

        syntax
            .validate()
            .map_err(|source| DeserializationError::Invalid { source })?;
        Ok(syntax)
    }
}

/// Serializes a syntax as the canonical pretty-printed JSON document.
pub fn serialize_syntax(syntax: &Syntax) -> String {
    let doc = SyntaxDoc::from_syntax(syntax);
    serde_json::to_string_pretty(&doc).expect("syntax document serializes as JSON")
}

/// Loads a syntax from a JSON document; fully succeeds or is rejected wholesale.
pub fn deserialize_syntax(input: &str) -> Result<Syntax, DeserializationError> {
    let doc: SyntaxDoc =
        serde_json::from_str(input).map_err(|source| DeserializationError::Json { source })?;
    doc.into_syntax()
}
