// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use crate::matcher::MatcherIssue;

use super::ids::{EdgeId, NodeId, RuleId};
use super::rule::{EdgeContent, Rule};

/// Keywords of the emission target (Rust source); rule names become identifiers in
/// generated code, so these are rejected by [`Syntax::add_rule`].
pub const RESERVED_NAMES: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// How a rule is consumed by the rest of the syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleClass {
    /// No other rule references it; an entry point of the grammar.
    Primary,
    /// Exactly one other rule references it; a generator may inline it.
    Inlinable,
    /// Referenced from more than one other rule.
    Shared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateName {
        name: SmolStr,
    },
    ReservedName {
        name: SmolStr,
    },
    RuleInUse {
        name: SmolStr,
        used_by: Vec<SmolStr>,
    },
    UnknownRule {
        name: SmolStr,
    },
    UnknownSubRule {
        rule: SmolStr,
        target: SmolStr,
    },
    UnknownNode {
        rule: SmolStr,
        node_id: NodeId,
    },
    Matcher {
        rule: SmolStr,
        edge_id: EdgeId,
        issue: MatcherIssue,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "rule name '{name}' is already taken"),
            Self::ReservedName { name } => {
                write!(f, "rule name '{name}' is reserved in the emission target")
            }
            Self::RuleInUse { name, used_by } => {
                write!(f, "cannot delete rule '{name}': referenced by ")?;
                for (index, user) in used_by.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{user}'")?;
                }
                Ok(())
            }
            Self::UnknownRule { name } => write!(f, "no rule named '{name}'"),
            Self::UnknownSubRule { rule, target } => {
                write!(f, "rule '{rule}' references unknown sub-rule '{target}'")
            }
            Self::UnknownNode { rule, node_id } => {
                write!(f, "rule '{rule}' points at missing node {node_id}")
            }
            Self::Matcher {
                rule,
                edge_id,
                issue,
            } => write!(f, "rule '{rule}', edge {edge_id}: {issue}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The ordered, name-keyed collection of all rules in a grammar definition.
///
/// Rule identity is positional: [`Syntax::add_rule`] assigns the next [`RuleId`] and
/// appends; [`Syntax::delete_rule`] removes and compacts, shifting later identities
/// down. Sub-rule references are by name, so compaction never dangles them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syntax {
    rules: Vec<Rule>,
}

impl Syntax {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, rule_id: RuleId) -> Option<&Rule> {
        self.rules.get(rule_id.value() as usize)
    }

    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.rules
            .iter()
            .position(|rule| rule.name() == name)
            .map(|index| RuleId::new(index as u32))
    }

    pub fn rule_by_name(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn rule_by_name_mut(&mut self, name: &str) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|rule| rule.name() == name)
    }

    /// Appends a rule, assigning the next identity.
    ///
    /// The syntax is unchanged on failure.
    pub fn add_rule(&mut self, rule: Rule) -> Result<RuleId, ValidationError> {
        if is_reserved_name(rule.name()) {
            return Err(ValidationError::ReservedName {
                name: rule.name().clone(),
            });
        }
        if self.rule_by_name(rule.name()).is_some() {
            return Err(ValidationError::DuplicateName {
                name: rule.name().clone(),
            });
        }

        self.rules.push(rule);
        Ok(RuleId::new((self.rules.len() - 1) as u32))
    }

    /// Removes a rule and compacts identities.
    ///
    /// Fails with [`ValidationError::RuleInUse`] if any *other* rule references it via
    /// a sub-rule edge; a self-recursive reference does not block deletion. The syntax
    /// is unchanged on failure.
    pub fn delete_rule(&mut self, name: &str) -> Result<Rule, ValidationError> {
        let Some(index) = self.rules.iter().position(|rule| rule.name() == name) else {
            return Err(ValidationError::UnknownRule { name: name.into() });
        };

        let used_by = self
            .rules
            .iter()
            .filter(|rule| rule.name() != name && rule.references(name))
            .map(|rule| rule.name().clone())
            .collect::<Vec<_>>();
        if !used_by.is_empty() {
            return Err(ValidationError::RuleInUse {
                name: name.into(),
                used_by,
            });
        }

        Ok(self.rules.remove(index))
    }

    /// Rules referencing `name` via a sub-rule edge, in declaration order.
    ///
    /// Derived by scanning edges on demand; a rule appears in its own usages only when
    /// it is self-recursive.
    pub fn usages(&self, name: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.references(name))
            .collect()
    }

    /// Classification by external usage count; `None` for an unknown rule.
    pub fn rule_class(&self, name: &str) -> Option<RuleClass> {
        self.rule_by_name(name)?;
        let external = self
            .usages(name)
            .iter()
            .filter(|rule| rule.name() != name)
            .count();
        Some(match external {
            0 => RuleClass::Primary,
            1 => RuleClass::Inlinable,
            _ => RuleClass::Shared,
        })
    }

    /// Whole-graph well-formedness: every entry node and edge endpoint exists, every
    /// sub-rule reference resolves, every matcher is well-formed.
    ///
    /// This is the guarantee handed to the code generator; the open arena surface
    /// (`nodes_mut`/`edges_mut`) makes it possible to break these invariants during
    /// bulk edits, and this is where they are caught.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if !rule.nodes().contains_key(&rule.entry_node_id()) {
                return Err(ValidationError::UnknownNode {
                    rule: rule.name().clone(),
                    node_id: rule.entry_node_id(),
                });
            }

            for (edge_id, edge) in rule.edges() {
                for node_id in [edge.from_node_id(), edge.to_node_id()] {
                    if !rule.nodes().contains_key(&node_id) {
                        return Err(ValidationError::UnknownNode {
                            rule: rule.name().clone(),
                            node_id,
                        });
                    }
                }

                match edge.content() {
                    EdgeContent::Matcher(matcher) => {
                        matcher.validate().map_err(|issue| ValidationError::Matcher {
                            rule: rule.name().clone(),
                            edge_id: *edge_id,
                            issue,
                        })?;
                    }
                    EdgeContent::SubRule(target) => {
                        if self.rule_by_name(target).is_none() {
                            return Err(ValidationError::UnknownSubRule {
                                rule: rule.name().clone(),
                                target: target.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
