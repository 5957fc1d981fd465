// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core rule-graph data model.
//!
//! A [`Syntax`] owns an ordered collection of [`Rule`]s; each rule is a node/edge
//! automaton whose edges carry a matcher or a named sub-rule reference.

pub mod ids;
pub mod rule;
pub mod syntax;

pub use ids::{EdgeId, Id, NodeId, RuleId};
pub use rule::{Edge, EdgeContent, GraphError, Node, Rule};
pub use syntax::{is_reserved_name, RuleClass, Syntax, ValidationError, RESERVED_NAMES};
