// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence document model.
//!
//! The document mirrors the rule-graph model one-to-one: rules in declaration order,
//! id-keyed nodes and edges, and either a matcher subtree or a named sub-rule
//! reference per edge. Loading either fully succeeds or is rejected wholesale with a
//! single [`DeserializationError`].

pub mod document;

pub use document::{
    deserialize_syntax, serialize_syntax, DeserializationError, EdgeContentDoc, EdgeDoc,
    MatcherDoc, NodeDoc, RuleDoc, SyntaxDoc,
};
