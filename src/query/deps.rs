// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::model::Syntax;
use crate::walk::{topological_sort, CycleError, Navigator};

/// Navigates the rule-dependency graph: the children of a rule are the rules that
/// reference it, so a dependency sorts before its dependents.
struct UsageNavigator<'a> {
    syntax: &'a Syntax,
}

impl Navigator<SmolStr> for UsageNavigator<'_> {
    fn children(&self, name: &SmolStr) -> Vec<SmolStr> {
        self.syntax
            .usages(name)
            .into_iter()
            .map(|rule| rule.name().clone())
            .collect()
    }
}

/// Orders rule names so every rule precedes the rules that reference it.
///
/// Mutual recursion between distinct rules is a dependency cycle and fails with
/// [`CycleError`]; a self-recursive rule is fine.
pub fn dependency_order(syntax: &Syntax) -> Result<Vec<SmolStr>, CycleError<SmolStr>> {
    let names = syntax
        .rules()
        .iter()
        .map(|rule| rule.name().clone())
        .collect::<Vec<_>>();
    topological_sort(&names, &UsageNavigator { syntax })
}
