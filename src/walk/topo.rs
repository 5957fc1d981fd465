// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

use super::driver::{walk, Processor};
use super::path::Path;
use super::preorder::PreorderWalker;
use super::Navigator;

/// A dependency cycle found by [`topological_sort`]'s post-hoc check.
///
/// `child` is a successor of `element` that nevertheless had to be placed before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError<T> {
    element: T,
    child: T,
}

impl<T> CycleError<T> {
    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn child(&self) -> &T {
        &self.child
    }
}

impl<T: fmt::Debug> fmt::Display for CycleError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the graph contains a cycle involving {:?} and {:?}",
            self.element, self.child
        )
    }
}

impl<T: fmt::Debug> std::error::Error for CycleError<T> {}

/// Restricts a navigator to elements not yet visited.
///
/// The unvisited list shrinks while the walk is in flight (the pre-process hook
/// removes elements), so children are filtered against its live state. The cell is
/// only ever borrowed between walker steps, never across one.
struct UnvisitedNavigator<'a, T, N> {
    inner: &'a N,
    unvisited: &'a RefCell<Vec<T>>,
}

impl<T: Clone + PartialEq, N: Navigator<T>> Navigator<T> for UnvisitedNavigator<'_, T, N> {
    fn children(&self, elem: &T) -> Vec<T> {
        let unvisited = self.unvisited.borrow();
        self.inner
            .children(elem)
            .into_iter()
            .filter(|child| unvisited.contains(child))
            .collect()
    }
}

struct TopoProcessor<'a, T> {
    unvisited: &'a RefCell<Vec<T>>,
    result: &'a mut VecDeque<T>,
}

impl<T: Clone + PartialEq> Processor<T> for TopoProcessor<'_, T> {
    fn pre_process(&mut self, elem: &T, _path: &Path<T>) -> bool {
        // A sibling fetched before an earlier subtree visited it arrives here
        // already-visited; reject it so it is not descended into again.
        let mut unvisited = self.unvisited.borrow_mut();
        if let Some(position) = unvisited.iter().position(|e| e == elem) {
            unvisited.remove(position);
            true
        } else {
            false
        }
    }

    fn post_process(&mut self, elem: &T, _path: &Path<T>) {
        if self.result.contains(elem) {
            return;
        }
        self.result.push_front(elem.clone());
    }
}

/// Orders `elements` so that every element precedes its children (dependencies before
/// dependents), using repeated pre-order walks through the shared stepping protocol.
///
/// Cycles are detected post-hoc against the unfiltered navigator: once every element
/// is placed, no element's child may occur strictly before the element itself (a
/// self-loop is tolerated, so self-recursive rules order cleanly). Ordinary traversal
/// never fails, so arbitrarily large acyclic inputs are handled uniformly; a
/// violation reports the implicated elements via [`CycleError`].
pub fn topological_sort<T, N>(elements: &[T], navigator: &N) -> Result<Vec<T>, CycleError<T>>
where
    T: Clone + PartialEq,
    N: Navigator<T>,
{
    let unvisited = RefCell::new(elements.to_vec());
    let mut result = VecDeque::with_capacity(elements.len());

    loop {
        let root = {
            let guard = unvisited.borrow();
            match guard.first() {
                Some(root) => root.clone(),
                None => break,
            }
        };

        let filtered = UnvisitedNavigator {
            inner: navigator,
            unvisited: &unvisited,
        };
        let mut walker = PreorderWalker::new(root, filtered);
        let mut processor = TopoProcessor {
            unvisited: &unvisited,
            result: &mut result,
        };
        walk(&mut walker, &mut processor);
    }

    let result = result.into_iter().collect::<Vec<_>>();
    for (index, element) in result.iter().enumerate() {
        for child in navigator.children(element) {
            let Some(child_index) = result.iter().position(|e| *e == child) else {
                continue;
            };
            if child_index < index {
                return Err(CycleError {
                    element: element.clone(),
                    child,
                });
            }
        }
    }

    Ok(result)
}
