// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::path::Path;
use super::preorder::PreorderWalker;
use super::Navigator;

/// Pre/post visit hooks consumed by [`walk`].
pub trait Processor<T> {
    /// Called when an element is entered (pre-order). Returning `false` suppresses
    /// descent into its children; the post hook still runs.
    fn pre_process(&mut self, elem: &T, path: &Path<T>) -> bool;

    /// Called when an element's subtree is exhausted (post-order).
    fn post_process(&mut self, elem: &T, path: &Path<T>);
}

/// Drives a walker to completion with the shared stepping protocol.
///
/// One `next()` per step; an entered element is pre-processed and armed with a
/// breakpoint, and a pause means the element at the cursor is done — resume it and
/// post-process. This realizes iterative pre/post-order depth-first traversal without
/// recursion, bounding depth only by available memory. An external stepper can run the
/// same protocol one step at a time and interleave arbitrary work between steps.
pub fn walk<T, N, P>(walker: &mut PreorderWalker<T, N>, processor: &mut P)
where
    T: Clone,
    N: Navigator<T>,
    P: Processor<T>,
{
    loop {
        if let Some(element) = walker.next() {
            if !processor.pre_process(&element, &walker.path()) {
                walker.skip();
            }
            walker.add_breakpoint();
        } else if walker.is_paused() {
            walker.resume();
            let Some(element) = walker.current().cloned() else {
                return;
            };
            processor.post_process(&element, &walker.path());
        } else {
            return;
        }
    }
}
