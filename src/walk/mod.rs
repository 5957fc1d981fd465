// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resumable pre/post-order traversal over anything navigable.
//!
//! The [`PreorderWalker`] is an explicit state machine with a reified stack cursor:
//! `next()` advances pre-order, per-element breakpoints pause the walk when an
//! element's subtree is exhausted, and `resume()` hands the element back for
//! post-order processing. [`walk`] packages that protocol; [`topological_sort`] is
//! built on top of it. Everything here is single-threaded and cooperative — the only
//! suspension mechanism is the pause/resume protocol itself.

pub mod driver;
pub mod path;
pub mod preorder;
pub mod topo;

pub use driver::{walk, Processor};
pub use path::{Path, PathFrame};
pub use preorder::{PreorderWalker, WalkerState};
pub use topo::{topological_sort, CycleError};

/// Capability abstraction supplying child elements for a given element.
///
/// `children` is called lazily — at most once per visited element, and never for an
/// element whose descent was skipped — and must return a finite list.
pub trait Navigator<T> {
    fn children(&self, elem: &T) -> Vec<T>;
}

impl<T, N: Navigator<T>> Navigator<T> for &N {
    fn children(&self, elem: &T) -> Vec<T> {
        (**self).children(elem)
    }
}
