// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::path::{Path, PathFrame};
use super::Navigator;

/// Lifecycle of a [`PreorderWalker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    Running,
    Paused,
    Finished,
}

#[derive(Debug)]
struct Frame<T> {
    element: T,
    last_sibling: bool,
    // None until the walker first descends into this element.
    children: Option<std::vec::IntoIter<T>>,
    breakpoint: bool,
    skipped: bool,
}

impl<T> Frame<T> {
    fn new(element: T, last_sibling: bool) -> Self {
        Self {
            element,
            last_sibling,
            children: None,
            breakpoint: false,
            skipped: false,
        }
    }
}

/// Resumable, cooperative pre-order traversal with per-element breakpoints.
///
/// `next()` advances one element at a time; a breakpoint added while an element is
/// current pauses the walker once that element's subtree is exhausted, which is what
/// turns a plain pre-order scan into interleaved pre/post-order (see [`super::walk`]).
/// The walker holds no external resources; abandoning it is just dropping it.
#[derive(Debug)]
pub struct PreorderWalker<T, N> {
    navigator: N,
    pending_root: Option<T>,
    stack: Vec<Frame<T>>,
    state: WalkerState,
}

impl<T: Clone, N: Navigator<T>> PreorderWalker<T, N> {
    pub fn new(root: T, navigator: N) -> Self {
        Self {
            navigator,
            pending_root: Some(root),
            stack: Vec::new(),
            state: WalkerState::Running,
        }
    }

    pub fn state(&self) -> WalkerState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == WalkerState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state == WalkerState::Finished
    }

    /// The element most recently entered; the paused position while paused.
    pub fn current(&self) -> Option<&T> {
        self.stack.last().map(|frame| &frame.element)
    }

    /// The current traversal stack, root first.
    pub fn path(&self) -> Path<T> {
        let frames = self
            .stack
            .iter()
            .map(|frame| PathFrame::new(frame.element.clone(), frame.last_sibling))
            .collect::<SmallVec<_>>();
        Path::from_frames(frames)
    }

    /// Advances pre-order and returns the entered element.
    ///
    /// Returns `None` transiently while paused at a breakpoint (resume to continue)
    /// and permanently once the traversal has finished.
    pub fn next(&mut self) -> Option<T> {
        match self.state {
            WalkerState::Running => {}
            WalkerState::Paused | WalkerState::Finished => return None,
        }

        if let Some(root) = self.pending_root.take() {
            self.stack.push(Frame::new(root.clone(), true));
            return Some(root);
        }

        loop {
            let navigator = &self.navigator;
            let Some(top) = self.stack.last_mut() else {
                self.state = WalkerState::Finished;
                return None;
            };

            let next_child = if top.skipped {
                None
            } else {
                top.children
                    .get_or_insert_with(|| navigator.children(&top.element).into_iter())
                    .next()
            };

            match next_child {
                Some(child) => {
                    let last_sibling = top
                        .children
                        .as_ref()
                        .map(|iter| iter.len() == 0)
                        .unwrap_or(true);
                    self.stack.push(Frame::new(child.clone(), last_sibling));
                    return Some(child);
                }
                None => {
                    if top.breakpoint {
                        self.state = WalkerState::Paused;
                        return None;
                    }
                    self.stack.pop();
                }
            }
        }
    }

    /// Suppresses descent into the current element's children.
    ///
    /// Its children are never fetched from the navigator.
    pub fn skip(&mut self) {
        if self.state != WalkerState::Running {
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.skipped = true;
        }
    }

    /// Arms a breakpoint on the current element; the walker pauses when that
    /// element's subtree is exhausted.
    pub fn add_breakpoint(&mut self) {
        if self.state != WalkerState::Running {
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.breakpoint = true;
        }
    }

    /// Clears the breakpoint at the paused position and continues.
    ///
    /// The paused element stays current until the following `next()` moves past it.
    pub fn resume(&mut self) {
        if self.state != WalkerState::Paused {
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.breakpoint = false;
        }
        self.state = WalkerState::Running;
    }
}
