// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::walk::{walk, Navigator, Path, PreorderWalker, Processor};

struct TreeProcessor<'a, F> {
    label: &'a F,
    out: &'a mut String,
}

impl<T, F: Fn(&T) -> String> Processor<T> for TreeProcessor<'_, F> {
    fn pre_process(&mut self, elem: &T, path: &Path<T>) -> bool {
        let text = (self.label)(elem);
        let mut lines = text.split('\n');
        let first = lines.next().unwrap_or("");

        self.out.push_str(&connector_prefix(path));
        self.out.push_str(first);
        self.out.push('\n');

        let continuation = continuation_prefix(path);
        for line in lines {
            self.out.push_str(&continuation);
            self.out.push_str(line);
            self.out.push('\n');
        }
        true
    }

    fn post_process(&mut self, _elem: &T, _path: &Path<T>) {}
}

fn connector_prefix<T>(path: &Path<T>) -> String {
    prefix(path, "`-- ", "|-- ")
}

fn continuation_prefix<T>(path: &Path<T>) -> String {
    prefix(path, "    ", "|   ")
}

fn prefix<T>(path: &Path<T>, when_last: &str, when_more: &str) -> String {
    let frames = path.frames();
    let mut out = String::new();
    if frames.len() <= 1 {
        return out;
    }
    for frame in &frames[1..frames.len() - 1] {
        out.push_str(if frame.last_sibling() { "    " } else { "|   " });
    }
    let last = frames[frames.len() - 1].last_sibling();
    out.push_str(if last { when_last } else { when_more });
    out
}

/// Renders a navigable structure as an indented tree listing.
///
/// Connectors come straight from the walker's [`Path`] last-sibling flags; multi-line
/// labels continue under their own connector column. Cycle handling is the caller's
/// responsibility — pass an acyclic view (the generic walker does no cycle
/// detection).
pub fn render_tree<T, N, F>(root: T, navigator: N, label: F) -> String
where
    T: Clone,
    N: Navigator<T>,
    F: Fn(&T) -> String,
{
    let mut out = String::new();
    let mut walker = PreorderWalker::new(root, navigator);
    let mut processor = TreeProcessor {
        label: &label,
        out: &mut out,
    };
    walk(&mut walker, &mut processor);
    out
}
