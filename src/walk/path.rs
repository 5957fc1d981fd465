// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

/// One level of a [`Path`]: the element plus whether it was the last child of its
/// parent. The flag lets tree renderers pick connectors without re-deriving sibling
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFrame<T> {
    element: T,
    last_sibling: bool,
}

impl<T> PathFrame<T> {
    pub(crate) fn new(element: T, last_sibling: bool) -> Self {
        Self {
            element,
            last_sibling,
        }
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn last_sibling(&self) -> bool {
        self.last_sibling
    }
}

/// The current traversal position: a stack of frames from the root down to the
/// element being visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<T> {
    frames: SmallVec<[PathFrame<T>; 8]>,
}

impl<T> Path<T> {
    pub(crate) fn from_frames(frames: SmallVec<[PathFrame<T>; 8]>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[PathFrame<T>] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&PathFrame<T>> {
        self.frames.last()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{Path, PathFrame};

    #[test]
    fn path_exposes_frames_in_root_to_current_order() {
        let path: Path<&str> = Path::from_frames(smallvec![
            PathFrame::new("root", true),
            PathFrame::new("child", false),
        ]);

        assert_eq!(path.depth(), 2);
        assert_eq!(path.frames()[0].element(), &"root");
        assert!(path.frames()[0].last_sibling());
        let last = path.last().expect("non-empty path");
        assert_eq!(last.element(), &"child");
        assert!(!last.last_sibling());
    }
}
