// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched class-delta structures returned by [`Tree::commit`](crate::Tree::commit).

use alloc::vec::Vec;

use crate::types::NodeId;

/// The class token a delta refers to.
///
/// Maps one-to-one onto the class names a stylesheet-driven presentation
/// would use (`is-active`, `is-visible`, and `is-visible` on the heading).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StateToken {
    /// The expanded boolean (`is-active`).
    Active,
    /// The visible boolean (`is-visible`).
    Visible,
    /// The heading-row visible boolean.
    HeadingVisible,
}

/// A single recorded state change.
///
/// `present == true` means the token was set; `false` means it was cleared.
/// Deltas are only recorded for actual changes — writing a flag that already
/// holds the target value records nothing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClassDelta {
    /// The node whose state changed.
    pub node: NodeId,
    /// Which boolean changed.
    pub token: StateToken,
    /// The new value.
    pub present: bool,
}

/// Batched state-change summary returned by [`Tree::commit`](crate::Tree::commit).
#[derive(Clone, Debug, Default)]
pub struct ClassDamage {
    /// Changes since the last commit, in application order.
    pub deltas: Vec<ClassDelta>,
}

impl ClassDamage {
    /// True if no changes were recorded.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Iterate the changes affecting a single node.
    pub fn for_node(&self, node: NodeId) -> impl Iterator<Item = &ClassDelta> {
        self.deltas.iter().filter(move |d| d.node == node)
    }
}
