// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the menu tree: node identifiers, flags, and item data.

use alloc::string::String;

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
/// All mutation through a stale id is a silent no-op.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-node state booleans.
    ///
    /// These are the state-layer model of the `is-visible` / `is-active`
    /// class tokens a stylesheet consumes. They are independent: a node can
    /// be expanded while hidden (mid-transition) or visible while collapsed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node participates in the currently shown view (`is-visible`).
        const VISIBLE         = 0b0000_0001;
        /// Node is the expanded entry at its depth (`is-active`).
        const EXPANDED        = 0b0000_0010;
        /// The node's own heading row is shown (`is-visible` on the heading).
        const HEADING_VISIBLE = 0b0000_0100;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// How an item responds to activation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ItemKind {
    /// Has an expandable subtree; activating it drills in.
    Branch,
    /// Link-bearing leaf; activation is native navigation, never expansion.
    Leaf,
    /// Intentionally inert: no navigation and no expansion.
    ///
    /// This is the second-level "node" of the menu contract — a grouping
    /// entry whose link must be suppressed and whose tap goes nowhere.
    Inert,
}

/// Per-node item data.
#[derive(Clone, Debug)]
pub struct MenuItem {
    /// Display label.
    pub label: String,
    /// Link target for leaves. Branches and inert items usually carry none.
    pub url: Option<String>,
    /// Activation behavior.
    pub kind: ItemKind,
    /// Initial state booleans.
    ///
    /// The default suits top-level entries, which start visible. Deeper
    /// entries usually start with `VISIBLE` cleared (see
    /// [`MenuItem::with_flags`]) until their parent expands.
    pub flags: NodeFlags,
}

impl MenuItem {
    /// An expandable entry with the default flags.
    pub fn branch(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            kind: ItemKind::Branch,
            flags: NodeFlags::default(),
        }
    }

    /// A link-bearing leaf with the default flags.
    pub fn leaf(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            kind: ItemKind::Leaf,
            flags: NodeFlags::default(),
        }
    }

    /// An inert grouping entry with the default flags.
    pub fn inert(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            kind: ItemKind::Inert,
            flags: NodeFlags::default(),
        }
    }

    /// Replace the initial flags.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }
}
