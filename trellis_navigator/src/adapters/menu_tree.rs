// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Trellis Menu Tree.
//!
//! ## Feature
//!
//! Enable with `menu_tree_adapter`.
//!
//! ## Notes
//!
//! These helpers let the navigator read structure straight from a
//! [`Tree`] and write effect lists back into its flags. Slide effects are
//! presentation-side and are skipped when applying; fetch them from the
//! response with [`TapResponse::slide`](crate::types::TapResponse::slide).

use alloc::vec::Vec;

use trellis_menu_tree::{ItemKind, NodeId, Tree};

use crate::types::{Effect, ItemRole, Level, MenuLookup, TapResponse};

impl MenuLookup<NodeId> for Tree {
    /// Stale ids degrade to [`ItemRole::Inert`], so taps on removed nodes
    /// are swallowed rather than followed.
    fn role_of(&self, node: &NodeId) -> ItemRole {
        match self.item(*node).map(|i| i.kind) {
            Some(ItemKind::Branch) => ItemRole::Branch,
            Some(ItemKind::Leaf) => ItemRole::Leaf,
            Some(ItemKind::Inert) | None => ItemRole::Inert,
        }
    }

    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        Self::parent_of(self, *node)
    }

    fn children_of(&self, node: &NodeId) -> Vec<NodeId> {
        Self::children_of(self, *node).to_vec()
    }

    fn roots(&self) -> Vec<NodeId> {
        Self::roots(self).collect()
    }

    fn has_children(&self, node: &NodeId) -> bool {
        Self::has_children(self, *node)
    }

    fn siblings_of(&self, node: &NodeId) -> Vec<NodeId> {
        Self::siblings_of(self, *node)
    }

    fn level_of(&self, node: &NodeId) -> Level {
        self.depth_of(*node).map_or(Level::One, Level::from_depth)
    }
}

/// Write an effect list into the tree's flags.
///
/// [`Effect::Slide`] entries are skipped; everything else maps onto the
/// tree's explicit setters, so applying the same list twice leaves the tree
/// unchanged and records no further deltas.
pub fn apply_effects(tree: &mut Tree, effects: &[Effect<NodeId>]) {
    for effect in effects {
        match *effect {
            Effect::SetActive(node, value) => tree.set_expanded(node, value),
            Effect::SetVisible(node, value) => tree.set_visible(node, value),
            Effect::SetHeadingVisible(node, value) => tree.set_heading_visible(node, value),
            Effect::Slide(_) => {}
        }
    }
}

/// Write a tap response's effects into the tree's flags.
pub fn apply_response(tree: &mut Tree, response: &TapResponse<NodeId>) {
    apply_effects(tree, &response.effects);
}
