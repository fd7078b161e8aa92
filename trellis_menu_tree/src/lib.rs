// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_menu_tree --heading-base-level=0

//! Trellis Menu Tree: an explicit tree model for a multi-level navigation menu.
//!
//! Trellis Menu Tree is the state half of a headless menu widget. It owns the
//! menu hierarchy (labels, link targets, item kinds) and two independent
//! booleans per node — *expanded* and *visible* — which stand in for the
//! `is-active` / `is-visible` class tokens a stylesheet would consume.
//!
//! - Represents the menu as parent/child references built once at
//!   initialization, so event handling never re-derives structure from
//!   presentation state.
//! - Exposes explicit set/clear operations for every boolean; there are no
//!   toggles, so a handler that fires twice cannot desynchronize state.
//! - Batches state changes and reports them as class deltas from
//!   [`Tree::commit`], which a presentation layer applies to its own scene.
//!
//! ## Where this fits
//!
//! The tree is deliberately inert: it never decides *when* an item expands.
//! That policy lives in a navigator layered on top (see the
//! `trellis_navigator` crate), which reads membership here and writes flags
//! back through the explicit setters.
//!
//! ## API overview
//!
//! - [`Tree`]: container managing nodes and pending class deltas.
//! - [`MenuItem`]: per-node data (label, optional URL, kind, flags).
//! - [`ItemKind`]: expandable branch, link-bearing leaf, or inert node.
//! - [`NodeFlags`]: the expanded/visible/heading booleans.
//! - [`NodeId`]: generational handle of a node.
//! - [`ClassDamage`] / [`ClassDelta`]: batched state changes per commit.
//!
//! Key operations:
//! - [`Tree::insert`](Tree::insert) → [`NodeId`]
//! - [`Tree::set_expanded`](Tree::set_expanded) / [`Tree::set_visible`](Tree::set_visible)
//! - [`Tree::commit`](Tree::commit) → class deltas since the previous commit.
//! - [`Tree::children_of`](Tree::children_of), [`Tree::path_to_root`](Tree::path_to_root),
//!   [`Tree::expanded_at_depth`](Tree::expanded_at_depth).
//!
//! ### Minimal usage
//!
//! ```
//! use trellis_menu_tree::{Tree, MenuItem, NodeFlags, StateToken};
//!
//! let mut tree = Tree::new();
//! let products = tree.insert(None, MenuItem::branch("Products"));
//! // Deeper entries start hidden until their parent expands.
//! let phones = tree.insert(
//!     Some(products),
//!     MenuItem::branch("Phones").with_flags(NodeFlags::empty()),
//! );
//!
//! tree.set_expanded(products, true);
//! tree.set_visible(phones, true);
//!
//! let damage = tree.commit();
//! assert_eq!(damage.deltas.len(), 2);
//! assert!(damage.deltas.iter().any(|d| d.token == StateToken::Active && d.present));
//!
//! // Redundant writes record nothing.
//! tree.set_expanded(products, true);
//! assert!(tree.commit().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod tree;
mod types;

pub use damage::{ClassDamage, ClassDelta, StateToken};
pub use tree::Tree;
pub use types::{ItemKind, MenuItem, NodeFlags, NodeId};
