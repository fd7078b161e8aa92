// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_navigator --heading-base-level=0

//! Trellis Navigator: deterministic, `no_std` interaction state for a responsive menu.
//!
//! ## Overview
//!
//! This crate decides *what happens* when a user interacts with a three-level
//! navigation menu, without touching any real UI. Feed it taps and hovers on
//! node keys; it returns typed [`Effect`](crate::types::Effect) lists —
//! explicit set/clear of per-node active/visible booleans plus directional
//! slide commands — that a presentation layer applies to its own scene.
//! It does not render, lay out, or animate.
//!
//! ## Components
//!
//! - [`LevelNavigator`](crate::navigator::LevelNavigator) — the mobile
//!   drill-down state machine over levels one to three. Forward taps slide
//!   right, back taps slide left, and an in-flight guard refuses to stack
//!   slides. The burger toggle opens and closes the whole menu container
//!   without disturbing the drill state.
//! - [`FlyoutState`](crate::flyout::FlyoutState) — desktop hover state: the
//!   open top-level entry, the highlighted second-level entry, and the
//!   teaser/third-level swap.
//! - [`propagate`](crate::dispatch::propagate) — synchronous
//!   capture → target → bubble traversal over a root→target path, honoring
//!   stop and stop-and-consume outcomes, so an inner handler can keep a tap
//!   from reaching a document-level dismiss handler.
//!
//! ## Inputs
//!
//! The navigator is generic over a node key `K` and reads menu structure
//! through the [`MenuLookup`](crate::types::MenuLookup) trait. Keys are
//! captured at binding time and stay stable; handlers never re-derive
//! identity from presentation state.
//!
//! ## Viewport modes
//!
//! [`ViewportMode::detect`](crate::types::ViewportMode::detect) answers
//! mobile vs desktop through a [`BreakpointProbe`](crate::types::BreakpointProbe)
//! supplied by the host (the classic "is the burger icon visible" check).
//! The host routes input to the navigator in mobile mode and to the flyout
//! state in desktop mode; this crate holds no cached mode.
//!
//! ## Explicit state, no toggles
//!
//! Every effect carries its target boolean. Applying a response twice leaves
//! the same state as applying it once, so a double-fired handler cannot
//! desynchronize the booleans from the navigator's level.
//!
//! ## Workflow
//!
//! 1) Build your menu structure and implement [`MenuLookup`](crate::types::MenuLookup)
//!    for it (or enable the `menu_tree_adapter` feature and use the
//!    `trellis_menu_tree` implementation).
//! 2) On each input event, call the matching navigator or flyout method and
//!    apply the returned effects.
//! 3) Honor [`TapResponse::default_action`](crate::types::TapResponse) (native
//!    link navigation vs suppression) and
//!    [`TapResponse::propagation`](crate::types::TapResponse) (whether outer
//!    handlers such as outside-tap dismissal may still run).
//! 4) When the slide animation the host runs for a
//!    [`Effect::Slide`](crate::types::Effect) finishes, call
//!    [`LevelNavigator::slide_finished`](crate::navigator::LevelNavigator::slide_finished).
//!
//! ## Minimal example
//!
//! ```
//! use trellis_navigator::navigator::LevelNavigator;
//! use trellis_navigator::types::{ItemRole, Level, MenuLookup};
//!
//! #[derive(Copy, Clone, Debug, Eq, PartialEq)]
//! struct Key(u32);
//!
//! // 1 is a top-level branch with children 2 and 3.
//! struct Menu;
//! impl MenuLookup<Key> for Menu {
//!     fn role_of(&self, _: &Key) -> ItemRole { ItemRole::Branch }
//!     fn parent_of(&self, k: &Key) -> Option<Key> {
//!         (k.0 != 1).then_some(Key(1))
//!     }
//!     fn children_of(&self, k: &Key) -> Vec<Key> {
//!         if k.0 == 1 { vec![Key(2), Key(3)] } else { Vec::new() }
//!     }
//!     fn roots(&self) -> Vec<Key> { vec![Key(1)] }
//! }
//!
//! let mut nav: LevelNavigator<Key> = LevelNavigator::new();
//! let response = nav.tap_top(Key(1), &Menu);
//! assert_eq!(nav.level(), Level::Two);
//! assert!(!response.effects.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatch;
pub mod flyout;
pub mod navigator;
pub mod types;
