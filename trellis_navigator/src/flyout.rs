// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop flyout state: open entry, hovered entry, and the teaser swap.
//!
//! ## Overview
//!
//! On desktop viewports the menu is hover-driven and nothing slides: a
//! top-level entry opens a flyout container, moving the pointer across
//! second-level entries highlights exactly one of them, and the right-hand
//! pane swaps between a secondary teaser and the hovered entry's third-level
//! list. [`FlyoutState`] tracks those three facts and emits explicit
//! [`Effect`] lists for every change.
//!
//! Transitions always clear the previous holder before setting the new one
//! (leave before enter), so at most one entry is active per level at any
//! point in the effect stream.
//!
//! ## Dismissal
//!
//! [`FlyoutState::dismiss`] is the close-button and outside-click path. The
//! host decides *whether* an outside click actually was outside — typically
//! by routing the click through [`propagate`](crate::dispatch::propagate)
//! and only dismissing when no inner handler stopped it.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::Effect;

/// Hover-driven flyout state for desktop viewports.
///
/// Holds which top-level entry is open, which second-level entry is
/// highlighted, and whether the teaser pane (rather than a third-level list)
/// is showing. All methods return the effects that move the presentation
/// from the previous state to the new one; redundant calls return no
/// effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlyoutState<K: Copy + Eq> {
    open_top: Option<K>,
    hovered_second: Option<K>,
    teaser_shown: bool,
}

impl<K: Copy + Eq> FlyoutState<K> {
    /// Create a closed flyout.
    pub fn new() -> Self {
        Self {
            open_top: None,
            hovered_second: None,
            teaser_shown: false,
        }
    }

    /// The open top-level entry, if any.
    pub fn open_top(&self) -> Option<K> {
        self.open_top
    }

    /// The highlighted second-level entry, if any.
    pub fn hovered_second(&self) -> Option<K> {
        self.hovered_second
    }

    /// True while the teaser pane is showing instead of a third-level list.
    pub fn teaser_shown(&self) -> bool {
        self.teaser_shown
    }

    /// Open the flyout for a top-level entry, or close it when the same
    /// entry is clicked again.
    ///
    /// Opening a different entry closes the previous one first. A fresh open
    /// starts with the teaser pane showing. Pane visibility under the
    /// previous entry is not rewound here; the host hides the old flyout
    /// container when the open entry changes.
    pub fn open(&mut self, top: K) -> Vec<Effect<K>> {
        let mut effects = Vec::new();
        if let Some(h) = self.hovered_second.take() {
            effects.push(Effect::SetActive(h, false));
        }
        if let Some(prev) = self.open_top.take() {
            effects.push(Effect::SetActive(prev, false));
            if prev == top {
                // Re-click closes.
                self.teaser_shown = false;
                return effects;
            }
        }
        effects.push(Effect::SetActive(top, true));
        self.open_top = Some(top);
        self.teaser_shown = true;
        effects
    }

    /// Highlight a second-level entry under the open flyout.
    ///
    /// The previously highlighted sibling is cleared first. No-op when the
    /// flyout is closed or the entry is already highlighted.
    pub fn hover_second(&mut self, item: K) -> Vec<Effect<K>> {
        if self.open_top.is_none() || self.hovered_second == Some(item) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(prev) = self.hovered_second {
            effects.push(Effect::SetActive(prev, false));
        }
        effects.push(Effect::SetActive(item, true));
        self.hovered_second = Some(item);
        effects
    }

    /// Swap the pane to the third-level list of the hovered entry.
    ///
    /// `teaser` and `third_list` are the pane keys under the open entry.
    /// No-op when the flyout is closed or the list is already showing.
    pub fn show_third_level(&mut self, teaser: K, third_list: K) -> Vec<Effect<K>> {
        if self.open_top.is_none() || !self.teaser_shown {
            return Vec::new();
        }
        self.teaser_shown = false;
        vec![
            Effect::SetVisible(third_list, true),
            Effect::SetVisible(teaser, false),
        ]
    }

    /// Swap the pane back to the secondary teaser.
    ///
    /// The pointer-leave counterpart of [`FlyoutState::show_third_level`].
    pub fn show_teaser(&mut self, teaser: K, third_list: K) -> Vec<Effect<K>> {
        if self.open_top.is_none() || self.teaser_shown {
            return Vec::new();
        }
        self.teaser_shown = true;
        vec![
            Effect::SetVisible(third_list, false),
            Effect::SetVisible(teaser, true),
        ]
    }

    /// Close the flyout entirely (close button or a click outside the menu).
    ///
    /// Clears the highlight before the open entry (inner before outer).
    pub fn dismiss(&mut self) -> Vec<Effect<K>> {
        let mut effects = Vec::new();
        if let Some(h) = self.hovered_second.take() {
            effects.push(Effect::SetActive(h, false));
        }
        if let Some(top) = self.open_top.take() {
            effects.push(Effect::SetActive(top, false));
        }
        self.teaser_shown = false;
        effects
    }
}
