// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the navigator: levels, modes, lookups, effects, and responses.
//!
//! ## Overview
//!
//! These types describe the navigator protocol and its inputs/outputs.
//! They are referenced by the [`navigator`](crate::navigator) and
//! [`flyout`](crate::flyout) modules and consumed by host toolkits.

use alloc::vec::Vec;

/// Menu depth currently shown in mobile mode.
///
/// Ordered shallow to deep; the navigator clamps all movement to
/// `[One, Three]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    /// Top-level entries, the entry point.
    One,
    /// Children of the expanded top-level entry.
    Two,
    /// Deepest entries; always link leaves.
    Three,
}

impl Level {
    /// The next deeper level, saturating at [`Level::Three`].
    #[must_use]
    pub fn deeper(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two | Self::Three => Self::Three,
        }
    }

    /// The next shallower level, saturating at [`Level::One`].
    #[must_use]
    pub fn shallower(self) -> Self {
        match self {
            Self::One | Self::Two => Self::One,
            Self::Three => Self::Two,
        }
    }

    /// Map a zero-based tree depth to a level, clamping at three.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::One,
            1 => Self::Two,
            _ => Self::Three,
        }
    }
}

/// Which interaction scheme the host should route input through.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewportMode {
    /// Tap-driven drill-down with slide transitions.
    Mobile,
    /// Hover-driven flyouts.
    Desktop,
}

/// Host-supplied breakpoint check.
///
/// The canonical implementation answers "is the burger toggle currently
/// displayed", which is how the stylesheet communicates the breakpoint.
pub trait BreakpointProbe {
    /// True when the burger toggle element is shown.
    fn burger_visible(&self) -> bool;
}

impl ViewportMode {
    /// Derive the mode from a probe: visible burger means mobile.
    pub fn detect(probe: &impl BreakpointProbe) -> Self {
        if probe.burger_visible() {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// How an item responds to activation, as seen by the navigator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ItemRole {
    /// Expandable: tapping drills into its children.
    Branch,
    /// Link-bearing leaf: tapping navigates natively, never expands.
    Leaf,
    /// Intentionally dead: tapping neither navigates nor expands.
    Inert,
}

/// Read-only menu structure, the seam between the navigator and the host's tree.
///
/// Implement this for your menu representation, or enable the
/// `menu_tree_adapter` feature for the `trellis_menu_tree` implementation.
/// Unknown keys should degrade gracefully ([`ItemRole::Inert`], no parent,
/// no children); the navigator turns them into silent no-ops.
pub trait MenuLookup<K> {
    /// Activation behavior of a node.
    fn role_of(&self, node: &K) -> ItemRole;

    /// Returns the parent of `node`, or `None` if `node` is top-level.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// The children of `node`, in display order.
    fn children_of(&self, node: &K) -> Vec<K>;

    /// The top-level entries, in display order.
    fn roots(&self) -> Vec<K>;

    /// True if `node` has at least one child.
    fn has_children(&self, node: &K) -> bool {
        !self.children_of(node).is_empty()
    }

    /// The siblings of `node` (same parent, excluding `node`).
    fn siblings_of(&self, node: &K) -> Vec<K>
    where
        K: PartialEq,
    {
        let pool = match self.parent_of(node) {
            Some(p) => self.children_of(&p),
            None => self.roots(),
        };
        pool.into_iter().filter(|c| c != node).collect()
    }

    /// The level a node sits at, derived from its ancestry.
    fn level_of(&self, node: &K) -> Level {
        let mut depth = 0;
        let mut cur = self.parent_of(node);
        while let Some(p) = cur {
            depth += 1;
            cur = self.parent_of(&p);
        }
        Level::from_depth(depth)
    }
}

/// Direction of the slide reveal applied to the whole top-level container.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlideDirection {
    /// Shallower: navigating back.
    Left,
    /// Deeper: drilling in.
    Right,
}

/// A single presentation command.
///
/// Every variant carries its target value explicitly; there are no toggles.
/// Applying an effect list twice yields the same state as applying it once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Effect<K> {
    /// Set or clear a node's expanded boolean (`is-active`).
    SetActive(K, bool),
    /// Set or clear a node's visible boolean (`is-visible`).
    SetVisible(K, bool),
    /// Set or clear the heading-row visibility of a top-level node.
    SetHeadingVisible(K, bool),
    /// Run the directional slide reveal over the top-level container.
    Slide(SlideDirection),
}

/// Whether the host should let the browser-equivalent default run.
///
/// The data form of `preventDefault`: `Suppress` means the tapped link must
/// not be followed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DefaultAction {
    /// Let native link navigation proceed.
    Allow,
    /// Suppress native link navigation.
    Suppress,
}

/// Whether outer handlers may still observe the input.
///
/// The data form of `stopPropagation`: `Stop` keeps a handled tap from
/// reaching ancestors such as a document-level outside-tap dismissal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Propagation {
    /// Outer handlers run as usual.
    Continue,
    /// Do not deliver this input to outer handlers.
    Stop,
}

/// Result of one tap delivered to the navigator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TapResponse<K> {
    /// Presentation commands, in application order.
    pub effects: Vec<Effect<K>>,
    /// Native-navigation policy for the tapped element.
    pub default_action: DefaultAction,
    /// Propagation policy for the input event.
    pub propagation: Propagation,
}

impl<K> TapResponse<K> {
    /// No effects; let the default run and the event propagate.
    ///
    /// Used for link leaves, where the tap belongs to the browser.
    pub fn pass() -> Self {
        Self {
            effects: Vec::new(),
            default_action: DefaultAction::Allow,
            propagation: Propagation::Continue,
        }
    }

    /// No effects; swallow the event entirely.
    ///
    /// Used for inert items and for taps ignored by the slide guard.
    pub fn swallow() -> Self {
        Self {
            effects: Vec::new(),
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Stop,
        }
    }

    /// The slide this response triggers, if any.
    pub fn slide(&self) -> Option<SlideDirection> {
        self.effects.iter().find_map(|e| match e {
            Effect::Slide(d) => Some(*d),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn level_ordering_and_saturation() {
        assert!(Level::One < Level::Two);
        assert!(Level::Two < Level::Three);
        assert_eq!(Level::Three.deeper(), Level::Three);
        assert_eq!(Level::One.shallower(), Level::One);
        assert_eq!(Level::Two.deeper(), Level::Three);
        assert_eq!(Level::Three.shallower(), Level::Two);
    }

    #[test]
    fn level_from_depth_clamps() {
        assert_eq!(Level::from_depth(0), Level::One);
        assert_eq!(Level::from_depth(1), Level::Two);
        assert_eq!(Level::from_depth(2), Level::Three);
        assert_eq!(Level::from_depth(9), Level::Three);
    }

    #[test]
    fn viewport_detect_follows_burger() {
        struct Probe(bool);
        impl BreakpointProbe for Probe {
            fn burger_visible(&self) -> bool {
                self.0
            }
        }
        assert_eq!(ViewportMode::detect(&Probe(true)), ViewportMode::Mobile);
        assert_eq!(ViewportMode::detect(&Probe(false)), ViewportMode::Desktop);
    }

    #[test]
    fn response_slide_extraction() {
        let r: TapResponse<u32> = TapResponse {
            effects: vec![
                Effect::SetActive(1, true),
                Effect::Slide(SlideDirection::Right),
            ],
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Continue,
        };
        assert_eq!(r.slide(), Some(SlideDirection::Right));
        assert_eq!(TapResponse::<u32>::pass().slide(), None);
    }

    #[test]
    fn pass_and_swallow_policies() {
        let pass = TapResponse::<u32>::pass();
        assert_eq!(pass.default_action, DefaultAction::Allow);
        assert_eq!(pass.propagation, Propagation::Continue);

        let swallow = TapResponse::<u32>::swallow();
        assert_eq!(swallow.default_action, DefaultAction::Suppress);
        assert_eq!(swallow.propagation, Propagation::Stop);
    }
}
