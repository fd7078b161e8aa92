// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mobile level navigator: a drill-down state machine over three menu depths.
//!
//! ## Overview
//!
//! [`LevelNavigator`] owns the cross-call invariants of mobile navigation:
//! which level is shown, which top-level entry is expanded, and which
//! second-level entry is expanded beneath it. Every transition returns an
//! explicit effect list; the shown level always equals the deepest expanded
//! entry those effects leave behind.
//!
//! ## Transitions
//!
//! - Tap an expandable top entry: activate it, reveal its children, hide its
//!   siblings, show its heading, slide right.
//! - Re-tap the active top entry: collapse everything back to level one,
//!   slide left.
//! - Tap an expandable second entry: activate it, reveal its children, hide
//!   its siblings and the top heading, slide right.
//! - Back: undo the deepest expansion, restore what it hid, slide left.
//! - Tap the burger toggle: show or hide the whole menu container; the drill
//!   state underneath is preserved across close and reopen.
//!
//! Link leaves pass through untouched (the host follows the link); inert
//! entries swallow the tap entirely. Movement never leaves `[One, Three]`.
//!
//! ## Slide guard
//!
//! Each transition emits exactly one [`Effect::Slide`]. Until the host
//! reports the animation done via [`LevelNavigator::slide_finished`], further
//! transition taps are swallowed, so rapid tapping cannot stack slides or
//! outrun the state. Leaf and inert taps are unaffected.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{
    DefaultAction, Effect, ItemRole, Level, MenuLookup, Propagation, SlideDirection, TapResponse,
};

/// Drill-down state machine for mobile navigation.
///
/// Generic over the host's node key `K`, captured at binding time. All menu
/// structure is read through a [`MenuLookup`]; taps on keys the lookup does
/// not place where the state machine expects them are swallowed without
/// effects (degraded-structure policy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelNavigator<K: Copy + Eq> {
    level: Level,
    active_top: Option<K>,
    active_second: Option<K>,
    sliding: bool,
    menu_shown: bool,
}

impl<K: Copy + Eq> Default for LevelNavigator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> LevelNavigator<K> {
    /// Create a navigator at level one with nothing expanded and the menu
    /// container closed.
    pub fn new() -> Self {
        Self {
            level: Level::One,
            active_top: None,
            active_second: None,
            sliding: false,
            menu_shown: false,
        }
    }

    /// The currently shown level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The expanded top-level entry, if any.
    pub fn active_top(&self) -> Option<K> {
        self.active_top
    }

    /// The expanded second-level entry, if any.
    pub fn active_second(&self) -> Option<K> {
        self.active_second
    }

    /// Root→deepest path of expanded entries.
    pub fn active_path(&self) -> Vec<K> {
        let mut out = Vec::new();
        if let Some(t) = self.active_top {
            out.push(t);
        }
        if let Some(s) = self.active_second {
            out.push(s);
        }
        out
    }

    /// True while the mobile menu container is shown.
    pub fn menu_shown(&self) -> bool {
        self.menu_shown
    }

    /// True while a slide animation is in flight.
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Report that the host finished the slide animation.
    pub fn slide_finished(&mut self) {
        self.sliding = false;
    }

    /// Deliver a tap on the burger toggle.
    ///
    /// Shows or hides the whole top-level container: `list` is the container's
    /// key, `burger` the toggle's. Both effects carry the new shown state
    /// explicitly. Drill state is untouched, so reopening resumes at the
    /// previous level.
    pub fn tap_burger(&mut self, list: K, burger: K) -> TapResponse<K> {
        let shown = !self.menu_shown;
        self.menu_shown = shown;
        TapResponse {
            effects: vec![
                Effect::SetVisible(list, shown),
                Effect::SetActive(burger, shown),
            ],
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Stop,
        }
    }

    /// Deliver a tap on a top-level entry.
    ///
    /// Expandable entries drill in (or collapse when already expanded);
    /// entries without children belong to the browser and pass through.
    pub fn tap_top(&mut self, node: K, lookup: &impl MenuLookup<K>) -> TapResponse<K> {
        match lookup.role_of(&node) {
            ItemRole::Leaf => return TapResponse::pass(),
            ItemRole::Inert => return TapResponse::swallow(),
            ItemRole::Branch => {}
        }
        if !lookup.has_children(&node) {
            // Childless branch behaves as a link leaf.
            return TapResponse::pass();
        }
        if lookup.level_of(&node) != Level::One {
            return TapResponse::swallow();
        }
        if self.sliding {
            return TapResponse::swallow();
        }
        if self.active_top == Some(node) {
            return self.collapse_top(node, lookup);
        }
        if self.level() != Level::One {
            // Another entry is already expanded; its siblings are hidden and
            // should not be receiving taps.
            return TapResponse::swallow();
        }

        let mut effects = Vec::new();
        effects.push(Effect::SetActive(node, true));
        for sibling in lookup.siblings_of(&node) {
            effects.push(Effect::SetVisible(sibling, false));
        }
        for child in lookup.children_of(&node) {
            effects.push(Effect::SetVisible(child, true));
        }
        effects.push(Effect::SetHeadingVisible(node, true));
        effects.push(Effect::Slide(SlideDirection::Right));

        self.level = Level::Two;
        self.active_top = Some(node);
        self.sliding = true;

        TapResponse {
            effects,
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Continue,
        }
    }

    /// Deliver a tap on a second-level entry.
    ///
    /// Link leaves pass through (with propagation stopped, so the tap cannot
    /// reach outer dismiss handlers); inert entries are swallowed; expandable
    /// entries drill to level three.
    pub fn tap_second(&mut self, node: K, lookup: &impl MenuLookup<K>) -> TapResponse<K> {
        match lookup.role_of(&node) {
            ItemRole::Inert => return TapResponse::swallow(),
            ItemRole::Leaf => {
                return TapResponse {
                    effects: Vec::new(),
                    default_action: DefaultAction::Allow,
                    propagation: Propagation::Stop,
                };
            }
            ItemRole::Branch => {}
        }
        if !lookup.has_children(&node) {
            return TapResponse {
                effects: Vec::new(),
                default_action: DefaultAction::Allow,
                propagation: Propagation::Stop,
            };
        }
        if lookup.level_of(&node) != Level::Two || self.level() != Level::Two {
            return TapResponse::swallow();
        }
        let Some(top) = self.active_top else {
            return TapResponse::swallow();
        };
        if lookup.parent_of(&node) != Some(top) {
            // Tap on a child of a collapsed top entry; stale input.
            return TapResponse::swallow();
        }
        if self.active_second == Some(node) {
            // Already expanded; never re-enter.
            return TapResponse::swallow();
        }
        if self.sliding {
            return TapResponse::swallow();
        }

        let mut effects = Vec::new();
        effects.push(Effect::SetActive(node, true));
        for sibling in lookup.siblings_of(&node) {
            effects.push(Effect::SetVisible(sibling, false));
        }
        for child in lookup.children_of(&node) {
            effects.push(Effect::SetVisible(child, true));
        }
        effects.push(Effect::SetHeadingVisible(top, false));
        effects.push(Effect::Slide(SlideDirection::Right));

        self.level = Level::Three;
        self.active_second = Some(node);
        self.sliding = true;

        TapResponse {
            effects,
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Stop,
        }
    }

    /// Deliver a tap on the back control.
    ///
    /// Undoes the deepest expansion and slides left; at level one this is a
    /// no-op. The response always stops propagation.
    pub fn back(&mut self, lookup: &impl MenuLookup<K>) -> TapResponse<K> {
        if self.sliding {
            return TapResponse::swallow();
        }
        match self.level() {
            Level::One => TapResponse::swallow(),
            Level::Two => {
                let Some(top) = self.active_top else {
                    return TapResponse::swallow();
                };
                let mut effects = Vec::new();
                effects.push(Effect::SetActive(top, false));
                for child in lookup.children_of(&top) {
                    effects.push(Effect::SetVisible(child, false));
                }
                effects.push(Effect::SetHeadingVisible(top, false));
                for sibling in lookup.siblings_of(&top) {
                    effects.push(Effect::SetVisible(sibling, true));
                }
                effects.push(Effect::Slide(SlideDirection::Left));

                self.level = Level::One;
                self.active_top = None;
                self.sliding = true;

                TapResponse {
                    effects,
                    default_action: DefaultAction::Suppress,
                    propagation: Propagation::Stop,
                }
            }
            Level::Three => {
                let (Some(top), Some(second)) = (self.active_top, self.active_second) else {
                    return TapResponse::swallow();
                };
                let mut effects = Vec::new();
                effects.push(Effect::SetActive(second, false));
                for child in lookup.children_of(&second) {
                    effects.push(Effect::SetVisible(child, false));
                }
                for sibling in lookup.siblings_of(&second) {
                    effects.push(Effect::SetVisible(sibling, true));
                }
                effects.push(Effect::SetHeadingVisible(top, true));
                effects.push(Effect::Slide(SlideDirection::Left));

                self.level = Level::Two;
                self.active_second = None;
                self.sliding = true;

                TapResponse {
                    effects,
                    default_action: DefaultAction::Suppress,
                    propagation: Propagation::Stop,
                }
            }
        }
    }

    // Collapse from the active top entry back to level one, clearing any
    // deeper expansion as well.
    fn collapse_top(&mut self, node: K, lookup: &impl MenuLookup<K>) -> TapResponse<K> {
        let mut effects = Vec::new();
        if let Some(second) = self.active_second {
            effects.push(Effect::SetActive(second, false));
            for child in lookup.children_of(&second) {
                effects.push(Effect::SetVisible(child, false));
            }
        }
        effects.push(Effect::SetActive(node, false));
        for child in lookup.children_of(&node) {
            effects.push(Effect::SetVisible(child, false));
        }
        effects.push(Effect::SetHeadingVisible(node, false));
        for sibling in lookup.siblings_of(&node) {
            effects.push(Effect::SetVisible(sibling, true));
        }
        effects.push(Effect::Slide(SlideDirection::Left));

        self.level = Level::One;
        self.active_top = None;
        self.active_second = None;
        self.sliding = true;

        TapResponse {
            effects,
            default_action: DefaultAction::Suppress,
            propagation: Propagation::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    struct Key(u32);

    // Fixture menu:
    //   1 (branch)  → 11 (branch) → 111, 112 (leaves)
    //               → 12 (leaf)
    //               → 13 (inert)
    //   2 (leaf)
    //   3 (branch)  → 31 (branch) → 311 (leaf)
    struct Menu;
    impl MenuLookup<Key> for Menu {
        fn role_of(&self, node: &Key) -> ItemRole {
            match node.0 {
                1 | 3 | 11 | 31 => ItemRole::Branch,
                13 => ItemRole::Inert,
                _ => ItemRole::Leaf,
            }
        }
        fn parent_of(&self, node: &Key) -> Option<Key> {
            match node.0 {
                11 | 12 | 13 => Some(Key(1)),
                31 => Some(Key(3)),
                111 | 112 => Some(Key(11)),
                311 => Some(Key(31)),
                _ => None,
            }
        }
        fn children_of(&self, node: &Key) -> Vec<Key> {
            match node.0 {
                1 => vec![Key(11), Key(12), Key(13)],
                3 => vec![Key(31)],
                11 => vec![Key(111), Key(112)],
                31 => vec![Key(311)],
                _ => Vec::new(),
            }
        }
        fn roots(&self) -> Vec<Key> {
            vec![Key(1), Key(2), Key(3)]
        }
    }

    fn drilled_to_two() -> LevelNavigator<Key> {
        let mut nav = LevelNavigator::new();
        let _ = nav.tap_top(Key(1), &Menu);
        nav.slide_finished();
        nav
    }

    fn drilled_to_three() -> LevelNavigator<Key> {
        let mut nav = drilled_to_two();
        let _ = nav.tap_second(Key(11), &Menu);
        nav.slide_finished();
        nav
    }

    #[test]
    fn starts_at_level_one_with_nothing_active() {
        let nav: LevelNavigator<Key> = LevelNavigator::new();
        assert_eq!(nav.level(), Level::One);
        assert_eq!(nav.active_top(), None);
        assert_eq!(nav.active_second(), None);
        assert!(!nav.is_sliding());
        assert!(!nav.menu_shown());
    }

    #[test]
    fn burger_shows_and_hides_the_container() {
        let mut nav: LevelNavigator<Key> = LevelNavigator::new();
        let list = Key(90);
        let burger = Key(91);

        let r = nav.tap_burger(list, burger);
        assert!(nav.menu_shown());
        assert_eq!(
            r.effects,
            vec![Effect::SetVisible(list, true), Effect::SetActive(burger, true)]
        );
        assert_eq!(r.default_action, DefaultAction::Suppress);
        assert_eq!(r.propagation, Propagation::Stop);

        let r = nav.tap_burger(list, burger);
        assert!(!nav.menu_shown());
        assert_eq!(
            r.effects,
            vec![
                Effect::SetVisible(list, false),
                Effect::SetActive(burger, false)
            ]
        );
    }

    #[test]
    fn burger_close_and_reopen_keeps_drill_state() {
        let mut nav = drilled_to_two();
        let _ = nav.tap_burger(Key(90), Key(91));
        let _ = nav.tap_burger(Key(90), Key(91));
        assert_eq!(nav.level(), Level::Two);
        assert_eq!(nav.active_top(), Some(Key(1)));
    }

    #[test]
    fn drill_to_two_activates_and_reveals() {
        let mut nav = LevelNavigator::new();
        let r = nav.tap_top(Key(1), &Menu);

        assert_eq!(nav.level(), Level::Two);
        assert_eq!(nav.active_top(), Some(Key(1)));
        assert_eq!(r.default_action, DefaultAction::Suppress);
        assert_eq!(r.slide(), Some(SlideDirection::Right));
        assert!(r.effects.contains(&Effect::SetActive(Key(1), true)));
        // Siblings hidden, children revealed, heading shown.
        assert!(r.effects.contains(&Effect::SetVisible(Key(2), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(3), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(11), true)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(13), true)));
        assert!(r.effects.contains(&Effect::SetHeadingVisible(Key(1), true)));
    }

    #[test]
    fn double_tap_collapses_to_one() {
        let mut nav = drilled_to_two();
        let r = nav.tap_top(Key(1), &Menu);

        assert_eq!(nav.level(), Level::One);
        assert_eq!(nav.active_top(), None);
        assert_eq!(r.slide(), Some(SlideDirection::Left));
        assert!(r.effects.contains(&Effect::SetActive(Key(1), false)));
        // Siblings regain visibility.
        assert!(r.effects.contains(&Effect::SetVisible(Key(2), true)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(3), true)));
        assert!(r.effects.contains(&Effect::SetHeadingVisible(Key(1), false)));
    }

    #[test]
    fn collapse_from_three_clears_second_expansion() {
        let mut nav = drilled_to_three();
        let r = nav.tap_top(Key(1), &Menu);
        assert_eq!(nav.level(), Level::One);
        assert_eq!(nav.active_second(), None);
        assert!(r.effects.contains(&Effect::SetActive(Key(11), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(111), false)));
    }

    #[test]
    fn top_leaf_tap_belongs_to_the_browser() {
        let mut nav = LevelNavigator::new();
        let r = nav.tap_top(Key(2), &Menu);
        assert_eq!(r, TapResponse::pass());
        assert_eq!(nav.level(), Level::One);
    }

    #[test]
    fn drill_to_three_hides_heading() {
        let mut nav = drilled_to_two();
        let r = nav.tap_second(Key(11), &Menu);

        assert_eq!(nav.level(), Level::Three);
        assert_eq!(nav.active_second(), Some(Key(11)));
        assert_eq!(nav.active_path(), vec![Key(1), Key(11)]);
        assert_eq!(r.slide(), Some(SlideDirection::Right));
        assert_eq!(r.propagation, Propagation::Stop);
        assert!(r.effects.contains(&Effect::SetActive(Key(11), true)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(111), true)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(12), false)));
        assert!(
            r.effects
                .contains(&Effect::SetHeadingVisible(Key(1), false))
        );
    }

    #[test]
    fn second_leaf_keeps_native_navigation_and_stops_propagation() {
        let mut nav = drilled_to_two();
        let r = nav.tap_second(Key(12), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(r.default_action, DefaultAction::Allow);
        assert_eq!(r.propagation, Propagation::Stop);
        assert_eq!(nav.level(), Level::Two);
    }

    #[test]
    fn second_inert_is_a_dead_click() {
        let mut nav = drilled_to_two();
        let r = nav.tap_second(Key(13), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(r.default_action, DefaultAction::Suppress);
        assert_eq!(r.propagation, Propagation::Stop);
        assert_eq!(nav.level(), Level::Two);
    }

    #[test]
    fn active_second_never_reenters() {
        let mut nav = drilled_to_three();
        let r = nav.tap_second(Key(11), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(nav.level(), Level::Three);
    }

    #[test]
    fn back_from_two_restores_level_one() {
        let mut nav = drilled_to_two();
        let r = nav.back(&Menu);

        assert_eq!(nav.level(), Level::One);
        assert_eq!(nav.active_top(), None);
        assert_eq!(r.slide(), Some(SlideDirection::Left));
        assert!(r.effects.contains(&Effect::SetActive(Key(1), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(11), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(2), true)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(3), true)));
    }

    #[test]
    fn back_from_three_restores_heading() {
        let mut nav = drilled_to_three();
        let r = nav.back(&Menu);

        assert_eq!(nav.level(), Level::Two);
        assert_eq!(nav.active_top(), Some(Key(1)));
        assert_eq!(nav.active_second(), None);
        assert!(r.effects.contains(&Effect::SetActive(Key(11), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(111), false)));
        assert!(r.effects.contains(&Effect::SetVisible(Key(112), false)));
        // Second-level siblings come back, and so does the heading.
        assert!(r.effects.contains(&Effect::SetVisible(Key(12), true)));
        assert!(r.effects.contains(&Effect::SetHeadingVisible(Key(1), true)));
    }

    #[test]
    fn back_at_floor_is_a_noop() {
        let mut nav: LevelNavigator<Key> = LevelNavigator::new();
        let r = nav.back(&Menu);
        assert!(r.effects.is_empty());
        assert_eq!(nav.level(), Level::One);
    }

    #[test]
    fn level_stays_clamped_over_long_sequences() {
        let mut nav = LevelNavigator::new();
        // Try to undershoot.
        for _ in 0..4 {
            let _ = nav.back(&Menu);
            nav.slide_finished();
        }
        assert_eq!(nav.level(), Level::One);

        // Drill to the ceiling and try to overshoot.
        let _ = nav.tap_top(Key(1), &Menu);
        nav.slide_finished();
        let _ = nav.tap_second(Key(11), &Menu);
        nav.slide_finished();
        let r = nav.tap_second(Key(11), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(nav.level(), Level::Three);

        // Net depth: three forward minus two back is level two.
        let _ = nav.back(&Menu);
        nav.slide_finished();
        assert_eq!(nav.level(), Level::Two);
        let _ = nav.back(&Menu);
        nav.slide_finished();
        let _ = nav.back(&Menu);
        nav.slide_finished();
        assert_eq!(nav.level(), Level::One);
    }

    #[test]
    fn slide_guard_swallows_transitions_until_finished() {
        let mut nav = LevelNavigator::new();
        let first = nav.tap_top(Key(1), &Menu);
        assert_eq!(first.slide(), Some(SlideDirection::Right));
        assert!(nav.is_sliding());

        // Still sliding: the drill to level three is refused.
        let blocked = nav.tap_second(Key(11), &Menu);
        assert!(blocked.effects.is_empty());
        assert_eq!(nav.level(), Level::Two);

        nav.slide_finished();
        let allowed = nav.tap_second(Key(11), &Menu);
        assert_eq!(allowed.slide(), Some(SlideDirection::Right));
        assert_eq!(nav.level(), Level::Three);
    }

    #[test]
    fn slide_guard_ignores_leaf_and_inert_taps() {
        let mut nav = LevelNavigator::new();
        let _ = nav.tap_top(Key(1), &Menu);
        assert!(nav.is_sliding());
        // A leaf tap is the browser's business even mid-slide.
        let r = nav.tap_second(Key(12), &Menu);
        assert_eq!(r.default_action, DefaultAction::Allow);
    }

    #[test]
    fn taps_at_unexpected_levels_are_swallowed() {
        let mut nav = LevelNavigator::new();
        // Second-level handler invoked with a top-level key.
        let r = nav.tap_second(Key(1), &Menu);
        assert!(r.effects.is_empty());
        // Top-level handler invoked with a second-level key.
        let r = nav.tap_top(Key(11), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(nav.level(), Level::One);

        // Second-level tap under a collapsed parent.
        let _ = nav.tap_top(Key(1), &Menu);
        nav.slide_finished();
        let r = nav.tap_second(Key(31), &Menu);
        assert!(r.effects.is_empty());
        assert_eq!(nav.level(), Level::Two);
    }

    #[test]
    fn each_transition_emits_exactly_one_slide() {
        let mut nav = LevelNavigator::new();
        for r in [
            nav.tap_top(Key(1), &Menu),
            {
                nav.slide_finished();
                nav.tap_second(Key(11), &Menu)
            },
            {
                nav.slide_finished();
                nav.back(&Menu)
            },
            {
                nav.slide_finished();
                nav.back(&Menu)
            },
        ] {
            let slides = r
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::Slide(_)))
                .count();
            assert_eq!(slides, 1, "every transition slides exactly once");
        }
    }
}
