// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap propagation and outside-tap dismissal.
//!
//! Shows the guarantee the menu relies on: a tap handled inside the menu
//! stops before it reaches the document level, so the outside-tap dismiss
//! handler only ever fires for taps that really landed outside.
//!
//! Run:
//! - `cargo run -p trellis_demos --example tap_propagation`

use trellis_navigator::dispatch::{Outcome, Phase, path_for, propagate};
use trellis_navigator::types::{ItemRole, MenuLookup, Propagation};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Key(u32);

const DOCUMENT: Key = Key(0);
const MENU_ITEM: Key = Key(11);

// Document → top item → second item.
struct Menu;
impl MenuLookup<Key> for Menu {
    fn role_of(&self, _: &Key) -> ItemRole {
        ItemRole::Branch
    }
    fn parent_of(&self, node: &Key) -> Option<Key> {
        match node.0 {
            11 => Some(Key(1)),
            1 => Some(DOCUMENT),
            _ => None,
        }
    }
    fn children_of(&self, _: &Key) -> Vec<Key> {
        Vec::new()
    }
    fn roots(&self) -> Vec<Key> {
        vec![DOCUMENT]
    }
}

/// Deliver a tap whose inner handler reported `propagation`, and return
/// whether the document-level dismiss handler saw it.
fn dismiss_handler_fired(target: Key, propagation: Propagation) -> bool {
    let path = path_for(target, &Menu);
    let mut fired = false;
    let _ = propagate(&path, |phase, node| {
        if phase != Phase::Bubble {
            return Outcome::Continue;
        }
        if *node == target && propagation == Propagation::Stop {
            return Outcome::Stop;
        }
        if *node == DOCUMENT {
            // The outside-tap dismiss handler lives at the document.
            fired = true;
        }
        Outcome::Continue
    });
    fired
}

fn main() {
    // A handled menu tap stops its own bubble: no dismissal.
    let fired = dismiss_handler_fired(MENU_ITEM, Propagation::Stop);
    println!("== Handled menu tap ==\n  dismiss fired: {fired}");
    assert!(!fired);

    // An unhandled tap bubbles to the document: dismissal runs.
    let fired = dismiss_handler_fired(MENU_ITEM, Propagation::Continue);
    println!("== Unhandled tap ==\n  dismiss fired: {fired}");
    assert!(fired);
}
