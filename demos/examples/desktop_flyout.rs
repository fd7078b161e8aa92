// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop flyout interactions: open, hover, teaser swap, dismiss.
//!
//! Run:
//! - `cargo run -p trellis_demos --example desktop_flyout`

use trellis_navigator::flyout::FlyoutState;
use trellis_navigator::types::{BreakpointProbe, Effect, ViewportMode};

// Node keys the host captured at binding time.
const PRODUCTS: u32 = 1;
const SERVICES: u32 = 2;
const PHONES: u32 = 11;
const TABLETS: u32 = 12;
const TEASER: u32 = 91;
const THIRD_LIST: u32 = 92;

struct WideScreen;
impl BreakpointProbe for WideScreen {
    fn burger_visible(&self) -> bool {
        false
    }
}

fn main() {
    assert_eq!(ViewportMode::detect(&WideScreen), ViewportMode::Desktop);

    let mut fly: FlyoutState<u32> = FlyoutState::new();

    let ev = fly.open(PRODUCTS);
    println!("== Open Products ==\n  {ev:?}");
    assert!(fly.teaser_shown());

    // Hover across second-level entries: one highlight at a time.
    let ev = fly.hover_second(PHONES);
    println!("== Hover Phones ==\n  {ev:?}");
    let ev = fly.hover_second(TABLETS);
    println!("== Hover Tablets ==\n  {ev:?}");
    assert_eq!(
        ev,
        vec![
            Effect::SetActive(PHONES, false),
            Effect::SetActive(TABLETS, true)
        ]
    );

    // Entering the list swaps the teaser out; leaving swaps it back.
    let ev = fly.show_third_level(TEASER, THIRD_LIST);
    println!("== Show third level ==\n  {ev:?}");
    let ev = fly.show_teaser(TEASER, THIRD_LIST);
    println!("== Show teaser ==\n  {ev:?}");

    // Switching to another top entry closes the previous flyout first.
    let ev = fly.open(SERVICES);
    println!("== Open Services ==\n  {ev:?}");
    assert_eq!(fly.open_top(), Some(SERVICES));

    // Click outside: everything clears.
    let ev = fly.dismiss();
    println!("== Dismiss ==\n  {ev:?}");
    assert_eq!(fly, FlyoutState::new());
}
