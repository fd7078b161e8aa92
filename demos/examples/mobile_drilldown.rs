// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile drill-down over a real menu tree.
//!
//! Builds a small three-level menu, drills from level one to level three and
//! back, and prints the effects of each transition plus the class deltas the
//! presentation layer would apply.
//!
//! Run:
//! - `cargo run -p trellis_demos --example mobile_drilldown`

use trellis_menu_tree::{MenuItem, NodeFlags, Tree};
use trellis_navigator::adapters::menu_tree::apply_response;
use trellis_navigator::navigator::LevelNavigator;
use trellis_navigator::types::Level;

fn main() {
    // Deeper entries start hidden until their parent expands.
    let hidden = NodeFlags::empty();
    let mut tree = Tree::new();
    let products = tree.insert(None, MenuItem::branch("Products"));
    let about = tree.insert(None, MenuItem::leaf("About", "/about"));
    let phones = tree.insert(Some(products), MenuItem::branch("Phones").with_flags(hidden));
    let _sale = tree.insert(
        Some(products),
        MenuItem::leaf("Sale", "/sale").with_flags(hidden),
    );
    let _series = tree.insert(Some(products), MenuItem::inert("Series").with_flags(hidden));
    let _x1 = tree.insert(Some(phones), MenuItem::leaf("Model X1", "/x1").with_flags(hidden));
    let _x2 = tree.insert(Some(phones), MenuItem::leaf("Model X2", "/x2").with_flags(hidden));
    let _ = tree.commit();

    let mut nav: LevelNavigator<_> = LevelNavigator::new();

    // Tap "Products": slide right into level two.
    let r = nav.tap_top(products, &tree);
    println!("== Tap Products ==\n  {:?}", r.effects);
    apply_response(&mut tree, &r);
    println!("  deltas: {:?}", tree.commit().deltas);
    nav.slide_finished();
    assert_eq!(nav.level(), Level::Two);

    // Tap "Phones": slide right into level three.
    let r = nav.tap_second(phones, &tree);
    println!("== Tap Phones ==\n  {:?}", r.effects);
    apply_response(&mut tree, &r);
    nav.slide_finished();
    assert_eq!(nav.level(), Level::Three);
    assert_eq!(tree.deepest_expanded().map(|(id, _)| id), Some(phones));

    // Back twice: left, left, and everything is restored.
    for _ in 0..2 {
        let r = nav.back(&tree);
        println!("== Back ==\n  {:?}", r.effects);
        apply_response(&mut tree, &r);
        nav.slide_finished();
    }
    assert_eq!(nav.level(), Level::One);
    assert_eq!(tree.deepest_expanded(), None);

    // A leaf tap belongs to the browser: no effects, default allowed.
    let r = nav.tap_top(about, &tree);
    assert!(r.effects.is_empty());
    println!("== Tap About ==\n  default_action: {:?}", r.default_action);
}
