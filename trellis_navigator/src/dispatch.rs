// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous tap propagation: capture → target → bubble over a node path.
//!
//! ## Overview
//!
//! Input events fire over an ancestry: a tap on a second-level entry is also
//! a tap on its top-level parent and on the document. [`propagate`] walks a
//! root→target path through the three phases and honors per-handler
//! outcomes, so an inner handler can stop an event before it reaches outer
//! ones — the guarantee the outside-tap dismissal relies on.
//!
//! Handlers run to completion on the calling thread in path order; there is
//! no queuing and no re-entrancy.
//!
//! ## Minimal example
//!
//! ```
//! use trellis_navigator::dispatch::{propagate, Outcome, Phase};
//!
//! let mut order = Vec::new();
//! let consumed = propagate(&[1u32, 2, 3], |phase, node| {
//!     order.push((phase, *node));
//!     Outcome::Continue
//! });
//! assert!(!consumed);
//! assert_eq!(order.first(), Some(&(Phase::Capture, 1)));
//! assert_eq!(order[3], (Phase::Target, 3));
//! assert_eq!(order.last(), Some(&(Phase::Bubble, 1)));
//! ```

use alloc::vec::Vec;

use crate::types::MenuLookup;

/// Phases of event propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-target traversal.
    Capture,
    /// Target node.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue within the current phase.
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop all phases and mark the event consumed.
    StopAndConsume,
}

/// Reconstruct the root→target path for a node via parent links.
///
/// The target is always the last element; a node with no known parent yields
/// a singleton path.
pub fn path_for<K: Copy>(target: K, lookup: &impl MenuLookup<K>) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = target;
    // Collect to root; the lookup guarantees acyclic ancestry.
    loop {
        out.push(cur);
        match lookup.parent_of(&cur) {
            Some(p) => cur = p,
            None => break,
        }
    }
    out.reverse();
    out
}

/// Walk a root→target path through capture, target, and bubble phases.
///
/// Calls `handler` once per (phase, node) step. [`Outcome::Stop`] skips the
/// remaining steps of the current phase; [`Outcome::StopAndConsume`] aborts
/// the walk entirely. Returns true if the event was consumed.
///
/// An empty path is a no-op returning false.
pub fn propagate<K>(path: &[K], mut handler: impl FnMut(Phase, &K) -> Outcome) -> bool {
    let Some(target) = path.last() else {
        return false;
    };

    // Capture: root→target.
    for node in path {
        match handler(Phase::Capture, node) {
            Outcome::Continue => {}
            Outcome::Stop => break,
            Outcome::StopAndConsume => return true,
        }
    }

    // Target.
    match handler(Phase::Target, target) {
        Outcome::StopAndConsume => return true,
        Outcome::Continue | Outcome::Stop => {}
    }

    // Bubble: target→root.
    for node in path.iter().rev() {
        match handler(Phase::Bubble, node) {
            Outcome::Continue => {}
            Outcome::Stop => break,
            Outcome::StopAndConsume => return true,
        }
    }

    false
}
