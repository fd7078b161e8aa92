// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, state writes, queries.

use alloc::vec::Vec;

use crate::damage::{ClassDamage, ClassDelta, StateToken};
use crate::types::{MenuItem, NodeFlags, NodeId};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level menu tree.
#[derive(Clone)]
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    pending: Vec<ClassDelta>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("pending_deltas", &self.pending.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    item: MenuItem,
}

impl Node {
    fn new(generation: u32, item: MenuItem) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            item,
        }
    }
}

const NO_CHILDREN: &[NodeId] = &[];

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Insert a new node as a child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` is treated as `None`: the node is inserted as a root.
    pub fn insert(&mut self, parent: Option<NodeId>, item: MenuItem) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, item));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, item)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree. Silent no-op when stale.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// The parent of a node, if live and not a root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// The children of a node, in insertion order. Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(NO_CHILDREN, |n| &n.children)
    }

    /// The siblings of a node (same parent, excluding the node itself).
    ///
    /// For roots this is the other roots.
    pub fn siblings_of(&self, id: NodeId) -> Vec<NodeId> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        let pool: Vec<NodeId> = match self.node(id).parent {
            Some(p) => self.children_of(p).to_vec(),
            None => self.roots().collect(),
        };
        pool.into_iter().filter(|c| *c != id).collect()
    }

    /// Iterate the live root nodes in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() =>
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Path from root to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut cur = id;
        loop {
            out.push(cur);
            match self.node(cur).parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    /// Zero-based depth of a node (roots are depth 0), or `None` when stale.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        if !self.is_alive(id) {
            return None;
        }
        let mut depth = 0;
        let mut cur = id;
        while let Some(p) = self.node(cur).parent {
            depth += 1;
            cur = p;
        }
        Some(depth)
    }

    /// Item data of a node, if live.
    pub fn item(&self, id: NodeId) -> Option<&MenuItem> {
        self.node_opt(id).map(|n| &n.item)
    }

    /// True if the node is live and has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Current flags of a node, if live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.item.flags)
    }

    /// Set or clear the visible boolean. Silent no-op when stale.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.write_flag(id, NodeFlags::VISIBLE, StateToken::Visible, visible);
    }

    /// Set or clear the expanded boolean. Silent no-op when stale.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.write_flag(id, NodeFlags::EXPANDED, StateToken::Active, expanded);
    }

    /// Set or clear the heading-visible boolean. Silent no-op when stale.
    pub fn set_heading_visible(&mut self, id: NodeId, visible: bool) {
        self.write_flag(
            id,
            NodeFlags::HEADING_VISIBLE,
            StateToken::HeadingVisible,
            visible,
        );
    }

    /// Replace all flags at once, recording a delta per token that changed.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.set_visible(id, flags.contains(NodeFlags::VISIBLE));
        self.set_expanded(id, flags.contains(NodeFlags::EXPANDED));
        self.set_heading_visible(id, flags.contains(NodeFlags::HEADING_VISIBLE));
    }

    /// The expanded node at a given depth, if any.
    ///
    /// The tree does not enforce uniqueness — the navigator writing the flags
    /// does — so when the invariant is violated this returns the first in
    /// slot order.
    pub fn expanded_at_depth(&self, depth: usize) -> Option<NodeId> {
        self.live_ids().find(|id| {
            self.node(*id).item.flags.contains(NodeFlags::EXPANDED)
                && self.depth_of(*id) == Some(depth)
        })
    }

    /// The deepest expanded node and its depth, if any node is expanded.
    pub fn deepest_expanded(&self) -> Option<(NodeId, usize)> {
        self.live_ids()
            .filter(|id| self.node(*id).item.flags.contains(NodeFlags::EXPANDED))
            .filter_map(|id| self.depth_of(id).map(|d| (id, d)))
            .max_by_key(|(_, d)| *d)
    }

    /// Drain and return the class deltas recorded since the previous commit.
    pub fn commit(&mut self) -> ClassDamage {
        ClassDamage {
            deltas: core::mem::take(&mut self.pending),
        }
    }

    // --- internals ---

    fn write_flag(&mut self, id: NodeId, flag: NodeFlags, token: StateToken, value: bool) {
        let Some(n) = self.node_opt_mut(id) else {
            return;
        };
        if n.item.flags.contains(flag) == value {
            return;
        }
        n.item.flags.set(flag, value);
        self.pending.push(ClassDelta {
            node: id,
            token,
            present: value,
        });
    }

    fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| {
            n.as_ref().map(|n| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                NodeId::new(i as u32, n.generation)
            })
        })
    }

    /// Access a live node; callers must have checked liveness.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;
    use alloc::vec;

    fn small_menu(tree: &mut Tree) -> (NodeId, NodeId, NodeId) {
        let top = tree.insert(None, MenuItem::branch("Products"));
        let second = tree.insert(Some(top), MenuItem::branch("Phones"));
        let third = tree.insert(Some(second), MenuItem::leaf("Model X", "/x"));
        (top, second, third)
    }

    #[test]
    fn structure_queries() {
        let mut tree = Tree::new();
        let (top, second, third) = small_menu(&mut tree);
        let other_top = tree.insert(None, MenuItem::branch("Services"));

        assert_eq!(tree.parent_of(top), None);
        assert_eq!(tree.parent_of(third), Some(second));
        assert_eq!(tree.children_of(top), &[second]);
        assert_eq!(tree.siblings_of(top), vec![other_top]);
        assert_eq!(tree.path_to_root(third), vec![top, second, third]);
        assert_eq!(tree.depth_of(top), Some(0));
        assert_eq!(tree.depth_of(third), Some(2));
        assert!(tree.has_children(second));
        assert!(!tree.has_children(third));
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut tree = Tree::new();
        let root = tree.insert(None, MenuItem::branch("a"));
        let a = tree.insert(Some(root), MenuItem::leaf("b", "/b"));

        assert!(tree.is_alive(root));
        assert!(tree.is_alive(a));

        // Remove child; id becomes stale.
        tree.remove(a);
        assert!(!tree.is_alive(a));

        // Reuse slot by inserting a new node; old id must remain stale; new id is live.
        let b = tree.insert(Some(root), MenuItem::leaf("c", "/c"));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        // Sanity: either same slot or different, but if same slot, generation must be greater.
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn remove_drops_subtree() {
        let mut tree = Tree::new();
        let (top, second, third) = small_menu(&mut tree);
        tree.remove(second);
        assert!(tree.is_alive(top));
        assert!(!tree.is_alive(second));
        assert!(!tree.is_alive(third));
        assert!(tree.children_of(top).is_empty());
    }

    #[test]
    fn flag_writes_record_deltas_once() {
        let mut tree = Tree::new();
        let (top, _, _) = small_menu(&mut tree);

        tree.set_expanded(top, true);
        tree.set_expanded(top, true); // redundant, records nothing
        let damage = tree.commit();
        assert_eq!(damage.deltas.len(), 1);
        assert_eq!(
            damage.deltas[0],
            ClassDelta {
                node: top,
                token: StateToken::Active,
                present: true,
            }
        );
        assert!(tree.commit().is_empty(), "commit drains pending deltas");
    }

    #[test]
    fn stale_flag_writes_are_silent() {
        let mut tree = Tree::new();
        let (_, second, _) = small_menu(&mut tree);
        tree.remove(second);
        tree.set_visible(second, false);
        tree.set_expanded(second, true);
        assert!(tree.commit().is_empty());
        assert_eq!(tree.flags(second), None);
    }

    #[test]
    fn set_flags_records_per_token() {
        let mut tree = Tree::new();
        let (top, _, _) = small_menu(&mut tree);
        // Starts VISIBLE; switch to EXPANDED | HEADING_VISIBLE.
        tree.set_flags(top, NodeFlags::EXPANDED | NodeFlags::HEADING_VISIBLE);
        let damage = tree.commit();
        assert_eq!(damage.for_node(top).count(), 3);
        assert_eq!(
            tree.flags(top),
            Some(NodeFlags::EXPANDED | NodeFlags::HEADING_VISIBLE)
        );
    }

    #[test]
    fn expanded_queries_follow_depth() {
        let mut tree = Tree::new();
        let (top, second, _) = small_menu(&mut tree);
        assert_eq!(tree.expanded_at_depth(0), None);
        assert_eq!(tree.deepest_expanded(), None);

        tree.set_expanded(top, true);
        tree.set_expanded(second, true);
        assert_eq!(tree.expanded_at_depth(0), Some(top));
        assert_eq!(tree.expanded_at_depth(1), Some(second));
        assert_eq!(tree.deepest_expanded(), Some((second, 1)));
    }

    #[test]
    fn insert_under_stale_parent_becomes_root() {
        let mut tree = Tree::new();
        let top = tree.insert(None, MenuItem::branch("a"));
        tree.remove(top);
        let orphan = tree.insert(Some(top), MenuItem::branch("b"));
        assert_eq!(tree.parent_of(orphan), None);
        assert!(tree.roots().any(|r| r == orphan));
    }
}
