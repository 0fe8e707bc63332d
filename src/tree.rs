// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The balanced ternary search tree.
//!
//! Each node holds one key byte and three links: `lo` and `hi` binary-search
//! among the sibling bytes competing for one key position, `eq` advances to
//! the next position. Walking a key is O(key length + log siblings) per
//! level, which beats a hash map here because the scanner probes the tree
//! with incremental candidates that share long prefixes.
//!
//! Nodes live in one contiguous `Vec` arena and address each other by `u32`
//! index, so the whole tree is a handful of allocations released together
//! when the set drops. No `Rc`, no per-node boxes, nothing to traverse on
//! teardown.
//!
//! Balance comes from insertion order, not rotation: entries are sorted once,
//! then inserted median-first so every `lo`/`hi` chain stays logarithmic.
//! After construction the tree is never touched again - there is no public
//! mutation path, which is what makes shared concurrent reads safe without
//! locks.

use crate::types::Entry;

/// Null link. Index `u32::MAX` is reserved; a dictionary would need a 4 GiB
/// key buffer to get anywhere near it.
const NIL: u32 = u32::MAX;

/// One arena slot: a key byte, three child links, and an optional terminal
/// value slot (`NIL` when no key ends here).
#[derive(Debug, Clone)]
struct Node {
    byte: u8,
    lo: u32,
    eq: u32,
    hi: u32,
    leaf: u32,
}

impl Node {
    #[inline]
    fn new(byte: u8) -> Self {
        Node {
            byte,
            lo: NIL,
            eq: NIL,
            hi: NIL,
            leaf: NIL,
        }
    }
}

/// Three-way result of an exact-match walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup<'a> {
    /// The key is not in the tree.
    Absent,
    /// A key ends here with no recorded value.
    NoValue,
    /// A key ends here with this value.
    Value(&'a [u8]),
}

/// An immutable ternary trie over byte keys.
#[derive(Debug, Clone)]
pub(crate) struct TernaryTree {
    nodes: Vec<Node>,
    /// Terminal value slots, one per distinct key.
    values: Vec<Option<Vec<u8>>>,
    root: u32,
}

impl TernaryTree {
    /// Build a balanced tree from parsed entries.
    ///
    /// Sorts by unsigned byte-wise key order, folds duplicate keys onto the
    /// last occurrence, then inserts median-first so sibling chains stay
    /// binary-search shaped.
    pub(crate) fn build(mut entries: Vec<Entry>) -> TernaryTree {
        // Stable sort keeps buffer order within equal keys, which is what
        // makes the last-wins fold below deterministic.
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.dedup_by(|later, kept| {
            if later.key == kept.key {
                std::mem::swap(&mut later.value, &mut kept.value);
                true
            } else {
                false
            }
        });

        // Upper bound of one node per key byte.
        let node_bound: usize = entries.iter().map(|e| e.key.len()).sum();
        let mut tree = TernaryTree {
            nodes: Vec::with_capacity(node_bound),
            values: Vec::with_capacity(entries.len()),
            root: NIL,
        };
        tree.bulk_insert(&mut entries);
        tree
    }

    /// Number of distinct keys.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert the median entry of the range, then recurse into both halves.
    fn bulk_insert(&mut self, entries: &mut [Entry]) {
        if entries.is_empty() {
            return;
        }
        let mid = entries.len() / 2;
        let value = entries[mid].value.take();
        self.insert(&entries[mid].key, value);
        let (left, right) = entries.split_at_mut(mid);
        self.bulk_insert(left);
        self.bulk_insert(&mut right[1..]);
    }

    /// Insert one key. Callers have already resolved duplicates.
    fn insert(&mut self, key: &[u8], value: Option<Vec<u8>>) {
        debug_assert!(!key.is_empty(), "empty keys never reach the tree");
        if self.root == NIL {
            self.root = self.grow_chain(key, value);
            return;
        }

        let mut idx = self.root as usize;
        let mut i = 0;
        loop {
            let b = key[i];
            let node_byte = self.nodes[idx].byte;
            if b < node_byte {
                let lo = self.nodes[idx].lo;
                if lo == NIL {
                    let chain = self.grow_chain(&key[i..], value);
                    self.nodes[idx].lo = chain;
                    return;
                }
                idx = lo as usize;
            } else if b > node_byte {
                let hi = self.nodes[idx].hi;
                if hi == NIL {
                    let chain = self.grow_chain(&key[i..], value);
                    self.nodes[idx].hi = chain;
                    return;
                }
                idx = hi as usize;
            } else if i + 1 < key.len() {
                let eq = self.nodes[idx].eq;
                if eq == NIL {
                    let chain = self.grow_chain(&key[i + 1..], value);
                    self.nodes[idx].eq = chain;
                    return;
                }
                idx = eq as usize;
                i += 1;
            } else {
                self.set_leaf(idx, value);
                return;
            }
        }
    }

    /// Allocate an `eq`-linked chain for the remaining key bytes and mark its
    /// last node terminal. Returns the chain head.
    fn grow_chain(&mut self, rest: &[u8], value: Option<Vec<u8>>) -> u32 {
        debug_assert!(!rest.is_empty());
        let head = self.alloc(rest[0]);
        let mut at = head as usize;
        for &b in &rest[1..] {
            let next = self.alloc(b);
            self.nodes[at].eq = next;
            at = next as usize;
        }
        self.set_leaf(at, value);
        head
    }

    fn alloc(&mut self, byte: u8) -> u32 {
        let idx = self.nodes.len();
        assert!(idx < NIL as usize, "ternary tree arena exhausted");
        self.nodes.push(Node::new(byte));
        idx as u32
    }

    fn set_leaf(&mut self, idx: usize, value: Option<Vec<u8>>) {
        debug_assert_eq!(self.nodes[idx].leaf, NIL, "duplicate key reached the tree");
        self.nodes[idx].leaf = self.values.len() as u32;
        self.values.push(value);
    }

    /// Exact-match walk. Zero-length keys are Absent by definition.
    pub(crate) fn lookup(&self, key: &[u8]) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::Absent;
        }
        let mut idx = self.root;
        let mut i = 0;
        while idx != NIL {
            let node = &self.nodes[idx as usize];
            let b = key[i];
            if b < node.byte {
                idx = node.lo;
            } else if b > node.byte {
                idx = node.hi;
            } else if i + 1 < key.len() {
                idx = node.eq;
                i += 1;
            } else if node.leaf == NIL {
                // Consumed the key on a pass-through node.
                return Lookup::Absent;
            } else {
                return match &self.values[node.leaf as usize] {
                    Some(v) => Lookup::Value(v),
                    None => Lookup::NoValue,
                };
            }
        }
        Lookup::Absent
    }

    #[inline]
    pub(crate) fn contains(&self, key: &[u8]) -> bool {
        self.lookup(key) != Lookup::Absent
    }
}
