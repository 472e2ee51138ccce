//! Nested key-value tree addressed by dotted key paths.
//!
//! A catalog file is a JSON object whose values are either nested objects or
//! leaf values. `PathTree` models that shape as a typed recursive variant so
//! every traversal decision (descend into a node, stop at a leaf) is an
//! explicit match arm instead of ambient property access.
//!
//! ```text
//! {"button": {"save": "Save"}}   <=>   button.save -> Leaf::Text("Save")
//! ```

use std::{collections::BTreeMap, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A terminal value in a catalog tree.
///
/// Text is the normal case. Arrays and other JSON scalars are carried as
/// `Opaque` so they survive a load/save round trip, but path operations never
/// descend into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    Text(String),
    Opaque(Value),
}

impl Leaf {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Leaf::Text(text) => Some(text),
            Leaf::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Text(text) => write!(f, "{}", text),
            Leaf::Opaque(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Leaf {
    fn from(text: &str) -> Self {
        Leaf::Text(text.to_string())
    }
}

impl From<String> for Leaf {
    fn from(text: String) -> Self {
        Leaf::Text(text)
    }
}

/// A slot in a tree: either a nested node or a leaf.
///
/// Deserialization tries `Node` first, so every JSON object becomes a node and
/// everything else becomes a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Node(PathTree),
    Leaf(Leaf),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Leaf(leaf) => write!(f, "{}", leaf),
            Entry::Node(tree) => {
                let count = tree.keys().len();
                write!(f, "{{...}} ({} nested {})", count, if count == 1 { "key" } else { "keys" })
            }
        }
    }
}

/// Ordered mapping from segment to entry.
///
/// Insertion order is preserved; callers that persist a tree use
/// [`PathTree::sorted`] first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTree {
    entries: IndexMap<String, Entry>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a nested tree from `(dotted path, leaf)` pairs.
    pub fn from_flat<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Leaf)>,
        K: AsRef<str>,
    {
        let mut tree = Self::new();
        for (path, leaf) in pairs {
            tree.set(path.as_ref(), leaf);
        }
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Resolve a dotted path.
    ///
    /// Returns `None` as soon as a segment is missing or an intermediate
    /// segment holds a leaf.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            match current {
                Entry::Node(tree) => current = tree.entries.get(segment)?,
                Entry::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// Resolve a dotted path to a leaf. Nodes resolve to `None`.
    pub fn get_leaf(&self, path: &str) -> Option<&Leaf> {
        match self.get(path)? {
            Entry::Leaf(leaf) => Some(leaf),
            Entry::Node(_) => None,
        }
    }

    /// Set a leaf at `path`, creating intermediate nodes as needed.
    ///
    /// Returns the entry previously stored at `path`, if any.
    pub fn set(&mut self, path: &str, leaf: Leaf) -> Option<Entry> {
        self.set_entry(path, Entry::Leaf(leaf))
    }

    /// Set an arbitrary entry (leaf or subtree) at `path`.
    ///
    /// An intermediate segment that currently holds a leaf is replaced by an
    /// empty node and the leaf is lost: the longer path wins. The final
    /// segment is replaced outright, whatever it held.
    pub fn set_entry(&mut self, path: &str, entry: Entry) -> Option<Entry> {
        let Some((head, rest)) = path.split_once('.') else {
            return self.entries.insert(path.to_string(), entry);
        };

        let slot = self
            .entries
            .entry(head.to_string())
            .or_insert_with(|| Entry::Node(PathTree::new()));
        match slot {
            Entry::Node(child) => child.set_entry(rest, entry),
            Entry::Leaf(_) => {
                let mut child = PathTree::new();
                child.set_entry(rest, entry);
                *slot = Entry::Node(child);
                None
            }
        }
    }

    /// Remove the entry at `path` and prune ancestors left empty.
    ///
    /// Pruning walks from the immediate parent towards the root and stops at
    /// the first ancestor that still has children. Returns the removed entry,
    /// or `None` when the path does not resolve.
    pub fn remove(&mut self, path: &str) -> Option<Entry> {
        let segments: Vec<&str> = path.split('.').collect();
        remove_segments(self, &segments)
    }

    /// Flatten to `dotted path -> leaf`, sorted by path.
    pub fn flatten(&self) -> BTreeMap<String, Leaf> {
        let mut result = BTreeMap::new();
        flatten_into(self, "", &mut result);
        result
    }

    /// Every dotted path that resolves to a leaf.
    pub fn keys(&self) -> Vec<String> {
        self.flatten().into_keys().collect()
    }

    /// Deep-merge `other` into this tree.
    ///
    /// Paths already holding a leaf or a subtree are kept unless `overwrite`
    /// is set. Returns the paths that were written, in path order.
    pub fn merge(&mut self, other: &PathTree, overwrite: bool) -> Vec<String> {
        let mut merged = Vec::new();
        for (path, leaf) in other.flatten() {
            if !overwrite && self.get(&path).is_some() {
                continue;
            }
            self.set(&path, leaf);
            merged.push(path);
        }
        merged
    }

    /// Copy of this tree with every level's keys in ascending order.
    pub fn sorted(&self) -> PathTree {
        let mut entries: Vec<(&String, &Entry)> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let entries = entries
            .into_iter()
            .map(|(key, entry)| {
                let entry = match entry {
                    Entry::Node(tree) => Entry::Node(tree.sorted()),
                    Entry::Leaf(leaf) => Entry::Leaf(leaf.clone()),
                };
                (key.clone(), entry)
            })
            .collect();

        PathTree { entries }
    }
}

fn remove_segments(tree: &mut PathTree, segments: &[&str]) -> Option<Entry> {
    let (first, rest) = segments.split_first()?;
    if rest.is_empty() {
        return tree.entries.shift_remove(*first);
    }

    let Some(Entry::Node(child)) = tree.entries.get_mut(*first) else {
        return None;
    };
    let removed = remove_segments(child, rest)?;
    if child.is_empty() {
        tree.entries.shift_remove(*first);
    }
    Some(removed)
}

fn flatten_into(tree: &PathTree, prefix: &str, result: &mut BTreeMap<String, Leaf>) {
    for (key, entry) in &tree.entries {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match entry {
            Entry::Node(child) => flatten_into(child, &path, result),
            Entry::Leaf(leaf) => {
                result.insert(path, leaf.clone());
            }
        }
    }
}
