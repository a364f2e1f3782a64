//! The append-only commitment tree and the note pool built on it.

use crate::error::ShieldedError;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Depth of the commitment tree: 2^32 notes fit.
pub const TREE_DEPTH: usize = 32;

/// Roots of empty subtrees by level; level 0 holds the leaves.
static EMPTY_LEVELS: Lazy<[[u8; 32]; TREE_DEPTH + 1]> = Lazy::new(|| {
    let mut empty = [[0u8; 32]; TREE_DEPTH + 1];
    empty[0] = Sha256::digest(b"shielded-tree-empty-leaf").into();
    for level in 1..=TREE_DEPTH {
        let mut hasher = Sha256::new();
        hasher.update(empty[level - 1]);
        hasher.update(empty[level - 1]);
        empty[level] = hasher.finalize().into();
    }
    empty
});

/// A fixed-depth append-only Merkle tree over 32-byte commitment leaves.
/// The root is recomputed lazily after inserts.
pub struct CommitmentTree {
    leaves: Vec<[u8; 32]>,
    cached_root: Option<[u8; 32]>,
}

impl Default for CommitmentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitmentTree {
    pub fn new() -> Self {
        CommitmentTree {
            leaves: Vec::new(),
            cached_root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Appends a leaf and returns its index.
    pub fn insert(&mut self, commitment: [u8; 32]) -> Result<u64, ShieldedError> {
        if self.leaves.len() >= 1usize << TREE_DEPTH {
            return Err(ShieldedError::TreeFull);
        }
        self.leaves.push(commitment);
        self.cached_root = None;
        Ok(self.leaves.len() as u64 - 1)
    }

    /// The Merkle root over all leaves, with empty slots filled by the
    /// per-level empty hashes.
    pub fn root(&mut self) -> [u8; 32] {
        if let Some(root) = self.cached_root {
            return root;
        }
        let mut level: Vec<[u8; 32]> = self.leaves.clone();
        for depth in 0..TREE_DEPTH {
            let mut next = Vec::with_capacity(level.len().div_ceil(2).max(1));
            let mut i = 0;
            while i < level.len() {
                let left = level[i];
                let right = if i + 1 < level.len() {
                    level[i + 1]
                } else {
                    EMPTY_LEVELS[depth]
                };
                let mut hasher = Sha256::new();
                hasher.update(left);
                hasher.update(right);
                next.push(hasher.finalize().into());
                i += 2;
            }
            if next.is_empty() {
                next.push(EMPTY_LEVELS[depth + 1]);
            }
            level = next;
        }
        let root = level[0];
        self.cached_root = Some(root);
        root
    }
}

/// A shielded note as the pool stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// The 32-byte Pedersen commitment value.
    pub commitment: [u8; 32],
    /// The nullifier revealed when this note is spent.
    pub nullifier: [u8; 32],
    /// Ciphertext carried opaquely for the recipient.
    pub encrypted_payload: Vec<u8>,
    /// Leaf index in the commitment tree.
    pub index: u64,
}

struct PoolState {
    notes: HashMap<[u8; 32], Note>,
    tree: CommitmentTree,
}

/// The process-wide note pool: commitment-keyed note storage plus the
/// commitment tree, behind one reader-writer lock.
pub struct ShieldedNotePool {
    inner: RwLock<PoolState>,
}

impl Default for ShieldedNotePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ShieldedNotePool {
    pub fn new() -> Self {
        ShieldedNotePool {
            inner: RwLock::new(PoolState {
                notes: HashMap::new(),
                tree: CommitmentTree::new(),
            }),
        }
    }

    /// Inserts a note, assigning it the next tree index. Fails on a
    /// duplicate commitment without touching the tree.
    pub fn add_note(
        &self,
        commitment: [u8; 32],
        nullifier: [u8; 32],
        encrypted_payload: Vec<u8>,
    ) -> Result<u64, ShieldedError> {
        let mut state = self.inner.write().expect("pool lock poisoned");
        if state.notes.contains_key(&commitment) {
            return Err(ShieldedError::DuplicateCommitment);
        }
        let index = state.tree.insert(commitment)?;
        debug!(index, "pooled shielded note");
        state.notes.insert(
            commitment,
            Note {
                commitment,
                nullifier,
                encrypted_payload,
                index,
            },
        );
        Ok(index)
    }

    pub fn get(&self, commitment: &[u8; 32]) -> Option<Note> {
        self.inner
            .read()
            .expect("pool lock poisoned")
            .notes
            .get(commitment)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("pool lock poisoned").notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current commitment-tree root.
    pub fn root(&self) -> [u8; 32] {
        self.inner.write().expect("pool lock poisoned").tree.root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_empty_root_is_stable_and_inserts_move_it() {
        let mut tree = CommitmentTree::new();
        let empty = tree.root();
        assert_eq!(tree.root(), empty);

        tree.insert([1u8; 32]).unwrap();
        let one = tree.root();
        assert_ne!(one, empty);

        tree.insert([2u8; 32]).unwrap();
        assert_ne!(tree.root(), one);
    }

    #[test]
    fn roots_depend_on_leaf_order() {
        let mut a = CommitmentTree::new();
        let mut b = CommitmentTree::new();
        a.insert([1u8; 32]).unwrap();
        a.insert([2u8; 32]).unwrap();
        b.insert([2u8; 32]).unwrap();
        b.insert([1u8; 32]).unwrap();
        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn pool_assigns_sequential_indices_and_rejects_duplicates() {
        let pool = ShieldedNotePool::new();
        let n = [9u8; 32];
        assert_eq!(pool.add_note([1u8; 32], n, vec![]).unwrap(), 0);
        assert_eq!(pool.add_note([2u8; 32], n, vec![0xaa]).unwrap(), 1);
        assert_eq!(
            pool.add_note([1u8; 32], n, vec![]),
            Err(ShieldedError::DuplicateCommitment)
        );

        let note = pool.get(&[2u8; 32]).unwrap();
        assert_eq!(note.index, 1);
        assert_eq!(note.encrypted_payload, vec![0xaa]);
        assert!(pool.get(&[3u8; 32]).is_none());
    }

    #[test]
    fn pool_roots_track_inserts() {
        let pool = ShieldedNotePool::new();
        let before = pool.root();
        pool.add_note([7u8; 32], [8u8; 32], vec![]).unwrap();
        assert_ne!(pool.root(), before);
    }
}
