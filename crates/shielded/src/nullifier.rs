//! Nullifier derivation and the append-only nullifier set.
//!
//! A nullifier is revealed once per spent note; presence in the set is the
//! double-spend signal. The set keeps a depth-256 sparse-Merkle
//! accumulator root over the nullifier bits, recomputed lazily and
//! independent of insertion order.

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::debug;

/// Domain prefix of the nullifier hash.
pub const NULLIFIER_DOMAIN: &[u8] = b"shielded-nullifier-v1";

const SMT_DEPTH: usize = 256;

/// SHA-256(domain || sk || index).
pub fn derive_nullifier(spending_key: &[u8], index: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(NULLIFIER_DOMAIN);
    hasher.update(spending_key);
    hasher.update(index.to_be_bytes());
    hasher.finalize().into()
}

/// Hashes of fully-empty subtrees, by depth: `EMPTY[d]` is the root of an
/// empty subtree whose leaves sit at depth 256.
static EMPTY: Lazy<[[u8; 32]; SMT_DEPTH + 1]> = Lazy::new(|| {
    let mut empty = [[0u8; 32]; SMT_DEPTH + 1];
    empty[SMT_DEPTH] = Sha256::digest(b"shielded-smt-empty-leaf").into();
    for depth in (0..SMT_DEPTH).rev() {
        let mut hasher = Sha256::new();
        hasher.update(empty[depth + 1]);
        hasher.update(empty[depth + 1]);
        empty[depth] = hasher.finalize().into();
    }
    empty
});

fn leaf_hash(key: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"shielded-smt-leaf");
    hasher.update(key);
    hasher.finalize().into()
}

fn bit(key: &[u8; 32], depth: usize) -> bool {
    key[depth / 8] >> (7 - depth % 8) & 1 == 1
}

/// Root of the subtree at `depth` holding `keys` (all sharing their first
/// `depth` bits). Keys must be sorted, which makes the split at each depth
/// a contiguous partition.
fn subtree_root(keys: &[[u8; 32]], depth: usize) -> [u8; 32] {
    if keys.is_empty() {
        return EMPTY[depth];
    }
    if depth == SMT_DEPTH {
        return leaf_hash(&keys[0]);
    }
    let split = keys.partition_point(|key| !bit(key, depth));
    let mut hasher = Sha256::new();
    hasher.update(subtree_root(&keys[..split], depth + 1));
    hasher.update(subtree_root(&keys[split..], depth + 1));
    hasher.finalize().into()
}

struct NullifierState {
    set: HashSet<[u8; 32]>,
    cached_root: Option<[u8; 32]>,
}

/// The append-only nullifier set with its lazy accumulator root.
pub struct NullifierSet {
    inner: RwLock<NullifierState>,
}

impl Default for NullifierSet {
    fn default() -> Self {
        Self::new()
    }
}

impl NullifierSet {
    pub fn new() -> Self {
        NullifierSet {
            inner: RwLock::new(NullifierState {
                set: HashSet::new(),
                cached_root: None,
            }),
        }
    }

    /// Inserts a nullifier. Returns `false` when it was already present;
    /// the double-spend test and the insert happen in one write critical
    /// section.
    pub fn add(&self, nullifier: [u8; 32]) -> bool {
        let mut state = self.inner.write().expect("nullifier lock poisoned");
        if !state.set.insert(nullifier) {
            debug!("nullifier already present, rejecting");
            return false;
        }
        state.cached_root = None;
        true
    }

    pub fn contains(&self, nullifier: &[u8; 32]) -> bool {
        self.inner
            .read()
            .expect("nullifier lock poisoned")
            .set
            .contains(nullifier)
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("nullifier lock poisoned").set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sparse-Merkle accumulator root, recomputed only after the set
    /// changed.
    pub fn root(&self) -> [u8; 32] {
        if let Some(root) = self
            .inner
            .read()
            .expect("nullifier lock poisoned")
            .cached_root
        {
            return root;
        }
        let mut state = self.inner.write().expect("nullifier lock poisoned");
        if let Some(root) = state.cached_root {
            return root;
        }
        let mut keys: Vec<[u8; 32]> = state.set.iter().copied().collect();
        keys.sort_unstable();
        let root = subtree_root(&keys, 0);
        state.cached_root = Some(root);
        root
    }
}
