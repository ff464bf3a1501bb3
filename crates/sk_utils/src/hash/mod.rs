//! Hash containers with deterministic hashing.

mod hasher;

pub use hasher::{FixedHashState, FixedHasher, NoOpHashState, NoOpHasher};

/// [`hashbrown::HashMap`] defaulting to [`FixedHashState`].
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// [`hashbrown::HashSet`] defaulting to [`FixedHashState`].
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

pub use foldhash;
pub use hashbrown;
