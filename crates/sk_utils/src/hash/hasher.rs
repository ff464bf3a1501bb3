//! Deterministic and pass-through hash states.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// Fixed

const SEED: u64 = 0x5E1F_A77E_C0DE_D00D;

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// `foldhash` with a constant seed: equal inputs hash equally in every run.
///
/// ```
/// use core::hash::BuildHasher;
/// use sk_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("Red"), FixedHashState.hash_one("Red"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> FixedHasher {
        const STATE: FixedState = FixedState::with_seed(SEED);
        STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Pass-through

/// The hasher built by [`NoOpHashState`]. Its result is the last `u64`
/// written to it.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher(u64);

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        // Little-endian fold, so narrower integer writes match `write_u64`.
        self.0 = bytes
            .iter()
            .rev()
            .fold(self.0, |acc, &b| (acc << 8) | u64::from(b));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

/// Hash state for keys that are hashes already, such as
/// [`TypeId`](core::any::TypeId).
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> NoOpHasher {
        NoOpHasher(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through() {
        let mut wide = NoOpHashState.build_hasher();
        wide.write_u64(0xABCD);
        let mut narrow = NoOpHashState.build_hasher();
        narrow.write_u16(0xABCD);
        assert_eq!(wide.finish(), 0xABCD);
        assert_eq!(narrow.finish(), 0xABCD);
    }

    #[test]
    fn fixed_state_is_deterministic() {
        assert_eq!(FixedHashState.hash_one(42_u64), FixedHashState.hash_one(42_u64));
        assert_ne!(FixedHashState.hash_one("A"), FixedHashState.hash_one("B"));
    }
}
