use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

/// Per-type storage: one `V` for each [`TypeId`].
///
/// Keys are not rehashed (see [`NoOpHashState`]).
///
/// ```
/// use core::any::TypeId;
/// use sk_utils::TypeIdMap;
///
/// let mut names = TypeIdMap::new();
/// assert!(names.try_insert(TypeId::of::<u8>(), || "byte"));
/// assert!(!names.try_insert(TypeId::of::<u8>(), || "octet"));
///
/// assert_eq!(names.get(&TypeId::of::<u8>()), Some(&"byte"));
/// assert!(names.contains_type::<u8>());
/// assert!(!names.contains_type::<u16>());
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Stores `f()` under `type_id` unless a value is already there.
    ///
    /// Returns whether `f` ran.
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        let Entry::Vacant(slot) = self.0.entry(type_id) else {
            return false;
        };
        slot.insert(f());
        true
    }

    /// Returns the value under `type_id`, storing `f()` there first if the
    /// slot is empty.
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(f)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.0.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Values in unspecified order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::new();
        assert!(map.try_insert(TypeId::of::<i32>(), || 1));
        assert!(!map.try_insert(TypeId::of::<i32>(), || unreachable!()));
        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn builder_runs_once() {
        let mut map = TypeIdMap::new();
        let mut built = 0;
        for _ in 0..3 {
            *map.get_or_insert(TypeId::of::<u8>(), || {
                built += 1;
                0
            }) += 1;
        }
        assert_eq!(built, 1);
        assert_eq!(map.values().copied().collect::<alloc::vec::Vec<_>>(), [3]);
    }
}
