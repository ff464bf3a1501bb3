//! Process-wide storage of enum descriptors.
//!
//! A descriptor is built at most once per type and leaked, so lookups hand
//! out `&'static` references. Two threads racing on the first lookup may
//! both build a descriptor; only the first one inserted is kept, which is
//! harmless because descriptors are pure data.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use sk_utils::TypeIdMap;

use crate::EnumDescriptor;

/// Descriptors keyed by the enum's [`TypeId`].
///
/// # Example
///
/// ```
/// use sk_enums::{DescriptorCache, EnumDescriptor, UnderlyingType};
///
/// static CACHE: DescriptorCache = DescriptorCache::new();
///
/// struct Marker;
///
/// let first = CACHE.get_or_insert::<Marker>(|| {
///     EnumDescriptor::new("demo::Marker", UnderlyingType::U8)
/// });
/// let second = CACHE.get_or_insert::<Marker>(|| unreachable!());
/// assert!(core::ptr::eq(first, second));
/// ```
pub struct DescriptorCache(RwLock<TypeIdMap<&'static EnumDescriptor>>);

impl DescriptorCache {
    /// Create an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the descriptor of `E`, building it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<E: Any + ?Sized>(
        &self,
        f: impl FnOnce() -> EnumDescriptor,
    ) -> &'static EnumDescriptor {
        self.get_or_insert_by_type_id(TypeId::of::<E>(), f)
    }

    /// Returns the descriptor of `E` if it was already built.
    #[inline(always)]
    pub fn get<E: Any + ?Sized>(&self) -> Option<&'static EnumDescriptor> {
        self.get_by_type_id(TypeId::of::<E>())
    }

    /// Returns the number of cached descriptors.
    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> EnumDescriptor,
    ) -> &'static EnumDescriptor {
        match self.get_by_type_id(type_id) {
            Some(descriptor) => descriptor,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static EnumDescriptor> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: EnumDescriptor) -> &'static EnumDescriptor {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || {
                log::debug!(
                    "cached descriptor of `{}` with {} entries",
                    value.type_path(),
                    value.len()
                );
                Box::leak(Box::new(value))
            })
    }
}

/// The cache behind [`EnumRepr::descriptor`](crate::EnumRepr::descriptor).
pub(crate) static DESCRIPTORS: DescriptorCache = DescriptorCache::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnderlyingType;
    use std::thread;

    struct Shared;

    #[test]
    fn concurrent_first_use_yields_one_descriptor() {
        static CACHE: DescriptorCache = DescriptorCache::new();

        let addresses: Vec<usize> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let d = CACHE.get_or_insert::<Shared>(|| {
                        EnumDescriptor::new("tests::Shared", UnderlyingType::U8).with_entry("A", 1)
                    });
                    d as *const EnumDescriptor as usize
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(CACHE.len(), 1);
        assert_eq!(CACHE.get::<Shared>().map(EnumDescriptor::type_path), Some("tests::Shared"));
    }

    #[test]
    fn types_are_kept_apart() {
        static CACHE: DescriptorCache = DescriptorCache::new();

        let a = CACHE.get_or_insert::<u8>(|| EnumDescriptor::new("tests::A", UnderlyingType::U8));
        let b = CACHE.get_or_insert::<u16>(|| EnumDescriptor::new("tests::B", UnderlyingType::U16));
        assert_eq!(a.type_path(), "tests::A");
        assert_eq!(b.type_path(), "tests::B");
        assert!(CACHE.get::<u32>().is_none());
    }
}
