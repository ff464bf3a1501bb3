use alloc::boxed::Box;

use crate::{Readable, Referable, StorageAccessor, Writable};

/// An accessor that owns its value on the heap.
pub struct BoxAccessor<T> {
    value: Box<T>,
}

impl<T> BoxAccessor<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    #[inline]
    pub fn into_inner(self) -> T {
        *self.value
    }
}

impl<T> From<Box<T>> for BoxAccessor<T> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self { value }
    }
}

impl<T: 'static> StorageAccessor for BoxAccessor<T> {
    type Value = T;
}

impl<T: Clone + 'static> Readable for BoxAccessor<T> {
    #[inline]
    fn read(&self) -> T {
        (*self.value).clone()
    }
}

impl<T: 'static> Writable for BoxAccessor<T> {
    #[inline]
    fn write(&mut self, value: T) {
        *self.value = value;
    }
}

impl<T: 'static> Referable for BoxAccessor<T> {
    #[inline]
    fn get_ref(&self) -> &T {
        &self.value
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
