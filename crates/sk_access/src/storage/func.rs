use core::marker::PhantomData;

use crate::{Readable, StorageAccessor, Writable};

// -----------------------------------------------------------------------------
// FnAccessor

/// Read-write access through a getter / setter pair.
///
/// ```
/// use std::cell::Cell;
/// use sk_access::{FnAccessor, ReadWritable, Readable};
///
/// let volume = Cell::new(3_u8);
/// let mut accessor = FnAccessor::new(|| volume.get(), |v: u8| volume.set(v.min(10)));
///
/// accessor.update(|v| v + 20);
/// assert_eq!(accessor.read(), 10);
/// ```
pub struct FnAccessor<T, G, S> {
    getter: G,
    setter: S,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, G: Fn() -> T, S: FnMut(T)> FnAccessor<T, G, S> {
    #[inline]
    pub fn new(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<T: 'static, G, S> StorageAccessor for FnAccessor<T, G, S> {
    type Value = T;
}

impl<T: 'static, G: Fn() -> T, S> Readable for FnAccessor<T, G, S> {
    #[inline]
    fn read(&self) -> T {
        (self.getter)()
    }
}

impl<T: 'static, G, S: FnMut(T)> Writable for FnAccessor<T, G, S> {
    #[inline]
    fn write(&mut self, value: T) {
        (self.setter)(value);
    }
}

// -----------------------------------------------------------------------------
// ReadFn

/// Read-only access through a getter.
pub struct ReadFn<T, G> {
    getter: G,
    _marker: PhantomData<fn() -> T>,
}

impl<T, G: Fn() -> T> ReadFn<T, G> {
    #[inline]
    pub fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<T: 'static, G> StorageAccessor for ReadFn<T, G> {
    type Value = T;
}

impl<T: 'static, G: Fn() -> T> Readable for ReadFn<T, G> {
    #[inline]
    fn read(&self) -> T {
        (self.getter)()
    }
}

// -----------------------------------------------------------------------------
// WriteFn

/// Write-only access through a setter.
pub struct WriteFn<T, S> {
    setter: S,
    _marker: PhantomData<fn(T)>,
}

impl<T, S: FnMut(T)> WriteFn<T, S> {
    #[inline]
    pub fn new(setter: S) -> Self {
        Self {
            setter,
            _marker: PhantomData,
        }
    }
}

impl<T: 'static, S> StorageAccessor for WriteFn<T, S> {
    type Value = T;
}

impl<T: 'static, S: FnMut(T)> Writable for WriteFn<T, S> {
    #[inline]
    fn write(&mut self, value: T) {
        (self.setter)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReadWritable, WriteAccessor};
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[test]
    fn getter_setter_pair() {
        let cell = Cell::new(1_i32);
        let mut accessor = FnAccessor::new(|| cell.get(), |v| cell.set(v));
        assert_eq!(accessor.replace(5), 1);
        assert_eq!(cell.get(), 5);
        assert!(accessor.value_type().is::<i32>());
    }

    #[test]
    fn write_only() {
        let lines = RefCell::new(Vec::new());
        let mut sink = WriteFn::new(|line: &'static str| lines.borrow_mut().push(line));
        sink.write("a");
        sink.write_any(Box::new("b")).unwrap();
        assert!(sink.write_any(Box::new(1_u8)).is_err());
        drop(sink);
        assert_eq!(lines.into_inner(), ["a", "b"]);
    }
}
