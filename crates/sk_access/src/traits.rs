use crate::ValueType;

// -----------------------------------------------------------------------------
// StorageAccessor

/// A location holding one value of type [`Value`](Self::Value).
pub trait StorageAccessor {
    type Value: 'static;

    /// Returns the type of the stored value.
    #[inline]
    fn value_type(&self) -> ValueType {
        ValueType::of::<Self::Value>()
    }
}

// -----------------------------------------------------------------------------
// Capabilities

/// An accessor whose value can be read.
pub trait Readable: StorageAccessor {
    fn read(&self) -> Self::Value;
}

/// An accessor whose value can be replaced.
pub trait Writable: StorageAccessor {
    fn write(&mut self, value: Self::Value);
}

/// An accessor that is both [`Readable`] and [`Writable`].
///
/// Implemented for every such type; never implement it by hand.
///
/// ```
/// use sk_access::{BoxAccessor, ReadWritable, Readable};
///
/// let mut counter = BoxAccessor::new(1_u8);
/// assert_eq!(counter.replace(7), 1);
/// counter.update(|n| n * 2);
/// assert_eq!(counter.read(), 14);
/// ```
pub trait ReadWritable: Readable + Writable {
    /// Writes `value` and returns the previous one.
    fn replace(&mut self, value: Self::Value) -> Self::Value {
        let old = self.read();
        self.write(value);
        old
    }

    /// Writes `f(current)`.
    fn update(&mut self, f: impl FnOnce(Self::Value) -> Self::Value)
    where
        Self: Sized,
    {
        let value = f(self.read());
        self.write(value);
    }
}

impl<A: Readable + Writable + ?Sized> ReadWritable for A {}

/// An accessor backed by a real memory location, which can be borrowed
/// instead of copied.
pub trait Referable: StorageAccessor {
    fn get_ref(&self) -> &Self::Value;

    fn get_mut(&mut self) -> &mut Self::Value;

    #[inline]
    fn with_ref<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R
    where
        Self: Sized,
    {
        f(self.get_ref())
    }

    #[inline]
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut Self::Value) -> R) -> R
    where
        Self: Sized,
    {
        f(self.get_mut())
    }
}
