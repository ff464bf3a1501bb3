use crate::{AccessError, Readable, Referable, StorageAccessor, Writable};

/// Read-write access to one element of a slice.
///
/// The index is checked once, on construction.
///
/// ```
/// use sk_access::{AccessError, ElementAccessor, Readable, Writable};
///
/// let mut slots = [1, 2, 3];
/// let mut last = ElementAccessor::new(&mut slots, 2).unwrap();
/// last.write(30);
/// assert_eq!(last.read(), 30);
///
/// assert_eq!(
///     ElementAccessor::new(&mut slots, 3).err(),
///     Some(AccessError::IndexOutOfBounds { index: 3, len: 3 }),
/// );
/// ```
pub struct ElementAccessor<'a, T> {
    slice: &'a mut [T],
    index: usize,
}

impl<'a, T> ElementAccessor<'a, T> {
    pub fn new(slice: &'a mut [T], index: usize) -> Result<Self, AccessError> {
        if index >= slice.len() {
            return Err(AccessError::IndexOutOfBounds {
                index,
                len: slice.len(),
            });
        }
        Ok(Self { slice, index })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T: 'static> StorageAccessor for ElementAccessor<'_, T> {
    type Value = T;
}

impl<T: Clone + 'static> Readable for ElementAccessor<'_, T> {
    #[inline]
    fn read(&self) -> T {
        self.get_ref().clone()
    }
}

impl<T: 'static> Writable for ElementAccessor<'_, T> {
    #[inline]
    fn write(&mut self, value: T) {
        *self.get_mut() = value;
    }
}

impl<T: 'static> Referable for ElementAccessor<'_, T> {
    #[inline]
    fn get_ref(&self) -> &T {
        &self.slice[self.index]
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        &mut self.slice[self.index]
    }
}
