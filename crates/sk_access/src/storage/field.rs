use crate::{Readable, Referable, StorageAccessor, Writable};

// -----------------------------------------------------------------------------
// FieldAccessor

/// Read-write access to a field of `S`, selected by a pair of projections.
///
/// ```
/// use sk_access::{FieldAccessor, Referable, Writable};
///
/// struct Config { name: String }
///
/// let mut config = Config { name: "a".into() };
/// let mut name = FieldAccessor::new(&mut config, |c| &c.name, |c| &mut c.name);
/// name.write("b".into());
/// name.with_mut(|name| name.push('!'));
/// assert_eq!(config.name, "b!");
/// ```
pub struct FieldAccessor<'a, S, T> {
    owner: &'a mut S,
    get: fn(&S) -> &T,
    get_mut: fn(&mut S) -> &mut T,
}

impl<'a, S, T> FieldAccessor<'a, S, T> {
    #[inline]
    pub fn new(owner: &'a mut S, get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self {
        Self { owner, get, get_mut }
    }
}

impl<S, T: 'static> StorageAccessor for FieldAccessor<'_, S, T> {
    type Value = T;
}

impl<S, T: Clone + 'static> Readable for FieldAccessor<'_, S, T> {
    #[inline]
    fn read(&self) -> T {
        (self.get)(&*self.owner).clone()
    }
}

impl<S, T: 'static> Writable for FieldAccessor<'_, S, T> {
    #[inline]
    fn write(&mut self, value: T) {
        *(self.get_mut)(self.owner) = value;
    }
}

impl<S, T: 'static> Referable for FieldAccessor<'_, S, T> {
    #[inline]
    fn get_ref(&self) -> &T {
        (self.get)(&*self.owner)
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        (self.get_mut)(self.owner)
    }
}

// -----------------------------------------------------------------------------
// FieldReader

/// Read-only access to a field of `S`.
pub struct FieldReader<'a, S, T> {
    owner: &'a S,
    get: fn(&S) -> &T,
}

impl<'a, S, T> FieldReader<'a, S, T> {
    #[inline]
    pub fn new(owner: &'a S, get: fn(&S) -> &T) -> Self {
        Self { owner, get }
    }

    /// Borrows the field for as long as the owner.
    #[inline]
    pub fn get(&self) -> &'a T {
        (self.get)(self.owner)
    }
}

impl<S, T: 'static> StorageAccessor for FieldReader<'_, S, T> {
    type Value = T;
}

impl<S, T: Clone + 'static> Readable for FieldReader<'_, S, T> {
    #[inline]
    fn read(&self) -> T {
        self.get().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadWritable;

    #[derive(Default)]
    struct Stats {
        level: u8,
        score: i64,
    }

    #[test]
    fn field_read_write() {
        let mut stats = Stats::default();
        {
            let mut score = FieldAccessor::new(&mut stats, |s| &s.score, |s| &mut s.score);
            score.write(-3);
            assert_eq!(score.replace(9), -3);
            *score.get_mut() += 1;
            assert_eq!(score.read(), 10);
            assert!(score.value_type().is::<i64>());
        }
        assert_eq!(stats.score, 10);
        assert_eq!(stats.level, 0);
    }

    #[test]
    fn field_reader() {
        let stats = Stats { level: 4, score: 0 };
        let level = FieldReader::new(&stats, |s| &s.level);
        assert_eq!(level.read(), 4);
        assert_eq!(*level.get(), 4);
    }
}
