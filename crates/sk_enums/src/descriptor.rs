use alloc::borrow::Cow;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::UnderlyingType;

// -----------------------------------------------------------------------------
// EnumEntry

/// One declared `(name, value)` pair of an enum.
///
/// Signed values are stored sign-extended, i.e. as the bit pattern of the
/// value widened to `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumEntry {
    name: Cow<'static, str>,
    value: u64,
}

impl EnumEntry {
    /// Creates a new entry.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

// -----------------------------------------------------------------------------
// EnumDescriptor

/// The name/value table of one enum type, plus its underlying integer type.
///
/// Entries keep declaration order. Names are not required to be unique and
/// values may repeat (aliases); every lookup takes the first match.
///
/// Descriptors are plain data: build one by hand, derive it with
/// [`EnumRepr`](crate::derive::EnumRepr), or load one through `serde`.
///
/// # Examples
///
/// ```
/// use sk_enums::{EnumDescriptor, UnderlyingType};
///
/// let colors = EnumDescriptor::new("paint::Color", UnderlyingType::U8)
///     .with_entry("Red", 1)
///     .with_entry("Green", 2)
///     .with_entry("Scarlet", 1);
///
/// assert_eq!(colors.type_name(), "Color");
/// assert_eq!(colors.value_of("Green", false), Some(2));
/// assert_eq!(colors.value_of("green", true), Some(2));
/// assert_eq!(colors.name_of(1), Some("Red"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    type_path: Cow<'static, str>,
    underlying: UnderlyingType,
    entries: Vec<EnumEntry>,
}

impl EnumDescriptor {
    /// Creates a descriptor without entries.
    pub fn new(type_path: impl Into<Cow<'static, str>>, underlying: UnderlyingType) -> Self {
        Self {
            type_path: type_path.into(),
            underlying,
            entries: Vec::new(),
        }
    }

    /// Creates a descriptor from `(name, value)` pairs in declaration order.
    pub fn from_entries<N, I>(
        type_path: impl Into<Cow<'static, str>>,
        underlying: UnderlyingType,
        entries: I,
    ) -> Self
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (N, u64)>,
    {
        Self {
            type_path: type_path.into(),
            underlying,
            entries: entries
                .into_iter()
                .map(|(name, value)| EnumEntry::new(name, value))
                .collect(),
        }
    }

    /// Appends an entry.
    #[inline]
    pub fn with_entry(mut self, name: impl Into<Cow<'static, str>>, value: u64) -> Self {
        self.entries.push(EnumEntry::new(name, value));
        self
    }

    /// The full path of the enum type, e.g. `paint::Color`.
    #[inline]
    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    /// The last segment of [`type_path`](Self::type_path).
    pub fn type_name(&self) -> &str {
        match self.type_path.rsplit_once("::") {
            Some((_, name)) => name,
            None => &self.type_path,
        }
    }

    #[inline]
    pub fn underlying(&self) -> UnderlyingType {
        self.underlying
    }

    /// Entries in declaration order.
    #[inline]
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value of the first entry named `name`.
    ///
    /// `ignore_case` compares with ordinal (per character, simple uppercase)
    /// case folding.
    pub fn value_of(&self, name: &str, ignore_case: bool) -> Option<u64> {
        let matches = |entry: &&EnumEntry| {
            if ignore_case {
                eq_ignore_case(entry.name(), name)
            } else {
                entry.name() == name
            }
        };
        self.entries.iter().find(matches).map(EnumEntry::value)
    }

    /// Returns the name of the first entry whose value is `value`.
    pub fn name_of(&self, value: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(EnumEntry::name)
    }
}

/// Ordinal case-insensitive comparison: characters are compared after
/// single-character uppercase mapping.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    fn upper(c: char) -> char {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    }

    a.chars().map(upper).eq(b.chars().map(upper))
}
