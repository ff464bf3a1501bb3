use core::any::TypeId;

use sk_utils::TypeIdMap;
use sk_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::{EnumDescriptor, EnumError, EnumRepr, EnumValue};

// -----------------------------------------------------------------------------
// EnumRegistry

/// Descriptors of registered enums, searchable by type, path or short name.
///
/// Short names shared by several registered types are ambiguous and only
/// reachable through their full path. A full path claimed by a second type
/// keeps pointing at the first one.
///
/// # Example
///
/// ```
/// use sk_enums::derive::EnumRepr;
/// use sk_enums::EnumRegistry;
///
/// #[derive(EnumRepr, Clone, Copy)]
/// #[enum_repr(type_path = "net::Protocol")]
/// #[repr(u8)]
/// enum Protocol { Tcp = 6, Udp = 17 }
///
/// let mut registry = EnumRegistry::new();
/// registry.register::<Protocol>();
///
/// let value = registry.parse_named("Protocol", "udp", true).unwrap();
/// assert_eq!(value.to_bits(), Ok(17));
/// assert!(registry.get_with_type_path("net::Protocol").is_some());
/// ```
pub struct EnumRegistry {
    descriptors: TypeIdMap<&'static EnumDescriptor>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for EnumRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EnumRegistry {
    /// Create an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            descriptors: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Registers `E`. Returns `false` if it was already registered.
    pub fn register<E: EnumRepr>(&mut self) -> bool {
        self.register_descriptor(TypeId::of::<E>(), E::descriptor())
    }

    fn register_descriptor(&mut self, type_id: TypeId, descriptor: &'static EnumDescriptor) -> bool {
        if !self.descriptors.try_insert(type_id, || descriptor) {
            return false;
        }

        let type_name = descriptor.type_name();
        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.remove(type_name).is_some() {
                log::warn!(
                    "enum name `{type_name}` is ambiguous, use the full path of `{}`",
                    descriptor.type_path()
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, type_id);
            }
        }
        let type_path = descriptor.type_path();
        if self.type_path_to_id.contains_key(type_path) {
            log::warn!("enum path `{type_path}` is already registered by another type, keeping the first");
        } else {
            self.type_path_to_id.insert(type_path, type_id);
        }

        log::debug!("registered enum `{}`", descriptor.type_path());
        true
    }

    /// Registers every type marked with `#[enum_repr(auto_register)]`.
    ///
    /// Returns `false` when the `auto_register` feature is disabled, in which
    /// case nothing happens.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                for entry in inventory::iter::<crate::__macro_exports::auto_register::AutoRegisterFunc> {
                    (entry.0)(self);
                }
                true
            } else {
                false
            }
        }
    }

    /// Returns `true` if `E` is registered.
    #[inline]
    pub fn contains<E: EnumRepr>(&self) -> bool {
        self.descriptors.contains_type::<E>()
    }

    #[inline]
    pub fn get<E: EnumRepr>(&self) -> Option<&'static EnumDescriptor> {
        self.get_with_type_id(&TypeId::of::<E>())
    }

    #[inline]
    pub fn get_with_type_id(&self, type_id: &TypeId) -> Option<&'static EnumDescriptor> {
        self.descriptors.get(type_id).copied()
    }

    /// Looks up a descriptor by its full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static EnumDescriptor> {
        self.get_with_type_id(self.type_path_to_id.get(type_path)?)
    }

    /// Looks up a descriptor by its short name. Ambiguous names yield `None`.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static EnumDescriptor> {
        self.get_with_type_id(self.type_name_to_id.get(type_name)?)
    }

    /// Returns `true` if several registered types share this short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Parses `text` as the enum named `type_name`, which may be a full path
    /// or an unambiguous short name.
    pub fn parse_named<'a>(
        &self,
        type_name: &str,
        text: impl Into<Option<&'a str>>,
        ignore_case: bool,
    ) -> Result<EnumValue<'static>, EnumError> {
        let descriptor = self
            .get_with_type_path(type_name)
            .or_else(|| self.get_with_type_name(type_name))
            .ok_or_else(|| EnumError::UnknownEnumType {
                name: type_name.into(),
            })?;
        crate::parse(text, ignore_case, descriptor)
    }

    /// Returns the number of registered enums.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Iterates the registered descriptors in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static EnumDescriptor> + '_ {
        self.descriptors.values().copied()
    }
}
