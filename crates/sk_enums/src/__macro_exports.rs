//! Items used by code generated from `sk_enums_derive`. Not public API.

pub use core::option::Option;

pub use crate::{Discriminant, EnumDescriptor, EnumRepr, UnderlyingType};

crate::cfg::auto_register! {
    pub mod auto_register {
        pub use inventory;

        use crate::{EnumRegistry, EnumRepr};

        /// Registration hook submitted by `#[enum_repr(auto_register)]`.
        pub struct AutoRegisterFunc(pub fn(&mut EnumRegistry));

        inventory::collect!(AutoRegisterFunc);

        /// The function each `AutoRegisterFunc` points to.
        pub fn register<E: EnumRepr>(registry: &mut EnumRegistry) {
            registry.register::<E>();
        }
    }
}
