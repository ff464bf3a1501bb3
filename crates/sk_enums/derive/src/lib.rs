//! Derive macro for `sk_enums::EnumRepr`.
//!
//! See [`EnumRepr`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static ENUM_REPR_ATTRIBUTE_NAME: &str = "enum_repr";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod enum_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Deriving `EnumRepr`
///
/// Implements `EnumRepr` for a fieldless, non-generic enum. The underlying
/// type comes from `#[repr(..)]` and defaults to `isize`, matching the
/// compiler's own default.
///
/// ```rust, ignore
/// #[derive(EnumRepr, Clone, Copy)]
/// #[repr(u8)]
/// enum Color {
///     Red = 1,
///     Green = 2,
///     Blue = 4,
/// }
/// ```
///
/// Variants keep their declaration order in the descriptor, and their
/// discriminants become the entry values.
///
/// ## Custom Type Path
///
/// The descriptor's type path defaults to `module_path!()::Ident`. Override
/// it at the type level:
///
/// ```rust, ignore
/// #[derive(EnumRepr, Clone, Copy)]
/// #[enum_repr(type_path = "render::Color")]
/// enum Color { /* ... */ }
/// ```
///
/// ## Renaming Variants
///
/// The name an entry is parsed and printed as can differ from the variant:
///
/// ```rust, ignore
/// #[derive(EnumRepr, Clone, Copy)]
/// enum Level {
///     #[enum_repr(rename = "warning")]
///     Warn,
///     Error,
/// }
/// ```
///
/// ## Auto Register
///
/// With the `auto_register` feature enabled, types marked with
/// `#[enum_repr(auto_register)]` are added by `EnumRegistry::auto_register`.
///
/// ```rust, ignore
/// #[derive(EnumRepr, Clone, Copy)]
/// #[enum_repr(auto_register)]
/// enum Level { /* ... */ }
/// ```
///
/// Without the feature the flag is accepted and ignored.
#[proc_macro_derive(EnumRepr, attributes(enum_repr))]
pub fn derive_enum_repr(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match enum_data::EnumData::parse(&ast) {
        Ok(data) => impls::impl_enum_repr(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
