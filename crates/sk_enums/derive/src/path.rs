//! Paths into `sk_enums` used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `sk_enums` crate.
///
/// Resolves to `::sk_enums`, or to `::sk_core::enums` for crates that only
/// depend on the umbrella crate. Reads the caller's `Cargo.toml`, so call it
/// once per derive.
pub(crate) fn sk_enums() -> syn::Path {
    sk_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sk_enums"))
}

#[inline(always)]
pub(crate) fn enum_repr_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::EnumRepr }
}

#[inline(always)]
pub(crate) fn enum_descriptor_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::EnumDescriptor }
}

#[inline(always)]
pub(crate) fn discriminant_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::Discriminant }
}

#[inline(always)]
pub(crate) fn underlying_type_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::UnderlyingType }
}

#[inline(always)]
pub(crate) fn option_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::Option }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(sk_enums_path: &syn::Path) -> TokenStream {
    quote! { #sk_enums_path::__macro_exports::auto_register }
}
