//! Parsing of `#[enum_repr(..)]` and `#[repr(..)]`.

use proc_macro2::{Span, TokenStream};
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr};

use crate::ENUM_REPR_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type attributes

/// `#[enum_repr(..)]` options on the enum itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `type_path = "..."`, replaces `module_path!()::Ident`.
    pub type_path: Option<LitStr>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ENUM_REPR_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if this.type_path.replace(lit).is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    if this.auto_register.replace(meta.path.span()).is_some() {
                        return Err(meta.error("duplicate `auto_register`"));
                    }
                    Ok(())
                } else {
                    Err(meta.error("expected `type_path = \"..\"` or `auto_register`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Variant attributes

/// `#[enum_repr(..)]` options on a variant.
#[derive(Default, Debug)]
pub(crate) struct VariantAttributes {
    /// `rename = "..."`
    pub rename: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ENUM_REPR_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if this.rename.replace(lit).is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"..\"`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Repr

/// Integer types accepted in `#[repr(..)]`, with their `UnderlyingType` and
/// `Discriminant` variant names.
const INTEGER_REPRS: [(&str, &str); 12] = [
    ("i8", "I8"),
    ("u8", "U8"),
    ("i16", "I16"),
    ("u16", "U16"),
    ("i32", "I32"),
    ("u32", "U32"),
    ("i64", "I64"),
    ("u64", "U64"),
    ("isize", "Isize"),
    ("usize", "Usize"),
    ("i128", "I128"),
    ("u128", "U128"),
];

/// The integer backing an enum.
#[derive(Debug)]
pub(crate) struct IntegerRepr {
    /// The primitive, e.g. `u8`.
    pub primitive: Ident,
    /// The shared variant name, e.g. `U8`.
    pub variant: Ident,
}

impl IntegerRepr {
    fn new(primitive: &str, variant: &str, span: Span) -> Self {
        Self {
            primitive: Ident::new(primitive, span),
            variant: Ident::new(variant, span),
        }
    }

    /// Finds the integer in `#[repr(..)]`, skipping `C`, `align(..)` and the
    /// like. Enums without one use `isize`.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found: Option<Self> = None;

        for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
            attr.parse_nested_meta(|meta| {
                let integer = INTEGER_REPRS
                    .iter()
                    .find(|(name, _)| meta.path.is_ident(name));

                match integer {
                    Some((name, variant)) => {
                        if found.is_some() {
                            return Err(meta.error("conflicting integer representations"));
                        }
                        found = Some(Self::new(name, variant, meta.path.span()));
                        Ok(())
                    }
                    None => skip_args(&meta),
                }
            })?;
        }

        Ok(found.unwrap_or_else(|| Self::new("isize", "Isize", Span::call_site())))
    }
}

fn skip_args(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}
