use syn::{Data, DeriveInput, Fields, Ident, LitStr, spanned::Spanned};

use crate::attributes::{IntegerRepr, TypeAttributes, VariantAttributes};

// -----------------------------------------------------------------------------
// Define

/// A validated enum, ready for code generation.
pub(crate) struct EnumData<'a> {
    pub ident: &'a Ident,
    pub repr: IntegerRepr,
    pub attrs: TypeAttributes,
    pub variants: Vec<EnumVariant<'a>>,
    pub sk_enums_path: syn::Path,
}

pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub attrs: VariantAttributes,
}

// -----------------------------------------------------------------------------
// Parse

impl<'a> EnumData<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`EnumRepr` can only be derived for enums",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`EnumRepr` cannot be derived for generic enums",
            ));
        }

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.fields.span(),
                    "`EnumRepr` requires every variant to be a unit variant",
                ));
            }
            variants.push(EnumVariant {
                ident: &variant.ident,
                attrs: VariantAttributes::parse(&variant.attrs)?,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            repr: IntegerRepr::parse(&ast.attrs)?,
            attrs: TypeAttributes::parse(&ast.attrs)?,
            variants,
            sk_enums_path: crate::path::sk_enums(),
        })
    }
}

impl EnumVariant<'_> {
    /// The entry name: the `rename` if present, otherwise the variant.
    pub fn name(&self) -> LitStr {
        match &self.attrs.rename {
            Some(lit) => lit.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }
}
