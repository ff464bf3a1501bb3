use proc_macro2::TokenStream;
use quote::quote;

use crate::enum_data::EnumData;

/// Generate the `EnumRepr` implementation, plus its registration when
/// requested.
pub(crate) fn impl_enum_repr(data: &EnumData) -> TokenStream {
    let sk_enums_path = &data.sk_enums_path;
    let enum_repr_ = crate::path::enum_repr_(sk_enums_path);
    let enum_descriptor_ = crate::path::enum_descriptor_(sk_enums_path);
    let discriminant_ = crate::path::discriminant_(sk_enums_path);
    let underlying_type_ = crate::path::underlying_type_(sk_enums_path);
    let option_ = crate::path::option_(sk_enums_path);

    let ident = data.ident;
    let primitive = &data.repr.primitive;
    let kind = &data.repr.variant;

    let type_path = match &data.attrs.type_path {
        Some(lit) => quote!(#lit),
        None => {
            let name = ident.to_string();
            quote!(::core::concat!(::core::module_path!(), "::", #name))
        }
    };

    let variant_idents: Vec<_> = data.variants.iter().map(|v| v.ident).collect();
    let variant_names = data.variants.iter().map(|v| v.name());

    // An enum without variants has no value to cast.
    let (discriminant_body, from_discriminant_body) = if variant_idents.is_empty() {
        (
            quote!(match self {}),
            quote! {
                let _ = discriminant;
                #option_::None
            },
        )
    } else {
        (
            quote!(#discriminant_::#kind(self as #primitive)),
            quote! {
                if let #discriminant_::#kind(value) = discriminant {
                    #(
                        if value == Self::#variant_idents as #primitive {
                            return #option_::Some(Self::#variant_idents);
                        }
                    )*
                }
                #option_::None
            },
        )
    };

    let auto_register = get_auto_register_impl(data);

    quote! {
        impl #enum_repr_ for #ident {
            fn build_descriptor() -> #enum_descriptor_ {
                #enum_descriptor_::new(#type_path, #underlying_type_::#kind)
                    #(
                        .with_entry(
                            #variant_names,
                            #discriminant_::#kind(Self::#variant_idents as #primitive).to_table_value(),
                        )
                    )*
            }

            #[inline]
            fn discriminant(self) -> #discriminant_ {
                #discriminant_body
            }

            fn from_discriminant(discriminant: #discriminant_) -> #option_<Self> {
                #from_discriminant_body
            }
        }

        #auto_register
    }
}

/// Generate the `inventory` submission for `#[enum_repr(auto_register)]`.
#[cfg(feature = "auto_register")]
fn get_auto_register_impl(data: &EnumData) -> TokenStream {
    let Some(span) = data.attrs.auto_register else {
        return TokenStream::new();
    };

    let auto_register_ = crate::path::auto_register_(&data.sk_enums_path);
    let ident = data.ident;

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::AutoRegisterFunc(#auto_register_::register::<#ident>)
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn get_auto_register_impl(_: &EnumData) -> TokenStream {
    TokenStream::new()
}
