//! `#[derive(Event)]` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput};

/// Options read from `#[event(...)]` attributes.
#[derive(Default)]
struct EventArgs {
    hashed: bool,
}

impl EventArgs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = EventArgs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("event")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("hashed") {
                    args.hashed = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown event attribute, expected `hashed`"))
                }
            })?;
        }

        Ok(args)
    }
}

pub(crate) fn derive_event_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let args = EventArgs::from_attrs(&input.attrs)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = if args.hashed {
        quote! {
            impl #impl_generics ::herald::Event for #name #ty_generics #where_clause {
                fn event_hash(&self) -> ::core::option::Option<::herald::EventHash> {
                    ::core::option::Option::Some(::herald::HashedEvent::value_hash(self))
                }
            }

            impl #impl_generics ::herald::HashedEvent for #name #ty_generics #where_clause {}
        }
    } else {
        quote! {
            impl #impl_generics ::herald::Event for #name #ty_generics #where_clause {
                fn event_hash(&self) -> ::core::option::Option<::herald::EventHash> {
                    ::core::option::Option::None
                }
            }
        }
    };

    Ok(expanded)
}
