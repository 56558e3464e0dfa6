//! Procedural macros for Herald.
//!
//! - `#[derive(Event)]` - Implement `herald::Event`, optionally with value
//!   subscriptions via `#[event(hashed)]`

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod event;

/// Derive macro for implementing the `Event` trait.
///
/// By default the type only supports type subscriptions. Add
/// `#[event(hashed)]` (the type must also implement `Hash`) to allow
/// subscribing to individual values:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, herald::Event)]
/// #[event(hashed)]
/// enum Key { Up, Down }
/// ```
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    event::derive_event_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
