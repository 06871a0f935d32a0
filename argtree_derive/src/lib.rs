extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveTarget;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Generate `impl argtree::Target` for a struct with named fields.
///
/// Supported attributes:
/// * `#[argtree(name = "..")]` on a field: bind the field to the element of that name (default: the field identifier).
/// * `#[argtree(skip)]` on a field: leave the field out of the shape.
#[proc_macro_derive(Target, attributes(argtree))]
pub fn target(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveTarget::try_from(derive_input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
