use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveTarget;

impl From<DeriveTarget> for TokenStream2 {
    fn from(value: DeriveTarget) -> Self {
        let DeriveTarget {
            struct_name,
            members,
        } = value;
        let members = members
            .into_iter()
            .map(TokenStream2::from)
            .collect::<Vec<_>>();

        quote! {
            impl argtree::Target for #struct_name {
                fn shape() -> argtree::Shape<Self> {
                    argtree::Shape::<Self>::new()
                        #( #members )*
                }
            }
        }
    }
}
