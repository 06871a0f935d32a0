use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveMember, MemberType};

impl From<DeriveMember> for TokenStream2 {
    fn from(value: DeriveMember) -> Self {
        let DeriveMember {
            field_name,
            member_name,
            member_type,
        } = value;

        match member_type {
            MemberType::Flag => quote! {
                .flag(#member_name, |target: &mut Self, value: bool| target.#field_name = value)
            },
            MemberType::Text => quote! {
                .text(#member_name, |target: &mut Self, value: ::std::string::String| target.#field_name = value)
            },
            MemberType::OptionalText => quote! {
                .text(#member_name, |target: &mut Self, value: ::std::string::String| target.#field_name = ::std::option::Option::Some(value))
            },
            MemberType::Texts => quote! {
                .texts(#member_name, |target: &mut Self, value: ::std::vec::Vec<::std::string::String>| target.#field_name = value)
            },
            MemberType::BoxedTexts => quote! {
                .texts(#member_name, |target: &mut Self, value: ::std::vec::Vec<::std::string::String>| target.#field_name = value.into_boxed_slice())
            },
        }
    }
}
