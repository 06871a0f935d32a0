use crate::model::{DeriveMember, DeriveTarget};
use std::collections::HashSet;

impl TryFrom<syn::DeriveInput> for DeriveTarget {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - target cannot be generic.",
            ));
        }

        let members = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveMember::try_load)
                .filter_map(Result::transpose)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            syn::Data::Struct(_) => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Invalid - target must be a struct with named fields.",
                ));
            }
            syn::Data::Enum(_) | syn::Data::Union(_) => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Invalid - target must be a struct.",
                ));
            }
        };

        let mut names = HashSet::new();

        for member in &members {
            if !names.insert(member.member_name.as_str()) {
                return Err(syn::Error::new(
                    member.field_name.span(),
                    format!(
                        "Invalid - member '{}' is declared more than once.",
                        member.member_name
                    ),
                ));
            }
        }

        Ok(DeriveTarget {
            struct_name,
            members,
        })
    }
}
