use crate::model::DeriveAttributes;
use quote::ToTokens;

impl TryFrom<&[syn::Attribute]> for DeriveAttributes {
    type Error = syn::Error;

    fn try_from(value: &[syn::Attribute]) -> Result<Self, Self::Error> {
        let mut attributes = DeriveAttributes::default();

        for attribute in value {
            if attribute.path().is_ident("argtree") {
                attributes.extend(attribute)?;
            }
        }

        Ok(attributes)
    }
}

impl DeriveAttributes {
    fn extend(&mut self, attribute: &syn::Attribute) -> Result<(), syn::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;

        for expression in attribute.parse_args_with(attributes_parser)? {
            match &expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();

                    match assignment.right.as_ref() {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: syn::Lit::Str(value),
                            ..
                        }) => {
                            self.pairs.insert(left, value.value());
                        }
                        right => {
                            return Err(syn::Error::new_spanned(
                                right,
                                format!("Invalid - attribute `{left}` must be a string literal."),
                            ));
                        }
                    }
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    self.singletons
                        .insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!("Unparseable attribute: {}", expression.to_token_stream()),
                    ));
                }
            };
        }

        Ok(())
    }
}
