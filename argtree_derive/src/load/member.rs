use crate::load::incompatible_error;
use crate::model::{DeriveAttributes, DeriveMember, MemberType};

impl DeriveMember {
    /// Load the member of a named field, or `None` when the field is not bound.
    pub fn try_load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let attributes = DeriveAttributes::try_from(value.attrs.as_slice())?;
        let field_name = value
            .ident
            .clone()
            .expect("internal error - named fields must have an ident");

        if let Some(unknown) = attributes
            .singletons
            .iter()
            .find(|singleton| singleton.as_str() != "skip")
            .or_else(|| attributes.pairs.keys().find(|key| key.as_str() != "name"))
        {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - unknown attribute `{unknown}`."),
            ));
        }

        let skip = attributes.singletons.contains("skip");
        let explicit_name = attributes.pairs.get("name");

        if skip && explicit_name.is_some() {
            return Err(incompatible_error(
                &field_name,
                "#[argtree(skip)]",
                "#[argtree(name = ..)]",
            ));
        }

        if skip {
            return Ok(None);
        }

        let member_name = match explicit_name {
            Some(name) if name.is_empty() => {
                return Err(syn::Error::new(
                    field_name.span(),
                    "Invalid - member name cannot be empty.",
                ));
            }
            Some(name) => name.clone(),
            None => field_name.to_string(),
        };

        match (member_type(&value.ty), explicit_name) {
            (Some(member_type), _) => Ok(Some(DeriveMember {
                field_name,
                member_name,
                member_type,
            })),
            (None, Some(_)) => Err(syn::Error::new(
                field_name.span(),
                "Invalid - #[argtree(name = ..)] requires a field of type `bool`, `String`, `Option<String>`, `Vec<String>` or `Box<[String]>`.",
            )),
            // Fields of other types keep their default.
            (None, None) => Ok(None),
        }
    }
}

fn member_type(ty: &syn::Type) -> Option<MemberType> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => {
            let segment = path.path.segments.last()?;

            match (segment.ident.to_string().as_str(), generic_argument(segment)) {
                ("bool", None) => Some(MemberType::Flag),
                ("String", None) => Some(MemberType::Text),
                ("Option", Some(inner)) if is_string(inner) => Some(MemberType::OptionalText),
                ("Vec", Some(inner)) if is_string(inner) => Some(MemberType::Texts),
                ("Box", Some(syn::Type::Slice(slice))) if is_string(&slice.elem) => {
                    Some(MemberType::BoxedTexts)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn generic_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) if arguments.args.len() == 1 => {
            match arguments.args.first() {
                Some(syn::GenericArgument::Type(ty)) => Some(ty),
                _ => None,
            }
        }
        _ => None,
    }
}

fn is_string(ty: &syn::Type) -> bool {
    member_type(ty) == Some(MemberType::Text)
}
