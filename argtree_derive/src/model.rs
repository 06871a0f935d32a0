use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeriveAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberType {
    /// `bool`
    Flag,
    /// `String`
    Text,
    /// `Option<String>`
    OptionalText,
    /// `Vec<String>`
    Texts,
    /// `Box<[String]>`
    BoxedTexts,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveMember {
    pub field_name: syn::Ident,
    pub member_name: String,
    pub member_type: MemberType,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveTarget {
    pub struct_name: syn::Ident,
    pub members: Vec<DeriveMember>,
}
