pub(crate) const SWITCH_TRIGGER: char = '/';
pub(crate) const PROPERTY_TRIGGER: char = '-';
pub(crate) const FIELD_TRIGGER: char = '=';
pub(crate) const EXTRA_CONTENT: &str = "ExtraContent";
