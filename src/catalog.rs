pub(crate) mod attributes;
pub(crate) mod reference;
