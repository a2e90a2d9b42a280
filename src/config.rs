pub(crate) mod saved;
pub(crate) mod settings;
