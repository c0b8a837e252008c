pub(crate) mod validation;
