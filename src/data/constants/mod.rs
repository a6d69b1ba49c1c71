pub(crate) mod alphas;
pub(crate) mod mappings;
