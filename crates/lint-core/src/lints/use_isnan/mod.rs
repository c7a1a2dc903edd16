pub(crate) mod use_isnan;
