pub(crate) mod no_func_keyword;
