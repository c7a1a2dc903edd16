pub(crate) mod value_no_vendor_prefix;
