pub(crate) mod selector_no_vendor_prefix;
