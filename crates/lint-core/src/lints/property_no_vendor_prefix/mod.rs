pub(crate) mod property_no_vendor_prefix;
