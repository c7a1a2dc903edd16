// Style rules
pub(crate) mod at_rule_no_vendor_prefix;
pub(crate) mod indentation;
pub(crate) mod media_feature_name_no_vendor_prefix;
pub mod no_duplicate_declarations;
pub(crate) mod property_no_vendor_prefix;
pub(crate) mod selector_no_vendor_prefix;
pub(crate) mod string_quotes;
pub(crate) mod value_no_vendor_prefix;

// Script rules
pub(crate) mod eqeqeq;
pub(crate) mod indent;
pub(crate) mod no_debugger;
pub(crate) mod no_empty;
pub(crate) mod no_eval;
pub(crate) mod no_func_keyword;
pub(crate) mod no_with;
pub(crate) mod semi;
pub(crate) mod use_isnan;
