pub(crate) mod no_debugger;
