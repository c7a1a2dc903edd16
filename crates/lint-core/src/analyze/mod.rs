pub mod script;
pub mod style;

pub(crate) mod binary_expression;
pub(crate) mod block;
pub(crate) mod call;
pub(crate) mod function;
pub(crate) mod statement;
