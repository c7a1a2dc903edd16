pub(crate) mod no_duplicate_declarations;
pub mod selector;

pub use no_duplicate_declarations::{Finding, SeenSet, detect};
