pub mod dsl;
pub mod translator;

pub use dsl::{Predicate, SearchQuery};
pub use translator::{translate_filters, translate_global};
