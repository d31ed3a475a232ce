//! Questions module - the form's catalog and the answers collected against it.

mod answers;
mod catalog;

pub use answers::{AnswerCollector, AnswerSet};
pub use catalog::{CatalogError, QuestionCatalog, QuestionDefinition, QuestionRole};
