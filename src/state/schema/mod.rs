//! Form schema: field definitions and the collection transition function

mod field;
pub mod options;
mod store;

pub use field::{Field, FieldId, FieldKind};
pub use store::{apply, FieldPatch, SchemaOp};
