//! Trait abstraction for the field id source to enable mocking in tests

use crate::state::schema::FieldId;
use uuid::Uuid;

/// Source of fresh globally-unique field ids.
///
/// Consumed only by the add-field constructors; the schema store itself
/// never generates ids.
#[cfg_attr(test, mockall::automock)]
pub trait IdSource {
    /// Return a fresh id, unique for the lifetime of the session
    fn next_id(&mut self) -> FieldId;
}

/// Production id source backed by uuid v4
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> FieldId {
        FieldId::new(Uuid::new_v4().to_string())
    }
}
