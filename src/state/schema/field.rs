//! Field definitions for the form schema

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque field identity, assigned once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Field kind, used by the palette and for summary rendering.
/// The kind of a field never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Radio,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Text, FieldKind::Select, FieldKind::Radio];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Radio => "radio",
        }
    }

    /// Build a freshly created field of this kind with its creation defaults
    pub fn default_field(self, id: FieldId) -> Field {
        match self {
            Self::Text => Field::text(id),
            Self::Select => Field::select(id),
            Self::Radio => Field::radio(id),
        }
    }
}

/// A single field definition in the form schema.
///
/// `options` exists only for select and radio fields; its order is the
/// display order and duplicate entries are permitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text {
        id: FieldId,
        label: String,
    },
    Select {
        id: FieldId,
        label: String,
        options: Vec<String>,
    },
    Radio {
        id: FieldId,
        label: String,
        options: Vec<String>,
    },
}

impl Field {
    /// Create a new text field with creation defaults
    pub fn text(id: FieldId) -> Self {
        Field::Text {
            id,
            label: "New text field title".to_string(),
        }
    }

    /// Create a new select field with creation defaults
    pub fn select(id: FieldId) -> Self {
        Field::Select {
            id,
            label: "New select field title".to_string(),
            options: vec!["option 1".to_string()],
        }
    }

    /// Create a new radio field with creation defaults
    pub fn radio(id: FieldId) -> Self {
        Field::Radio {
            id,
            label: "New radio field title".to_string(),
            options: vec!["option 1".to_string()],
        }
    }

    pub fn id(&self) -> &FieldId {
        match self {
            Field::Text { id, .. } | Field::Select { id, .. } | Field::Radio { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Field::Text { label, .. }
            | Field::Select { label, .. }
            | Field::Radio { label, .. } => label,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Text { .. } => FieldKind::Text,
            Field::Select { .. } => FieldKind::Select,
            Field::Radio { .. } => FieldKind::Radio,
        }
    }

    /// Get the options list (None for text fields)
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Field::Text { .. } => None,
            Field::Select { options, .. } | Field::Radio { options, .. } => Some(options),
        }
    }

    /// Summary line for the editor's field list
    pub fn summary(&self) -> String {
        format!("[{}] {}", self.kind().label(), self.label())
    }
}
