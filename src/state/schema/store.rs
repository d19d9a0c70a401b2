//! Schema store: the collection transition function
//!
//! The collection is a plain `Vec<Field>`; `apply` is the only way state
//! advances. It is a pure function of (collection, operation) and never
//! fails: operations referencing an id that is not in the collection
//! return the collection unchanged.

use super::field::{Field, FieldId};

/// Partial update merged into an existing field by [`SchemaOp::Edit`].
///
/// Absent attributes are preserved. An `options` patch against a text
/// field is ignored; the field's kind is never changed by a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Default::default()
        }
    }
}

/// One transition of the field collection
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaOp {
    /// Append a fully-formed field. Id uniqueness is the caller's
    /// responsibility (a fresh id source guarantees it).
    Add(Field),
    /// Delete the field with the given id, preserving the order of the rest
    Remove(FieldId),
    /// Merge a partial update into the field with the given id
    Edit(FieldId, FieldPatch),
}

/// Apply one operation and return the next collection.
pub fn apply(fields: &[Field], op: SchemaOp) -> Vec<Field> {
    match op {
        SchemaOp::Add(field) => {
            let mut next = fields.to_vec();
            next.push(field);
            next
        }
        SchemaOp::Remove(id) => fields.iter().filter(|f| *f.id() != id).cloned().collect(),
        SchemaOp::Edit(id, patch) => fields
            .iter()
            .map(|f| {
                if *f.id() == id {
                    patched(f, &patch)
                } else {
                    f.clone()
                }
            })
            .collect(),
    }
}

/// Merge a patch into one field, keeping its kind
fn patched(field: &Field, patch: &FieldPatch) -> Field {
    match field {
        Field::Text { id, label } => Field::Text {
            id: id.clone(),
            label: patch.label.clone().unwrap_or_else(|| label.clone()),
        },
        Field::Select { id, label, options } => Field::Select {
            id: id.clone(),
            label: patch.label.clone().unwrap_or_else(|| label.clone()),
            options: patch.options.clone().unwrap_or_else(|| options.clone()),
        },
        Field::Radio { id, label, options } => Field::Radio {
            id: id.clone(),
            label: patch.label.clone().unwrap_or_else(|| label.clone()),
            options: patch.options.clone().unwrap_or_else(|| options.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::FieldKind;
    use pretty_assertions::assert_eq;

    fn text(id: &str, label: &str) -> Field {
        Field::Text {
            id: FieldId::from(id),
            label: label.to_string(),
        }
    }

    fn select(id: &str, label: &str, options: &[&str]) -> Field {
        Field::Select {
            id: FieldId::from(id),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    mod add {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_to_empty_collection() {
            let next = apply(&[], SchemaOp::Add(text("t1", "Name")));
            assert_eq!(next, vec![text("t1", "Name")]);
        }

        #[test]
        fn test_add_appends_at_end() {
            let fields = vec![text("t1", "Name")];
            let next = apply(&fields, SchemaOp::Add(select("s1", "Colour", &["option 1"])));
            assert_eq!(next.len(), 2);
            assert_eq!(next[1].id().as_str(), "s1");
        }

        #[test]
        fn test_distinct_ids_stay_pairwise_distinct() {
            let mut fields = Vec::new();
            for i in 0..8 {
                let id = format!("f{i}");
                fields = apply(&fields, SchemaOp::Add(text(&id, "Field")));
            }
            for (i, a) in fields.iter().enumerate() {
                for b in fields.iter().skip(i + 1) {
                    assert_ne!(a.id(), b.id());
                }
            }
        }
    }

    mod remove {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_deletes_matching_field() {
            let fields = vec![text("t1", "Name"), select("s1", "Colour", &["a"])];
            let next = apply(&fields, SchemaOp::Remove(FieldId::from("t1")));
            assert_eq!(next, vec![select("s1", "Colour", &["a"])]);
        }

        #[test]
        fn test_remove_preserves_relative_order() {
            let fields = vec![text("a", "A"), text("b", "B"), text("c", "C")];
            let next = apply(&fields, SchemaOp::Remove(FieldId::from("b")));
            let ids: Vec<&str> = next.iter().map(|f| f.id().as_str()).collect();
            assert_eq!(ids, vec!["a", "c"]);
        }

        #[test]
        fn test_remove_missing_id_is_noop() {
            let fields = vec![text("t1", "Name"), text("t2", "Email")];
            let next = apply(&fields, SchemaOp::Remove(FieldId::from("missing")));
            assert_eq!(next, fields);
        }

        #[test]
        fn test_remove_from_empty_collection() {
            let next = apply(&[], SchemaOp::Remove(FieldId::from("t1")));
            assert!(next.is_empty());
        }
    }

    mod edit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_label_only() {
            let fields = vec![text("t1", "Name")];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("t1"), FieldPatch::label("Full name")),
            );
            assert_eq!(next, vec![text("t1", "Full name")]);
        }

        #[test]
        fn test_edit_options_leaves_label_untouched() {
            let fields = vec![select("s1", "Colour", &["option 1"])];
            let next = apply(
                &fields,
                SchemaOp::Edit(
                    FieldId::from("s1"),
                    FieldPatch::options(vec!["option 1".to_string(), "option 2".to_string()]),
                ),
            );
            assert_eq!(next, vec![select("s1", "Colour", &["option 1", "option 2"])]);
        }

        #[test]
        fn test_edit_label_leaves_options_untouched() {
            let fields = vec![select("s1", "Colour", &["a", "b"])];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("s1"), FieldPatch::label("Shade")),
            );
            assert_eq!(next, vec![select("s1", "Shade", &["a", "b"])]);
        }

        #[test]
        fn test_edit_missing_id_is_noop() {
            let fields = vec![text("t1", "Name"), select("s1", "Colour", &["a"])];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("missing"), FieldPatch::label("x")),
            );
            assert_eq!(next, fields);
        }

        #[test]
        fn test_edit_never_changes_kind() {
            let fields = vec![
                text("t1", "Name"),
                select("s1", "Colour", &["a"]),
                Field::radio(FieldId::from("r1")),
            ];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("s1"), FieldPatch::label("x")),
            );
            let kinds: Vec<FieldKind> = next.iter().map(|f| f.kind()).collect();
            assert_eq!(
                kinds,
                vec![FieldKind::Text, FieldKind::Select, FieldKind::Radio]
            );
        }

        #[test]
        fn test_options_patch_against_text_field_is_shape_safe() {
            let fields = vec![text("t1", "Name")];
            let next = apply(
                &fields,
                SchemaOp::Edit(
                    FieldId::from("t1"),
                    FieldPatch::options(vec!["a".to_string()]),
                ),
            );
            assert_eq!(next, vec![text("t1", "Name")]);
        }

        #[test]
        fn test_edit_leaves_other_fields_unmodified() {
            let fields = vec![text("t1", "Name"), text("t2", "Email")];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("t1"), FieldPatch::label("Full name")),
            );
            assert_eq!(next[1], text("t2", "Email"));
        }

        #[test]
        fn test_edit_to_zero_options_is_permitted() {
            let fields = vec![select("s1", "Colour", &["a"])];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("s1"), FieldPatch::options(Vec::new())),
            );
            assert_eq!(next[0].options(), Some(&[][..]));
        }

        #[test]
        fn test_empty_patch_is_identity() {
            let fields = vec![select("s1", "Colour", &["a", "b"])];
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("s1"), FieldPatch::default()),
            );
            assert_eq!(next, fields);
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_delete_option_at_front_shifts_rest_down() {
            let fields = vec![select("s1", "Colour", &["a", "b"])];
            let remaining =
                crate::state::schema::options::with_removed(fields[0].options().unwrap(), 0);
            let next = apply(
                &fields,
                SchemaOp::Edit(FieldId::from("s1"), FieldPatch::options(remaining)),
            );
            assert_eq!(next[0].options(), Some(&["b".to_string()][..]));
        }

        #[test]
        fn test_grow_select_then_remove_sibling() {
            // Build up two fields, widen the select's options, drop the text field
            let mut fields = apply(&[], SchemaOp::Add(text("t1", "Name")));
            fields = apply(&fields, SchemaOp::Add(Field::select(FieldId::from("s1"))));
            fields = apply(
                &fields,
                SchemaOp::Edit(
                    FieldId::from("s1"),
                    FieldPatch::options(vec!["option 1".to_string(), "option 2".to_string()]),
                ),
            );
            fields = apply(&fields, SchemaOp::Remove(FieldId::from("t1")));

            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].id().as_str(), "s1");
            assert_eq!(fields[0].label(), "New select field title");
            assert_eq!(fields[0].options().map(|o| o.len()), Some(2));
        }
    }
}
