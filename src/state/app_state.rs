//! Application state definitions

use crate::state::schema::{Field, FieldId, FieldKind};

/// Which part of the editor currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Add-field palette at the top of the editor pane
    #[default]
    Palette,
    /// Field list navigation
    Fields,
    /// Label input of the expanded field
    Label,
    /// Option rows of the expanded field
    Options,
}

impl Focus {
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Label | Self::Options)
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// The form schema. Replaced wholesale by each applied operation.
    pub fields: Vec<Field>,

    // Focus and selection
    pub focus: Focus,
    pub palette_index: usize,
    pub selected_field: usize,
    pub selected_option: usize,

    /// Field whose editor is currently open. Tracked by identity so it
    /// stays attached to the same field across edits.
    pub expanded_field: Option<FieldId>,

    // UI state
    pub show_hints: bool,
}

impl AppState {
    /// Cycle the palette selection forward
    pub fn next_palette_item(&mut self) {
        self.palette_index = (self.palette_index + 1) % FieldKind::ALL.len();
    }

    /// Cycle the palette selection backward
    pub fn prev_palette_item(&mut self) {
        if self.palette_index == 0 {
            self.palette_index = FieldKind::ALL.len() - 1;
        } else {
            self.palette_index -= 1;
        }
    }

    /// Kind currently highlighted in the palette
    pub fn palette_kind(&self) -> FieldKind {
        FieldKind::ALL[self.palette_index]
    }

    /// Move field selection down
    pub fn move_selection_down(&mut self) {
        if !self.fields.is_empty() && self.selected_field < self.fields.len() - 1 {
            self.selected_field += 1;
        }
    }

    /// Move field selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_field > 0 {
            self.selected_field -= 1;
        }
    }

    /// Keep the field selection inside the collection after a removal
    pub fn clamp_selection(&mut self) {
        if self.selected_field >= self.fields.len() {
            self.selected_field = self.fields.len().saturating_sub(1);
        }
    }

    /// Keep the option selection inside the expanded field's options
    pub fn clamp_option_selection(&mut self) {
        let len = self
            .expanded()
            .and_then(|f| f.options())
            .map(|o| o.len())
            .unwrap_or(0);
        if self.selected_option >= len {
            self.selected_option = len.saturating_sub(1);
        }
    }

    /// Move option selection down within the expanded field
    pub fn move_option_down(&mut self) {
        let len = self
            .expanded()
            .and_then(|f| f.options())
            .map(|o| o.len())
            .unwrap_or(0);
        if len > 0 && self.selected_option < len - 1 {
            self.selected_option += 1;
        }
    }

    /// Move option selection up within the expanded field
    pub fn move_option_up(&mut self) {
        if self.selected_option > 0 {
            self.selected_option -= 1;
        }
    }

    /// Currently selected field in the list
    pub fn selected(&self) -> Option<&Field> {
        self.fields.get(self.selected_field)
    }

    /// Field whose editor is open, looked up by identity
    pub fn expanded(&self) -> Option<&Field> {
        let id = self.expanded_field.as_ref()?;
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Open the editor for the currently selected field
    pub fn expand_selected(&mut self) {
        if let Some(field) = self.selected() {
            self.expanded_field = Some(field.id().clone());
            self.selected_option = 0;
        }
    }

    /// Close the field editor
    pub fn collapse(&mut self) {
        self.expanded_field = None;
        self.selected_option = 0;
    }
}
