//! Application struct and key handling
//!
//! All schema mutation funnels through [`App::dispatch`], which replaces
//! the collection with the transition function's result. Key handlers
//! translate terminal input into schema operations or pure UI-state
//! changes; they never touch the collection directly.

use crate::config::TuiConfig;
use crate::state::ids::{IdSource, UuidIdSource};
use crate::state::schema::{self, apply, FieldId, FieldKind, FieldPatch, SchemaOp};
use crate::state::{AppState, Focus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Source of fresh field ids, injected so tests can pin ids
    ids: Box<dyn IdSource>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback message for the status bar
    pub status_message: Option<String>,
    /// Preview pane width as a percentage of the terminal
    preview_ratio: u16,
}

impl App {
    /// Create a new App instance with the production id source
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_ids(config, Box::new(UuidIdSource))
    }

    /// Create a new App instance with an injected id source
    pub fn with_ids(config: &TuiConfig, ids: Box<dyn IdSource>) -> Self {
        let state = AppState {
            show_hints: config.show_hints.unwrap_or(true),
            ..Default::default()
        };

        Self {
            state,
            ids,
            quit: false,
            status_message: None,
            preview_ratio: config.preview_ratio.unwrap_or(50).clamp(20, 80),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Preview pane width percentage (clamped at load time)
    pub fn preview_ratio(&self) -> u16 {
        self.preview_ratio
    }

    /// Apply one schema operation and replace the collection
    fn dispatch(&mut self, op: SchemaOp) {
        tracing::debug!(?op, "applying schema operation");
        self.state.fields = apply(&self.state.fields, op);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }
        // q quits when no text input has focus
        if key.code == KeyCode::Char('q') && !self.state.focus.is_text_input() {
            self.quit = true;
            return Ok(());
        }

        match self.state.focus {
            Focus::Palette => self.handle_palette_key(key),
            Focus::Fields => self.handle_fields_key(key),
            Focus::Label => self.handle_label_key(key),
            Focus::Options => self.handle_options_key(key),
        }
        Ok(())
    }

    /// Handle keys while the add-field palette has focus
    fn handle_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_palette_item(),
            KeyCode::Right | KeyCode::Char('l') => self.state.next_palette_item(),
            KeyCode::Enter => self.add_field(self.state.palette_kind()),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Char('j') => {
                if !self.state.fields.is_empty() {
                    self.state.focus = Focus::Fields;
                }
            }
            _ => {}
        }
    }

    /// Handle keys while the field list has focus
    fn handle_fields_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.selected_field == 0 {
                    self.state.focus = Focus::Palette;
                } else {
                    self.state.move_selection_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
                self.state.focus = Focus::Palette;
            }
            KeyCode::Enter => {
                self.state.expand_selected();
                if self.state.expanded_field.is_some() {
                    self.state.focus = Focus::Label;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
    }

    /// Handle keys while the expanded field's label input has focus
    fn handle_label_key(&mut self, key: KeyEvent) {
        // The expanded field can only disappear through a remove, which
        // collapses the editor, but guard anyway
        if self.state.expanded().is_none() {
            self.state.collapse();
            self.state.focus = Focus::Fields;
            return;
        }

        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(crate::platform::DELETE_MODIFIER) => {
                self.remove_expanded();
            }
            KeyCode::Tab | KeyCode::Enter => {
                // Only select/radio have an options section to cycle into
                if self.expanded_options().is_some() {
                    self.state.focus = Focus::Options;
                    self.state.clamp_option_selection();
                } else {
                    self.state.collapse();
                    self.state.focus = Focus::Fields;
                }
            }
            KeyCode::Esc => {
                self.state.collapse();
                self.state.focus = Focus::Fields;
            }
            KeyCode::Char(c) => {
                self.edit_label_char(c, key.modifiers.contains(KeyModifiers::SHIFT))
            }
            KeyCode::Backspace => self.edit_label_backspace(),
            _ => {}
        }
    }

    /// Handle keys while the expanded field's option rows have focus
    fn handle_options_key(&mut self, key: KeyEvent) {
        if self.state.expanded().is_none() {
            self.state.collapse();
            self.state.focus = Focus::Fields;
            return;
        }

        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(crate::platform::DELETE_MODIFIER) => {
                self.remove_expanded();
            }
            // Arrows only: plain chars edit the selected option's text
            KeyCode::Up => self.state.move_option_up(),
            KeyCode::Down => self.state.move_option_down(),
            KeyCode::Enter => self.append_option(),
            KeyCode::Delete => self.remove_option(),
            KeyCode::Tab | KeyCode::BackTab => self.state.focus = Focus::Label,
            KeyCode::Esc => {
                self.state.collapse();
                self.state.focus = Focus::Fields;
            }
            KeyCode::Char(c) => {
                self.edit_option_char(c, key.modifiers.contains(KeyModifiers::SHIFT))
            }
            KeyCode::Backspace => self.edit_option_backspace(),
            _ => {}
        }
    }

    /// Add a freshly constructed field of the given kind and select it
    fn add_field(&mut self, kind: FieldKind) {
        let field = kind.default_field(self.ids.next_id());
        self.dispatch(SchemaOp::Add(field));
        self.state.selected_field = self.state.fields.len() - 1;
        self.status_message = Some(format!("Added {} field", kind.label()));
    }

    /// Remove the field selected in the list
    fn remove_selected(&mut self) {
        let Some(field) = self.state.selected() else {
            return;
        };
        let id = field.id().clone();
        let label = field.label().to_string();
        self.remove_field(id, label);
    }

    /// Remove the field whose editor is open
    fn remove_expanded(&mut self) {
        let Some(field) = self.state.expanded() else {
            return;
        };
        let id = field.id().clone();
        let label = field.label().to_string();
        self.remove_field(id, label);
        self.state.focus = Focus::Fields;
    }

    fn remove_field(&mut self, id: FieldId, label: String) {
        if self.state.expanded_field.as_ref() == Some(&id) {
            self.state.collapse();
        }
        self.dispatch(SchemaOp::Remove(id));
        self.state.clamp_selection();
        self.status_message = Some(format!("Deleted \"{label}\""));
    }

    /// Append a character to the expanded field's label
    fn edit_label_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        let Some(field) = self.state.expanded() else {
            return;
        };
        let id = field.id().clone();
        let mut label = field.label().to_string();
        label.push(ch);
        self.dispatch(SchemaOp::Edit(id, FieldPatch::label(label)));
    }

    /// Remove the last character of the expanded field's label
    fn edit_label_backspace(&mut self) {
        let Some(field) = self.state.expanded() else {
            return;
        };
        let id = field.id().clone();
        let mut label = field.label().to_string();
        label.pop();
        self.dispatch(SchemaOp::Edit(id, FieldPatch::label(label)));
    }

    /// Expanded field's id and a copy of its options, if it has any
    fn expanded_options(&self) -> Option<(FieldId, Vec<String>)> {
        let field = self.state.expanded()?;
        let options = field.options()?;
        Some((field.id().clone(), options.to_vec()))
    }

    /// Append a character to the selected option's text
    fn edit_option_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        let Some((id, options)) = self.expanded_options() else {
            return;
        };
        let index = self.state.selected_option;
        let Some(current) = options.get(index) else {
            return;
        };
        let mut value = current.clone();
        value.push(ch);
        let next = schema::options::with_replaced(&options, index, value);
        self.dispatch(SchemaOp::Edit(id, FieldPatch::options(next)));
    }

    /// Remove the last character of the selected option's text
    fn edit_option_backspace(&mut self) {
        let Some((id, options)) = self.expanded_options() else {
            return;
        };
        let index = self.state.selected_option;
        let Some(current) = options.get(index) else {
            return;
        };
        let mut value = current.clone();
        value.pop();
        let next = schema::options::with_replaced(&options, index, value);
        self.dispatch(SchemaOp::Edit(id, FieldPatch::options(next)));
    }

    /// Append a new numbered option and select it
    fn append_option(&mut self) {
        let Some((id, options)) = self.expanded_options() else {
            return;
        };
        let next = schema::options::with_appended(&options);
        self.state.selected_option = next.len() - 1;
        self.dispatch(SchemaOp::Edit(id, FieldPatch::options(next)));
    }

    /// Delete the selected option; remaining options shift down
    fn remove_option(&mut self) {
        let Some((id, options)) = self.expanded_options() else {
            return;
        };
        let next = schema::options::with_removed(&options, self.state.selected_option);
        self.dispatch(SchemaOp::Edit(id, FieldPatch::options(next)));
        self.state.clamp_option_selection();
    }
}
