//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the delete-field shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const DELETE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const DELETE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Delete-field shortcut display for status bar hints
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
#[cfg(target_os = "macos")]
pub const DELETE_FIELD_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const DELETE_FIELD_SHORTCUT: &str = "Ctrl+D";
