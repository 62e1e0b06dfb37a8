//! IPC commands available to the bundled entry document.
//!
//! These are the only app commands. The capability granting them is scoped
//! to the shell's own windows, so the framed remote page cannot call them.

use tauri::WebviewWindow;

use crate::diagnostics::{self, ConsoleMessage, LoadFailure};

#[tauri::command]
pub fn report_console_message(window: WebviewWindow, message: ConsoleMessage) {
    diagnostics::console_message(window.label(), &message);
}

#[tauri::command]
pub fn report_load_failure(window: WebviewWindow, failure: LoadFailure) {
    diagnostics::load_failed(window.label(), &failure);
}
