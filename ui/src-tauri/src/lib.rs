//! FMHY desktop shell.
//!
//! Hosts the bundled entry document in a native window; the entry document
//! frames the remote site. Bootstrap lives here so `main` stays a one-liner
//! and the pieces can be tested without a window.

pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod logging;
pub mod shell;
pub mod window;

use std::sync::{Mutex, PoisonError};

use tauri::{AppHandle, Manager, RunEvent};

use crate::config::ShellConfig;
use crate::error::Result;
use crate::host::TauriHost;
use crate::shell::{Shell, ShutdownDecision};

type ShellState = Mutex<Shell<TauriHost>>;

pub fn run() {
    try_run().expect("error while running tauri application");
}

/// Builds the app, opens the main window during setup and hands control to
/// the host event loop. Failing to open the main window is fatal.
pub fn try_run() -> Result<()> {
    let (config, ignored_args) = ShellConfig::from_process();
    logging::init(config.log_filter.as_deref())?;
    if let Some(err) = ignored_args {
        tracing::warn!(kind = ?err.kind(), "ignoring unrecognised command-line arguments");
    }

    let app = tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::report_console_message,
            commands::report_load_failure
        ])
        .setup(move |app| {
            let mut shell = Shell::new(TauriHost::new(app.handle().clone()), config);
            shell.initialize()?;
            app.manage::<ShellState>(Mutex::new(shell));
            Ok(())
        })
        .build(tauri::generate_context!())?;

    app.run(on_run_event);
    Ok(())
}

fn on_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // No exit code means the last window closed on its own.
        RunEvent::ExitRequested { code: None, api, .. } => {
            if with_shell(app, |shell| shell.on_all_windows_closed())
                == Some(ShutdownDecision::StayResident)
            {
                api.prevent_exit();
            }
        }
        RunEvent::ExitRequested { .. } | RunEvent::Exit => {
            with_shell(app, |shell| shell.quit());
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            if let Some(Err(err)) = with_shell(app, |shell| shell.on_reactivate()) {
                tracing::error!(%err, "failed to recreate window on reactivation");
            }
        }
        _ => {}
    }
}

fn with_shell<T>(app: &AppHandle, f: impl FnOnce(&mut Shell<TauriHost>) -> T) -> Option<T> {
    let state = app.try_state::<ShellState>()?;
    let mut shell = state.lock().unwrap_or_else(PoisonError::into_inner);
    Some(f(&mut shell))
}
