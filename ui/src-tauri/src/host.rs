//! [`WindowHost`] backed by a Tauri application handle.

use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindowBuilder, Wry};
use tracing::warn;

use crate::diagnostics::{self, LoadFailure};
use crate::error::{Error, Result};
use crate::shell::WindowHost;
use crate::window::WindowSpec;

pub struct TauriHost<R: Runtime = Wry> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriHost<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> WindowHost for TauriHost<R> {
    fn open_window(&self, spec: &WindowSpec) -> Result<()> {
        let policy = spec.policy;
        let label = spec.label.clone();

        #[cfg_attr(not(windows), allow(unused_mut))]
        let mut builder = WebviewWindowBuilder::new(
            &self.app,
            spec.label.as_str(),
            WebviewUrl::App(spec.entry.into()),
        )
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .devtools(spec.inspector)
        .initialization_script_for_all_frames(spec.frame_script)
        .on_page_load(|window, payload| {
            diagnostics::page_loaded(window.label(), payload.event(), payload.url().as_str());
        })
        .on_navigation(move |url| {
            let allowed = policy.allows_navigation(url);
            if !allowed {
                diagnostics::load_failed(&label, &LoadFailure::blocked_navigation(url.as_str()));
            }
            allowed
        });

        // WebView2 is the only engine that takes these arguments.
        #[cfg(windows)]
        if let Some(args) = policy.browser_args() {
            builder = builder.additional_browser_args(&args);
        }
        if policy.frame_origin_enforcement() {
            warn!(
                window = %spec.label,
                "this webview engine enforces frame-origin headers; the framed site may render blank"
            );
        }

        let window = builder.build().map_err(|source| Error::WindowCreation {
            label: spec.label.clone(),
            source,
        })?;

        if spec.inspector {
            window.open_devtools();
        }
        Ok(())
    }

    fn open_window_count(&self) -> usize {
        self.app.webview_windows().len()
    }
}
