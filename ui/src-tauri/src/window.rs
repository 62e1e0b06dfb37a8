//! Window Instance configuration.
//!
//! The entry document embeds the remote target in a frame. The target answers
//! with headers that deny framing, so frame-origin enforcement is relaxed for
//! the window's content where the engine allows it. Access to the shell's
//! commands stays with the bundled document: the capability and
//! `withGlobalTauri: false` in the host config cover that, and the
//! navigation guard here keeps the bundled document on top.

use tauri::Url;

use crate::config::ShellConfig;

pub const WINDOW_TITLE: &str = "FMHY - FreeMediaHeckYeah";
pub const WINDOW_WIDTH: f64 = 1280.0;
pub const WINDOW_HEIGHT: f64 = 800.0;

/// Bundled entry document, resolved against the app's own assets.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Host embedded by the entry document.
pub const TARGET_HOST: &str = "fmhy.net";

pub const MAIN_LABEL: &str = "main";

/// Injected into every frame. Subframes post their console output to the
/// entry document, which relays it over IPC; subframes never see IPC.
pub const FRAME_CONSOLE_RELAY: &str = include_str!("../scripts/frame-console.js");

/// WebView2 feature flags Tauri passes by default. Supplying our own
/// arguments replaces them, so they are repeated here.
const WEBVIEW2_DEFAULT_ARGS: &str =
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection";

/// Origins the bundled assets are served from, depending on platform.
const APP_ORIGINS: &[(&str, &str)] = &[
    ("tauri", "localhost"),
    ("http", "tauri.localhost"),
    ("https", "tauri.localhost"),
];

/// Content-loading security posture of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPolicy {
    frame_origin_enforcement: bool,
}

impl ContentPolicy {
    /// Posture for hosting a third-party page inside a local frame.
    ///
    /// Only WebView2 accepts a switch that lifts frame-origin enforcement;
    /// WebKit engines keep enforcing it.
    pub fn framed_target() -> Self {
        Self {
            frame_origin_enforcement: !cfg!(windows),
        }
    }

    pub fn frame_origin_enforcement(&self) -> bool {
        self.frame_origin_enforcement
    }

    /// Browser arguments applying the relaxation. Only WebView2 honours them.
    pub fn browser_args(&self) -> Option<String> {
        if self.frame_origin_enforcement {
            return None;
        }
        Some(format!(
            "{WEBVIEW2_DEFAULT_ARGS} --disable-web-security --disable-site-isolation-trials"
        ))
    }

    /// Whether `url` may become the window's top-level document.
    ///
    /// Only the bundled app and the embedded target are allowed; anything
    /// else would leave the entry document and its IPC bridge behind.
    pub fn allows_navigation(&self, url: &Url) -> bool {
        if url.as_str() == "about:blank" {
            return true;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        if APP_ORIGINS
            .iter()
            .any(|(scheme, origin)| url.scheme() == *scheme && host == *origin)
        {
            return true;
        }
        url.scheme() == "https"
            && (host == TARGET_HOST || host.ends_with(&format!(".{TARGET_HOST}")))
    }
}

/// Everything needed to create one Window Instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub label: String,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub entry: &'static str,
    pub inspector: bool,
    pub policy: ContentPolicy,
    pub frame_script: &'static str,
}

impl WindowSpec {
    pub fn new(label: impl Into<String>, config: &ShellConfig) -> Self {
        Self {
            label: label.into(),
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            entry: ENTRY_DOCUMENT,
            inspector: config.dev_mode,
            policy: ContentPolicy::framed_target(),
            frame_script: FRAME_CONSOLE_RELAY,
        }
    }
}
