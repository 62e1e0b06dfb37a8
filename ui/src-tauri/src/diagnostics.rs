//! Operator-facing diagnostics: relayed console output and load outcomes.
//!
//! Nothing here retries or closes anything. A failed load leaves the window
//! open for the operator to reload or restart.

use serde::Deserialize;
use tauri::webview::PageLoadEvent;
use tracing::{debug, error, info, warn};

pub const RENDERER_PREFIX: &str = "[Renderer Console]";

/// Chromium's net error for a navigation refused by the embedder.
pub const ERR_BLOCKED_BY_CLIENT: i32 = -20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub text: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub source_id: Option<String>,
    /// Set when the message came from the framed target rather than the
    /// entry document.
    #[serde(default)]
    pub frame_origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadFailure {
    pub code: i32,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl LoadFailure {
    pub fn blocked_navigation(url: impl Into<String>) -> Self {
        Self {
            code: ERR_BLOCKED_BY_CLIENT,
            description: "ERR_BLOCKED_BY_CLIENT".to_string(),
            url: Some(url.into()),
        }
    }
}

pub fn console_message(window: &str, message: &ConsoleMessage) {
    let source = message.source_id.as_deref().unwrap_or("");
    let line = message.line.unwrap_or(0);
    let frame = message.frame_origin.as_deref().unwrap_or("top");
    match message.level {
        ConsoleLevel::Debug => {
            debug!(window, frame, source, line, "{RENDERER_PREFIX} {}", message.text)
        }
        ConsoleLevel::Log | ConsoleLevel::Info => {
            info!(window, frame, source, line, "{RENDERER_PREFIX} {}", message.text)
        }
        ConsoleLevel::Warn => {
            warn!(window, frame, source, line, "{RENDERER_PREFIX} {}", message.text)
        }
        ConsoleLevel::Error => {
            error!(window, frame, source, line, "{RENDERER_PREFIX} {}", message.text)
        }
    }
}

/// Page-load handler: success is logged when a load finishes, never when it starts.
pub fn page_loaded(window: &str, event: PageLoadEvent, url: &str) {
    match event {
        PageLoadEvent::Finished => load_finished(window),
        _ => debug!(window, url, "load started"),
    }
}

pub fn load_finished(window: &str) {
    info!(window, "Main window loaded successfully");
}

pub fn load_failed(window: &str, failure: &LoadFailure) {
    let url = failure.url.as_deref().unwrap_or("");
    error!(
        window,
        url,
        "Failed to load: {} ({})",
        failure.description,
        failure.code
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn message(level: ConsoleLevel, text: &str) -> ConsoleMessage {
        ConsoleMessage {
            level,
            text: text.to_string(),
            line: None,
            source_id: None,
            frame_origin: None,
        }
    }

    #[test]
    fn console_lines_carry_renderer_prefix() {
        let logs = capture(|| console_message("main", &message(ConsoleLevel::Log, "hello")));
        assert!(logs.contains("[Renderer Console] hello"), "{logs}");
        assert!(logs.contains("INFO"), "{logs}");
    }

    #[test]
    fn console_level_maps_to_log_level() {
        let logs = capture(|| {
            console_message("main", &message(ConsoleLevel::Warn, "careful"));
            console_message("main", &message(ConsoleLevel::Error, "broken"));
        });
        assert!(logs.lines().any(|l| l.contains("WARN") && l.contains("careful")), "{logs}");
        assert!(logs.lines().any(|l| l.contains("ERROR") && l.contains("broken")), "{logs}");
    }

    #[test]
    fn load_failure_logs_code_and_description_verbatim() {
        let failure = LoadFailure {
            code: -105,
            description: "NAME_NOT_RESOLVED".to_string(),
            url: None,
        };
        let logs = capture(|| load_failed("main", &failure));
        assert!(logs.contains("Failed to load: NAME_NOT_RESOLVED (-105)"), "{logs}");
    }

    #[test]
    fn framed_target_console_is_relayed_with_its_origin() {
        let mut msg = message(ConsoleLevel::Info, "hello from the frame");
        msg.frame_origin = Some("https://fmhy.net".to_string());
        let logs = capture(|| console_message("main", &msg));
        assert!(logs.contains("[Renderer Console] hello from the frame"), "{logs}");
        assert!(logs.contains("frame=\"https://fmhy.net\""), "{logs}");
    }

    #[test]
    fn frame_origin_deserializes_from_camel_case() {
        let msg: ConsoleMessage = serde_json::from_str(
            r#"{"level":"warn","text":"x","frameOrigin":"https://wiki.fmhy.net"}"#,
        )
        .unwrap();
        assert_eq!(msg.level, ConsoleLevel::Warn);
        assert_eq!(msg.frame_origin.as_deref(), Some("https://wiki.fmhy.net"));
    }

    #[test]
    fn load_start_then_finish_logs_success_once() {
        let url = "tauri://localhost/index.html";
        let logs = capture(|| {
            page_loaded("main", PageLoadEvent::Started, url);
            page_loaded("main", PageLoadEvent::Finished, url);
        });
        assert_eq!(logs.matches("Main window loaded successfully").count(), 1);
        assert!(logs.contains("load started"), "{logs}");
    }

    #[test]
    fn load_start_alone_logs_no_success() {
        let logs = capture(|| page_loaded("main", PageLoadEvent::Started, "tauri://localhost/"));
        assert!(!logs.contains("Main window loaded successfully"), "{logs}");
    }

    #[test]
    fn blocked_navigation_is_a_load_failure() {
        let failure = LoadFailure::blocked_navigation("https://example.com/");
        assert_eq!(failure.code, -20);
        let logs = capture(|| load_failed("main", &failure));
        assert!(logs.contains("ERR_BLOCKED_BY_CLIENT (-20)"), "{logs}");
        assert!(logs.contains("https://example.com/"), "{logs}");
    }
}
