//! Shell Controller: window lifecycle and shutdown policy.
//!
//! Every entry point runs as a handler on the host's event loop. The host owns
//! the list of open windows; the controller only asks how many there are.

use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::error::Result;
use crate::window::{WindowSpec, MAIN_LABEL};

/// The windowing host as seen by the controller.
pub trait WindowHost {
    /// Creates a window and starts loading its entry document. Load
    /// completion and failure arrive later through the handlers the host
    /// registers on the window.
    fn open_window(&self, spec: &WindowSpec) -> Result<()>;

    fn open_window_count(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Terminated,
}

/// What the platform expects once the last window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownPolicy {
    TerminatesOnAllWindowsClosed,
    StaysResidentOnAllWindowsClosed,
}

impl ShutdownPolicy {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::StaysResidentOnAllWindowsClosed
        } else {
            Self::TerminatesOnAllWindowsClosed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownDecision {
    Exit,
    StayResident,
}

pub struct Shell<H> {
    host: H,
    config: ShellConfig,
    state: Lifecycle,
    windows_created: usize,
}

impl<H: WindowHost> Shell<H> {
    pub fn new(host: H, config: ShellConfig) -> Self {
        Self {
            host,
            config,
            state: Lifecycle::Uninitialized,
            windows_created: 0,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Runtime-ready handler. Creates the main window.
    pub fn initialize(&mut self) -> Result<()> {
        info!(
            dev_mode = self.config.dev_mode,
            policy = ?self.config.shutdown_policy,
            "shell starting"
        );
        self.create_window()?;
        self.state = Lifecycle::Running;
        Ok(())
    }

    pub fn create_window(&mut self) -> Result<()> {
        let label = if self.host.open_window_count() == 0 {
            MAIN_LABEL.to_string()
        } else {
            format!("{MAIN_LABEL}-{}", self.windows_created)
        };
        let spec = WindowSpec::new(label, &self.config);
        self.host.open_window(&spec)?;
        self.windows_created += 1;
        debug!(label = %spec.label, inspector = spec.inspector, "window created");
        Ok(())
    }

    /// Platform reactivation. Returns whether a window was created.
    pub fn on_reactivate(&mut self) -> Result<bool> {
        if self.state == Lifecycle::Terminated || self.host.open_window_count() > 0 {
            return Ok(false);
        }
        info!("reactivated with no open windows; recreating main window");
        self.create_window()?;
        self.state = Lifecycle::Running;
        Ok(true)
    }

    pub fn on_all_windows_closed(&mut self) -> ShutdownDecision {
        match self.config.shutdown_policy {
            ShutdownPolicy::TerminatesOnAllWindowsClosed => {
                info!("all windows closed; exiting");
                self.state = Lifecycle::Terminated;
                ShutdownDecision::Exit
            }
            ShutdownPolicy::StaysResidentOnAllWindowsClosed => {
                debug!("all windows closed; staying resident");
                ShutdownDecision::StayResident
            }
        }
    }

    /// Explicit quit by the operator.
    pub fn quit(&mut self) {
        if self.state != Lifecycle::Terminated {
            info!("quitting");
            self.state = Lifecycle::Terminated;
        }
    }
}
