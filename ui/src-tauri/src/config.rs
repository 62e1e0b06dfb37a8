//! Startup configuration.
//!
//! The development indicator is read once, from the command line and the
//! environment, and carried into window creation as a plain value.

use std::ffi::OsString;

use clap::Parser;

use crate::shell::ShutdownPolicy;

/// Environment variable that enables development mode, same effect as `--dev`.
pub const DEV_ENV_VAR: &str = "FMHY_DEV";

#[derive(Debug, Default, Parser)]
#[command(name = "fmhy-desktop", version, about = "FMHY in a native window")]
pub struct Cli {
    /// Attach the web inspector to every window.
    #[arg(long)]
    pub dev: bool,

    /// Log filter directive (overrides RUST_LOG), e.g. `debug` or `fmhy_desktop_lib=trace`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    /// Parses `args`, falling back to defaults on a parse error.
    ///
    /// Platform launchers sometimes append arguments of their own, so the
    /// error is handed back for logging instead of aborting the app. Help and
    /// version requests still print and exit.
    pub fn parse_lenient<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => (cli, None),
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub dev_mode: bool,
    pub shutdown_policy: ShutdownPolicy,
    pub log_filter: Option<String>,
}

impl ShellConfig {
    /// Combines the parsed flags with the value of [`DEV_ENV_VAR`], if set.
    pub fn resolve(cli: Cli, dev_env: Option<&str>) -> Self {
        Self {
            dev_mode: cli.dev || dev_env.is_some_and(is_truthy),
            shutdown_policy: ShutdownPolicy::current(),
            log_filter: cli.log,
        }
    }

    /// Reads the process arguments and environment. The second value is the
    /// argument error that was ignored, if any; it is returned rather than
    /// printed because logging is not up yet.
    pub fn from_process() -> (Self, Option<clap::Error>) {
        let (cli, ignored) = Cli::parse_lenient(std::env::args_os());
        let dev_env = std::env::var(DEV_ENV_VAR).ok();
        (Self::resolve(cli, dev_env.as_deref()), ignored)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
