//! Operator console logging.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, writing to stdout.
///
/// Filter precedence: `directive` (from `--log`), then `RUST_LOG`, then `info`.
pub fn init(directive: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}

fn filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|err| Error::Logging(format!("invalid filter `{directive}`: {err}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directive_is_accepted() {
        assert!(filter(Some("debug")).is_ok());
        assert!(filter(Some("warn,fmhy_desktop_lib=trace")).is_ok());
    }

    #[test]
    fn malformed_directive_is_rejected() {
        let err = filter(Some("fmhy_desktop_lib=loud")).unwrap_err();
        assert!(err.to_string().contains("fmhy_desktop_lib=loud"), "{err}");
    }
}
