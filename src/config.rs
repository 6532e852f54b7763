//! Runtime configuration
//!
//! Resolved once in `main` from the command line and the environment, then
//! handed to the components that need it. Nothing below `main` reads the
//! process environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::constants::{API_HOST_ENV_VAR, DEFAULT_API_HOST, DEFAULT_LOG_FILE};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base address of the page info API
    #[arg(long, env = API_HOST_ENV_VAR, default_value = DEFAULT_API_HOST)]
    host: String,

    /// Where to write the diagnostic log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_host: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_host: DEFAULT_API_HOST.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Parse the process arguments (and `PAGEINFO_API_HOST`)
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    /// Configuration pointing at an explicit host, used by tests and embedders
    pub fn with_host(host: impl Into<String>) -> Self {
        Config {
            api_host: host.into(),
            ..Config::default()
        }
    }
}

impl From<ClapArgs> for Config {
    fn from(args: ClapArgs) -> Self {
        Config {
            api_host: args.host,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, MutexGuard};

    // Tests touching PAGEINFO_API_HOST share process state
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        original: Option<OsString>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let original = std::env::var_os(API_HOST_ENV_VAR);
            match value {
                Some(v) => std::env::set_var(API_HOST_ENV_VAR, v),
                None => std::env::remove_var(API_HOST_ENV_VAR),
            }
            EnvGuard { original, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match self.original.take() {
                Some(val) => std::env::set_var(API_HOST_ENV_VAR, val),
                None => std::env::remove_var(API_HOST_ENV_VAR),
            }
        }
    }

    #[test]
    fn test_no_flag_no_env_uses_default() {
        let _env = EnvGuard::set(None);
        let config = Config::try_parse_from(["pageinfo"]).unwrap();
        assert_eq!(config.api_host, DEFAULT_API_HOST);
    }

    #[test]
    fn test_env_supplies_host() {
        let _env = EnvGuard::set(Some("http://from-env.test/api/v1"));
        let config = Config::try_parse_from(["pageinfo"]).unwrap();
        assert_eq!(config.api_host, "http://from-env.test/api/v1");
    }

    #[test]
    fn test_flag_overrides_env() {
        let _env = EnvGuard::set(Some("http://from-env.test/api/v1"));
        let config = Config::try_parse_from(["pageinfo", "--host", "http://from-flag.test"]).unwrap();
        assert_eq!(config.api_host, "http://from-flag.test");
    }

    #[test]
    fn test_default_host() {
        assert_eq!(Config::default().api_host, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_host_flag() {
        let _env = EnvGuard::set(None);
        let config = Config::try_parse_from(["pageinfo", "--host", "http://api.test/v2"]).unwrap();
        assert_eq!(config.api_host, "http://api.test/v2");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_log_file_flag() {
        let config = Config::try_parse_from([
            "pageinfo",
            "--host",
            "http://api.test",
            "--log-file",
            "/tmp/pageinfo-test.log",
        ])
        .unwrap();
        assert_eq!(config.log_file, PathBuf::from("/tmp/pageinfo-test.log"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Config::try_parse_from(["pageinfo", "--verbose-mode"]).is_err());
    }

    #[test]
    fn test_with_host() {
        let config = Config::with_host("http://127.0.0.1:9999");
        assert_eq!(config.api_host, "http://127.0.0.1:9999");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }
}
