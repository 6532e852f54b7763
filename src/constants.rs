//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// API host used when neither the flag nor the environment provides one
pub const DEFAULT_API_HOST: &str = "http://localhost:8000/api/v1";

/// Environment variable holding the API host
pub const API_HOST_ENV_VAR: &str = "PAGEINFO_API_HOST";

/// Path segment of the page info endpoint, appended to the host
pub const INFO_PATH: &str = "/info";

/// Name of the query parameter carrying the target URL
pub const URL_PARAM: &str = "url";

/// Placeholder shown in the empty query input
pub const QUERY_PLACEHOLDER: &str = "https://example.com";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "pageinfo.log";

/// Application name
pub const APP_NAME: &str = "Page Info";
