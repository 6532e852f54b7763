use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Typed view over the page info backend's success body.
///
/// The payload itself is always rendered verbatim; this is only used to
/// build a one-line summary when the body has the known shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageInfoSummary {
    pub html_version: String,
    pub page_title: String,
    #[serde(default)]
    pub headings: BTreeMap<String, u64>,
    pub internal_links_count: u64,
    pub external_links_count: u64,
    pub inaccessible_links_count: u64,
    pub contains_login_form: bool,
}

impl PageInfoSummary {
    /// Returns `None` for any payload that is not a page info body
    pub fn from_payload(payload: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }

    pub fn heading_count(&self) -> u64 {
        self.headings.values().sum()
    }

    pub fn one_line(&self) -> String {
        let title = if self.page_title.is_empty() {
            "<untitled>"
        } else {
            self.page_title.as_str()
        };
        let mut line = format!(
            "{} | HTML {} | {} headings | {} internal / {} external links ({} inaccessible)",
            title,
            self.html_version,
            self.heading_count(),
            self.internal_links_count,
            self.external_links_count,
            self.inaccessible_links_count,
        );
        if self.contains_login_form {
            line.push_str(" | login form");
        }
        line
    }
}

/// Which layer a failed fetch broke in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Connect, DNS or body read failure
    Transport,
    /// Body arrived but was not JSON
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Parse => "parse",
        }
    }
}

/// A captured fetch error, cheap to clone into render state
#[derive(Clone, Debug, PartialEq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn github_login() -> serde_json::Value {
        json!({
            "html_version": "5.0",
            "page_title": "Sign in to GitHub · GitHub",
            "headings": {"h1": 1},
            "internal_links_count": 5,
            "external_links_count": 4,
            "inaccessible_links_count": 0,
            "contains_login_form": true
        })
    }

    #[test]
    fn test_summary_from_page_info_body() {
        let summary = PageInfoSummary::from_payload(&github_login()).unwrap();
        assert_eq!(summary.html_version, "5.0");
        assert_eq!(summary.heading_count(), 1);
        assert!(summary.contains_login_form);
        assert_eq!(
            summary.one_line(),
            "Sign in to GitHub · GitHub | HTML 5.0 | 1 headings | 5 internal / 4 external links (0 inaccessible) | login form"
        );
    }

    #[test]
    fn test_summary_skips_error_body() {
        let payload = json!({"error": "invalid URL"});
        assert!(PageInfoSummary::from_payload(&payload).is_none());
    }

    #[test]
    fn test_summary_skips_non_object() {
        assert!(PageInfoSummary::from_payload(&json!([1, 2, 3])).is_none());
        assert!(PageInfoSummary::from_payload(&json!("text")).is_none());
    }

    #[test]
    fn test_untitled_page() {
        let mut payload = github_login();
        payload["page_title"] = json!("");
        payload["contains_login_form"] = json!(false);
        payload["headings"] = json!({"h1": 1, "h2": 4, "h3": 14});
        let line = PageInfoSummary::from_payload(&payload).unwrap().one_line();
        assert!(line.starts_with("<untitled> | HTML 5.0 | 19 headings"));
        assert!(!line.contains("login form"));
    }

    #[test]
    fn test_failure_display() {
        let failure = FetchFailure {
            kind: FailureKind::Parse,
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(failure.to_string(), "parse error: expected value at line 1 column 1");
    }
}
