//! The reply to `ceph ping mon.<id>`
//!
//! Only the health status is interesting. Releases before Luminous put it in
//! `health.overall_status`, later ones in `health.status`.

use serde::Deserialize;

use crate::Status;

#[derive(Debug, Deserialize)]
pub(crate) struct PingReply {
    #[serde(default)]
    health: PingHealth,
}

#[derive(Debug, Default, Deserialize)]
struct PingHealth {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    overall_status: Option<String>,
}

impl PingReply {
    /// The reported health string, if there is a non-empty one
    pub(crate) fn health_status(&self) -> Option<&str> {
        self.health
            .status
            .as_ref()
            .or_else(|| self.health.overall_status.as_ref())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

/// Map e.g. `HEALTH_WARN` to `Status::Warning` by its last `_`-separated part
///
/// Anything without a recognisable suffix is unknown.
pub(crate) fn status_from_health(health: &str) -> Status {
    match health.rfind('_') {
        Some(idx) => health[idx + 1..].parse().unwrap_or(Status::Unknown),
        None => Status::Unknown,
    }
}

/// Whether `ceph` told us that the monitor we pinged does not exist
pub(crate) fn is_object_not_found(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("objectnotfound")
        || lower.contains("object not found")
        || lower.contains("enoent")
}

#[cfg(test)]
mod test {
    use super::{is_object_not_found, status_from_health, PingReply};
    use crate::Status;

    fn reply(s: &str) -> PingReply {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn reads_status() {
        let r = reply(r#"{"health":{"status":"HEALTH_WARN","checks":{}}}"#);
        assert_eq!(r.health_status(), Some("HEALTH_WARN"));
    }

    #[test]
    fn falls_back_to_overall_status() {
        let r = reply(
            r#"{"health":{"health":{"health_services":[]},"overall_status":"HEALTH_OK"}}"#,
        );
        assert_eq!(r.health_status(), Some("HEALTH_OK"));
    }

    #[test]
    fn empty_status_is_none() {
        assert_eq!(reply(r#"{"health":{"status":""}}"#).health_status(), None);
        assert_eq!(reply(r#"{"health":{}}"#).health_status(), None);
        assert_eq!(reply("{}").health_status(), None);
    }

    #[test]
    fn health_suffixes() {
        assert_eq!(status_from_health("HEALTH_OK"), Status::Ok);
        assert_eq!(status_from_health("HEALTH_WARN"), Status::Warning);
        assert_eq!(status_from_health("HEALTH_WARNING"), Status::Warning);
        assert_eq!(status_from_health("HEALTH_ERR"), Status::Critical);
        assert_eq!(status_from_health("HEALTH_ERROR"), Status::Critical);
        assert_eq!(status_from_health("HEALTH_UNKNOWN"), Status::Unknown);
        assert_eq!(status_from_health("HEALTH_"), Status::Unknown);
        assert_eq!(status_from_health("degraded"), Status::Unknown);
    }

    #[test]
    fn not_found_markers() {
        assert!(is_object_not_found(
            "error calling ping_monitor: (2) No such file or directory ObjectNotFound"
        ));
        assert!(is_object_not_found("Error ENOENT: mon.x not found"));
        assert!(!is_object_not_found("connection refused"));
    }
}
