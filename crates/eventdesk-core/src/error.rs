// ── Core error types ──
//
// User-facing errors from eventdesk-core. Consumers never see raw HTTP
// status codes or JSON parse failures; the `From<eventdesk_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Request rejected by backend: {message}")]
    Rejected { message: String },

    /// A newer fetch for the same view superseded this one.
    #[error("Superseded by a newer request")]
    Cancelled,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn unknown_value(field: &str, raw: &str) -> Self {
        Self::Internal(format!("backend sent unknown {field} value {raw:?}"))
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<eventdesk_api::Error> for CoreError {
    fn from(err: eventdesk_api::Error) -> Self {
        match err {
            eventdesk_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            eventdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            eventdesk_api::Error::InvalidBaseUrl { url } => CoreError::Config {
                message: format!("Backend URL cannot be used as a base: {url}"),
            },
            eventdesk_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            eventdesk_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            eventdesk_api::Error::RateLimited => CoreError::Api {
                message: "Rate limited by backend -- try again shortly".into(),
                status: Some(429),
            },
            eventdesk_api::Error::NotFound { path, message } => CoreError::NotFound {
                entity_type: entity_type_for_path(&path).into(),
                identifier: identifier_for(&path, message),
            },
            eventdesk_api::Error::Api { status, message } => match status {
                400 | 409 | 422 => CoreError::Rejected { message },
                _ => CoreError::Api {
                    message,
                    status: Some(status),
                },
            },
            eventdesk_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

/// Name the record type from the first path segment of a 404.
fn entity_type_for_path(path: &str) -> &'static str {
    let mut segments = path.trim_start_matches('/').split('/');
    let resource = segments.next().unwrap_or_default();
    match resource {
        "alerts" if segments.next() == Some("weather") => "Weather reading",
        "alerts" => "Alert",
        "events" => "Event",
        "zones" => "Zone",
        "lost-persons" => "Lost-person report",
        "medical-emergencies" => "Medical emergency",
        "medical-facilities" => "Medical facility",
        "emergency-exits" => "Emergency exit",
        "washroom-facilities" => "Washroom",
        "feedback" => "Feedback",
        "crowd-density" => "Crowd reading",
        _ => "Resource",
    }
}

/// Prefer the record id from the path; fall back to the backend's message.
fn identifier_for(path: &str, message: String) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    match segments.as_slice() {
        [_, id] => (*id).to_owned(),
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_record() {
        let err = CoreError::from(eventdesk_api::Error::NotFound {
            path: "/zones/z9".into(),
            message: "Zone not found".into(),
        });
        match err {
            CoreError::NotFound {
                entity_type,
                identifier,
            } => {
                assert_eq!(entity_type, "Zone");
                assert_eq!(identifier, "z9");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn nested_not_found_keeps_backend_message() {
        let err = CoreError::from(eventdesk_api::Error::NotFound {
            path: "/feedback/event/EVT9/stats".into(),
            message: "No feedback found for this event".into(),
        });
        assert!(matches!(
            err,
            CoreError::NotFound { ref identifier, .. }
                if identifier == "No feedback found for this event"
        ));
    }

    #[test]
    fn weather_lookups_are_not_reported_as_alerts() {
        let err = CoreError::from(eventdesk_api::Error::NotFound {
            path: "/alerts/weather/event/EVT9/latest".into(),
            message: "No weather alerts found for this event".into(),
        });
        assert!(matches!(
            err,
            CoreError::NotFound { ref entity_type, .. } if entity_type == "Weather reading"
        ));

        let err = CoreError::from(eventdesk_api::Error::NotFound {
            path: "/alerts/ALT9".into(),
            message: "Alert not found".into(),
        });
        assert!(matches!(
            err,
            CoreError::NotFound { ref entity_type, ref identifier }
                if entity_type == "Alert" && identifier == "ALT9"
        ));
    }

    #[test]
    fn client_errors_become_rejections() {
        let err = CoreError::from(eventdesk_api::Error::Api {
            status: 400,
            message: "Invalid status".into(),
        });
        assert!(matches!(err, CoreError::Rejected { .. }));

        let err = CoreError::from(eventdesk_api::Error::Api {
            status: 500,
            message: "boom".into(),
        });
        assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
    }
}
