//! Shared fixtures and helpers for the kql-dsl integration tests.

#![allow(dead_code)]

use kql_dsl::QueryNode;

/// Uppercase connectives, as they appear in exported Kibana sample data.
/// These do not split (connective matching is case-sensitive).
pub const UPPERCASE_SAMPLE: &str = r#"event_type:"flow" AND dest_port:80 OR event_type:"dns""#;

/// Status/source filter with a grouped disjunction and a range bound.
pub const STATUS_SAMPLE: &str =
    r#"(status:500 or status:503) and source.ip:"192.168.1.1" and @timestamp > "2023-05-01""#;

/// Deeply nested security-audit filter exercising every clause kind.
pub const AUDIT_SAMPLE: &str = r#"(event.action:("login" or "sudo") and user.name:("admin" or "root")) or (source.ip:*192.168.* and not destination.port:(22 or 443 or 80)) and ((process.name:"ssh" and event.outcome:"failure" and event.count > 10) or (file.path:("/etc/passwd" or "/etc/shadow") and event.type:"change")) and not agent.type:"filebeat" and (alert.severity:(critical or high) and not alert.status:resolved)"#;

/// Log-level filter with `_exists_`, terms shorthand, a negated group, and a
/// relative time bound.
pub const LOGGING_SAMPLE: &str = r#"(_exists_:error.message or log.level:("error" or "critical" or "fatal")) and (host.name:("web-server-*" or "api-server-*") or kubernetes.namespace:("production" or "staging")) and not (message:*"scheduled maintenance"* or event.reason:"HealthCheck") and @timestamp > now-7d"#;

/// Service/time-window filter with both-ended range bounds.
pub const SERVICE_SAMPLE: &str = r#"((service.name:("nginx" or "apache") and http.response.status_code >= 400) or (event.module:"system" and event.dataset:"syslog")) and @timestamp >= "2023-01-01" and @timestamp < "2023-02-01" and not (source.ip:"127.0.0.1" or source.ip:"::1")"#;

/// Translates and renders, panicking on failure.
pub fn translate_json(kql: &str) -> serde_json::Value {
    kql_dsl::translate(kql).unwrap().to_json()
}

pub fn term(field: &str, value: &str) -> QueryNode {
    QueryNode::Term {
        field: field.to_string(),
        value: value.to_string(),
    }
}
