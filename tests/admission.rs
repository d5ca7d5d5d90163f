//! End-to-end admission path: normalize, validate, then query.

use ingress_gateway_entry::entry::validation::validate_all;
use ingress_gateway_entry::{ServiceId, ValidationErrorKind};

mod common;

use common::{assert_contains_lower, entry, listener};

#[test]
fn test_normalize_then_validate_accepts_mixed_case() {
    let mut e = entry(vec![
        listener(1111, "", &["db"]),
        listener(1112, "HtTP", &["*", "web"]),
        listener(1113, "TCP", &["cache"]),
    ]);
    e.normalize().unwrap();

    let protocols: Vec<_> = e.listeners.iter().map(|l| l.protocol.as_str()).collect();
    assert_eq!(protocols, vec!["tcp", "http", "tcp"]);
    assert!(e.validate().is_ok());
}

#[test]
fn test_normalize_is_fixed_point() {
    let mut e = entry(vec![listener(1, "", &[]), listener(2, "HTTP", &[]), listener(3, "Gopher", &[])]);
    e.normalize().unwrap();
    let once = e.clone();
    e.normalize().unwrap();
    assert_eq!(e, once);
}

#[test]
fn test_unknown_protocol_survives_normalize_and_is_rejected() {
    let mut e = entry(vec![listener(1111, "ASDF", &["db"])]);
    e.normalize().unwrap();
    let err = e.validate().unwrap_err();
    assert_contains_lower(
        &err.to_string(),
        "Protocol must be either 'http' or 'tcp', 'asdf' is an unsupported protocol.",
    );
}

#[test]
fn test_tcp_feature_gating() {
    let wildcard = entry(vec![listener(1111, "tcp", &["*"])]);
    assert_eq!(wildcard.validate().unwrap_err().kind(), ValidationErrorKind::WildcardNotAllowed);

    let multi = entry(vec![listener(1111, "tcp", &["db1", "db2"])]);
    let err = multi.validate().unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::MultipleServicesNotSupported);
    assert_contains_lower(&err.to_string(), "multiple services per listener are only supported for protocol");

    let http = entry(vec![listener(1111, "http", &["*", "db1", "db2"])]);
    assert!(http.validate().is_ok());
}

#[test]
fn test_blank_name_rejected_regardless_of_protocol() {
    for protocol in ["tcp", "http"] {
        let e = entry(vec![listener(1111, protocol, &[""])]);
        assert_eq!(e.validate().unwrap_err().kind(), ValidationErrorKind::BlankServiceName);
    }
    let e = entry(vec![listener(1111, "http", &["*"]), listener(1112, "http", &["web", ""])]);
    let err = e.validate().unwrap_err();
    assert_contains_lower(&err.to_string(), "service name cannot be blank (listener on port 1112)");
}

#[test]
fn test_first_error_matches_head_of_all_errors() {
    let e = entry(vec![
        listener(1111, "tcp", &["*"]),
        listener(1112, "http", &[]),
        listener(1112, "tcp", &["a", "b"]),
    ]);
    let all = validate_all(&e);
    assert_eq!(all.len(), 4);
    assert_eq!(e.validate().unwrap_err(), all[0]);
    assert_eq!(all[0].to_string(), "port 1112 declared on two listeners");
}

#[test]
fn test_contains_service_on_stored_entry() {
    let e = entry(vec![listener(1111, "http", &["web"]), listener(1112, "tcp", &["db"])]);
    assert!(e.contains_service(&ServiceId::new("web", None)));
    assert!(e.contains_service(&ServiceId::new("db", None)));
    assert!(!e.contains_service(&ServiceId::new("notexist", None)));

    let wildcard = entry(vec![listener(1111, "http", &["*"])]);
    for name in ["web", "db", "redis", ""] {
        assert!(wildcard.contains_service(&ServiceId::new(name, None)));
    }
}

#[test]
fn test_queries_from_many_threads() {
    let e = std::sync::Arc::new(entry(vec![listener(80, "http", &["web", "api"])]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let e = e.clone();
            std::thread::spawn(move || {
                e.validate().is_ok()
                    && e.contains_service(&ServiceId::new("api", None))
                    && !e.contains_service(&ServiceId::new("db", None))
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
