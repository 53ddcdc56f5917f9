use super::*;
use crate::config::RouteConfig;
use crate::state::session::{SessionStatus, SessionUser};
use crate::util::auth::{GuardOutcome, LocationSnapshot, admin_access};

#[test]
fn profile_endpoint_formats_expected_path() {
    assert_eq!(profile_endpoint("user_42"), "/api/profile/user_42");
}

#[test]
fn profile_endpoint_encodes_user_id_segment() {
    assert_eq!(profile_endpoint("a/b?c"), "/api/profile/a%2Fb%3Fc");
    assert_eq!(profile_endpoint("../admin"), "/api/profile/..%2Fadmin");
}

#[test]
fn parse_session_body_keeps_explicit_not_loaded() {
    let body = r#"{"isLoaded":false,"isSignedIn":true,"user":{"id":"u1","publicMetadata":{"role":"admin"}}}"#;
    let session = parse_session_body(body).unwrap();
    assert_eq!(session.status(), SessionStatus::Loading);
    assert_eq!(
        admin_access(&session, &LocationSnapshot::new("/admin"), &RouteConfig::default()),
        GuardOutcome::Pending
    );
}

#[test]
fn parse_session_body_marks_snapshot_loaded() {
    let session = parse_session_body(r#"{"isSignedIn":false}"#).unwrap();
    assert_eq!(session.status(), SessionStatus::SignedOut);
}

#[test]
fn parse_session_body_reads_user_role() {
    let body = r#"{"isLoaded":true,"isSignedIn":true,"user":{"id":"u1","publicMetadata":{"role":"admin"}}}"#;
    assert_eq!(
        parse_session_body(body).unwrap(),
        SessionView::signed_in(SessionUser::new("u1", Some("admin")))
    );
}

#[test]
fn parse_session_body_rejects_non_json() {
    assert!(matches!(parse_session_body("<html>"), Err(IdentityError::Decode(_))));
}

#[test]
fn parse_profile_body_extracts_role() {
    assert_eq!(parse_profile_body(r#"{"role":"officer","name":"Kim"}"#).unwrap(), Some("officer".to_owned()));
}

#[test]
fn parse_profile_body_treats_empty_or_missing_role_as_none() {
    assert_eq!(parse_profile_body(r#"{"role":""}"#).unwrap(), None);
    assert_eq!(parse_profile_body("{}").unwrap(), None);
    assert_eq!(parse_profile_body(r#"{"role":7}"#).unwrap(), None);
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(IdentityError::Status(503).to_string(), "identity provider returned status 503");
    assert_eq!(
        IdentityError::Unavailable.to_string(),
        "identity provider is only reachable from the browser"
    );
}


// =============================================================
// session_from_response
// =============================================================

#[test]
fn session_from_response_unauthorized_is_signed_out() {
    let session = session_from_response(401, "").unwrap();
    assert_eq!(session.status(), SessionStatus::SignedOut);
}

#[test]
fn session_from_response_server_error_keeps_status() {
    assert_eq!(session_from_response(500, "oops"), Err(IdentityError::Status(500)));
    assert_eq!(session_from_response(403, ""), Err(IdentityError::Status(403)));
}

#[test]
fn session_from_response_success_with_bad_body_is_decode_error() {
    assert!(matches!(session_from_response(200, "not json"), Err(IdentityError::Decode(_))));
}

#[test]
fn session_from_response_success_parses_snapshot() {
    let body = r#"{"isSignedIn":true,"user":{"id":"u1","publicMetadata":{}}}"#;
    assert_eq!(session_from_response(200, body).unwrap(), SessionView::signed_in(SessionUser::new("u1", None)));
}

// =============================================================
// settle_session
// =============================================================

#[test]
fn settle_session_publishes_loaded_snapshot() {
    let snapshot = SessionView::signed_in(SessionUser::new("u1", Some("admin")));
    assert_eq!(settle_session(Ok(snapshot.clone())), snapshot);
}

#[test]
fn settle_session_turns_still_loading_into_signed_out() {
    assert_eq!(settle_session(Ok(SessionView::loading())), SessionView::signed_out());
}

#[test]
fn settle_session_turns_failure_into_signed_out() {
    assert_eq!(settle_session(Err(IdentityError::Status(502))), SessionView::signed_out());
}
