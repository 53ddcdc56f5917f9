use super::*;

// =============================================================
// status
// =============================================================

#[test]
fn loading_hides_sign_in_and_user_fields() {
    let session = SessionView {
        is_loaded: false,
        is_signed_in: true,
        user: Some(SessionUser::new("u1", Some("admin"))),
    };
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn default_session_is_loading() {
    assert_eq!(SessionView::default().status(), SessionStatus::Loading);
    assert_eq!(SessionView::loading(), SessionView::default());
}

#[test]
fn loaded_without_sign_in_is_signed_out() {
    assert_eq!(SessionView::signed_out().status(), SessionStatus::SignedOut);
}

#[test]
fn signed_in_exposes_user_id_and_role() {
    let session = SessionView::signed_in(SessionUser::new("u1", Some("admin")));
    assert_eq!(
        session.status(),
        SessionStatus::SignedIn(Identity { user_id: Some("u1"), role: Some("admin") })
    );
}

#[test]
fn signed_in_without_user_record_has_empty_identity() {
    let session = SessionView { is_loaded: true, is_signed_in: true, user: None };
    assert_eq!(session.status(), SessionStatus::SignedIn(Identity::default()));
}

#[test]
fn empty_user_id_is_reported_as_missing() {
    let session = SessionView::signed_in(SessionUser::new("", None));
    assert_eq!(session.status(), SessionStatus::SignedIn(Identity { user_id: None, role: None }));
}

// =============================================================
// wire format
// =============================================================

#[test]
fn deserializes_provider_camel_case_payload() {
    let session: SessionView = serde_json::from_value(serde_json::json!({
        "isLoaded": true,
        "isSignedIn": true,
        "user": { "id": "user_2x", "publicMetadata": { "role": "admin" }, "firstName": "Ada" }
    }))
    .unwrap();
    assert_eq!(session, SessionView::signed_in(SessionUser::new("user_2x", Some("admin"))));
}

#[test]
fn missing_fields_default_to_loading() {
    let session: SessionView = serde_json::from_str("{}").unwrap();
    assert_eq!(session.status(), SessionStatus::Loading);
}

#[test]
fn null_public_metadata_becomes_empty() {
    let session: SessionView = serde_json::from_value(serde_json::json!({
        "isLoaded": true,
        "isSignedIn": true,
        "user": { "id": "u1", "publicMetadata": null }
    }))
    .unwrap();
    assert_eq!(session.user.unwrap().public_metadata, PublicMetadata::default());
}

#[test]
fn non_string_role_is_dropped() {
    for raw in [serde_json::json!(1), serde_json::json!(true), serde_json::json!(["admin"]), serde_json::Value::Null] {
        let meta: PublicMetadata = serde_json::from_value(serde_json::json!({ "role": raw.clone() })).unwrap();
        assert_eq!(meta.role, None, "role {raw:?} should not survive");
    }
}

#[test]
fn absent_role_is_not_serialized() {
    let value = serde_json::to_value(PublicMetadata::default()).unwrap();
    assert_eq!(value, serde_json::json!({}));
}
