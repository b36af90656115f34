use super::*;

fn sample_user() -> User {
    User {
        id: "64f1c0de0a1b2c3d4e5f6071".into(),
        email: "ana@example.com".into(),
        name: "Ana".into(),
        role: ROLE_USER.into(),
    }
}

// =============================================================================
// Role markers
// =============================================================================

#[test]
fn role_markers_match_backend_values() {
    assert_eq!(ROLE_USER, "USER");
    assert_eq!(ROLE_ADMIN, "ADMIN");
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_serialize_round_trip() {
    let user = sample_user();
    let json = serde_json::to_string(&user).expect("serialize user");
    let restored: User = serde_json::from_str(&json).expect("deserialize user");
    assert_eq!(restored, user);
}

#[test]
fn user_json_field_names() {
    let json = serde_json::to_value(sample_user()).expect("serialize user");
    assert_eq!(json["id"], "64f1c0de0a1b2c3d4e5f6071");
    assert_eq!(json["email"], "ana@example.com");
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["role"], "USER");
}

#[test]
fn user_unknown_role_carried_verbatim() {
    let raw = r#"{"id":"1","email":"x@y.z","name":"X","role":"PROJECTIONIST"}"#;
    let user: User = serde_json::from_str(raw).expect("deserialize user");
    assert_eq!(user.role, "PROJECTIONIST");
}

#[test]
fn user_missing_field_rejected() {
    let raw = r#"{"id":"1","email":"x@y.z","name":"X"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

// =============================================================================
// AuthPayload
// =============================================================================

#[test]
fn auth_payload_decodes_login_response() {
    let raw = r#"{
        "user": {"id":"1","email":"ana@example.com","name":"Ana","role":"ADMIN"},
        "token": "opaque-bearer"
    }"#;
    let payload: AuthPayload = serde_json::from_str(raw).expect("deserialize payload");
    assert_eq!(payload.token, "opaque-bearer");
    assert_eq!(payload.user.role, ROLE_ADMIN);
}
