use super::*;

#[test]
fn user_deserializes_with_uppercase_role() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","email":"sam@example.com","name":"Sam","role":"ADMIN"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name.as_deref(), Some("Sam"));
}

#[test]
fn user_name_defaults_to_none_when_absent() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"sam@example.com","role":"FREE"}"#).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.role, Role::Free);
}

#[test]
fn unknown_role_is_a_deserialization_failure() {
    let result: Result<User, _> =
        serde_json::from_str(r#"{"id":"u1","email":"sam@example.com","role":"SUPERUSER"}"#);
    assert!(result.is_err());
}

#[test]
fn features_response_parses_flag_map() {
    let resp: FeaturesResponse =
        serde_json::from_str(r#"{"features":{"simulation":true,"reports":false}}"#).unwrap();
    assert_eq!(resp.features.get("simulation"), Some(&true));
    assert_eq!(resp.features.get("reports"), Some(&false));
}

#[test]
fn simulation_result_parses_expected_fields() {
    let result: SimulationResult =
        serde_json::from_str(r#"{"years":30,"final_balance":1250000.5,"success_rate":0.87}"#)
            .unwrap();
    assert_eq!(result.years, 30);
    assert!((result.success_rate - 0.87).abs() < f64::EPSILON);
}
