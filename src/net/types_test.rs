use super::*;

#[test]
fn identity_superuser_true() {
    let identity: UserIdentity = serde_json::from_str(r#"{"is_superuser": true}"#).expect("decode");
    assert!(identity.is_superuser);
}

#[test]
fn identity_superuser_false() {
    let identity: UserIdentity =
        serde_json::from_str(r#"{"is_superuser": false}"#).expect("decode");
    assert!(!identity.is_superuser);
}

#[test]
fn identity_missing_flag_defaults_to_false() {
    let identity: UserIdentity =
        serde_json::from_str(r#"{"id": 1, "email": "a@b.c"}"#).expect("decode");
    assert!(!identity.is_superuser);
}

#[test]
fn workout_description_is_optional() {
    let workout: WorkoutSummary =
        serde_json::from_str(r#"{"id": 7, "name": "Push day"}"#).expect("decode");
    assert_eq!(workout.name, "Push day");
    assert!(workout.description.is_none());
}
