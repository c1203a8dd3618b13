use crate::{CoreError, FieldUpdate, User, UserChanges};

fn sample_user() -> User {
    User {
        id: 1,
        name: "spolinaa".to_string(),
        email: "spolinaa@test.ru".to_string(),
    }
}

#[test]
fn test_from_params_with_nothing_is_empty() {
    let changes = UserChanges::from_params(None, None).unwrap();

    assert!(changes.is_empty());
}

#[test]
fn test_from_params_rejects_invalid_email() {
    let result = UserChanges::from_params(Some("name".into()), Some("wrong format email".into()));

    assert!(matches!(result, Err(CoreError::InvalidEmail { .. })));
}

#[test]
fn test_apply_name_only_keeps_email() {
    let mut user = sample_user();
    let changes = UserChanges::from_params(Some("test_name".into()), None).unwrap();

    changes.apply(&mut user);

    assert_eq!(user.name, "test_name");
    assert_eq!(user.email, "spolinaa@test.ru");
}

#[test]
fn test_apply_email_only_keeps_name() {
    let mut user = sample_user();
    let changes = UserChanges::from_params(None, Some("other@test.ru".into())).unwrap();

    assert!(matches!(changes.name, FieldUpdate::Unchanged));
    changes.apply(&mut user);

    assert_eq!(user.name, "spolinaa");
    assert_eq!(user.email, "other@test.ru");
}

#[test]
fn test_apply_empty_changes_leaves_user_untouched() {
    let mut user = sample_user();

    UserChanges::default().apply(&mut user);

    assert_eq!(user, sample_user());
}
