use crate::FieldUpdate;

#[test]
fn test_default_is_unchanged() {
    assert_eq!(FieldUpdate::<String>::default(), FieldUpdate::Unchanged);
}

#[test]
fn test_from_option() {
    assert_eq!(FieldUpdate::from(Some(5)), FieldUpdate::Set(5));
    assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Unchanged);
}

#[test]
fn test_apply_to_only_overwrites_when_set() {
    let mut value = String::from("old");

    FieldUpdate::Unchanged.apply_to(&mut value);
    assert_eq!(value, "old");

    FieldUpdate::Set(String::from("new")).apply_to(&mut value);
    assert_eq!(value, "new");
}

#[test]
fn test_set_to_empty_string_is_still_set() {
    let mut value = String::from("old");

    FieldUpdate::Set(String::new()).apply_to(&mut value);

    assert_eq!(value, "");
}

#[test]
fn test_try_map_skips_unchanged() {
    let unchanged: FieldUpdate<&str> = FieldUpdate::Unchanged;
    let result: Result<FieldUpdate<i32>, String> =
        unchanged.try_map(|_| Err("must not be called".to_string()));

    assert_eq!(result, Ok(FieldUpdate::Unchanged));
}

#[test]
fn test_try_map_propagates_error() {
    let result: Result<FieldUpdate<i32>, std::num::ParseIntError> =
        FieldUpdate::Set("abc").try_map(str::parse);

    assert!(result.is_err());
}

#[test]
fn test_as_set_and_is_set() {
    let set = FieldUpdate::Set(3);
    let unchanged: FieldUpdate<i32> = FieldUpdate::Unchanged;

    assert!(set.is_set());
    assert_eq!(set.as_set(), Some(&3));
    assert!(!unchanged.is_set());
    assert_eq!(unchanged.as_set(), None);
}
