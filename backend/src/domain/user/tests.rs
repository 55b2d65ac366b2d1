//! Tests for the domain user model.

use super::*;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
fn user_id_rejects_non_positive_values(#[case] raw: i64) {
    assert_eq!(
        UserId::new(raw),
        Err(UserValidationError::NonPositiveId(raw))
    );
}

#[rstest]
#[case(1)]
#[case(i64::MAX)]
fn user_id_accepts_positive_values(#[case] raw: i64) {
    let id = UserId::try_from(raw).expect("positive id");
    assert_eq!(id.get(), raw);
    assert_eq!(id.to_string(), raw.to_string());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn user_name_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
}

#[rstest]
fn user_name_keeps_input_verbatim() {
    let name = UserName::new(" Ada Lovelace ").expect("non-blank");
    assert_eq!(name.as_ref(), " Ada Lovelace ");
}

#[rstest]
#[case("alice", "ALICE", true)]
#[case("Ålborg", "åLBORG", true)]
#[case("alice", "alicia", false)]
fn user_name_compares_case_insensitively(
    #[case] stored: &str,
    #[case] probe: &str,
    #[case] expected: bool,
) {
    let name = UserName::new(stored).expect("valid name");
    assert_eq!(name.matches_ignoring_case(probe), expected);
}

#[rstest]
fn user_exposes_its_parts() {
    let user = User::try_from_parts(3, "grace").expect("valid user");
    assert_eq!(user.id().get(), 3);
    assert_eq!(user.name().as_ref(), "grace");

    let (id, name) = user.into_parts();
    assert_eq!((id.get(), String::from(name)), (3, "grace".to_owned()));
}

#[rstest]
#[case(0, "grace", UserValidationError::NonPositiveId(0))]
#[case(1, " ", UserValidationError::EmptyName)]
fn user_try_from_parts_reports_the_first_failure(
    #[case] id: i64,
    #[case] name: &str,
    #[case] expected: UserValidationError,
) {
    assert_eq!(User::try_from_parts(id, name), Err(expected));
}

#[rstest]
fn listing_without_rows_is_empty() {
    let listing = UserListing::from_sorted(Vec::new());
    assert_eq!(listing, UserListing::Empty);
    assert!(listing.is_empty());
    assert_eq!(listing.len(), 0);
}

#[rstest]
fn listing_with_rows_is_found() {
    let users = vec![
        User::try_from_parts(1, "ada").expect("valid user"),
        User::try_from_parts(2, "grace").expect("valid user"),
    ];
    let listing = UserListing::from_sorted(users.clone());
    assert_eq!(listing.len(), 2);
    assert_eq!(listing, UserListing::Found(users));
}
