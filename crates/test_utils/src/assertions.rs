//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_people::{Group, IdentityError, Name, People, Person};

/// Asserts each component of a name
///
/// # Panics
///
/// Panics naming the first component that differs
pub fn assert_name(name: &Name, first: &str, middle: Option<&str>, last: &str) {
    assert_eq!(name.first_name(), first, "First name mismatch in [{}]", name);
    assert_eq!(name.middle_name(), middle, "Middle name mismatch in [{}]", name);
    assert_eq!(name.last_name(), last, "Last name mismatch in [{}]", name);
}

/// Asserts that an error is an InvalidArgument with the exact message
pub fn assert_invalid_argument(error: &IdentityError, message: &str) {
    assert!(
        error.is_invalid_argument(),
        "Expected InvalidArgument, got {:?}",
        error
    );
    assert_eq!(error.to_string(), message);
}

/// Asserts that a person has no id and therefore is unsaved
pub fn assert_new_person(person: &Person) {
    assert!(person.is_new(), "Expected new person, got id {:?}", person.id());
    assert!(person.version().is_err(), "Expected no version for [{}]", person.name());
}

/// Asserts that a group holds exactly the given people, in natural order
pub fn assert_members(people: &People, expected: &[&Person]) {
    let actual: Vec<&Person> = people.iter().collect();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Member count mismatch: actual={}, expected={}",
        people,
        expected.len()
    );

    for (index, (actual, expected)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            actual, expected,
            "Member {} mismatch: actual={}, expected={}",
            index,
            actual.name(),
            expected.name()
        );
    }
}
