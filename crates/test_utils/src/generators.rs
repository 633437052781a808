//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain_people::{Name, NameParser};
use proptest::prelude::*;

/// Name components that are never honorific titles, suffixes or
/// generational markers
const NAME_WORDS: &[&str] = &[
    "Jon", "Jane", "Ellie", "Sarah", "Bloom", "Doe", "Handy", "Pigg", "Einstein", "Jason",
    "Xander", "Charles", "Gordon", "Howell", "Li", "Wei", "Ana", "Bo", "Q", "Maria",
];

/// Strategy for a single capitalized name word
pub fn name_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(NAME_WORDS).prop_map(str::to_string),
        "[A-Z][a-z]{2,9}".prop_filter("must not be a title or suffix", |word| {
            let parser = NameParser::new();
            !parser.is_title(word) && !parser.is_suffix(word)
        }),
    ]
}

/// Strategy for names with an optional middle name
pub fn name_strategy() -> impl Strategy<Value = Name> {
    (
        name_word_strategy(),
        prop::option::of(name_word_strategy()),
        name_word_strategy(),
    )
        .prop_map(|(first, middle, last)| Name::new(&first, middle.as_deref(), &last).unwrap())
}

/// Strategy for instants between 1900 and 2024
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    let span = (Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() - start).num_seconds();

    (0..span).prop_map(move |offset| start + Duration::seconds(offset))
}

/// Strategy for a non-negative span of up to 150 years, in seconds
pub fn lifespan_strategy() -> impl Strategy<Value = Duration> {
    (0i64..150 * 366 * 24 * 60 * 60).prop_map(Duration::seconds)
}
