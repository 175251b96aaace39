//! Proptest strategies for feedlab property-based testing
//!
//! Reusable generators for post titles, search keywords and the raw JSON
//! values the interactive demos receive.

use feedlab_store::NewPost;
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// Posts and search
// ============================================================================

/// Strategy for post titles: mostly ASCII, sometimes arbitrary printable text.
pub fn strategy_title() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z0-9 ]{0,24}",
        1 => "\\PC{0,16}",
    ]
}

/// Strategy for a feed's worth of titles, duplicates allowed.
pub fn strategy_titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(strategy_title(), 0..30)
}

/// Strategy for short search keywords, including the empty one.
pub fn strategy_keyword() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,4}"
}

pub fn strategy_new_post() -> impl Strategy<Value = NewPost> {
    (
        proptest::option::of(strategy_title()),
        proptest::option::of("[A-Za-z ]{0,40}"),
        proptest::option::of("[a-z]{1,10}"),
        proptest::option::of(prop_oneof![Just("regular"), Just("lecture")]),
    )
        .prop_map(|(title, caption, author, post_type)| NewPost {
            title,
            caption,
            author,
            post_type: post_type.map(str::to_string),
        })
}

// ============================================================================
// Demo payloads
// ============================================================================

/// Strategy for scalar JSON values pushed into the queue and stack demos.
pub fn strategy_demo_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// Strategy for raw values that coerce to an integer, paired with that integer.
pub fn strategy_integer_like() -> impl Strategy<Value = (Value, i64)> {
    (-100_000i64..100_000, 0u8..3).prop_map(|(n, form)| {
        let raw = match form {
            0 => json!(n),
            1 => json!(n.to_string()),
            _ => json!(format!("  {n} ")),
        };
        (raw, n)
    })
}

/// Strategy for raw values that are not integers in any accepted form.
pub fn strategy_non_integer() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Value::from),
        "[0-9]{1,4}\\.[0-9]{1,3}".prop_map(Value::from),
        Just(Value::Null),
        Just(json!([1, 2])),
        Just(json!({"value": 1})),
    ]
}
