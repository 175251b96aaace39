//! Property tests for feedlab-error
//!
//! Status codes and rendering of context pairs.

use feedlab_error::{ErrorCategory, FeedlabError, parse_error, validation_error};
use proptest::prelude::*;

fn strategy_category() -> impl Strategy<Value = ErrorCategory> {
    prop_oneof![
        Just(ErrorCategory::Validation),
        Just(ErrorCategory::Parse),
        Just(ErrorCategory::Unknown),
    ]
}

proptest! {
    // Caller-input categories map to 400, everything else to 500.
    #[test]
    fn prop_status_code_follows_category(category in strategy_category(), message in ".{0,40}") {
        let err = FeedlabError::new(message.clone(), category);
        let expected = match category {
            ErrorCategory::Validation | ErrorCategory::Parse => 400,
            ErrorCategory::Unknown => 500,
        };
        prop_assert_eq!(err.status_code(), expected);
        prop_assert_eq!(err.message(), message.as_str());
    }

    // Every context pair shows up in the rendered message, in order.
    #[test]
    fn prop_display_lists_context_in_order(
        pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-z0-9]{0,8}"), 1..6)
    ) {
        let mut err = validation_error("value must be integer");
        for (key, value) in &pairs {
            err = err.with_context(key.clone(), value.clone());
        }
        let display = err.to_string();
        let rendered: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let expected = format!("[validation] value must be integer ({})", rendered.join(", "));
        prop_assert_eq!(display, expected);
        prop_assert_eq!(err.context().len(), pairs.len());
    }

    // The convenience constructors keep the message verbatim.
    #[test]
    fn prop_constructors_keep_message(message in ".{0,40}") {
        prop_assert_eq!(parse_error(message.clone()).to_string(), format!("[parse] {message}"));
        prop_assert!(validation_error(message).is_validation_error());
    }
}
