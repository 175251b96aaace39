//! Fuzz harness for feedlab config files
//!
//! Target: YAML and JSON loading of `FeedlabConfig`

#![no_main]

use feedlab_config::FeedlabConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // Failing to parse is fine; panicking is not.
    let _: Result<FeedlabConfig, _> = serde_yaml::from_str(input);
    let _: Result<FeedlabConfig, _> = serde_json::from_str(input);
});
