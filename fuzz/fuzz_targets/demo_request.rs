//! Fuzz harness for demo requests
//!
//! Feeds arbitrary lines to one long-lived demo context. Every line must
//! produce a response with a 2xx or 4xx status, never a panic.

#![no_main]

use feedlab_demo::DemoContext;
use feedlab_logging::Logger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    let ctx = DemoContext::new(Logger::silent());
    for line in input.lines() {
        let response = ctx.handle_json(line);
        assert!(response.status == 200 || response.status == 400);
    }
});
