#![no_main]

use libfuzzer_sys::fuzz_target;
use whatwg_mime::{is_valid, parse};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = parse(s);
        assert_eq!(parsed.is_ok(), is_valid(s));
    }
});
