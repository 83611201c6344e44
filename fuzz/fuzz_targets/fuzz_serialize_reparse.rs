#![no_main]

use libfuzzer_sys::fuzz_target;
use whatwg_mime::{parse, serialize};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mime) = parse(s) {
            // The essence always survives serialization, even when lossy
            // parameter values do not.
            let reparsed = parse(&serialize(&mime)).expect("serialized form must parse");
            assert_eq!(reparsed.essence(), mime.essence());
        }
    }
});
