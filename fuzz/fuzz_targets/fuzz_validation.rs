#![no_main]

use libfuzzer_sys::fuzz_target;

use cliseed_core::parse_nth_number;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic, and accepted values must print back to themselves
    if let Ok(n) = parse_nth_number(raw) {
        assert_eq!(parse_nth_number(&n.to_string()), Ok(n));
    }
});
