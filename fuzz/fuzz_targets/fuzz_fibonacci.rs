#![no_main]

use libfuzzer_sys::fuzz_target;

use cliseed_core::fibonacci;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at 5000 for speed
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 5_000;

    let (a, b, c) = (fibonacci(n), fibonacci(n + 1), fibonacci(n + 2));
    assert_eq!(a + b, c, "F({n}) + F({}) != F({})", n + 1, n + 2);
});
