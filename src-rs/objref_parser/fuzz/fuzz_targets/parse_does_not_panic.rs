#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|reference: &str| {
    // Arbitrary input must fail cleanly rather than panic.
    let _ = objref_parser::parse(reference);
});
