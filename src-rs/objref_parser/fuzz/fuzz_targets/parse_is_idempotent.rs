#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|reference: &str| {
    let first = objref_parser::parse(reference);
    let second = objref_parser::parse(reference);
    assert_eq!(first, second);
});
