#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: BccHeader::read_from with arbitrary bytes.
//
// Catches bugs in:
// - Signature / record width / curve type / dimensions validation
// - Truncated header handling
// - Little-endian count extraction
fuzz_target!(|data: &[u8]| {
    let _ = bcc_wire::header::BccHeader::read_from(data);
});
