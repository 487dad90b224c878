#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full BCC decoder entry point.
//
// Calls `BccDecoder::decode(data)` on arbitrary input bytes. On success
// the start_index prefix-sum invariant must hold.
fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = bcc_decoder::BccDecoder::decode(data) {
        let mut next = 0u64;
        for curve in &decoded.curves {
            assert_eq!(curve.start_index, next);
            assert_eq!(curve.points.len(), curve.point_count as usize);
            next += u64::from(curve.point_count);
        }
    }
});
