#![no_main]

use bcc_wire::curve_frame::{read_control_point, CurveLength, LENGTH_PREFIX_SIZE};
use libfuzzer_sys::fuzz_target;

// Fuzz target: one curve record's length prefix and first point.
//
// Any i32 must either map to a point count or be rejected; the loop
// flag must agree with the sign.
fuzz_target!(|data: &[u8]| {
    let Ok(raw) = CurveLength::read_raw(data) else {
        return;
    };
    match CurveLength::from_raw(raw) {
        Ok(len) => {
            assert_eq!(len.is_loop, raw < 0);
            assert_eq!(i64::from(len.point_count), i64::from(raw).abs());
        }
        Err(_) => assert_eq!(raw, i32::MIN),
    }
    let _ = read_control_point(&data[LENGTH_PREFIX_SIZE..]);
});
