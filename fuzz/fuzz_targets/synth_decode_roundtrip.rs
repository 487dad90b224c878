#![no_main]

use arbitrary::Arbitrary;
use bcc_decoder::BccDecoder;
use bcc_driver::{BccDriver, DefaultDriver, Document, OutputMode, RenderConfig};
use bcc_tests::FixtureBuilder;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCurve {
    is_loop: bool,
    points: Vec<[f32; 3]>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    curves: Vec<FuzzCurve>,
    up_axis: u8,
    declared_points: Option<u64>,
    trailing: Vec<u8>,
    compact: bool,
}

// Fuzz target: synthesize a valid file from arbitrary curves, decode it,
// and check every point survives bit for bit. Then render the document to
// make sure any decoded file can be rendered.
fuzz_target!(|input: FuzzInput| {
    let mut builder = FixtureBuilder::new();
    builder.up_axis(input.up_axis).trailing(&input.trailing);
    if let Some(n) = input.declared_points {
        builder.declared_points(n);
    }
    for curve in &input.curves {
        if curve.is_loop && !curve.points.is_empty() {
            builder.add_loop(&curve.points);
        } else {
            builder.add_open(&curve.points);
        }
    }

    let bytes = builder.encode();
    let decoded = BccDecoder::decode(&bytes).expect("synthesized file must decode");
    assert_eq!(decoded.curves.len(), input.curves.len());
    assert_eq!(decoded.trailing_bytes, input.trailing.len());

    for (got, want) in decoded.curves.iter().zip(&input.curves) {
        assert_eq!(got.is_loop, want.is_loop && !want.points.is_empty());
        assert_eq!(got.points.len(), want.points.len());
        for (p, q) in got.points.iter().zip(&want.points) {
            let p: [f32; 3] = (*p).into();
            for axis in 0..3 {
                assert_eq!(p[axis].to_bits(), q[axis].to_bits());
            }
        }
    }

    let mode = if input.compact {
        OutputMode::Compact
    } else {
        OutputMode::Pretty
    };
    let document = Document::build(decoded.curves);
    DefaultDriver
        .render(&document, &RenderConfig { mode })
        .expect("render must succeed");
});
