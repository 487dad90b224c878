//! Implementation of `bcc inspect`.
//!
//! # Output format
//!
//! ```text
//! Header:  BCC, record width 0x44, curve type "C0", 3 dimensions
//! Up axis: 1 (Y)
//! Counts:  2 curves declared, 5 control points declared (5 decoded)
//! Info:    "glove"
//!          676c6f7665000000...
//! Curve 0: loop  3 points  start=0
//! Curve 1: open  2 points  start=3
//! ```
use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use bcc_decoder::{BccDecoder, DecodedFile};
use bcc_types::Curve;
use bcc_wire::UpAxis;

use crate::InspectArgs;

/// Run the `bcc inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if
/// `--curve` names an index past the last curve.
pub fn run(args: &InspectArgs) -> Result<()> {
    let decoded = BccDecoder::decode_path(&args.file)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    if let Some(index) = args.curve
        && index >= decoded.curves.len()
    {
        bail!(
            "curve {index} out of range ({} curves in file)",
            decoded.curves.len()
        );
    }

    print!("{}", header_report(&decoded));

    for (idx, curve) in decoded.curves.iter().enumerate() {
        if let Some(target) = args.curve
            && idx != target
        {
            continue;
        }
        print!("{}", curve_report(idx, curve, args.points));
    }

    if decoded.trailing_bytes > 0 {
        println!("---");
        println!("{} trailing bytes after last curve", decoded.trailing_bytes);
    }

    Ok(())
}

fn header_report(decoded: &DecodedFile) -> String {
    let h = &decoded.header;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Header:  {}, record width {:#04X}, curve type \"{}\", {} dimensions",
        h.signature.escape_ascii(),
        h.record_byte_width,
        h.curve_type.escape_ascii(),
        h.dimensions
    );

    let axis = match h.up_axis() {
        Some(UpAxis::X) => "X",
        Some(UpAxis::Y) => "Y",
        Some(UpAxis::Z) => "Z",
        None => "unknown",
    };
    let _ = writeln!(out, "Up axis: {} ({axis})", h.up_axis);

    let _ = writeln!(
        out,
        "Counts:  {} curve{} declared, {} control points declared ({} decoded)",
        h.curve_count,
        if h.curve_count == 1 { "" } else { "s" },
        h.total_control_points,
        decoded.decoded_points()
    );

    let _ = writeln!(out, "Info:    {:?}", h.file_info.text());
    let _ = writeln!(out, "         {}", hex::encode(h.file_info.as_bytes()));
    out
}

fn curve_report(idx: usize, curve: &Curve, with_points: bool) -> String {
    let mut out = String::new();
    let kind = if curve.is_loop { "loop" } else { "open" };
    let _ = writeln!(
        out,
        "Curve {idx}: {kind}  {} point{}  start={}",
        curve.point_count,
        if curve.point_count == 1 { "" } else { "s" },
        curve.start_index
    );

    if with_points {
        for (i, p) in curve.points.iter().enumerate() {
            let global = curve.start_index + i as u64;
            let _ = writeln!(out, "         [{global}] {:?} {:?} {:?}", p.x, p.y, p.z);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn header_report_lists_informational_fields() {
        let decoded = BccDecoder::decode(&fixture::two_curves()).unwrap();
        let report = header_report(&decoded);
        assert!(report.starts_with("Header:  BCC, record width 0x44, curve type \"C0\", 3 dimensions\n"));
        assert!(report.contains("Up axis: 1 (Y)\n"));
        assert!(report.contains("2 curves declared, 5 control points declared (5 decoded)"));
        assert!(report.contains("Info:    \"glove\"\n"));
        assert!(report.contains("676c6f7665"));
    }

    #[test]
    fn curve_report_with_points() {
        let decoded = BccDecoder::decode(&fixture::two_curves()).unwrap();
        let report = curve_report(1, &decoded.curves[1], true);
        assert_eq!(
            report,
            "Curve 1: open  2 points  start=3\n\
             \x20        [3] 0.0 0.0 1.0\n\
             \x20        [4] 0.0 1.0 1.0\n"
        );
    }
}
