//! Implementation of `bcc validate`.
//!
//! Runs a full decode and reports either a series of checkmarks (`✓`) or
//! a single diagnostic line (`✗`). Exit code 0 on a valid file, 1 on any
//! decode error.
//!
//! # Success output
//!
//! ```text
//! ✓ Header: valid (BCC 0x44 "C0", 3 dimensions)
//! ✓ Curves: 2 curves decoded (1 loop, 1 open)
//! ✓ Points: 5 control points
//! ```
//!
//! The header's control-point total is advisory. When it disagrees with
//! the decoded total an extra `!` line is printed, but validation still
//! passes.
//!
//! # Failure output
//!
//! ```text
//! ✗ Error: header — unsupported format: dimensions expected 3, found 2
//! ```
use anyhow::{Context, Result, anyhow};
use bcc_decoder::{BccDecoder, DecodeError, DecodedFile, TruncationSite};

use crate::ValidateArgs;

/// Run the `bcc validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it fails any
/// structural check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    match BccDecoder::decode(&bytes) {
        Ok(decoded) => {
            for line in success_report(&decoded) {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

fn success_report(decoded: &DecodedFile) -> Vec<String> {
    let h = &decoded.header;
    let loops = decoded.curves.iter().filter(|c| c.is_loop).count();
    let open = decoded.curves.len() - loops;

    let mut lines = vec![
        format!(
            "✓ Header: valid ({} {:#04X} \"{}\", {} dimensions)",
            h.signature.escape_ascii(),
            h.record_byte_width,
            h.curve_type.escape_ascii(),
            h.dimensions
        ),
        format!(
            "✓ Curves: {} curve{} decoded ({loops} loop, {open} open)",
            decoded.curves.len(),
            if decoded.curves.len() == 1 { "" } else { "s" }
        ),
        format!("✓ Points: {} control points", decoded.decoded_points()),
    ];

    if !decoded.declared_total_matches() {
        lines.push(format!(
            "! Note: header declares {} control points, file holds {}",
            h.total_control_points,
            decoded.decoded_points()
        ));
    }
    if decoded.trailing_bytes > 0 {
        lines.push(format!(
            "! Note: {} trailing bytes after last curve",
            decoded.trailing_bytes
        ));
    }
    lines
}

/// Prefix each decode error with the part of the file it concerns.
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::UnsupportedFormat { .. }
        | DecodeError::TruncatedInput {
            site: TruncationSite::Header,
            ..
        } => format!("header — {e}"),
        DecodeError::TruncatedInput {
            site: TruncationSite::CurveLength { curve } | TruncationSite::ControlPoint { curve, .. },
            ..
        }
        | DecodeError::MalformedRecord { curve, .. } => format!("curve {curve} — {e}"),
        DecodeError::Io(_) => e.to_string(),
    }
}
