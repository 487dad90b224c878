//! Implementation of `bcc convert`.
//!
//! Decodes the whole BCC file, builds the curve document, then renders it
//! as JSON to a file (default `INPUT.json`) or stdout (`-o -`). Nothing is
//! written until decoding has fully succeeded, so a malformed input never
//! leaves a partial output file behind.
use std::fs::File;
use std::io::{self, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bcc_decoder::BccDecoder;
use bcc_driver::{BccDriver, DefaultDriver, Document, OutputMode, RenderConfig};
use log::info;

use crate::ConvertArgs;

/// Where the rendered document goes.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Stdout,
    File(PathBuf),
}

/// Run the `bcc convert` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, the output
/// path would overwrite the input, or the output cannot be written.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let target = resolve_target(&args.input, args.output.as_deref())?;

    let decoded = BccDecoder::decode_path(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;

    let curve_count = decoded.curves.len();
    let point_count = decoded.decoded_points();
    let document = Document::build(decoded.curves);

    let config = RenderConfig {
        mode: if args.compact {
            OutputMode::Compact
        } else {
            OutputMode::Pretty
        },
    };

    match target {
        Target::Stdout => {
            let rendered = DefaultDriver
                .render(&document, &config)
                .context("render failed")?;
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .context("cannot write to stdout")?;
            handle.write_all(b"\n").context("cannot write to stdout")?;
        }
        Target::File(path) => {
            write_document(&document, &config, &path)?;
            info!(
                "wrote {curve_count} curves ({point_count} control points) to {}",
                path.display()
            );
        }
    }

    Ok(())
}

/// Render `document` into a freshly created file at `path`.
fn write_document(document: &Document, config: &RenderConfig, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    DefaultDriver
        .render_to(document, config, &mut out)
        .with_context(|| format!("cannot write {}", path.display()))?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

/// Pick the output target from `-o`, defaulting to the input path with a
/// `.json` extension.
fn resolve_target(input: &Path, output: Option<&Path>) -> Result<Target> {
    let path = match output {
        Some(p) if p == Path::new("-") => return Ok(Target::Stdout),
        Some(p) => p.to_path_buf(),
        None => input.with_extension("json"),
    };

    if same_file(&path, input) {
        bail!(
            "output path {} is the input file; pass -o to choose another",
            path.display()
        );
    }
    Ok(Target::File(path))
}

/// True when `a` and `b` name the same file. Paths that do not exist yet
/// are compared as written.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
