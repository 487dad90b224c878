/// Configuration for rendering a [`Document`](bcc_types::Document).
///
/// The document shape is fixed; configuration only affects layout.
///
/// ```text
/// ┌───────┬──────────────────────────────────────────────────────┐
/// │ Field │ Purpose                                              │
/// ├───────┼──────────────────────────────────────────────────────┤
/// │ mode  │ Pretty (2-space indented) or Compact (single line)   │
/// └───────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
}

/// Text layout for the rendered document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One field or array element per line, two-space indentation.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}
