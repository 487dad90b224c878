/// Errors that can occur while rendering a document.
///
/// ```text
/// ┌───────────┬───────────────────────────────────────────────┐
/// │ Variant   │ Cause                                         │
/// ├───────────┼───────────────────────────────────────────────┤
/// │ Serialize │ serde_json failed, including sink write errors │
/// └───────────┴───────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render document: {0}")]
    Serialize(#[from] serde_json::Error),
}
