//! Error types for the Kokoro tool layer.

/// Failure classes a tool invocation can produce.
///
/// Every variant is rendered into the uniform `{error: ...}` result by the
/// dispatcher; the hosting runtime never sees a raised fault.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Requested name is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool content arrived as text that does not decode to an argument map.
    #[error("Invalid content format")]
    ContentDecode,

    /// A required field is missing, empty, or the wrong shape.
    #[error("{0}")]
    Validation(String),

    /// A handler failed in an unexpected way.
    #[error("Failed to process tool: {0}")]
    Handler(String),
}
