// Tool protocol types shared with the hosting agent runtime

use crate::error::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor advertised to the agent runtime for one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A tool invocation as it arrives from the agent runtime.
///
/// `content` carries the tool arguments, either as an object or as a
/// JSON-encoded string of one; some runtimes deliver arguments still
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub content: Value,
}

impl ToolRequest {
    pub fn new(content: Value) -> Self {
        Self { content }
    }

    /// Resolve `content` to an argument map.
    ///
    /// This is the single decode step: it runs once at the dispatch
    /// boundary, before any handler sees the arguments. Missing content is
    /// treated as an empty map; anything that is not an object (or a string
    /// parsing to one) is a content-format error.
    pub fn decode(&self) -> Result<Map<String, Value>, ToolError> {
        match &self.content {
            Value::Object(map) => Ok(map.clone()),
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(map)) => Ok(map),
                _ => Err(ToolError::ContentDecode),
            },
            Value::Null => Ok(Map::new()),
            _ => Err(ToolError::ContentDecode),
        }
    }
}

/// Outcome of one tool invocation: either an ordered field map for the
/// assistant to narrate, or a single error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResult {
    Error { error: String },
    Fields(Map<String, Value>),
}

impl ToolResult {
    pub fn fields(fields: Map<String, Value>) -> Self {
        ToolResult::Fields(fields)
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolResult::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Error { .. })
    }

    /// The field map of a success result, if this is one.
    pub fn as_fields(&self) -> Option<&Map<String, Value>> {
        match self {
            ToolResult::Fields(fields) => Some(fields),
            ToolResult::Error { .. } => None,
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        ToolResult::error(err.to_string())
    }
}
