// Tool dispatch layer for the Kokoro companion assistant
// Maps tool names from the agent runtime to deterministic simulation handlers

pub mod error;
pub mod protocol;
pub mod tools;

pub use error::ToolError;
pub use protocol::{ToolRequest, ToolResult, ToolSchema};
pub use tools::{Tool, ToolRegistry};
