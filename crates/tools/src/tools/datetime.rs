// Date and time tool pinned to the assistant's home timezone

use crate::protocol::{ToolResult, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use anyhow::Result;
use kokoro_core::clock::{self, LocalMoment};
use serde_json::{json, Map, Value};

/// Tool reporting the current date and time in the home timezone.
///
/// Takes no arguments; anything supplied is ignored.
pub struct DateTimeTool;

impl DateTimeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

fn moment_fields(moment: &LocalMoment) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("formattedTime".to_string(), json!(moment.formatted_time));
    fields.insert("date".to_string(), json!(moment.date));
    fields.insert("year".to_string(), json!(moment.year));
    fields.insert("month".to_string(), json!(moment.month));
    fields.insert("day".to_string(), json!(moment.day));
    fields.insert("dayOfWeek".to_string(), json!(moment.day_of_week));
    fields.insert("timezone".to_string(), json!(moment.timezone));
    fields
}

#[async_trait::async_trait]
impl Tool for DateTimeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getDateAndTimeTool".to_string(),
            description: "Get information about the current date and time".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _args: Map<String, Value>) -> Result<ToolResult> {
        Ok(ToolResult::fields(moment_fields(&clock::moment_now())))
    }
}
