// Tool registry and dispatch

use crate::error::ToolError;
use crate::protocol::{ToolRequest, ToolResult, ToolSchema};
use crate::tools::{DateTimeTool, MoodSuggestionTool, TrackOrderTool, WeatherTool};
use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Descriptor advertised to the agent runtime.
    fn schema(&self) -> ToolSchema;

    /// Run the tool against already-decoded arguments.
    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult>;
}

/// Registry mapping tool names to handlers.
///
/// Lookup is case-insensitive; descriptors keep their exact casing and
/// registration order. Read-only after construction, so concurrent
/// dispatches need no locking.
pub struct ToolRegistry {
    names: Vec<String>,
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            tools: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the four built-in companion tools.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DateTimeTool::new()));
        registry.register(Arc::new(TrackOrderTool::new()));
        registry.register(Arc::new(WeatherTool::new()));
        registry.register(Arc::new(MoodSuggestionTool::new()));
        registry
    }

    /// Register a tool under the lowercased form of its schema name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        if self.tools.insert(name.to_lowercase(), tool).is_none() {
            self.names.push(name);
        }
    }

    /// Get a tool by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name.to_lowercase()).cloned()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(&name.to_lowercase())
    }

    /// All tool descriptors, in registration order with exact casing.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.names
            .iter()
            .filter_map(|name| self.tools.get(&name.to_lowercase()))
            .map(|tool| tool.schema())
            .collect()
    }

    /// Look up and run a tool, normalizing every failure into a result.
    ///
    /// Never panics and never returns an error: unknown names, undecodable
    /// content and handler faults all come back as `{error: ...}` results
    /// the assistant can narrate.
    pub async fn dispatch(&self, tool_name: &str, request: &ToolRequest) -> ToolResult {
        let key = tool_name.to_lowercase();

        let Some(tool) = self.tools.get(&key) else {
            tracing::warn!("Unknown tool requested: {}", key);
            return ToolError::UnknownTool(key).into();
        };

        let args = match request.decode() {
            Ok(args) => args,
            Err(err) => {
                tracing::warn!("Content for tool {} failed to decode", key);
                return err.into();
            }
        };

        tracing::debug!("Dispatching tool {}", key);
        match tool.execute(args).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!("Error processing tool {}: {}", key, err);
                ToolError::Handler(err.to_string()).into()
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str, default: bool) -> Value {
    serde_json::json!({
        "type": "boolean",
        "description": description,
        "default": default
    })
}

pub fn json_schema_enum(description: &str, values: &[&str], default: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "enum": values,
        "default": default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingTool;

    #[async_trait::async_trait]
    impl Tool for FailingTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "failingTool".to_string(),
                description: "Always fails".to_string(),
                input_schema: json_schema_object(json!({}), vec![]),
            }
        }

        async fn execute(&self, _args: Map<String, Value>) -> Result<ToolResult> {
            Err(anyhow::anyhow!("boom"))
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_case_folded() {
        let registry = ToolRegistry::with_builtin_tools();
        let result = registry
            .dispatch("doesNotExist", &ToolRequest::new(json!({})))
            .await;
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "Unknown tool: doesnotexist"})
        );
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let registry = ToolRegistry::with_builtin_tools();
        for name in ["getDateAndTimeTool", "getdateandtimetool", "GETDATEANDTIMETOOL"] {
            let result = registry.dispatch(name, &ToolRequest::new(json!({}))).await;
            assert!(result.as_fields().unwrap().contains_key("formattedTime"));
        }
    }

    #[tokio::test]
    async fn string_content_is_decoded_before_the_handler_runs() {
        let registry = ToolRegistry::with_builtin_tools();
        let request = ToolRequest::new(json!(r#"{"location": "London", "unit": "celsius"}"#));
        let result = registry.dispatch("getWeatherTool", &request).await;
        let fields = result.as_fields().unwrap();
        assert_eq!(fields.get("location"), Some(&json!("London")));
    }

    #[tokio::test]
    async fn malformed_content_yields_format_error() {
        let registry = ToolRegistry::with_builtin_tools();
        let request = ToolRequest::new(json!("{broken"));
        let result = registry.dispatch("getWeatherTool", &request).await;
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "Invalid content format"})
        );
    }

    #[tokio::test]
    async fn handler_faults_are_caught_and_reported() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FailingTool));
        let result = registry
            .dispatch("failingTool", &ToolRequest::new(json!({})))
            .await;
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "Failed to process tool: boom"})
        );
    }

    #[test]
    fn builtin_descriptors_keep_order_and_casing() {
        let registry = ToolRegistry::with_builtin_tools();
        let names: Vec<String> = registry
            .list_schemas()
            .into_iter()
            .map(|schema| schema.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "getDateAndTimeTool",
                "trackOrderTool",
                "getWeatherTool",
                "getMoodSuggestionTool",
            ]
        );
        assert!(registry.contains("TRACKORDERTOOL"));
        assert!(registry.get("getmoodsuggestiontool").is_some());
    }

    #[test]
    fn descriptor_schemas_declare_required_fields() {
        let registry = ToolRegistry::with_builtin_tools();
        let schemas = registry.list_schemas();

        let datetime = &schemas[0].input_schema;
        assert_eq!(datetime["properties"], json!({}));
        assert_eq!(datetime["required"], json!([]));

        let order = &schemas[1].input_schema;
        assert_eq!(order["required"], json!(["orderId"]));
        assert_eq!(order["properties"]["requestNotifications"]["default"], json!(false));

        let weather = &schemas[2].input_schema;
        assert_eq!(weather["required"], json!(["location"]));
        assert_eq!(
            weather["properties"]["unit"]["enum"],
            json!(["celsius", "fahrenheit"])
        );
        assert_eq!(weather["properties"]["unit"]["default"], json!("celsius"));

        let mood = &schemas[3].input_schema;
        assert_eq!(mood["required"], json!(["currentMood"]));
        assert_eq!(
            mood["properties"]["intensity"]["enum"],
            json!(["mild", "moderate", "intense"])
        );
        assert_eq!(mood["properties"]["intensity"]["default"], json!("moderate"));
    }
}
