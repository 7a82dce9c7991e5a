// Mood suggestion tool backed by the static mood catalog

use crate::error::ToolError;
use crate::protocol::{ToolResult, ToolSchema};
use crate::tools::{json_schema_enum, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use kokoro_core::mood::{general_advice, match_mood, suggestions_for, MoodIntensity};
use serde_json::{json, Map, Value};

/// Tool matching a described mood to suggestions from the catalog.
pub struct MoodSuggestionTool;

impl MoodSuggestionTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoodSuggestionTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for MoodSuggestionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getMoodSuggestionTool".to_string(),
            description: "Get personalized suggestions to improve mood or emotional state"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "currentMood": json_schema_string("The user's current mood or emotional state"),
                    "intensity": json_schema_enum(
                        "The intensity of the mood (mild, moderate, intense)",
                        &["mild", "moderate", "intense"],
                        "moderate"
                    )
                }),
                vec!["currentMood"],
            ),
        }
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult> {
        let current_mood = args
            .get("currentMood")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase();
        if current_mood.is_empty() {
            return Ok(ToolError::Validation("Current mood is required".to_string()).into());
        }

        // The raw intensity is echoed back even when it is not a known level
        // and the lookup fell back to the moderate list.
        let intensity_raw = args
            .get("intensity")
            .and_then(Value::as_str)
            .unwrap_or("moderate")
            .to_lowercase();
        let intensity = MoodIntensity::parse(&intensity_raw);

        let category = match_mood(&current_mood);
        let suggestions = suggestions_for(category, intensity);

        let mut fields = Map::new();
        fields.insert("mood".to_string(), json!(category.name()));
        fields.insert("intensity".to_string(), json!(intensity_raw));
        fields.insert("suggestions".to_string(), json!(suggestions));
        fields.insert("generalAdvice".to_string(), json!(general_advice(category)));
        Ok(ToolResult::fields(fields))
    }
}
