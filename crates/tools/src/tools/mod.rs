pub mod datetime;
pub mod mood;
pub mod order;
pub mod weather;
mod registry;

pub use datetime::DateTimeTool;
pub use mood::MoodSuggestionTool;
pub use order::TrackOrderTool;
pub use registry::{
    json_schema_boolean, json_schema_enum, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};
pub use weather::WeatherTool;
