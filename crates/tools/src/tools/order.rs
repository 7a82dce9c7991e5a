// Order tracking tool backed by the deterministic order simulation

use crate::protocol::{ToolResult, ToolSchema};
use crate::tools::{json_schema_boolean, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use kokoro_core::order::{simulate_order, OrderSnapshot, OrderStatus};
use serde_json::{json, Map, Value};

/// Tool simulating order tracking by order id.
pub struct TrackOrderTool;

impl TrackOrderTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrackOrderTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept the order id as a string or a bare number, as some runtimes send
/// numeric ids unquoted. Empty and non-coercible values are rejected.
fn coerce_order_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Validation failure shape: distinct from a dispatch failure, it carries
/// the tracking fields as empty placeholders so the assistant can tell the
/// user the id itself was bad.
fn invalid_order_result() -> ToolResult {
    let mut fields = Map::new();
    fields.insert("error".to_string(), json!("Invalid order ID format"));
    fields.insert("orderStatus".to_string(), json!(""));
    fields.insert("estimatedDelivery".to_string(), json!(""));
    fields.insert("lastUpdate".to_string(), json!(""));
    ToolResult::fields(fields)
}

/// Shape a simulated order into tracking fields, resolving the delivery
/// offset against a concrete date.
fn tracking_fields(
    snapshot: &OrderSnapshot,
    order_id: &str,
    request_notifications: bool,
    today: NaiveDate,
) -> Map<String, Value> {
    let delivery = snapshot.delivery_date(today).format("%Y-%m-%d").to_string();

    // Delivered orders have nothing left to notify about.
    let notification = if request_notifications && snapshot.status != OrderStatus::Delivered {
        format!("You will receive notifications for order {}", order_id)
    } else {
        String::new()
    };

    let mut fields = Map::new();
    fields.insert("orderStatus".to_string(), json!(snapshot.status.label()));
    fields.insert("orderNumber".to_string(), json!(order_id));
    fields.insert("notificationStatus".to_string(), json!(notification));

    match snapshot.status {
        OrderStatus::Delivered => {
            fields.insert("deliveredOn".to_string(), json!(delivery));
        }
        OrderStatus::OutForDelivery => {
            fields.insert("expectedDelivery".to_string(), json!("Today"));
        }
        _ => {
            fields.insert("estimatedDelivery".to_string(), json!(delivery));
        }
    }

    match snapshot.status {
        OrderStatus::InTransit => {
            fields.insert("currentLocation".to_string(), json!("Distribution Center"));
        }
        OrderStatus::Delivered => {
            fields.insert("deliveryLocation".to_string(), json!("Front Door"));
        }
        OrderStatus::Delayed => {
            fields.insert("additionalInfo".to_string(), json!("Weather delays possible"));
        }
        _ => {}
    }

    fields
}

#[async_trait::async_trait]
impl Tool for TrackOrderTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "trackOrderTool".to_string(),
            description: "Retrieves real-time order tracking information and detailed status \
                          updates for customer orders by order ID. Provides estimated delivery dates."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "orderId": json_schema_string("The order number or ID to track"),
                    "requestNotifications": json_schema_boolean(
                        "Whether to set up notifications for this order",
                        false
                    )
                }),
                vec!["orderId"],
            ),
        }
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult> {
        let Some(order_id) = coerce_order_id(args.get("orderId")) else {
            return Ok(invalid_order_result());
        };

        let request_notifications = args
            .get("requestNotifications")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let snapshot = simulate_order(&order_id);
        let today = Utc::now().date_naive();
        Ok(ToolResult::fields(tracking_fields(
            &snapshot,
            &order_id,
            request_notifications,
            today,
        )))
    }
}
