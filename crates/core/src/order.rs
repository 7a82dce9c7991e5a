// Deterministic order-tracking simulation
//
// An order's state is never stored; it is recomputed on every call from a
// seed derived from the order id, so the same order always reports the same
// status and delivery estimate.

use crate::seed::SimRng;
use chrono::{Duration, NaiveDate};

/// Stages an order can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Received,
    Processing,
    PreparingForShipment,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
    Delayed,
}

impl OrderStatus {
    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Order received",
            OrderStatus::Processing => "Processing",
            OrderStatus::PreparingForShipment => "Preparing for shipment",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In transit",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Delayed => "Delayed",
        }
    }
}

/// Relative weights for the status draw. Most orders are somewhere in the
/// middle of the pipeline; delays are rare.
const STATUS_WEIGHTS: [(OrderStatus, u32); 8] = [
    (OrderStatus::Received, 10),
    (OrderStatus::Processing, 15),
    (OrderStatus::PreparingForShipment, 15),
    (OrderStatus::Shipped, 20),
    (OrderStatus::InTransit, 20),
    (OrderStatus::OutForDelivery, 10),
    (OrderStatus::Delivered, 5),
    (OrderStatus::Delayed, 3),
];

/// The simulated state of one order, derived fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSnapshot {
    pub status: OrderStatus,
    /// Signed day offset from "today" to the (estimated or actual)
    /// delivery date. Negative for already-delivered orders.
    pub delivery_offset_days: i64,
}

impl OrderSnapshot {
    /// Resolve the delivery offset against a concrete date.
    pub fn delivery_date(&self, today: NaiveDate) -> NaiveDate {
        today + Duration::days(self.delivery_offset_days)
    }
}

/// Simulate the current state of an order.
///
/// Bit-for-bit reproducible: the status and offset come from a generator
/// seeded from `order_id` alone.
pub fn simulate_order(order_id: &str) -> OrderSnapshot {
    let mut rng = SimRng::for_key(order_id);
    let status = *rng.pick_weighted(&STATUS_WEIGHTS);

    let delivery_offset_days = match status {
        // Delivered orders arrived up to three days ago.
        OrderStatus::Delivered => -rng.pick_range(0, 3),
        // Out for delivery means today.
        OrderStatus::OutForDelivery => 0,
        // Everything else is still on its way.
        _ => rng.pick_range(1, 10),
    };

    OrderSnapshot {
        status,
        delivery_offset_days,
    }
}
