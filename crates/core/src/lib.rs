// Deterministic simulation core for the Kokoro companion assistant

pub mod clock;
pub mod mood;
pub mod order;
pub mod seed;
pub mod weather;

pub use mood::{MoodCategory, MoodIntensity};
pub use order::{OrderSnapshot, OrderStatus};
pub use weather::{TemperatureUnit, WeatherCondition, WeatherSnapshot};
