// Deterministic weather simulation
//
// A location's weather is a pure function of the location string: condition,
// temperature, humidity and wind all come from a generator seeded from it.

use crate::seed::SimRng;

/// Simulated sky conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
    Snowy,
    Foggy,
    Windy,
}

impl WeatherCondition {
    /// All conditions, in draw order.
    pub const ALL: [WeatherCondition; 8] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Snowy,
        WeatherCondition::Foggy,
        WeatherCondition::Windy,
    ];

    /// Human-readable condition label.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snowy => "Snowy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Windy => "Windy",
        }
    }

    /// Plausible Celsius range for the condition, inclusive.
    pub fn temp_range_celsius(&self) -> (i32, i32) {
        match self {
            WeatherCondition::Sunny => (25, 35),
            WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy => (18, 28),
            WeatherCondition::Rainy | WeatherCondition::Thunderstorm => (15, 25),
            WeatherCondition::Snowy => (-5, 5),
            WeatherCondition::Foggy => (10, 20),
            WeatherCondition::Windy => (15, 25),
        }
    }
}

/// Temperature unit requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parse a unit name, case-insensitively. Anything other than
    /// "fahrenheit" falls back to Celsius.
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("fahrenheit") {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        }
    }

    /// Display symbol for the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// The simulated weather at one location, derived fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub condition: WeatherCondition,
    pub base_temp_celsius: i32,
    pub humidity_pct: i32,
    pub wind_kmh: i32,
}

impl WeatherSnapshot {
    /// Temperature converted to the requested unit.
    pub fn temperature_in(&self, unit: TemperatureUnit) -> i32 {
        match unit {
            TemperatureUnit::Celsius => self.base_temp_celsius,
            TemperatureUnit::Fahrenheit => {
                (f64::from(self.base_temp_celsius) * 9.0 / 5.0 + 32.0).round() as i32
            }
        }
    }
}

/// Simulate current weather for a location.
///
/// Reproducible: every field comes from a generator seeded from `location`.
pub fn simulate_weather(location: &str) -> WeatherSnapshot {
    let mut rng = SimRng::for_key(location);

    let condition = WeatherCondition::ALL[rng.pick_range(0, 7) as usize];
    let (lo, hi) = condition.temp_range_celsius();
    let base_temp_celsius = rng.pick_range(i64::from(lo), i64::from(hi)) as i32;
    let humidity_pct = rng.pick_range(30, 90) as i32;
    let wind_kmh = rng.pick_range(5, 30) as i32;

    WeatherSnapshot {
        condition,
        base_temp_celsius,
        humidity_pct,
        wind_kmh,
    }
}
