// Date/time answers pinned to a fixed IANA timezone
//
// The assistant reports one consistent home zone regardless of where the
// process runs, so deployments in different regions answer identically.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;

/// The zone all date/time answers are pinned to.
pub const HOME_ZONE: Tz = Los_Angeles;

/// One rendered view of an instant in the home zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMoment {
    /// 12-hour clock with AM/PM, e.g. "07:45 PM".
    pub formatted_time: String,
    /// ISO date, e.g. "2025-03-01".
    pub date: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Upper-case day name, e.g. "SATURDAY".
    pub day_of_week: String,
    /// The zone's live abbreviation, e.g. "PST" or "PDT".
    pub timezone: String,
}

/// Render an instant in the home zone. Pure, so tests can freeze the clock.
pub fn moment_at(instant: DateTime<Utc>) -> LocalMoment {
    let local = instant.with_timezone(&HOME_ZONE);
    LocalMoment {
        formatted_time: local.format("%I:%M %p").to_string(),
        date: local.format("%Y-%m-%d").to_string(),
        year: local.year(),
        month: local.month(),
        day: local.day(),
        day_of_week: local.format("%A").to_string().to_uppercase(),
        timezone: local.format("%Z").to_string(),
    }
}

/// Render the current instant in the home zone.
pub fn moment_now() -> LocalMoment {
    moment_at(Utc::now())
}
