//! Date and time generators.
//!
//! All values are drawn from the ten years leading up to the moment of
//! generation, in UTC.

use super::pick;
use chrono::{DateTime, Datelike, Duration, Utc};
use fake::faker::address::en::TimeZone;
use fake::Fake;
use rand::Rng;

const TEN_YEARS_SECS: i64 = 10 * 365 * 24 * 60 * 60;

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

fn random_datetime<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(rng.random_range(0..TEN_YEARS_SECS))
}

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "time" => random_datetime(rng).to_string(),
        "time_am_pm" => pick(rng, &["AM", "PM"]),
        "time_ansic" => random_datetime(rng).format("%a %b %e %H:%M:%S %Y").to_string(),
        "time_century" => pick(rng, CENTURIES),
        "time_date" => random_datetime(rng).format("%Y-%m-%d").to_string(),
        "time_day_of_month" => random_datetime(rng).day().to_string(),
        "time_day_of_week" => random_datetime(rng)
            .weekday()
            .num_days_from_sunday()
            .to_string(),
        "time_iso8601" => random_datetime(rng).to_rfc3339(),
        "time_kitchen" => random_datetime(rng).format("%-I:%M%p").to_string(),
        "time_month" => random_datetime(rng).month().to_string(),
        "time_month_name" => random_datetime(rng).format("%B").to_string(),
        "time_unix" => random_datetime(rng).timestamp().to_string(),
        "time_unix_date" => random_datetime(rng)
            .format("%a %b %e %H:%M:%S UTC %Y")
            .to_string(),
        "time_year" => random_datetime(rng).year().to_string(),
        "timestamp" => random_datetime(rng)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        "timezone" => TimeZone().fake_with_rng(rng),
        _ => return None,
    };
    Some(value)
}
