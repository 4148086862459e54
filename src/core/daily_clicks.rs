use chrono::{Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Sample, SampleSeries};
use crate::error::{ChartError, ChartResult};

/// Number of days covered by the click-trend window, today included.
pub const TREND_WINDOW_DAYS: u64 = 7;

/// Click total for one weekday, as reported by the analytics endpoint.
///
/// `day` is the three-letter English abbreviation (`"Mon"`, `"Tue"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClickCount {
    pub day: String,
    pub clicks: u64,
}

/// Builds the seven-day click series ending at `today`.
///
/// One sample per day, oldest first, each placed at 12:00 in `tz`. Days with
/// no matching entry in `daily` plot as zero. When `daily` lists the same
/// weekday twice, the later entry wins.
pub fn seven_day_series<Tz: TimeZone>(
    today: NaiveDate,
    daily: &[DailyClickCount],
    tz: &Tz,
) -> ChartResult<SampleSeries> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0)
        .ok_or_else(|| ChartError::InvalidData("noon must be a valid time".to_owned()))?;

    let mut samples = Vec::with_capacity(TREND_WINDOW_DAYS as usize);
    for days_back in (0..TREND_WINDOW_DAYS).rev() {
        let date = today.checked_sub_days(Days::new(days_back)).ok_or_else(|| {
            ChartError::InvalidData(format!("{today} minus {days_back} days is out of range"))
        })?;
        let local_noon = tz
            .from_local_datetime(&date.and_time(noon))
            .earliest()
            .ok_or_else(|| ChartError::InvalidData(format!("no local noon on {date}")))?;
        let clicks = clicks_for(daily, date.weekday());
        samples.push(Sample::at(local_noon.with_timezone(&Utc), clicks as f64));
    }

    debug!(%today, entries = daily.len(), "built seven-day click series");
    SampleSeries::new(samples)
}

fn clicks_for(daily: &[DailyClickCount], weekday: Weekday) -> u64 {
    let abbreviation = weekday_abbreviation(weekday);
    daily
        .iter()
        .rev()
        .find(|entry| entry.day == abbreviation)
        .map_or(0, |entry| entry.clicks)
}

fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
