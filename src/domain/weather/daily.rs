use chrono::NaiveDate;

use super::conversions::local_datetime;
use super::{DailyForecast, ForecastSample};

/// Upstream delivers 40 samples at 3-hour spacing, spanning 5 full days.
const MAX_DAYS: usize = 5;

/// Folds a chronologically ordered 3-hour forecast series into one entry per
/// local calendar date, keeping at most the first [`MAX_DAYS`] distinct dates
/// in input order.
///
/// The first sample seen for a date fixes that day's representative
/// condition; later samples only widen the min/max range.
// TODO: consider the midday sample as the representative condition instead of
// the first of the day, which for today is usually the current hour.
#[must_use]
pub fn aggregate_daily(samples: &[ForecastSample], utc_offset_secs: i32) -> Vec<DailyForecast> {
    let mut days: Vec<DailyForecast> = Vec::new();

    for sample in samples {
        let date = local_date(sample.timestamp, utc_offset_secs);
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => {
                day.temp_min = day.temp_min.min(sample.temp_min);
                day.temp_max = day.temp_max.max(sample.temp_max);
            }
            None => days.push(DailyForecast {
                date,
                day_label: super::day_label(sample.timestamp, utc_offset_secs),
                condition_code: sample.condition_code,
                condition_description: sample.condition_description.clone(),
                temp_min: sample.temp_min,
                temp_max: sample.temp_max,
            }),
        }
    }

    days.truncate(MAX_DAYS);
    days
}

fn local_date(timestamp: i64, utc_offset_secs: i32) -> NaiveDate {
    local_datetime(timestamp, utc_offset_secs).date_naive()
}
