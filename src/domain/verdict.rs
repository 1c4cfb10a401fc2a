// Day evaluation: turns one raw forecast record into a hiking verdict
use super::forecast::{
    resolve_clouds, resolve_feels_like_kelvin, resolve_primary_category, resolve_sky_description,
    resolve_sky_text, resolve_wind_speed_ms, RawDayRecord,
};
use super::sky::is_sunny;
use super::thresholds::ThresholdConfig;
use super::units::{kelvin_to_fahrenheit, meters_per_second_to_mph};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayVerdict {
    pub date: NaiveDate,
    /// `None` when the record carried no usable feels-like value.
    pub feels_like_f: Option<f64>,
    pub wind_mph: f64,
    pub clouds: f64,
    pub sky_description: String,
    pub good_temp: bool,
    pub good_wind: bool,
    pub good_sky: bool,
    pub overall: bool,
}

impl DayVerdict {
    pub fn temperature_reason(&self, thresholds: &ThresholdConfig) -> &'static str {
        match self.feels_like_f {
            _ if self.good_temp => "Temp OK",
            None => "Temp unknown",
            Some(f) if f < thresholds.min_feels_like_f => "Too cold",
            Some(_) => "Too warm",
        }
    }

    pub fn wind_reason(&self) -> &'static str {
        if self.good_wind { "Wind OK" } else { "Too windy" }
    }

    pub fn sky_reason(&self) -> &'static str {
        if self.good_sky { "Sunny enough" } else { "Too cloudy" }
    }

    /// Temperature, wind and sky labels, in that order.
    pub fn reasons(&self, thresholds: &ThresholdConfig) -> [&'static str; 3] {
        [
            self.temperature_reason(thresholds),
            self.wind_reason(),
            self.sky_reason(),
        ]
    }
}

/// Evaluate a day, reading its timestamp as a date in the local timezone of
/// the machine running the evaluation.
pub fn evaluate_day(record: &RawDayRecord, thresholds: &ThresholdConfig) -> DayVerdict {
    evaluate_day_in(record, thresholds, &Local)
}

pub fn evaluate_day_in<Tz: TimeZone>(
    record: &RawDayRecord,
    thresholds: &ThresholdConfig,
    tz: &Tz,
) -> DayVerdict {
    let feels_like_f = resolve_feels_like_kelvin(record).map(kelvin_to_fahrenheit);
    let wind_mph = meters_per_second_to_mph(resolve_wind_speed_ms(record));
    let clouds = resolve_clouds(record);

    let good_temp = feels_like_f.is_some_and(|f| thresholds.accepts_temperature(f));
    let good_wind = thresholds.accepts_wind(wind_mph);
    let good_sky = is_sunny(
        clouds,
        resolve_primary_category(record),
        resolve_sky_text(record),
        thresholds.max_cloud_percent_sunny,
    );

    DayVerdict {
        date: local_date(record.dt, tz),
        feels_like_f,
        wind_mph,
        clouds,
        sky_description: resolve_sky_description(record),
        good_temp,
        good_wind,
        good_sky,
        overall: good_temp && good_wind && good_sky,
    }
}

/// Calendar date of an epoch timestamp in `tz`. Timestamps chrono cannot
/// represent fall back to 1970-01-01.
fn local_date<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> NaiveDate {
    DateTime::from_timestamp_millis(epoch_secs.saturating_mul(1000))
        .map(|utc| utc.with_timezone(tz).date_naive())
        .unwrap_or_default()
}
