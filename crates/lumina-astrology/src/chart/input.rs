use crate::ephemeris::GeoLocation;
use crate::error::ChartCalculationError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Validated birth instant (UT) and location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
}

impl BirthData {
    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]` plus coordinates.
    pub fn parse(
        birth_date: &str,
        birth_time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartCalculationError> {
        let date = parse_date(birth_date)?;
        let time = parse_time(birth_time)?;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartCalculationError::invalid_input(format!(
                "latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartCalculationError::invalid_input(format!(
                "longitude must be between -180 and 180, got {}",
                longitude
            )));
        }

        Ok(Self {
            date,
            time,
            location: GeoLocation {
                lat: latitude,
                lon: longitude,
            },
        })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Time of day as fractional hours
    pub fn fractional_hour(&self) -> f64 {
        fractional_hour(&self.time)
    }
}

pub(crate) fn fractional_hour<T: Timelike>(time: &T) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

fn parse_fields(input: &str, separator: char, what: &str) -> Result<Vec<u32>, ChartCalculationError> {
    input
        .trim()
        .split(separator)
        .map(|field| {
            if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
                return Err(ChartCalculationError::invalid_input(format!(
                    "invalid {} '{}': non-numeric component '{}'",
                    what, input, field
                )));
            }
            field.parse::<u32>().map_err(|e| {
                ChartCalculationError::invalid_input(format!("invalid {} '{}': {}", what, input, e))
            })
        })
        .collect()
}

fn parse_date(input: &str) -> Result<NaiveDate, ChartCalculationError> {
    let fields = parse_fields(input, '-', "date")?;
    let [year, month, day] = fields[..] else {
        return Err(ChartCalculationError::invalid_input(format!(
            "invalid date '{}': expected YYYY-MM-DD",
            input
        )));
    };
    let year = i32::try_from(year).map_err(|_| {
        ChartCalculationError::invalid_input(format!("invalid date '{}': year out of range", input))
    })?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ChartCalculationError::invalid_input(format!("invalid date '{}': no such calendar day", input))
    })
}

fn parse_time(input: &str) -> Result<NaiveTime, ChartCalculationError> {
    let fields = parse_fields(input, ':', "time")?;
    let (hour, minute, second) = match fields[..] {
        [hour, minute] => (hour, minute, 0),
        [hour, minute, second] => (hour, minute, second),
        _ => {
            return Err(ChartCalculationError::invalid_input(format!(
                "invalid time '{}': expected HH:MM",
                input
            )))
        }
    };
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        ChartCalculationError::invalid_input(format!(
            "invalid time '{}': hours must be 0-23, minutes 0-59",
            input
        ))
    })
}
