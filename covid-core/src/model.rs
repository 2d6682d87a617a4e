use serde::{Deserialize, Serialize};
use std::{iter::Sum, ops::Add};

/// A non-negative case count, or the "not a number" sentinel produced when a
/// CSV cell could not be read as a count.
///
/// Addition poisons: if either side is the sentinel, so is the result.
/// Serializes as a plain JSON number, or `null` for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Count(Option<u64>);

impl Count {
    pub const ZERO: Count = Count(Some(0));
    pub const NAN: Count = Count(None);

    pub const fn new(value: u64) -> Self {
        Self(Some(value))
    }

    /// Coerce a raw CSV cell. Surrounding whitespace is ignored; empty or
    /// non-numeric text becomes [`Count::NAN`]. Integral decimals such as
    /// `"12.0"` are accepted.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<u64>() {
            return Self(Some(n));
        }

        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Self(Some(f as u64))
            }
            _ => Self::NAN,
        }
    }

    pub fn get(self) -> Option<u64> {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Count {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl Add for Count {
    type Output = Count;

    fn add(self, rhs: Count) -> Count {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Count(Some(a.saturating_add(b))),
            _ => Count::NAN,
        }
    }
}

impl Sum for Count {
    fn sum<I: Iterator<Item = Count>>(iter: I) -> Self {
        iter.fold(Count::ZERO, Add::add)
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Coerce a raw CSV cell to a coordinate; unreadable input becomes `NaN`.
pub fn parse_coordinate(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// One region's row from a daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "provincestate")]
    pub province_state: String,
    #[serde(rename = "countryregion")]
    pub country_region: String,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
    pub confirmed: Count,
    pub deaths: Count,
    pub recovered: Count,
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-country sum of daily records. `province_state` is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CountryTotals {
    #[serde(rename = "provincestate")]
    pub province_state: String,
    #[serde(rename = "countryregion")]
    pub country_region: String,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
    pub confirmed: Count,
    pub deaths: Count,
    pub recovered: Count,
    pub latitude: f64,
    pub longitude: f64,
}

/// Global sums over every region of a daily report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BriefTotals {
    pub confirmed: Count,
    pub deaths: Count,
    pub recovered: Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Header text as published, e.g. `1/22/20`.
    pub date: String,
    pub value: Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTimeSeries {
    #[serde(rename = "provincestate")]
    pub province_state: String,
    #[serde(rename = "countryregion")]
    pub country_region: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "long")]
    pub longitude: f64,
    pub series: Vec<TimeSeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parse_accepts_integers_and_trims() {
        assert_eq!(Count::parse("42"), Count::new(42));
        assert_eq!(Count::parse(" 7\r"), Count::new(7));
        assert_eq!(Count::parse("12.0"), Count::new(12));
    }

    #[test]
    fn count_parse_rejects_garbage() {
        assert!(Count::parse("").is_nan());
        assert!(Count::parse("abc").is_nan());
        assert!(Count::parse("-3").is_nan());
        assert!(Count::parse("1.5").is_nan());
    }

    #[test]
    fn count_addition_poisons() {
        assert_eq!(Count::new(2) + Count::new(3), Count::new(5));
        assert!((Count::new(2) + Count::NAN).is_nan());
        assert!((Count::NAN + Count::new(2)).is_nan());
    }

    #[test]
    fn count_serializes_sentinel_as_null() {
        let json = serde_json::to_string(&[Count::new(3), Count::NAN]).unwrap();
        assert_eq!(json, "[3,null]");
    }

    #[test]
    fn daily_record_uses_wire_field_names() {
        let record = DailyRecord {
            province_state: "Ontario".into(),
            country_region: "Canada".into(),
            last_update: "2020-03-01".into(),
            confirmed: Count::new(10),
            deaths: Count::new(1),
            recovered: Count::new(2),
            latitude: 43.0,
            longitude: f64::NAN,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["provincestate"], "Ontario");
        assert_eq!(value["countryregion"], "Canada");
        assert_eq!(value["lastUpdate"], "2020-03-01");
        assert_eq!(value["confirmed"], 10);
        assert!(value["longitude"].is_null());
    }
}
