//! Wide-format time series: `Province/State,Country/Region,Lat,Long,<date>,<date>,...`

use tracing::debug;

use crate::model::{Count, CountryTimeSeries, TimeSeriesPoint, parse_coordinate};

/// Index of the first date column.
const FIRST_DATE_COLUMN: usize = 4;

/// Parse a time-series CSV into one entry per data line, in source order.
///
/// Every entry carries one point per header date, in header order. A cell
/// that is missing or not a count becomes [`Count::NAN`]. Blank lines are
/// dropped.
pub fn parse_time_series(text: &str) -> Vec<CountryTimeSeries> {
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let header_dates: Vec<&str> = header.split(',').skip(FIRST_DATE_COLUMN).collect();

    let series: Vec<CountryTimeSeries> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, &header_dates))
        .collect();

    debug!(regions = series.len(), dates = header_dates.len(), "parsed time series");
    series
}

fn parse_line(line: &str, header_dates: &[&str]) -> CountryTimeSeries {
    let fields: Vec<&str> = line.split(',').collect();
    let cell = |idx: usize| fields.get(idx).copied().unwrap_or("");

    let series = header_dates
        .iter()
        .enumerate()
        .map(|(i, date)| TimeSeriesPoint {
            date: (*date).to_string(),
            value: Count::parse(cell(FIRST_DATE_COLUMN + i)),
        })
        .collect();

    CountryTimeSeries {
        province_state: cell(0).to_string(),
        country_region: cell(1).to_string(),
        latitude: parse_coordinate(cell(2)),
        longitude: parse_coordinate(cell(3)),
        series,
    }
}

/// First region whose country matches case-insensitively. Provinces are not
/// summed; for a country split into several rows only the first row is
/// returned.
pub fn lookup_country_series(series: &[CountryTimeSeries], country: &str) -> Option<CountryTimeSeries> {
    let country = country.to_lowercase();
    series
        .iter()
        .find(|entry| entry.country_region.to_lowercase() == country)
        .cloned()
}
