use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::{Error, Result};

pub const DEFAULT_DAILY_REPORTS_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_daily_reports/";

pub const DEFAULT_TIME_SERIES_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_global.csv";

/// Date format accepted from callers.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format of daily report file names.
const REPORT_FILE_DATE_FORMAT: &str = "%m-%d-%Y";

/// Where the upstream CSV files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Directory URL; the report file name is appended as-is.
    pub daily_reports_base_url: String,
    pub time_series_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            daily_reports_base_url: DEFAULT_DAILY_REPORTS_BASE_URL.to_string(),
            time_series_url: DEFAULT_TIME_SERIES_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// URL of the daily report for `date` (`YYYY-MM-DD`), e.g.
    /// `2020-03-15` → `<base>03-15-2020.csv`.
    pub fn daily_report_url(&self, date: &str) -> Result<String> {
        Ok(format!("{}{}", self.daily_reports_base_url, report_file_name(date)?))
    }
}

/// `YYYY-MM-DD` → `MM-DD-YYYY.csv`.
pub fn report_file_name(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, INPUT_DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: date.to_string(),
        source,
    })?;

    Ok(format!("{}.csv", parsed.format(REPORT_FILE_DATE_FORMAT)))
}

/// The day before `now` (UTC), as `YYYY-MM-DD`. Today's report is usually not
/// published yet.
pub fn default_report_date(now: DateTime<Utc>) -> String {
    let yesterday = now.date_naive().checked_sub_days(Days::new(1)).unwrap_or(now.date_naive());
    yesterday.format(INPUT_DATE_FORMAT).to_string()
}
