use tracing::info;

use crate::{
    Config,
    aggregate::{aggregate_country, aggregate_global},
    daily::parse_daily_report,
    endpoints::Endpoints,
    error::Result,
    model::{BriefTotals, CountryTimeSeries, CountryTotals, DailyRecord},
    source::{CsvSource, HttpSource},
    timeseries::{lookup_country_series, parse_time_series},
};

/// One fetch, then parse and reduce. Holds no state between calls.
#[derive(Debug)]
pub struct ReportService {
    source: Box<dyn CsvSource>,
    endpoints: Endpoints,
}

impl ReportService {
    pub fn new(source: Box<dyn CsvSource>, endpoints: Endpoints) -> Self {
        Self { source, endpoints }
    }

    /// HTTP-backed service pointed at the configured endpoints.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(HttpSource::new()), config.endpoints())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Every region of the daily report for `date` (`YYYY-MM-DD`).
    pub async fn countries(&self, date: &str) -> Result<Vec<DailyRecord>> {
        let url = self.endpoints.daily_report_url(date)?;
        let text = self.source.fetch_text(&url).await?;
        let records = parse_daily_report(&text);
        info!(date, records = records.len(), "loaded daily report");
        Ok(records)
    }

    /// Worldwide totals for `date`.
    pub async fn brief(&self, date: &str) -> Result<BriefTotals> {
        Ok(aggregate_global(&self.countries(date).await?))
    }

    /// Totals for one country on `date`; zero-valued when the country is absent.
    pub async fn country(&self, date: &str, country: &str) -> Result<CountryTotals> {
        Ok(aggregate_country(&self.countries(date).await?, country))
    }

    pub async fn time_series(&self) -> Result<Vec<CountryTimeSeries>> {
        let text = self.source.fetch_text(&self.endpoints.time_series_url).await?;
        let series = parse_time_series(&text);
        info!(regions = series.len(), "loaded time series");
        Ok(series)
    }

    pub async fn time_series_for_country(&self, country: &str) -> Result<Option<CountryTimeSeries>> {
        Ok(lookup_country_series(&self.time_series().await?, country))
    }
}
