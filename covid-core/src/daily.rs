//! Daily report parsing.
//!
//! The upstream repository changed the column layout of its daily reports in
//! March 2020. Older files start with `Province/State`, newer ones with `FIPS`.
//! Both are normalised into [`DailyRecord`].

use tracing::debug;

use crate::model::{Count, DailyRecord, parse_coordinate};

/// Lines with this many fields or fewer are never data.
const MIN_FIELDS: usize = 5;

/// Prefix every `LastUpdate` cell starts with (`2020-...`, `2021-...`).
const YEAR_PREFIX: &str = "20";

/// Column layout of a daily report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// `FIPS,Admin2,Province_State,Country_Region,Last_Update,Lat,Long_,Confirmed,Deaths,Recovered,...`
    FipsFirst,
    /// `Province/State,Country/Region,Last Update,Confirmed,Deaths,Recovered,Latitude,Longitude`
    Legacy,
}

/// Column index of every canonical field for one [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub province_state: usize,
    pub country_region: usize,
    pub last_update: usize,
    pub confirmed: usize,
    pub deaths: usize,
    pub recovered: usize,
    pub latitude: usize,
    pub longitude: usize,
}

const FIPS_FIRST_COLUMNS: ColumnMap = ColumnMap {
    province_state: 2,
    country_region: 3,
    last_update: 4,
    latitude: 5,
    longitude: 6,
    confirmed: 7,
    deaths: 8,
    recovered: 9,
};

const LEGACY_COLUMNS: ColumnMap = ColumnMap {
    province_state: 0,
    country_region: 1,
    last_update: 2,
    confirmed: 3,
    deaths: 4,
    recovered: 5,
    latitude: 6,
    longitude: 7,
};

impl Schema {
    pub const fn columns(self) -> ColumnMap {
        match self {
            Schema::FipsFirst => FIPS_FIRST_COLUMNS,
            Schema::Legacy => LEGACY_COLUMNS,
        }
    }

    /// Decide the layout of one data line.
    ///
    /// `FipsFirst` needs a `FIPS` header *and* a date-looking cell in its
    /// `last_update` column. Anything else falls back to `Legacy`, which in turn
    /// needs a date-looking cell in its own `last_update` column.
    pub fn detect(fips_header: bool, fields: &[&str]) -> Option<Schema> {
        let looks_like_date = |schema: Schema| {
            fields
                .get(schema.columns().last_update)
                .is_some_and(|cell| cell.starts_with(YEAR_PREFIX))
        };

        if fips_header && looks_like_date(Schema::FipsFirst) {
            Some(Schema::FipsFirst)
        } else if looks_like_date(Schema::Legacy) {
            Some(Schema::Legacy)
        } else {
            None
        }
    }
}

impl ColumnMap {
    fn record(&self, fields: &[&str]) -> DailyRecord {
        let cell = |idx: usize| fields.get(idx).copied().unwrap_or("");

        DailyRecord {
            province_state: cell(self.province_state).to_string(),
            country_region: cell(self.country_region).to_string(),
            last_update: cell(self.last_update).to_string(),
            confirmed: Count::parse(cell(self.confirmed)),
            deaths: Count::parse(cell(self.deaths)),
            recovered: Count::parse(cell(self.recovered)),
            latitude: parse_coordinate(cell(self.latitude)),
            longitude: parse_coordinate(cell(self.longitude)),
        }
    }
}

/// Parse one daily report into records, in source order.
///
/// Lines are split on plain commas; quoted cells containing commas are not
/// supported and usually end up skipped or misaligned. Lines that are too
/// short or match neither layout are dropped without error.
pub fn parse_daily_report(text: &str) -> Vec<DailyRecord> {
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let fips_header = header.trim_start_matches('\u{feff}').starts_with("FIPS");

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            skipped += 1;
            continue;
        }

        match Schema::detect(fips_header, &fields) {
            Some(schema) => records.push(schema.columns().record(&fields)),
            None => skipped += 1,
        }
    }

    debug!(records = records.len(), skipped, fips_header, "parsed daily report");
    records
}
