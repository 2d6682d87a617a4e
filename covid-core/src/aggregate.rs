use crate::model::{BriefTotals, CountryTotals, DailyRecord};

/// Sum confirmed/deaths/recovered over every record.
pub fn aggregate_global(records: &[DailyRecord]) -> BriefTotals {
    records.iter().fold(BriefTotals::default(), |acc, record| BriefTotals {
        confirmed: acc.confirmed + record.confirmed,
        deaths: acc.deaths + record.deaths,
        recovered: acc.recovered + record.recovered,
    })
}

/// Sum all regions of one country, matched case-insensitively.
///
/// Counts are summed. `country_region`, `last_update` and the coordinates are
/// overwritten by every matching record, so the last match wins. When nothing
/// matches the result is [`CountryTotals::default`]: zero counts, empty strings.
pub fn aggregate_country(records: &[DailyRecord], country: &str) -> CountryTotals {
    let country = country.to_lowercase();

    records
        .iter()
        .filter(|record| record.country_region.to_lowercase() == country)
        .fold(CountryTotals::default(), |acc, record| CountryTotals {
            province_state: String::new(),
            country_region: record.country_region.clone(),
            last_update: record.last_update.clone(),
            confirmed: acc.confirmed + record.confirmed,
            deaths: acc.deaths + record.deaths,
            recovered: acc.recovered + record.recovered,
            latitude: record.latitude,
            longitude: record.longitude,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{daily::parse_daily_report, model::Count};

    fn record(province: &str, country: &str, update: &str, counts: [u64; 3], lat: f64, long: f64) -> DailyRecord {
        DailyRecord {
            province_state: province.into(),
            country_region: country.into(),
            last_update: update.into(),
            confirmed: Count::new(counts[0]),
            deaths: Count::new(counts[1]),
            recovered: Count::new(counts[2]),
            latitude: lat,
            longitude: long,
        }
    }

    fn sample() -> Vec<DailyRecord> {
        vec![
            record("Ontario", "Canada", "2020-03-01T10:00", [10, 1, 2], 43.0, -79.0),
            record("", "France", "2020-03-01T11:00", [100, 3, 12], 46.2, 2.2),
            record("Quebec", "Canada", "2020-03-01T12:00", [5, 0, 1], 46.8, -71.2),
            record("Reunion", "France", "2020-03-01T09:00", [1, 0, 0], -21.1, 55.5),
        ]
    }

    #[test]
    fn country_example_from_csv() {
        let text = "Province,Country,LastUpdate,Confirmed,Deaths,Recovered,Lat,Long\n\
            Ontario,Canada,2020-03-01,10,1,2,43.0,-79.0\n\
            Quebec,Canada,2020-03-01,5,0,1,46.8,-71.2";
        let totals = aggregate_country(&parse_daily_report(text), "canada");

        assert_eq!(totals.confirmed, Count::new(15));
        assert_eq!(totals.deaths, Count::new(1));
        assert_eq!(totals.recovered, Count::new(3));
        assert_eq!(totals.province_state, "");
        assert_eq!(totals.country_region, "Canada");
    }

    #[test]
    fn last_matching_record_wins_for_non_summed_fields() {
        let totals = aggregate_country(&sample(), "france");

        assert_eq!(totals.last_update, "2020-03-01T09:00");
        assert_eq!(totals.latitude, -21.1);
        assert_eq!(totals.longitude, 55.5);
        assert_eq!(totals.confirmed, Count::new(101));
    }

    #[test]
    fn country_match_is_case_insensitive() {
        let records = sample();
        assert_eq!(aggregate_country(&records, "fr"), aggregate_country(&records, "FR"));
        assert_eq!(aggregate_country(&records, "france"), aggregate_country(&records, "FRANCE"));
        assert_eq!(aggregate_country(&records, "CaNaDa").confirmed, Count::new(15));
    }

    #[test]
    fn no_match_returns_empty_totals() {
        let totals = aggregate_country(&sample(), "atlantis");

        assert_eq!(totals, CountryTotals::default());
        assert_eq!(totals.confirmed, Count::ZERO);
        assert_eq!(totals.country_region, "");
        assert_eq!(totals.last_update, "");
        assert_eq!(totals.latitude, 0.0);
    }

    #[test]
    fn global_sum_ignores_order() {
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(1);

        let expected = BriefTotals {
            confirmed: Count::new(116),
            deaths: Count::new(4),
            recovered: Count::new(15),
        };
        assert_eq!(aggregate_global(&records), expected);
        assert_eq!(aggregate_global(&reversed), expected);
        assert_eq!(aggregate_global(&rotated), expected);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(aggregate_global(&[]), BriefTotals::default());
        assert_eq!(aggregate_global(&[]).confirmed, Count::ZERO);
    }

    #[test]
    fn non_numeric_count_poisons_sum() {
        let mut records = sample();
        records[2].recovered = Count::NAN;

        let global = aggregate_global(&records);
        assert_eq!(global.confirmed, Count::new(116));
        assert!(global.recovered.is_nan());

        let canada = aggregate_country(&records, "canada");
        assert!(canada.recovered.is_nan());
        assert!(!aggregate_country(&records, "france").recovered.is_nan());
    }

    #[test]
    fn country_sums_never_decrease_as_records_are_added() {
        let records = sample();
        let mut previous = Count::ZERO.get();
        for n in 0..=records.len() {
            let current = aggregate_country(&records[..n], "canada").confirmed.get();
            assert!(current >= previous);
            previous = current;
        }
    }
}
