use chrono::NaiveDate;

use crate::TimedSample;

/// Returns the samples whose instant falls on `date` (local calendar day),
/// preserving input order. An empty result means "no data for that day",
/// which downstream treats as a normal reportable state.
pub fn select_day(samples: &[TimedSample], date: NaiveDate) -> Vec<TimedSample> {
    samples
        .iter()
        .filter(|s| s.instant.date() == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date: &str, time: &str, tag: &str) -> TimedSample {
        TimedSample {
            instant: crate::timeparse::parse_instant(&format!("{date} {time}")).unwrap(),
            fields: vec![tag.to_string()],
        }
    }

    #[test]
    fn splits_log_spanning_two_days() {
        let samples = vec![
            sample("2024-06-01", "23:50:00", "a"),
            sample("2024-06-01", "23:59:59", "b"),
            sample("2024-06-02", "00:00:00", "c"),
            sample("2024-06-02", "08:15:00", "d"),
        ];

        let day1 = select_day(&samples, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let day2 = select_day(&samples, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

        let tags = |v: &[TimedSample]| v.iter().map(|s| s.fields[0].clone()).collect::<Vec<_>>();
        assert_eq!(tags(&day1), vec!["a", "b"]);
        assert_eq!(tags(&day2), vec!["c", "d"]);
    }

    #[test]
    fn day_with_no_rows_is_empty_not_an_error() {
        let samples = vec![sample("2024-06-01", "12:00:00", "a")];
        let other = select_day(&samples, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(other.is_empty());
    }

    #[test]
    fn empty_log_yields_empty_window() {
        assert!(select_day(&[], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).is_empty());
    }
}
